//! Arithmetic expression trees and structural recursion over them.
//!
//! `Expr` is a closed sum type with exactly three variants: an integer
//! leaf, an addition node and a multiplication node. Children are uniquely
//! owned (`Box`), so an expression is always a finite tree, never a DAG and
//! never cyclic. Trees are immutable after construction; [`Expr::transform`]
//! rebuilds rather than mutates.
//!
//! There is no parser. Trees are built programmatically through the
//! [`Expr::val`], [`Expr::add`] and [`Expr::mul`] constructors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

//-----------------------------------------------------------------------------
// Expression Definition
//-----------------------------------------------------------------------------

/// A finite, immutable arithmetic expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// A literal integer leaf.
    Val(i32),
    /// Addition of two subexpressions.
    Add(Box<Expr>, Box<Expr>),
    /// Multiplication of two subexpressions.
    Mul(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// A literal leaf.
    pub fn val(value: i32) -> Self {
        Expr::Val(value)
    }

    /// An addition node owning both children.
    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Box::new(left), Box::new(right))
    }

    /// A multiplication node owning both children.
    pub fn mul(left: Expr, right: Expr) -> Self {
        Expr::Mul(Box::new(left), Box::new(right))
    }

    /// Evaluate the tree bottom-up. No short-circuiting: both children of
    /// every node are evaluated. Arithmetic wraps on 32-bit two's-complement
    /// overflow, matching the wrapping choice in [`List::sum`]; use
    /// [`Expr::checked_evaluate`] to trap overflow instead.
    ///
    /// [`List::sum`]: crate::list::List::sum
    pub fn evaluate(&self) -> i32 {
        match self {
            Expr::Val(value) => *value,
            Expr::Add(left, right) => left.evaluate().wrapping_add(right.evaluate()),
            Expr::Mul(left, right) => left.evaluate().wrapping_mul(right.evaluate()),
        }
    }

    /// Evaluate the tree, surfacing 32-bit overflow as an error instead of
    /// wrapping.
    pub fn checked_evaluate(&self) -> Result<i32, EvalError> {
        match self {
            Expr::Val(value) => Ok(*value),
            Expr::Add(left, right) => {
                let (l, r) = (left.checked_evaluate()?, right.checked_evaluate()?);
                l.checked_add(r).ok_or_else(|| {
                    log::debug!("checked evaluation overflowed: {} + {}", l, r);
                    EvalError::Overflow { op: "addition" }
                })
            }
            Expr::Mul(left, right) => {
                let (l, r) = (left.checked_evaluate()?, right.checked_evaluate()?);
                l.checked_mul(r).ok_or_else(|| {
                    log::debug!("checked evaluation overflowed: {} * {}", l, r);
                    EvalError::Overflow { op: "multiplication" }
                })
            }
        }
    }

    /// Structure-preserving map over the leaves: every `Val(v)` becomes
    /// `Val(f(v))`, internal nodes are rebuilt with the same variant. The
    /// input is never mutated.
    pub fn transform<F>(&self, f: F) -> Expr
    where
        F: Fn(i32) -> i32,
    {
        fn go<F>(expr: &Expr, f: &F) -> Expr
        where
            F: Fn(i32) -> i32,
        {
            match expr {
                Expr::Val(value) => Expr::Val(f(*value)),
                Expr::Add(left, right) => Expr::add(go(left, f), go(right, f)),
                Expr::Mul(left, right) => Expr::mul(go(left, f), go(right, f)),
            }
        }
        go(self, &f)
    }
}

/// The pretty-printer. Leaves render as decimal literals, `Add` as `l+r`,
/// `Mul` as `l*r`, with NO parenthesization: the output reflects tree shape
/// only through operator adjacency, so it is lossy with respect to the
/// tree's grouping and does not round-trip through a parser. Deterministic.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Val(value) => write!(f, "{}", value),
            Expr::Add(left, right) => write!(f, "{}+{}", left, right),
            Expr::Mul(left, right) => write!(f, "{}*{}", left, right),
        }
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// 3*4 + (8 + 1*7)
    fn sample() -> Expr {
        Expr::add(
            Expr::mul(Expr::val(3), Expr::val(4)),
            Expr::add(Expr::val(8), Expr::mul(Expr::val(1), Expr::val(7))),
        )
    }

    #[test]
    fn evaluate_sample() {
        assert_eq!(sample().evaluate(), 27);
        assert_eq!(Expr::val(42).evaluate(), 42);
    }

    #[test]
    fn pretty_print_sample() {
        assert_eq!(sample().to_string(), "3*4+8+1*7");
    }

    #[test]
    fn pretty_print_is_deterministic() {
        let expr = sample();
        assert_eq!(expr.to_string(), expr.to_string());
    }

    #[test]
    fn pretty_print_drops_grouping() {
        // (1+2)*3 and 1+2*3 print identically: the printer is lossy
        let grouped = Expr::mul(Expr::add(Expr::val(1), Expr::val(2)), Expr::val(3));
        let flat = Expr::add(Expr::val(1), Expr::mul(Expr::val(2), Expr::val(3)));
        assert_eq!(grouped.to_string(), "1+2*3");
        assert_eq!(grouped.to_string(), flat.to_string());
        assert_ne!(grouped.evaluate(), flat.evaluate());
    }

    #[test]
    fn transform_doubles_leaves() {
        let doubled = sample().transform(|v| v * 2);
        // 6*8 + (16 + 2*14); doubling the leaves does not double the result
        assert_eq!(doubled.evaluate(), 92);
        assert_ne!(doubled.evaluate(), 2 * sample().evaluate());
        assert_eq!(doubled.to_string(), "6*8+16+2*14");
        // the input is untouched
        assert_eq!(sample().evaluate(), 27);
    }

    #[test]
    fn transform_on_a_leaf_commutes_with_evaluate() {
        let leaf = Expr::val(21);
        assert_eq!(leaf.transform(|v| v + 1).evaluate(), 22);
    }

    #[test]
    fn evaluate_wraps_on_overflow() {
        let expr = Expr::add(Expr::val(i32::MAX), Expr::val(1));
        assert_eq!(expr.evaluate(), i32::MIN);
    }

    #[test]
    fn checked_evaluate_traps_overflow() {
        let add = Expr::add(Expr::val(i32::MAX), Expr::val(1));
        assert_eq!(
            add.checked_evaluate(),
            Err(EvalError::Overflow { op: "addition" })
        );

        let mul = Expr::mul(Expr::val(i32::MAX), Expr::val(2));
        assert_eq!(
            mul.checked_evaluate(),
            Err(EvalError::Overflow { op: "multiplication" })
        );

        assert_eq!(sample().checked_evaluate(), Ok(27));
    }

    #[test]
    fn serde_round_trip() {
        let expr = sample();
        let json = serde_json::to_string(&expr).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }
}
