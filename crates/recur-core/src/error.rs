//! Error types for expression evaluation.
//!
//! Both sum types in this crate are closed, so there is no "unrecognized
//! variant" runtime state to report: exhaustive matching makes that case
//! unrepresentable. The only legitimate failure is arithmetic overflow, and
//! only when the caller opts into checked evaluation.

use thiserror::Error;

/// Failure modes of [`Expr::checked_evaluate`].
///
/// [`Expr::checked_evaluate`]: crate::expr::Expr::checked_evaluate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A 32-bit arithmetic operation overflowed.
    #[error("integer overflow during {op}")]
    Overflow {
        /// The operation that overflowed ("addition" or "multiplication").
        op: &'static str,
    },
}
