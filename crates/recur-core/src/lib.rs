//! Closed recursive sum types and structural recursion over them.
//!
//! Two independent leaf components, no shared state:
//!
//! - [`List<T>`](list::List): a two-variant recursive sequence type
//!   (`Empty` / `Cons`) with fold, map, take, append and power-set
//!   operations.
//! - [`Expr`](expr::Expr): a three-variant arithmetic expression tree
//!   (`Val` / `Add` / `Mul`) with evaluation, pretty-printing and a
//!   leaf-mapping transform.
//!
//! Every operation is a total function defined by exhaustive case analysis
//! on the variants; because the enums are closed there is no "unknown
//! variant" state to defend against at runtime. All values are immutable
//! after construction and every transformation produces a new value.
//!
//! Recursion depth equals input size (list length or tree depth). The
//! direct-recursion style is intentional and fine at demonstration sizes;
//! it is not suited to lists or trees of tens of thousands of nodes.

pub mod error;
pub mod expr;
pub mod list;
pub mod pair;

pub use error::EvalError;
pub use expr::Expr;
pub use list::List;
pub use pair::Pair;
