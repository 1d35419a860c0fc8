//! Value-expression model split into submodules for clarity

mod ast;
mod display;
mod value;

pub use ast::ValueExpr;
pub use display::{SYM_ADD, SYM_EQ, SYM_MOD, SYM_MUL, SYM_POW, SYM_SUB};
pub use value::{Value, values_equal};
