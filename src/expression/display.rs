use std::fmt;

use crate::expression::ast::ValueExpr;
use crate::expression::value::Value;

pub const SYM_ADD: &str = "+";
pub const SYM_SUB: &str = "-";
pub const SYM_MUL: &str = "×";
pub const SYM_MOD: &str = "%";
pub const SYM_POW: &str = "^";
pub const SYM_EQ: &str = "=";

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
        }
    }
}

impl fmt::Display for ValueExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
