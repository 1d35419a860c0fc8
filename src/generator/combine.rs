use crate::expression::{SYM_ADD, SYM_MOD, SYM_MUL, SYM_POW, SYM_SUB, Value, ValueExpr};
use crate::rules::Rules;

fn binary(value: Value, left: &ValueExpr, sym: &str, right: &ValueExpr) -> ValueExpr {
    ValueExpr::new(value, format!("({} {} {})", left.text, sym, right.text))
}

/// Exponent gate from the rule set; integer exponents must stay within the
/// configured bounds.
fn pow_value(base: Value, exp: Value, rules: &Rules) -> Option<Value> {
    if rules.pow_require_int_exp && !exp.is_integer() {
        return None;
    }
    if let Value::Int(e) = exp {
        if e < rules.pow_min_exp || e > rules.pow_max_exp {
            return None;
        }
    }
    base.try_pow(exp)
}

/// All binary combinations `(L op R)` permitted by the rules.
///
/// A failed precondition means the candidate does not exist; nothing is
/// reported or raised.
pub fn combine_binary(left: &ValueExpr, right: &ValueExpr, rules: &Rules) -> Vec<ValueExpr> {
    let mut out = Vec::new();
    if rules.allow_add {
        if let Some(v) = left.value.try_add(right.value) {
            out.push(binary(v, left, SYM_ADD, right));
        }
    }
    if rules.allow_sub {
        if let Some(v) = left.value.try_sub(right.value) {
            out.push(binary(v, left, SYM_SUB, right));
        }
    }
    if rules.allow_mul {
        if let Some(v) = left.value.try_mul(right.value) {
            out.push(binary(v, left, SYM_MUL, right));
        }
    }
    if rules.allow_mod {
        if let Some(v) = left.value.try_mod(right.value) {
            out.push(binary(v, left, SYM_MOD, right));
        }
    }
    if rules.allow_pow {
        if let Some(v) = pow_value(left.value, right.value, rules) {
            out.push(binary(v, left, SYM_POW, right));
        }
    }
    out
}
