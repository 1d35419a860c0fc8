use std::collections::HashSet;

use crate::expression::ValueExpr;
use crate::rules::Rules;

/// One breadth-first layer of unary wrapping around `expr`.
///
/// The result always contains `expr` itself, then abs variants, then
/// factorial of everything accumulated so far (abs results included).
/// Factorial results are already nonnegative, so abs-of-factorial is never
/// generated.
pub fn wrap_unaries(expr: ValueExpr, rules: &Rules) -> Vec<ValueExpr> {
    let mut variants = vec![expr];
    if !rules.enable_unary_wrapping {
        return variants;
    }

    if rules.allow_abs {
        for i in 0..variants.len() {
            if let Some(v) = variants[i].value.try_abs() {
                let text = format!("|{}|", variants[i].text);
                variants.push(ValueExpr::new(v, text));
            }
        }
    }

    if rules.allow_fact {
        for i in 0..variants.len() {
            if let Some(v) = variants[i].value.try_factorial(rules.max_factorial_arg) {
                let text = format!("({})!", variants[i].text);
                variants.push(ValueExpr::new(v, text));
            }
        }
    }

    dedup(variants)
}

fn dedup(variants: Vec<ValueExpr>) -> Vec<ValueExpr> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for variant in variants {
        if seen.insert(variant.dedup_key()) {
            out.push(variant);
        }
    }
    out
}
