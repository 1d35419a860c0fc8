use std::collections::HashSet;

use log::debug;

use crate::expression::ValueExpr;
use crate::generator::combine::combine_binary;
use crate::generator::wrap::wrap_unaries;
use crate::rules::Rules;

/// Build every distinct expression over an ordered run of digits.
///
/// Each split position partitions the run into a left and a right side that
/// are built independently; pairs are combined with every allowed binary
/// operator, unary-wrapped, and flattened into one set keyed by value and
/// canonical text. The builder never fails: candidates whose operator
/// preconditions do not hold are simply absent from the result.
pub fn build_expressions(digits: &[u8], rules: &Rules) -> Vec<ValueExpr> {
    if digits.len() <= 1 {
        let Some(&digit) = digits.first() else {
            return Vec::new();
        };
        return wrap_unaries(ValueExpr::literal(digit), rules);
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for split in 1..digits.len() {
        let left_exprs = build_expressions(&digits[..split], rules);
        let right_exprs = build_expressions(&digits[split..], rules);

        for left in &left_exprs {
            for right in &right_exprs {
                for combined in combine_binary(left, right, rules) {
                    for wrapped in wrap_unaries(combined, rules) {
                        if seen.insert(wrapped.dedup_key()) {
                            out.push(wrapped);
                        }
                    }
                }
            }
        }
    }

    debug!(
        "Built {} distinct expressions over {} digits",
        out.len(),
        digits.len()
    );
    out
}
