use std::collections::HashSet;

use log::info;

use crate::expression::{SYM_EQ, values_equal};
use crate::generator::build_expressions;
use crate::rules::{PLATE_DIGITS, Rules};
use crate::solver::canonical::strip_outer_parens;

/// Searches the three equality-sign placements of a four-digit plate for
/// true equations.
pub struct PlateSolver {
    rules: Rules,
}

impl PlateSolver {
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// The rule set this solver searches under.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// All true equations for the four digits, shortest first.
    ///
    /// The equality sign may land after the first, second, or third digit;
    /// both sides are built independently and every cross pair is tested.
    /// An empty result is a valid outcome, not an error.
    pub fn solve(&self, digits: [u8; PLATE_DIGITS]) -> Vec<String> {
        info!("Searching equality placements for digits {:?}", digits);

        let mut seen = HashSet::new();
        let mut solutions = Vec::new();

        for eq_pos in 1..PLATE_DIGITS {
            let left_exprs = build_expressions(&digits[..eq_pos], &self.rules);
            let right_exprs = build_expressions(&digits[eq_pos..], &self.rules);

            for left in &left_exprs {
                for right in &right_exprs {
                    if values_equal(left.value, right.value, self.rules.eq_tol) {
                        let equation = strip_outer_parens(&format!(
                            "{} {} {}",
                            left.text, SYM_EQ, right.text
                        ));
                        if seen.insert(equation.clone()) {
                            solutions.push(equation);
                        }
                    }
                }
            }
        }

        solutions.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        info!("Found {} solution(s)", solutions.len());
        solutions
    }
}

impl Default for PlateSolver {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
