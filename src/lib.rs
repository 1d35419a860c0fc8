//! Plateparity - A library for solving the license-plate equality game
//!
//! Given four digits in fixed order, this library finds every placement of a
//! single equality sign, binary operators, unary operators, and parentheses
//! such that both sides evaluate to the same value under a configurable rule
//! set. Digits are never concatenated; each one is an independent leaf of the
//! expression tree.

pub mod expression;
pub mod generator;
pub mod rules;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Value, ValueExpr};
pub use generator::build_expressions;
pub use rules::{PLATE_DIGITS, Rules};
pub use solver::PlateSolver;
pub use utils::{UtilsError, validate_plate};

/// Solve the equality game for a four-digit plate string
///
/// This is a convenience function that validates the input and runs a solver
/// under the given rules.
///
/// # Arguments
///
/// * `digits` - A string of exactly four ASCII digits
/// * `rules` - The operator toggles and bounds to search under
///
/// # Returns
///
/// * `Ok(solutions)` - All true equations, shortest first (possibly empty)
/// * `Err(UtilsError)` - If the input is not a four-digit string
///
/// # Errors
///
/// This function will return an error if:
/// * The input digit string is empty
/// * The input digit string contains non-digit characters
/// * The input digit string is not exactly four digits long
///
/// # Examples
///
/// ```
/// use plateparity::{Rules, solve_plate};
///
/// match solve_plate("1236", &Rules::default()) {
///     Ok(solutions) => println!("{} solution(s)", solutions.len()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve_plate(digits: &str, rules: &Rules) -> Result<Vec<String>, UtilsError> {
    let plate = validate_plate(digits)?;

    let solver = PlateSolver::new(rules.clone());
    Ok(solver.solve(plate))
}
