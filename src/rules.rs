//! Rule-set configuration for the equality game.

/// Number of digits on a plate; the equality sign may land after any of the
/// first three.
pub const PLATE_DIGITS: usize = 4;

/// Operator toggles and bounds consumed by the builder and the solver.
///
/// A `Rules` value is read-only for the duration of a search; it is passed
/// into the entry points rather than held as global state, so several
/// configurations can coexist in one process.
#[derive(Debug, Clone)]
pub struct Rules {
    pub allow_add: bool,
    pub allow_sub: bool,
    pub allow_mul: bool,
    pub allow_mod: bool,
    pub allow_pow: bool,
    pub allow_abs: bool,
    pub allow_fact: bool,
    /// Exponents must be integers when set.
    pub pow_require_int_exp: bool,
    /// Inclusive bounds on integer exponents.
    pub pow_min_exp: i64,
    pub pow_max_exp: i64,
    /// Largest `n` for which `n!` may be formed.
    pub max_factorial_arg: i64,
    /// Apply abs/factorial wrapping at every node.
    pub enable_unary_wrapping: bool,
    /// Absolute tolerance for float comparison; integers compare exactly.
    pub eq_tol: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            allow_add: true,
            allow_sub: true,
            allow_mul: true,
            allow_mod: false,
            allow_pow: true,
            allow_abs: true,
            allow_fact: true,
            pow_require_int_exp: true,
            pow_min_exp: 0,
            pow_max_exp: 6,
            max_factorial_arg: 8,
            enable_unary_wrapping: true,
            eq_tol: 1e-9,
        }
    }
}
