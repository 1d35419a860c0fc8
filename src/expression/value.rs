/// Numeric value of an expression, tracking exact integrality.
///
/// A finite float that is mathematically whole and exactly representable as
/// an `i64` is normalized to `Int`, so integrality never depends on how a
/// value was computed. Factorial and modulo eligibility key off this tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
}

/// Largest magnitude at which every whole f64 is still exact (2^53).
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

impl Value {
    /// Normalize a float, or `None` when it is not finite.
    pub fn from_f64(v: f64) -> Option<Value> {
        if !v.is_finite() {
            return None;
        }
        if v.fract() == 0.0 && v.abs() <= EXACT_INT_LIMIT {
            Some(Value::Int(v as i64))
        } else {
            Some(Value::Real(v))
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Value::Int(i) => i as f64,
            Value::Real(r) => r,
        }
    }

    pub fn try_add(self, other: Value) -> Option<Value> {
        if let (Value::Int(l), Value::Int(r)) = (self, other) {
            if let Some(v) = l.checked_add(r) {
                return Some(Value::Int(v));
            }
        }
        Value::from_f64(self.to_f64() + other.to_f64())
    }

    pub fn try_sub(self, other: Value) -> Option<Value> {
        if let (Value::Int(l), Value::Int(r)) = (self, other) {
            if let Some(v) = l.checked_sub(r) {
                return Some(Value::Int(v));
            }
        }
        Value::from_f64(self.to_f64() - other.to_f64())
    }

    pub fn try_mul(self, other: Value) -> Option<Value> {
        if let (Value::Int(l), Value::Int(r)) = (self, other) {
            if let Some(v) = l.checked_mul(r) {
                return Some(Value::Int(v));
            }
        }
        Value::from_f64(self.to_f64() * other.to_f64())
    }

    /// Truncating remainder; both operands must be integers and the divisor
    /// nonzero.
    pub fn try_mod(self, other: Value) -> Option<Value> {
        match (self, other) {
            (Value::Int(l), Value::Int(r)) if r != 0 => Some(Value::Int(l % r)),
            _ => None,
        }
    }

    /// Exponentiation; domain failures (complex results, non-finite values)
    /// yield `None`. Rule-level exponent gating lives in the generator.
    pub fn try_pow(self, exp: Value) -> Option<Value> {
        if let (Value::Int(b), Value::Int(e)) = (self, exp) {
            if (0..=i64::from(u32::MAX)).contains(&e) {
                if let Some(v) = b.checked_pow(e as u32) {
                    return Some(Value::Int(v));
                }
            }
        }
        Value::from_f64(self.to_f64().powf(exp.to_f64()))
    }

    pub fn try_abs(self) -> Option<Value> {
        match self {
            Value::Int(i) => i.checked_abs().map(Value::Int),
            Value::Real(r) => Value::from_f64(r.abs()),
        }
    }

    /// Factorial of a nonnegative integer no larger than `max_arg`.
    pub fn try_factorial(self, max_arg: i64) -> Option<Value> {
        let Value::Int(n) = self else {
            return None;
        };
        if n < 0 || n > max_arg {
            return None;
        }
        let mut acc: i64 = 1;
        for k in 2..=n {
            acc = acc.checked_mul(k)?;
        }
        Some(Value::Int(acc))
    }
}

/// Integers compare exactly; anything else compares as floats with an
/// absolute tolerance and zero relative tolerance.
pub fn values_equal(a: Value, b: Value, tol: f64) -> bool {
    match (a, b) {
        (Value::Int(l), Value::Int(r)) => l == r,
        _ => (a.to_f64() - b.to_f64()).abs() <= tol,
    }
}
