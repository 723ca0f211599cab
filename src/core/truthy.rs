// ============================================================================
// spark-toolkit - Truthiness
// The enumerated falsy policy used by compact()
// ============================================================================

use serde_json::{Number, Value};

// =============================================================================
// TRUTHY TRAIT
// =============================================================================

/// Explicit truthiness.
///
/// Exactly these values are falsy:
///
/// - `false`
/// - numeric zero (including `-0.0`)
/// - NaN
/// - empty text
/// - the absent value (`None`, JSON `null`)
///
/// Everything else is truthy, including empty JSON arrays and objects.
///
/// # Example
/// ```
/// use spark_toolkit::Truthy;
///
/// assert!(!0i32.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// assert!("beans".is_truthy());
/// assert!(Some(1i32).is_truthy());
/// ```
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

/// Free-function form, handy as a predicate (`filter(&xs, truthy)`).
pub fn truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}

// =============================================================================
// PRIMITIVES
// =============================================================================

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        // NaN != 0.0 holds, so NaN needs its own check
        !self.is_nan() && *self != 0.0
    }
}

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        !self.is_nan() && *self != 0.0
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

// =============================================================================
// WRAPPERS
// =============================================================================

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        match self {
            Some(value) => value.is_truthy(),
            None => false,
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

// =============================================================================
// JSON
// =============================================================================

impl Truthy for Number {
    fn is_truthy(&self) -> bool {
        if let Some(i) = self.as_i64() {
            i != 0
        } else if let Some(u) = self.as_u64() {
            u != 0
        } else {
            self.as_f64().is_some_and(|f| f.is_truthy())
        }
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.is_truthy(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
