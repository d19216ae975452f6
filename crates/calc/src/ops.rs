//! Pure arithmetic operations.
//!
//! Both operations use checked arithmetic so that out-of-range results
//! surface as errors instead of wrapping or panicking.

use crate::error::ArithmeticError;

/// Computes `a + b`.
pub fn add(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_add(b)
        .ok_or(ArithmeticError::Overflow { op: "+", a, b })
}

/// Computes `a - b`.
pub fn sub(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_sub(b)
        .ok_or(ArithmeticError::Overflow { op: "-", a, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_small_integers() {
        assert_eq!(add(2, 3).unwrap(), 5);
        assert_eq!(add(-1, 1).unwrap(), 0);
        assert_eq!(add(0, 0).unwrap(), 0);
    }

    #[test]
    fn sub_small_integers() {
        assert_eq!(sub(3, 3).unwrap(), 0);
        assert_eq!(sub(3, 2).unwrap(), 1);
        assert_eq!(sub(2, 3).unwrap(), -1);
    }

    #[test]
    fn add_is_commutative() {
        for (a, b) in [(2, 3), (-7, 11), (0, 42), (i64::MAX, 0)] {
            assert_eq!(add(a, b), add(b, a));
        }
    }

    #[test]
    fn sub_is_anti_commutative() {
        for (a, b) in [(3, 2), (-7, 11), (0, 42)] {
            assert_eq!(sub(a, b).unwrap(), -sub(b, a).unwrap());
        }
    }

    #[test]
    fn add_overflow_is_an_error() {
        let err = add(i64::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            ArithmeticError::Overflow {
                op: "+",
                a: i64::MAX,
                b: 1
            }
        );

        assert!(add(i64::MIN, -1).is_err());
        assert_eq!(add(i64::MAX, 0).unwrap(), i64::MAX);
    }

    #[test]
    fn sub_overflow_is_an_error() {
        assert!(sub(i64::MIN, 1).is_err());
        assert!(sub(i64::MAX, -1).is_err());
        assert_eq!(sub(i64::MIN, 0).unwrap(), i64::MIN);
    }

    #[test]
    fn overflow_error_message_names_the_operands() {
        let err = add(i64::MAX, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("integer overflow computing {} + 1", i64::MAX)
        );
    }
}
