//! Typed parameter values.

use crate::ParamType;

/// A bound parameter value, converted to its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value.
    String(String),
    /// Integer value.
    Integer(i64),
    /// Number value.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
}

impl ParamValue {
    /// Returns the zero value of `param_type` (`""`, `0`, `0.0` or `false`).
    #[must_use]
    pub fn zero(param_type: ParamType) -> Self {
        match param_type {
            ParamType::String => Self::String(String::new()),
            ParamType::Integer => Self::Integer(0),
            ParamType::Number => Self::Number(0.0),
            ParamType::Boolean => Self::Boolean(false),
        }
    }

    /// Returns the string value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value of integers and numbers.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Conversion from a bound [`ParamValue`] into a parameter object field.
pub trait FromParamValue: Sized {
    /// Converts `value`, or returns `None` if the types do not fit.
    fn from_param_value(value: &ParamValue) -> Option<Self>;
}

impl FromParamValue for String {
    fn from_param_value(value: &ParamValue) -> Option<Self> {
        value.as_str().map(ToString::to_string)
    }
}

impl FromParamValue for i64 {
    fn from_param_value(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

macro_rules! impl_from_param_value_for_int {
    ($($T:ty),*) => {
        $(
            impl FromParamValue for $T {
                fn from_param_value(value: &ParamValue) -> Option<Self> {
                    i64::from_param_value(value).and_then(|i| <$T>::try_from(i).ok())
                }
            }
        )*
    };
}

impl_from_param_value_for_int!(i32, u32, u64);

impl FromParamValue for f64 {
    fn from_param_value(value: &ParamValue) -> Option<Self> {
        value.as_f64()
    }
}

impl FromParamValue for bool {
    fn from_param_value(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert_eq!(
            ParamValue::zero(ParamType::String),
            ParamValue::String(String::new())
        );
        assert_eq!(ParamValue::zero(ParamType::Integer), ParamValue::Integer(0));
        assert_eq!(ParamValue::zero(ParamType::Number), ParamValue::Number(0.0));
        assert_eq!(
            ParamValue::zero(ParamType::Boolean),
            ParamValue::Boolean(false)
        );
    }

    #[test]
    fn test_string_conversion() {
        let value = ParamValue::String("sockshop".into());
        assert_eq!(String::from_param_value(&value), Some("sockshop".to_string()));
        assert_eq!(i64::from_param_value(&value), None);
    }

    #[test]
    fn test_integer_conversions() {
        let value = ParamValue::Integer(42);
        assert_eq!(i64::from_param_value(&value), Some(42));
        assert_eq!(i32::from_param_value(&value), Some(42));
        assert_eq!(u32::from_param_value(&value), Some(42));
        assert_eq!(f64::from_param_value(&value), Some(42.0));

        let negative = ParamValue::Integer(-1);
        assert_eq!(u64::from_param_value(&negative), None);
    }

    #[test]
    fn test_number_and_boolean_conversions() {
        assert_eq!(f64::from_param_value(&ParamValue::Number(1.5)), Some(1.5));
        assert_eq!(bool::from_param_value(&ParamValue::Boolean(true)), Some(true));
        assert_eq!(bool::from_param_value(&ParamValue::Integer(1)), None);
    }
}
