use rfunc_option::{error, Absent, Maybe, Present};

use crate::value::Value;

/// Runtime-checked operations on a `Maybe<Value>`.
///
/// The typed [`Maybe`] API enforces callback return types at compile time.
/// When values come from dynamic content that guarantee is gone, so these
/// operations check the shape of what they are handed and fail with
/// `InvalidConstruction` or `InvalidReturnType` instead.
pub trait DynamicMaybe: Sized {
    /// Smart constructor: `Value::Null` is absent, anything else present.
    fn of_value(value: Value) -> Self;

    /// Construct a present value, refusing the absence marker.
    fn try_present(value: Value) -> error::Result<Self>;

    /// `flat_map` whose callback must return a `Value::Maybe` that does not
    /// wrap `Value::Null`.
    ///
    /// The callback is not invoked when absent.
    fn flat_map_value<F>(self, f: F) -> error::Result<Self>
    where
        F: FnOnce(Value) -> Value;

    /// `or_else` with an alternative that must be a `Value::Maybe`.
    ///
    /// The alternative is only inspected when `self` is absent.
    fn or_else_value(self, alternative: Value) -> error::Result<Self>;

    /// Like [`DynamicMaybe::or_else_value`], computing the alternative only
    /// when absent.
    fn or_else_value_with<F>(self, f: F) -> error::Result<Self>
    where
        F: FnOnce() -> Value;

    /// Collapse one level if the wrapped value is itself an option;
    /// otherwise return `self` unchanged.
    ///
    /// An inner option that is present but wraps `Value::Null` is an
    /// `InvalidConstruction`.
    fn flatten_value(self) -> error::Result<Self>;

    /// Map with a callback that may return `Value::Null` as the absence
    /// marker.
    fn collect_value<F>(self, f: F) -> Self
    where
        F: FnOnce(Value) -> Value;
}

impl DynamicMaybe for Maybe<Value> {
    fn of_value(value: Value) -> Self {
        match value {
            Value::Null => Absent,
            value => Present(value),
        }
    }

    fn try_present(value: Value) -> error::Result<Self> {
        match value {
            Value::Null => Err(error::Error::invalid_construction(
                "Present",
                Value::Null,
            )),
            value => Ok(Present(value)),
        }
    }

    fn flat_map_value<F>(self, f: F) -> error::Result<Self>
    where
        F: FnOnce(Value) -> Value,
    {
        match self {
            Present(value) => f(value).into_maybe(),
            Absent => Ok(Absent),
        }
    }

    fn or_else_value(self, alternative: Value) -> error::Result<Self> {
        match self {
            Present(_) => Ok(self),
            Absent => alternative.into_maybe(),
        }
    }

    fn or_else_value_with<F>(self, f: F) -> error::Result<Self>
    where
        F: FnOnce() -> Value,
    {
        match self {
            Present(_) => Ok(self),
            Absent => f().into_maybe(),
        }
    }

    fn flatten_value(self) -> error::Result<Self> {
        match self {
            Present(Value::Maybe(inner)) => Value::Maybe(inner).into_maybe(),
            other => Ok(other),
        }
    }

    fn collect_value<F>(self, f: F) -> Self
    where
        F: FnOnce(Value) -> Value,
    {
        match self {
            Present(value) => Self::of_value(f(value)),
            Absent => Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_value() {
        assert_eq!(Maybe::of_value(Value::from(1)), Present(Value::from(1)));
        assert_eq!(Maybe::of_value(Value::Null), Absent);
        // false is a value, not the absence marker
        assert_eq!(
            Maybe::of_value(Value::from(false)),
            Present(Value::from(false))
        );
    }

    #[test]
    fn test_try_present_refuses_null() {
        let error = Maybe::try_present(Value::Null).unwrap_err();
        insta::assert_snapshot!(error, @"Present cannot be constructed from null");
        assert_eq!(error.code(), "RF0001");
    }

    #[test]
    fn test_flatten_value_non_option_payload() {
        let maybe = Present(Value::from(1));
        assert_eq!(maybe.clone().flatten_value(), Ok(maybe));
    }
}
