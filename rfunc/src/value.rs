use std::collections::BTreeMap;
use std::fmt;

use ordered_float::OrderedFloat;
use rfunc_option::{error, Absent, Maybe, Present};
use rfunc_seq::Seq;
use strum_macros::{Display, IntoStaticStr, VariantNames};

/// An untyped value, as it arrives from dynamic content.
///
/// `Null` is the absence marker. Floats are wrapped in [`OrderedFloat`] so
/// that values are totally ordered and hashable, which lets a `Seq<Value>`
/// be sorted, intersected and compared structurally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(OrderedFloat<f64>),
    String(String),
    /// A raw ordered collection.
    List(Vec<Value>),
    /// A mapping. Not an ordered collection.
    Map(BTreeMap<String, Value>),
    /// A wrapped option.
    Maybe(Box<Maybe<Value>>),
    /// A wrapped sequence.
    Seq(Seq<Value>),
}

/// The dynamic type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, VariantNames)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    List,
    Map,
    Maybe,
    Seq,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Maybe(_) => ValueKind::Maybe,
            Value::Seq(_) => ValueKind::Seq,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value is an ordered collection (a list or a seq).
    pub fn is_ordered(&self) -> bool {
        matches!(self, Value::List(_) | Value::Seq(_))
    }

    /// Unwrap a value that a callback promised would be an option.
    ///
    /// Anything but `Value::Maybe` is an `InvalidReturnType`. A present
    /// option wrapping `Value::Null` is an `InvalidConstruction`.
    pub fn into_maybe(self) -> error::Result<Maybe<Value>> {
        match self {
            Value::Maybe(maybe) => match *maybe {
                Present(Value::Null) => Err(error::Error::invalid_construction(
                    "Present",
                    Value::Null,
                )),
                maybe => Ok(maybe),
            },
            other => Err(error::Error::invalid_return_type(
                other,
                ValueKind::Maybe.name(),
            )),
        }
    }

    /// Build a sequence from a value that should be an ordered collection.
    ///
    /// A map, scalar, null or option is an `InvalidConstruction`.
    pub fn into_seq(self) -> error::Result<Seq<Value>> {
        match self {
            Value::List(items) => Ok(Seq::of(items)),
            Value::Seq(seq) => Ok(seq),
            other => Err(error::Error::invalid_construction(
                ValueKind::Seq.name(),
                other,
            )),
        }
    }
}

impl TryFrom<Value> for Seq<Value> {
    type Error = error::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.into_seq()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(OrderedFloat(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl From<Maybe<Value>> for Value {
    fn from(maybe: Maybe<Value>) -> Self {
        Value::Maybe(Box::new(maybe))
    }
}

impl From<Seq<Value>> for Value {
    fn from(seq: Seq<Value>) -> Self {
        Value::Seq(seq)
    }
}

/// `None` is the absence marker.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Maybe(maybe) => match &**maybe {
                Present(value) => write!(f, "Present({})", value),
                Absent => write!(f, "Absent"),
            },
            Value::Seq(seq) => write!(f, "Seq{}", seq),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantNames;

    use super::*;

    #[test]
    fn test_kind_names_agree_with_display() {
        let kinds = [
            ValueKind::Null,
            ValueKind::Bool,
            ValueKind::Integer,
            ValueKind::Float,
            ValueKind::String,
            ValueKind::List,
            ValueKind::Map,
            ValueKind::Maybe,
            ValueKind::Seq,
        ];
        assert_eq!(kinds.len(), ValueKind::VARIANTS.len());
        for kind in kinds {
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_display() {
        let mut map = BTreeMap::new();
        map.insert("k".to_string(), Value::from(1));
        let value = Value::from(vec![
            Value::Null,
            Value::from(true),
            Value::from(1.5),
            Value::from("a"),
            Value::from(map),
            Value::from(Present(Value::from(2))),
            Value::from(Maybe::<Value>::Absent),
            Value::from(Seq::of(vec![Value::from(3)])),
        ]);
        insta::assert_snapshot!(
            value,
            @r#"[null, true, 1.5, "a", {"k": 1}, Present(2), Absent, Seq[3]]"#
        );
    }

    #[test]
    fn test_into_seq() {
        let seq = Value::from(vec![1, 2]).into_seq().unwrap();
        assert_eq!(seq, Seq::of(vec![Value::from(1), Value::from(2)]));
        assert!(matches!(
            Value::Map(BTreeMap::new()).into_seq(),
            Err(error::Error::InvalidConstruction { target: "Seq", .. })
        ));
        assert!(Value::from(3).into_seq().is_err());
        assert!(Value::Null.into_seq().is_err());
    }

    #[test]
    fn test_into_maybe_refuses_present_null() {
        assert_eq!(
            Value::from(Present(Value::from(1))).into_maybe(),
            Ok(Present(Value::from(1)))
        );
        assert_eq!(Value::from(Maybe::<Value>::Absent).into_maybe(), Ok(Absent));
        assert!(matches!(
            Value::from(Present(Value::Null)).into_maybe(),
            Err(error::Error::InvalidConstruction {
                target: "Present",
                ..
            })
        ));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(2)), Value::Integer(2));
    }

    #[test]
    fn test_total_order() {
        let mut values = vec![Value::from(2), Value::Null, Value::from(1)];
        values.sort();
        assert_eq!(values, vec![Value::Null, Value::from(1), Value::from(2)]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_round_trip_nested() {
        let value = Value::from(vec![
            Value::from(Present(Value::from(1.5))),
            Value::from(Maybe::<Value>::Absent),
            Value::from(Seq::of(vec![Value::from("a"), Value::Null]).tail()),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_seq_serializes_visible_elements() {
        let value = Value::from(Seq::of(vec![Value::from(1), Value::from(2)]).tail());
        insta::assert_snapshot!(
            serde_json::to_string(&value).unwrap(),
            @r#"{"Seq":[{"Integer":2}]}"#
        );
    }
}
