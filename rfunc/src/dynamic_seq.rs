use rfunc_option::{error, Maybe};
use rfunc_seq::Seq;

use crate::dynamic_maybe::DynamicMaybe;
use crate::value::{Value, ValueKind};

/// Runtime-checked operations on a `Seq<Value>`.
///
/// These accept ordered collections in either of their dynamic forms
/// (`Value::List` or `Value::Seq`) and treat `Value::Null` as the absence
/// marker.
pub trait DynamicSeq: Sized {
    /// Build a sequence from a value that must be an ordered collection.
    fn try_of(value: Value) -> error::Result<Self>;

    /// The element at `index`, or `Value::Null` when out of range.
    fn at_value(&self, index: usize) -> Value;

    /// The first element, or `Value::Null` when empty.
    fn head_value(&self) -> Value;

    /// The last element, or `Value::Null` when empty.
    fn last_value(&self) -> Value;

    /// Append the elements of a list or seq value.
    fn concat_value(&self, other: Value) -> error::Result<Self>;

    /// Map every element to a list or seq value and flatten one level.
    fn flat_map_value<F>(&self, f: F) -> error::Result<Self>
    where
        F: FnMut(&Value) -> Value;

    /// Splice list and seq elements in one level; other elements are kept.
    fn flatten_value(&self) -> Self;

    /// Keep the non-null results of `f`, in order.
    fn collect_value<F>(&self, f: F) -> Self
    where
        F: FnMut(&Value) -> Value;

    /// The first non-null result of `f`.
    fn collect_first_value<F>(&self, f: F) -> Maybe<Value>
    where
        F: FnMut(&Value) -> Value;
}

impl DynamicSeq for Seq<Value> {
    fn try_of(value: Value) -> error::Result<Self> {
        value.into_seq()
    }

    fn at_value(&self, index: usize) -> Value {
        self.at(index).cloned().unwrap_or_default()
    }

    fn head_value(&self) -> Value {
        self.head_option().cloned().get_or_else(Value::default)
    }

    fn last_value(&self) -> Value {
        self.last().cloned().unwrap_or_default()
    }

    fn concat_value(&self, other: Value) -> error::Result<Self> {
        Ok(self.concat(other.into_seq()?))
    }

    fn flat_map_value<F>(&self, mut f: F) -> error::Result<Self>
    where
        F: FnMut(&Value) -> Value,
    {
        let mut items = Vec::with_capacity(self.len());
        for item in self.iter() {
            match f(item) {
                Value::List(values) => items.extend(values),
                Value::Seq(seq) => items.extend(seq.iter().cloned()),
                other => {
                    return Err(error::Error::invalid_return_type(
                        other,
                        ValueKind::List.name(),
                    ))
                }
            }
        }
        Ok(items.into())
    }

    fn flatten_value(&self) -> Self {
        let mut items = Vec::with_capacity(self.len());
        for item in self.iter() {
            match item {
                Value::List(values) => items.extend(values.iter().cloned()),
                Value::Seq(seq) => items.extend(seq.iter().cloned()),
                other => items.push(other.clone()),
            }
        }
        items.into()
    }

    fn collect_value<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Value) -> Value,
    {
        self.collect(|item| match f(item) {
            Value::Null => None,
            value => Some(value),
        })
    }

    fn collect_first_value<F>(&self, mut f: F) -> Maybe<Value>
    where
        F: FnMut(&Value) -> Value,
    {
        self.collect_first(|item| Maybe::of_value(f(item)).into_option())
    }
}
