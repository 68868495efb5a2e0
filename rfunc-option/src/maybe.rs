use std::fmt;

use crate::error;

/// A value that is either present or absent.
///
/// `Maybe` never holds a null: the absent case is its own variant and the
/// present case always carries a value. Equality is structural, so two
/// `Maybe`s are equal when they are the same variant and, if present, wrap
/// equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    #[default]
    Absent,
    /// A value.
    Present(T),
}

pub use Maybe::{Absent, Present};

impl<T> Maybe<T> {
    /// Smart constructor: `Some(v)` becomes `Present(v)`, `None` becomes
    /// `Absent`.
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Present(value),
            None => Absent,
        }
    }

    #[inline]
    pub fn present(value: T) -> Self {
        Present(value)
    }

    #[inline]
    pub fn absent() -> Self {
        Absent
    }

    /// Get the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics if called on `Absent`. Use [`Maybe::try_get`],
    /// [`Maybe::get_or_else`] or [`Maybe::fold`] when absence is possible.
    #[inline]
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Present(value) => value,
            Absent => panic!("called `Maybe::get` on an `Absent` value"),
        }
    }

    /// Get the wrapped value, or an `EmptyAccess` error when absent.
    pub fn try_get(self) -> error::Result<T> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(error::Error::empty_access("Absent")),
        }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Absent)
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into_option(),
        }
    }

    /// Transform the wrapped value. `f` only runs when present.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }

    /// Transform the wrapped value into another `Maybe`.
    ///
    /// The callback's return type is `Maybe<U>`, so forgetting to wrap its
    /// result is a compile error rather than the runtime `InvalidReturnType`
    /// the dynamic layer raises.
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Present(value) => f(value),
            Absent => Absent,
        }
    }

    /// `self` if present, otherwise `alternative`.
    pub fn or_else(self, alternative: Maybe<T>) -> Maybe<T> {
        match self {
            Present(_) => self,
            Absent => alternative,
        }
    }

    /// Like [`Maybe::or_else`], but the alternative is only computed when
    /// `self` is absent.
    pub fn or_else_with<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Present(_) => self,
            Absent => f(),
        }
    }

    /// The wrapped value, or the result of `default` when absent. `default`
    /// is not invoked for a present value.
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Present(value) => value,
            Absent => default(),
        }
    }

    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Present(value) if predicate(&value) => Present(value),
            _ => Absent,
        }
    }

    pub fn filter_not<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// `f(value)` when present, `default` when absent.
    pub fn fold<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => f(value),
            Absent => default,
        }
    }

    /// Map with a callback that may return the absence marker (`None`).
    pub fn collect<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Present(value) => Maybe::of(f(value)),
            Absent => Absent,
        }
    }

    /// 1 if present and the predicate holds, 0 otherwise.
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Present(value) if predicate(value) => 1,
            _ => 0,
        }
    }

    /// Vacuously true when absent.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Present(value) => predicate(value),
            Absent => true,
        }
    }

    /// False when absent.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Present(value) => predicate(value),
            Absent => false,
        }
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Present(value) = self {
            f(value);
        }
    }

    /// Present only when both `self` and `other` are present.
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Present(a), Present(b)) => Present((a, b)),
            _ => Absent,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapse one level of nesting.
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Present(inner) => inner,
            Absent => Absent,
        }
    }
}

impl<T: Clone> Maybe<&T> {
    pub fn cloned(self) -> Maybe<T> {
        self.map(T::clone)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Present(value) => write!(f, "Present({})", value),
            Absent => write!(f, "Absent"),
        }
    }
}

/// Iterator over the zero or one values of a `Maybe`.
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
