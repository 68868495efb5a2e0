use std::fmt::Display;

use rfunc_option::Maybe;

use super::seq_core::Seq;

impl<T> Seq<T> {
    /// Element-wise transform, preserving order and length.
    pub fn map<U, F>(&self, f: F) -> Seq<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Left-to-right reduction. `f` is invoked exactly once per element.
    pub fn fold<A, F>(&self, accum: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(accum, f)
    }

    /// Alias of [`Seq::fold`].
    pub fn foldl<A, F>(&self, accum: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.fold(accum, f)
    }

    /// Right-to-left reduction: the last element is visited first.
    pub fn foldr<A, F>(&self, accum: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().rev().fold(accum, f)
    }

    pub fn filter<P>(&self, mut predicate: P) -> Seq<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).cloned().collect()
    }

    pub fn filter_not<P>(&self, mut predicate: P) -> Seq<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.filter(|item| !predicate(item))
    }

    /// The first element satisfying the predicate.
    pub fn find<P>(&self, mut predicate: P) -> Maybe<&T>
    where
        P: FnMut(&T) -> bool,
    {
        Maybe::of(self.iter().find(|item| predicate(item)))
    }

    /// Fused filter and map: keeps the `Some` results of `f`, in order.
    pub fn collect<U, F>(&self, f: F) -> Seq<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        self.iter().filter_map(f).collect()
    }

    /// The first `Some` result of `f`. Stops at the first hit.
    pub fn collect_first<U, F>(&self, f: F) -> Maybe<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        Maybe::of(self.iter().find_map(f))
    }

    pub fn prepend(&self, item: T) -> Seq<T>
    where
        T: Clone,
    {
        let mut items = Vec::with_capacity(self.len() + 1);
        items.push(item);
        items.extend_from_slice(self.members());
        items.into()
    }

    pub fn append(&self, item: T) -> Seq<T>
    where
        T: Clone,
    {
        let mut items = Vec::with_capacity(self.len() + 1);
        items.extend_from_slice(self.members());
        items.push(item);
        items.into()
    }

    pub fn reverse(&self) -> Seq<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    /// Append all elements of `other`, which may be a `Seq` or any ordered
    /// collection convertible into one.
    pub fn concat(&self, other: impl Into<Seq<T>>) -> Seq<T>
    where
        T: Clone,
    {
        let other = other.into();
        // share the backing slice when there is nothing to copy
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other;
        }
        let mut items = Vec::with_capacity(self.len() + other.len());
        items.extend_from_slice(self.members());
        items.extend_from_slice(other.members());
        items.into()
    }

    /// Map every element to an ordered collection and flatten one level.
    pub fn flat_map<I, F>(&self, f: F) -> Seq<I::Item>
    where
        I: IntoIterator,
        F: FnMut(&T) -> I,
    {
        self.iter().flat_map(f).collect()
    }

    /// Concatenate the string form of every element, separated by `separator`.
    pub fn join(&self, separator: &str) -> String
    where
        T: Display,
    {
        self.iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Vacuously true on an empty sequence.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f)
    }

    /// Pair up elements; the result is as long as the shorter input.
    pub fn zip<U>(&self, other: &Seq<U>) -> Seq<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        self.iter()
            .cloned()
            .zip(other.iter().cloned())
            .collect()
    }
}

impl<I> Seq<I>
where
    I: IntoIterator + Clone,
{
    /// Flatten one level of nesting.
    pub fn flatten(&self) -> Seq<I::Item> {
        self.iter().cloned().flatten().collect()
    }
}
