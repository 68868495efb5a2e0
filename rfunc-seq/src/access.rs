use rfunc_option::{Absent, Maybe, Present};

use crate::error;

use super::seq_core::Seq;

impl<T> Seq<T> {
    /// The element at `index`, or `None` when out of range.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.members().get(index)
    }

    /// The first element.
    ///
    /// Fails with `EmptyAccess` on an empty sequence; use
    /// [`Seq::head_option`] when the sequence may be empty.
    pub fn head(&self) -> error::Result<&T> {
        self.members()
            .first()
            .ok_or_else(|| error::Error::empty_access("Seq"))
    }

    /// Alias of [`Seq::head`].
    pub fn first(&self) -> error::Result<&T> {
        self.head()
    }

    pub fn head_option(&self) -> Maybe<&T> {
        Maybe::of(self.members().first())
    }

    /// Alias of [`Seq::head_option`].
    pub fn first_option(&self) -> Maybe<&T> {
        self.head_option()
    }

    /// Everything but the first element. Empty for an empty or singleton
    /// sequence.
    pub fn tail(&self) -> Seq<T> {
        if self.is_empty() {
            return self.clone();
        }
        self.window(1, self.len())
    }

    /// The tail, but only when the tail itself has elements.
    pub fn tail_option(&self) -> Maybe<Seq<T>> {
        let tail = self.tail();
        if tail.is_empty() {
            Absent
        } else {
            Present(tail)
        }
    }

    /// The last element, or `None` when empty.
    ///
    /// Unlike [`Seq::head`] this does not fail on an empty sequence.
    pub fn last(&self) -> Option<&T> {
        self.members().last()
    }

    pub fn last_option(&self) -> Maybe<&T> {
        Maybe::of(self.last())
    }

    /// At most `count` elements starting at `from`. Out of range yields an
    /// empty sequence.
    pub fn slice(&self, from: usize, count: usize) -> Seq<T> {
        let start = from.min(self.len());
        let end = from.saturating_add(count).min(self.len());
        self.window(start, end)
    }

    pub fn take(&self, n: usize) -> Seq<T> {
        self.window(0, n.min(self.len()))
    }

    pub fn take_while<P>(&self, mut predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool,
    {
        let n = self
            .iter()
            .position(|item| !predicate(item))
            .unwrap_or(self.len());
        self.window(0, n)
    }

    pub fn drop(&self, n: usize) -> Seq<T> {
        self.window(n.min(self.len()), self.len())
    }

    pub fn drop_while<P>(&self, mut predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool,
    {
        let n = self
            .iter()
            .position(|item| !predicate(item))
            .unwrap_or(self.len());
        self.window(n, self.len())
    }
}
