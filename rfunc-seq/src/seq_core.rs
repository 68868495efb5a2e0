// creation.rs contains the various ways to build a Seq from other
// collections, access.rs the positional accessors, transform.rs the
// combinators and compare.rs the set-like operations.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// An immutable, ordered, finite sequence.
///
/// A `Seq` is a window (`start..end`) onto a shared, never-mutated backing
/// slice. Views like `tail`, `slice` and `take` share the backing slice
/// instead of copying it; every operation that changes the contents builds
/// a new backing slice and leaves the receiver untouched.
///
/// Equality, ordering and hashing only look at the visible elements.
pub struct Seq<T> {
    pub(crate) items: Rc<[T]>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

// an Rc<[T]> fat pointer plus the window
#[cfg(target_arch = "x86_64")]
static_assertions::assert_eq_size!(Seq<u8>, [u8; 32]);

impl<T> Seq<T> {
    /// The empty sequence.
    pub fn new() -> Self {
        Self::of(Vec::new())
    }

    /// Wrap an existing ordered collection.
    pub fn of(items: impl Into<Rc<[T]>>) -> Self {
        let items = items.into();
        let end = items.len();
        Seq {
            items,
            start: 0,
            end,
        }
    }

    // a view onto the same backing slice; offsets are relative to this
    // window and must already be clamped
    pub(crate) fn window(&self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.len());
        Seq {
            items: self.items.clone(),
            start: self.start + start,
            end: self.start + end,
        }
    }

    /// The elements of the sequence as a read-only slice.
    #[inline]
    pub fn members(&self) -> &[T] {
        &self.items[self.start..self.end]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The number of elements in the sequence.
    #[inline]
    pub fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// An equal view of the whole sequence.
    pub fn all(&self) -> Self {
        self.clone()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members().iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.members().to_vec()
    }
}

// not derived: a derive would demand T: Clone even though only the Rc is
// cloned
impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Seq {
            items: self.items.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.members() == other.members()
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: PartialOrd> PartialOrd for Seq<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.members().partial_cmp(other.members())
    }
}

impl<T: Ord> Ord for Seq<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.members().cmp(other.members())
    }
}

impl<T: Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.members().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Seq").field(&self.members()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
