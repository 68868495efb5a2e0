use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

use super::seq_core::Seq;

impl<T> Seq<T>
where
    T: Eq + Hash + Clone,
{
    /// The elements of `self` that also occur in `other`, in the order of
    /// `self`. Each distinct element is kept once.
    pub fn intersect(&self, other: impl Into<Seq<T>>) -> Seq<T> {
        let other = other.into();
        let wanted = other.iter().collect::<HashSet<_>>();
        let mut seen = HashSet::with_capacity(wanted.len());
        self.iter()
            .filter(|item| wanted.contains(item) && seen.insert(*item))
            .cloned()
            .collect()
    }

    /// The elements of `self` that do not occur in `other`, in the order
    /// of `self`. Repeats in `self` are kept.
    pub fn difference(&self, other: impl Into<Seq<T>>) -> Seq<T> {
        let other = other.into();
        let unwanted = other.iter().collect::<HashSet<_>>();
        self.filter(|item| !unwanted.contains(item))
    }

    /// Drop repeated elements, keeping the first occurrence of each.
    pub fn distinct(&self) -> Seq<T> {
        let mut seen = HashSet::with_capacity(self.len());
        self.filter(|item| seen.insert(item.clone()))
    }
}
