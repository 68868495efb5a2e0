use std::cmp::Ordering;

use super::seq_core::Seq;

// all sorts are stable and build a new backing slice; the receiver is never
// reordered in place
impl<T: Clone> Seq<T> {
    /// Sort by natural order. This is `sort()` without a comparator.
    ///
    /// ```
    /// use rfunc_seq::Seq;
    ///
    /// assert_eq!(Seq::of(vec![3, 1, 2]).sorted().members(), &[1, 2, 3]);
    /// ```
    pub fn sorted(&self) -> Seq<T>
    where
        T: Ord,
    {
        let mut items = self.to_vec();
        items.sort();
        items.into()
    }

    /// Sort with a comparator. This is `sort(cmp)`; for `sort_by(keyfn)`
    /// use [`Seq::sorted_by_key`].
    ///
    /// ```
    /// use rfunc_seq::Seq;
    ///
    /// let seq = Seq::of(vec![1, 3, 2]);
    /// assert_eq!(seq.sorted_by(|a, b| b.cmp(a)).members(), &[3, 2, 1]);
    /// ```
    pub fn sorted_by<F>(&self, compare: F) -> Seq<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.to_vec();
        items.sort_by(compare);
        items.into()
    }

    /// Sort by a key extracted from each element. This is `sort_by(keyfn)`.
    /// The key function is called once per element.
    ///
    /// ```
    /// use rfunc_seq::Seq;
    ///
    /// let seq = Seq::of(vec!["ccc", "a", "bb"]);
    /// assert_eq!(seq.sorted_by_key(|s| s.len()).members(), &["a", "bb", "ccc"]);
    /// ```
    pub fn sorted_by_key<K, F>(&self, get: F) -> Seq<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let keys = self.iter().map(get).collect::<Vec<_>>();
        let mut keys_and_items = keys.into_iter().zip(self.iter()).collect::<Vec<_>>();
        keys_and_items.sort_by(|(a_key, _), (b_key, _)| a_key.cmp(b_key));
        keys_and_items
            .into_iter()
            .map(|(_, item)| item.clone())
            .collect()
    }
}
