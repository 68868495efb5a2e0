use std::rc::Rc;

use super::seq_core::Seq;

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Seq::of(items)
    }
}

impl<T> From<Rc<[T]>> for Seq<T> {
    fn from(items: Rc<[T]>) -> Self {
        Seq::of(items)
    }
}

impl<T: Clone> From<&[T]> for Seq<T> {
    fn from(items: &[T]) -> Self {
        Seq::of(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(items: [T; N]) -> Self {
        Seq::of(Vec::from(items))
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::of(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Clone> From<&Seq<T>> for Seq<T> {
    fn from(seq: &Seq<T>) -> Self {
        seq.clone()
    }
}

impl<T: Clone> From<Seq<T>> for Vec<T> {
    fn from(seq: Seq<T>) -> Self {
        seq.to_vec()
    }
}
