use std::ops::{Add, Shl};

use super::seq_core::Seq;

/// `a + b` is [`Seq::concat`].
impl<T: Clone, R: Into<Seq<T>>> Add<R> for Seq<T> {
    type Output = Seq<T>;

    fn add(self, other: R) -> Self::Output {
        self.concat(other)
    }
}

/// `seq << item` is [`Seq::append`].
impl<T: Clone> Shl<T> for Seq<T> {
    type Output = Seq<T>;

    fn shl(self, item: T) -> Self::Output {
        self.append(item)
    }
}
