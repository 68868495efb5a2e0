//! An immutable sequence wrapper.
//!
//! [`Seq`] wraps a finite ordered collection and exposes functional
//! combinators over it: positional access, `map`/`filter`/`fold`, set-like
//! operations and sorting. Every transformation returns a new `Seq`;
//! boundary accessors like [`Seq::head_option`] and [`Seq::tail_option`]
//! report absence through [`Maybe`](rfunc_option::Maybe).
mod access;
mod compare;
mod creation;
mod iter;
mod ops;
mod seq_core;
#[cfg(feature = "serde")]
mod serialization;
mod sort;
mod transform;

pub use rfunc_option::error;

pub use iter::IntoIter;
pub use seq_core::Seq;
