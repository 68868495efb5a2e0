//! An optional-value container that is never null.
//!
//! [`Maybe`] is either [`Present`] with a value or [`Absent`]. It carries
//! the usual combinators (`map`, `flat_map`, `filter`, `fold`, `flatten`,
//! ...) and converts to and from [`std::option::Option`].
//!
//! This crate also defines the [`Error`] taxonomy shared by the rest of the
//! rfunc crates.
pub mod error;
mod maybe;

pub use error::{Error, Result};
pub use maybe::{Absent, Iter, Maybe, Present};
