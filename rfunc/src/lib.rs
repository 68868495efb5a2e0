//! Functional programming support: [`Maybe`] and [`Seq`].
//!
//! [`Maybe`] is an optional-value container that is never null, and
//! [`Seq`] is an immutable sequence with `map`/`fold`/`filter` style
//! combinators. Both are strongly typed.
//!
//! For content whose shape is only known at runtime, [`Value`] models an
//! untyped payload, and the [`DynamicMaybe`] and [`DynamicSeq`] traits add
//! operations that check what they are handed:
//!
//! ```
//! use rfunc::{DynamicMaybe, Error, Maybe, Present, Value};
//!
//! let wrapped = Present(Value::from(1))
//!     .flat_map_value(|v| Value::from(Maybe::<Value>::of_value(v)))
//!     .unwrap();
//! assert_eq!(wrapped, Present(Value::from(1)));
//!
//! // forgetting to wrap the callback's result is caught
//! let error = Present(Value::from(1)).flat_map_value(|v| v).unwrap_err();
//! assert!(matches!(error, Error::InvalidReturnType { .. }));
//! ```
mod dynamic_maybe;
mod dynamic_seq;
mod value;

pub use rfunc_option::{error, Absent, Error, Maybe, Present, Result};
pub use rfunc_seq::Seq;

pub use dynamic_maybe::DynamicMaybe;
pub use dynamic_seq::DynamicSeq;
pub use value::{Value, ValueKind};
