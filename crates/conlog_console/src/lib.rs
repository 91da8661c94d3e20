//! The serialized console writer.
//!
//! A [`Console`] owns the output handle and the lock that keeps concurrent log
//! lines from interleaving. It is constructed explicitly by the application
//! before any category is used and passed to every logging call. The [`Emit`]
//! trait routes calls by category type: enabled categories format and write,
//! disabled ones do nothing at all.

#![warn(missing_docs)]

pub mod clock;
pub mod color_sink;
pub mod console;
pub mod emit;

pub use clock::{Clock, FixedClock, LocalClock};
pub use console::{ColorChoice, Console};
pub use emit::Emit;
