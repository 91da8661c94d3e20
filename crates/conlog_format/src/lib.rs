//! Message formatting, UTF-16 transcoding, and fault signaling.
//!
//! [`MessageBuilder`] concatenates any sequence of [`Loggable`] values into a
//! [`FormattedMessage`], choosing narrow or wide output from the argument
//! types. The [`codec`] module converts between UTF-8 and UTF-16 text, and the
//! [`fault`] module builds diagnostics and raises them as errors.

#![warn(missing_docs)]

pub mod codec;
pub mod fault;
pub mod formatter;

pub use codec::{CodecError, WideStr, WideString};
pub use fault::{assert_at, assert_or, diagnostic_at, throw, throw_at, throw_error};
pub use formatter::{debug, display, format, Debugged, Displayed, FormattedMessage, Loggable, MessageBuilder};
