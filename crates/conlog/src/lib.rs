//! Category-gated console logging.
//!
//! Declare categories once with [`declare_category!`], construct a
//! [`Console`] at startup, and log through it:
//!
//! ```
//! use conlog::{declare_category, log, CategoryColors, ColorChoice, Console};
//!
//! declare_category! {
//!     pub static NET {
//!         name: "Net",
//!         severities: All,
//!         enabled: true,
//!         debug_only: false,
//!         timestamp: false,
//!         colors: CategoryColors::PLAIN,
//!     }
//! }
//!
//! let console = Console::new(Vec::new(), ColorChoice::Never);
//! log!(console, NET, Warning, "retrying in ", 3, "s").unwrap();
//! assert_eq!(console.into_inner(), b"Net: [WARNING]: retrying in 3s\n");
//! ```
//!
//! A category declared with `enabled: false` (or `debug_only: true` in a
//! release build, or any category when the `off` feature is on) has a
//! different type whose logging path is empty: the message arguments are
//! never evaluated and the console is never touched.

#![warn(missing_docs)]

mod core_category;
mod macros;

pub use conlog_category::{
    category_active, BackgroundColor, Category, CategoryColors, ColorAttributes, ColorPair, Severity,
    TextColor, COMPILED_OUT,
};
pub use conlog_common::{CallSite, ConlogResult, Fault, FromDiagnostic};
pub use conlog_console::{Clock, ColorChoice, Console, Emit, FixedClock, LocalClock};
pub use conlog_format::codec;
pub use conlog_format::impl_loggable;
pub use conlog_format::{
    assert_at, assert_or, debug, diagnostic_at, display, format, throw, throw_at, throw_error, Debugged,
    Displayed, FormattedMessage, Loggable, MessageBuilder, WideStr, WideString,
};

pub use core_category::CORE;

/// Turns the result of formatting a raised message into a [`Fault`] tagged
/// with `site`. Used by [`throw!`] and [`ensure!`].
#[doc(hidden)]
pub fn raised_at(site: CallSite, message: Result<FormattedMessage, Fault>) -> Fault {
    match message {
        Ok(message) => Fault::from_diagnostic(diagnostic_at(&message.to_narrow_lossy(), site)),
        Err(fault) => fault,
    }
}
