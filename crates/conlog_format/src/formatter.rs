//! Concatenation of heterogeneous values into one narrow or wide message.

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::rc::Rc;
use std::sync::Arc;

use conlog_common::Fault;

use crate::codec::{to_wide, WideStr, WideString};

/// A value that can be written into a log message.
///
/// Implemented for the primitive types, strings, wide strings, and references
/// or smart pointers to any loggable value. Other types either implement this
/// trait directly or are wrapped with [`display`] or [`debug`].
pub trait Loggable {
    /// Appends this value's text to `out`.
    fn write_text(&self, out: &mut String) -> fmt::Result;

    /// Returns `true` if this value is wide text, which makes the whole
    /// message wide.
    fn is_wide(&self) -> bool {
        false
    }
}

/// Implements [`Loggable`] for types through their `Display` implementation.
///
/// ```
/// use std::fmt;
///
/// enum Phase {
///     Boot,
///     Run,
/// }
///
/// impl fmt::Display for Phase {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(match self {
///             Phase::Boot => "boot",
///             Phase::Run => "run",
///         })
///     }
/// }
///
/// conlog_format::impl_loggable!(Phase);
///
/// let msg = conlog_format::format(&[&"phase ", &Phase::Run]).unwrap();
/// assert_eq!(msg.as_narrow(), Some("phase run"));
/// # let _ = Phase::Boot;
/// ```
#[macro_export]
macro_rules! impl_loggable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Loggable for $ty {
                fn write_text(&self, out: &mut ::std::string::String) -> ::core::fmt::Result {
                    ::core::fmt::Write::write_fmt(out, ::core::format_args!("{}", self))
                }
            }
        )*
    };
}

impl_loggable!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl_loggable!(
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
    std::net::SocketAddrV4,
    std::net::SocketAddrV6,
    conlog_category::Severity,
);

impl Loggable for str {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        out.push_str(self);
        Ok(())
    }
}

impl Loggable for String {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        out.push_str(self);
        Ok(())
    }
}

impl Loggable for Cow<'_, str> {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        out.push_str(self);
        Ok(())
    }
}

impl Loggable for fmt::Arguments<'_> {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        out.write_fmt(*self)
    }
}

impl Loggable for WideString {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        out.push_str(&self.to_narrow_lossy());
        Ok(())
    }

    fn is_wide(&self) -> bool {
        true
    }
}

impl Loggable for WideStr<'_> {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        out.push_str(&self.to_narrow_lossy());
        Ok(())
    }

    fn is_wide(&self) -> bool {
        true
    }
}

macro_rules! loggable_via_deref {
    ($($ptr:ident),*) => {
        $(
            impl<T: Loggable + ?Sized> Loggable for $ptr<T> {
                fn write_text(&self, out: &mut String) -> fmt::Result {
                    (**self).write_text(out)
                }

                fn is_wide(&self) -> bool {
                    (**self).is_wide()
                }
            }
        )*
    };
}

loggable_via_deref!(Box, Rc, Arc);

impl<T: Loggable + ?Sized> Loggable for &T {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        (**self).write_text(out)
    }

    fn is_wide(&self) -> bool {
        (**self).is_wide()
    }
}

impl<T: Loggable + ?Sized> Loggable for &mut T {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        (**self).write_text(out)
    }

    fn is_wide(&self) -> bool {
        (**self).is_wide()
    }
}

/// Logs a value through its [`Display`](fmt::Display) implementation.
#[derive(Clone, Copy, Debug)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Loggable for Displayed<T> {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.0)
    }
}

/// Logs a value through its [`Debug`](fmt::Debug) implementation.
#[derive(Clone, Copy, Debug)]
pub struct Debugged<T>(pub T);

impl<T: fmt::Debug> Loggable for Debugged<T> {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        write!(out, "{:?}", self.0)
    }
}

/// Wraps a value so that it is logged with `Display`.
pub fn display<T: fmt::Display>(value: T) -> Displayed<T> {
    Displayed(value)
}

/// Wraps a value so that it is logged with `Debug`.
pub fn debug<T: fmt::Debug>(value: T) -> Debugged<T> {
    Debugged(value)
}

/// The text of one log message, in narrow (UTF-8) or wide (UTF-16) form.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FormattedMessage {
    /// Produced when no argument was wide text.
    Narrow(String),
    /// Produced when at least one argument was wide text.
    Wide(WideString),
}

impl FormattedMessage {
    /// Returns `true` for a wide message.
    pub fn is_wide(&self) -> bool {
        matches!(self, FormattedMessage::Wide(_))
    }

    /// Returns the narrow text, if this message is narrow.
    pub fn as_narrow(&self) -> Option<&str> {
        match self {
            FormattedMessage::Narrow(text) => Some(text),
            FormattedMessage::Wide(_) => None,
        }
    }

    /// Returns the wide text, if this message is wide.
    pub fn as_wide(&self) -> Option<&WideString> {
        match self {
            FormattedMessage::Narrow(_) => None,
            FormattedMessage::Wide(text) => Some(text),
        }
    }

    /// Returns the message as UTF-8, decoding wide text if needed.
    pub fn to_narrow_lossy(&self) -> Cow<'_, str> {
        match self {
            FormattedMessage::Narrow(text) => Cow::Borrowed(text),
            FormattedMessage::Wide(text) => Cow::Owned(text.to_narrow_lossy()),
        }
    }

    /// Consumes the message and returns it as UTF-8.
    pub fn into_narrow_lossy(self) -> String {
        match self {
            FormattedMessage::Narrow(text) => text,
            FormattedMessage::Wide(text) => text.to_narrow_lossy(),
        }
    }
}

impl fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_narrow_lossy())
    }
}

/// Builds a [`FormattedMessage`] from values appended left to right.
///
/// No separator is inserted between values. The first formatting error is
/// kept and returned by [`finish`](Self::finish); later values are not
/// written.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    text: String,
    wide: bool,
    error: Option<fmt::Error>,
}

impl MessageBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one value.
    pub fn append<T: Loggable + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.wide |= value.is_wide();
        if self.error.is_none() {
            if let Err(err) = value.write_text(&mut self.text) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Returns `true` if any appended value was wide.
    pub fn is_wide(&self) -> bool {
        self.wide
    }

    /// Produces the message.
    ///
    /// Wide messages are transcoded to UTF-16 once, then every NUL unit is
    /// removed.
    pub fn finish(self) -> Result<FormattedMessage, Fault> {
        if let Some(err) = self.error {
            return Err(Fault::Format(err));
        }
        if self.wide {
            let mut wide = to_wide(&self.text);
            wide.strip_nul();
            Ok(FormattedMessage::Wide(wide))
        } else {
            Ok(FormattedMessage::Narrow(self.text))
        }
    }
}

/// Concatenates `values` into one message.
pub fn format(values: &[&dyn Loggable]) -> Result<FormattedMessage, Fault> {
    let mut builder = MessageBuilder::new();
    for value in values {
        builder.append(*value);
    }
    builder.finish()
}
