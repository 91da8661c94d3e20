//! Routing of logging calls by category type.

use std::io::Write;

use conlog_category::{Category, Severity};
use conlog_common::{CallSite, Fault};
use conlog_format::FormattedMessage;

use crate::console::Console;

/// Sends a lazily built message through a category.
///
/// Implemented separately for enabled and disabled categories. The disabled
/// implementation is empty: `message` is never called, so the arguments of a
/// logging macro are never evaluated and the console lock is never taken.
pub trait Emit {
    /// Formats the message and writes it to `console` at `severity`.
    fn emit<W, F>(
        &self,
        console: &Console<W>,
        severity: Severity,
        site: CallSite,
        message: F,
    ) -> Result<(), Fault>
    where
        W: Write,
        F: FnOnce() -> Result<FormattedMessage, Fault>;
}

impl Emit for Category<'_, true> {
    #[inline]
    fn emit<W, F>(
        &self,
        console: &Console<W>,
        severity: Severity,
        site: CallSite,
        message: F,
    ) -> Result<(), Fault>
    where
        W: Write,
        F: FnOnce() -> Result<FormattedMessage, Fault>,
    {
        let message = message()?;
        console.write_log(self, severity, &message, site)
    }
}

impl Emit for Category<'_, false> {
    #[inline(always)]
    fn emit<W, F>(
        &self,
        _console: &Console<W>,
        _severity: Severity,
        _site: CallSite,
        _message: F,
    ) -> Result<(), Fault>
    where
        W: Write,
        F: FnOnce() -> Result<FormattedMessage, Fault>,
    {
        Ok(())
    }
}
