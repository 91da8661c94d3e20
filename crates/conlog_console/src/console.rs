//! The console writer context and its line protocol.

use std::io::{self, IsTerminal, Stdout, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use conlog_category::{Category, ColorAttributes, ColorPair, Severity};
use conlog_common::{CallSite, Fault};
use conlog_format::{throw_at, FormattedMessage};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, LocalClock};
use crate::color_sink::apply_attributes;

/// Controls whether color commands are written.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when the output is a terminal.
    #[default]
    Auto,
    /// Always write color commands.
    Always,
    /// Never write color commands.
    Never,
}

impl ColorChoice {
    /// Resolves the choice against whether the output is a terminal.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// The process's console writer.
///
/// Holds the output handle behind a single lock. Every log line is written
/// while holding the lock, so concurrent lines never interleave, and the
/// color state is reset to [`ColorAttributes::NEUTRAL`] before the lock is
/// released.
pub struct Console<W: Write = Stdout> {
    output: Mutex<W>,
    color: bool,
    clock: Box<dyn Clock>,
}

impl Console<Stdout> {
    /// Acquires the process's standard output.
    ///
    /// [`ColorChoice::Auto`] enables color when stdout is a terminal.
    pub fn stdout(choice: ColorChoice) -> Self {
        let output = io::stdout();
        let color = choice.resolve(output.is_terminal());
        Self::with_color(output, color)
    }
}

impl<W: Write> Console<W> {
    /// Wraps an arbitrary writer.
    ///
    /// The writer is not assumed to be a terminal, so [`ColorChoice::Auto`]
    /// disables color.
    pub fn new(output: W, choice: ColorChoice) -> Self {
        Self::with_color(output, choice.resolve(false))
    }

    fn with_color(output: W, color: bool) -> Self {
        Self {
            output: Mutex::new(output),
            color,
            clock: Box::new(LocalClock),
        }
    }

    /// Replaces the timestamp source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Returns `true` if color commands are written.
    pub fn colors_enabled(&self) -> bool {
        self.color
    }

    /// Consumes the console and returns the writer.
    pub fn into_inner(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes one log line through an enabled category.
    ///
    /// The line reads `[HH:MM:SS ]<name>: <TAG>: <message>`. A severity that
    /// is not a concrete level accepted by `category` raises a fault tagged
    /// with `site` and writes nothing.
    pub fn write_log(
        &self,
        category: &Category<'_, true>,
        severity: Severity,
        message: &FormattedMessage,
        site: CallSite,
    ) -> Result<(), Fault> {
        let Some((tag, pair)) = category.style_for(severity) else {
            let message = format!(
                "{}: invalid logging level or category '{}' doesn't support any logging level",
                site.module(),
                category.name()
            );
            return throw_at(&message, site);
        };

        let mut output = self.lock();
        let out = &mut *output;

        // Reset even after a failed write; the first error wins.
        let written = self.write_line(out, category, tag, pair, message);
        let reset = self
            .set_colors(out, ColorAttributes::NEUTRAL)
            .and_then(|()| out.flush());
        written?;
        reset?;
        Ok(())
    }

    fn write_line(
        &self,
        out: &mut W,
        category: &Category<'_, true>,
        tag: &str,
        pair: ColorPair,
        message: &FormattedMessage,
    ) -> io::Result<()> {
        if category.write_timestamp() {
            write!(out, "{} ", self.clock.timestamp())?;
        }
        write!(out, "{}: ", category.name())?;

        self.set_colors(out, pair.category)?;
        out.write_all(tag.as_bytes())?;
        self.set_colors(out, pair.message)?;

        out.write_all(b": ")?;
        match message {
            FormattedMessage::Narrow(text) => out.write_all(text.as_bytes())?,
            FormattedMessage::Wide(text) => out.write_all(text.to_narrow_lossy().as_bytes())?,
        }
        out.write_all(b"\n")
    }

    /// Runs `f` with exclusive access to the writer.
    ///
    /// Lets other output share the console's lock so it cannot land in the
    /// middle of a log line.
    pub fn with_output<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut output = self.lock();
        f(&mut output)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        // A panic while holding the lock cannot leave a half-written value
        // behind that later lines depend on.
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_colors(&self, out: &mut W, attrs: ColorAttributes) -> io::Result<()> {
        if self.color {
            apply_attributes(out, attrs)?;
        }
        Ok(())
    }
}
