//! Named logging categories and the activation rule for declared ones.

use crate::color::{CategoryColors, ColorPair};
use crate::severity::Severity;

/// `true` when the crate is built with the `off` feature, which compiles every
/// declared category out.
pub const COMPILED_OUT: bool = cfg!(feature = "off");

/// Decides whether a declared category is active.
///
/// A category is active when it is enabled, it is not restricted to debug
/// builds (or this is a debug build), and logging has not been compiled out.
/// Evaluated in const context to pick the category's type.
pub const fn category_active(enabled: bool, debug_only: bool, debug_build: bool) -> bool {
    !COMPILED_OUT && enabled && (!debug_only || debug_build)
}

/// An immutable, named logging channel.
///
/// `ENABLED` selects between two distinct types. Only `Category<'_, true>`
/// can reach the console writer; logging through a `Category<'_, false>` has
/// an empty body and never evaluates its message.
///
/// The name is borrowed and must outlive every call that logs through the
/// category.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Category<'n, const ENABLED: bool> {
    name: &'n str,
    accepted: Severity,
    write_timestamp: bool,
    colors: CategoryColors,
}

impl<'n, const ENABLED: bool> Category<'n, ENABLED> {
    /// Creates a category.
    pub const fn new(
        name: &'n str,
        accepted: Severity,
        write_timestamp: bool,
        colors: CategoryColors,
    ) -> Self {
        Self {
            name,
            accepted,
            write_timestamp,
            colors,
        }
    }

    /// The display label written before every line.
    pub const fn name(&self) -> &'n str {
        self.name
    }

    /// The severities this category will ever emit.
    pub const fn accepted(&self) -> Severity {
        self.accepted
    }

    /// Whether this category produces output at all.
    pub const fn is_enabled(&self) -> bool {
        ENABLED
    }

    /// Whether lines are prefixed with the local wall-clock time.
    pub const fn write_timestamp(&self) -> bool {
        self.write_timestamp
    }

    /// The color scheme of this category.
    pub const fn colors(&self) -> &CategoryColors {
        &self.colors
    }

    /// Returns `true` if this category accepts lines at `severity`.
    ///
    /// A category accepting [`Severity::All`] accepts everything; otherwise the
    /// accepted set and the requested severity must share a bit.
    pub const fn can_accept(&self, severity: Severity) -> bool {
        if matches!(self.accepted, Severity::All) {
            return true;
        }
        self.accepted.bits() & severity.bits() != 0
    }

    /// Resolves the tag and colors for a line at `severity`.
    ///
    /// Returns `None` when `severity` is not a concrete level this category
    /// accepts.
    pub fn style_for(&self, severity: Severity) -> Option<(&'static str, ColorPair)> {
        let pair = match severity {
            Severity::Info => self.colors.info,
            Severity::Warning => self.colors.warning,
            Severity::Error => self.colors.error,
            Severity::All => return None,
        };
        if !self.can_accept(severity) {
            return None;
        }
        severity.tag().map(|tag| (tag, pair))
    }
}
