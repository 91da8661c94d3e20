//! Source locations captured at logging and assertion call sites.

use std::fmt;

/// The location of a logging or assertion call in source code.
///
/// Built by the `call_site!` macro from `module_path!()`, `file!()` and
/// `line!()`. The module path doubles as the site description that prefixes
/// raised diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CallSite {
    module: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Creates a call site from its parts.
    pub const fn new(module: &'static str, file: &'static str, line: u32) -> Self {
        Self { module, file, line }
    }

    /// The module path of the call.
    pub fn module(&self) -> &'static str {
        self.module
    }

    /// The source file of the call.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The line number of the call.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file: {}, line: {}", self.file, self.line)
    }
}
