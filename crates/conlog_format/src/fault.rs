//! Raising diagnostics as errors.
//!
//! Every helper returns `Err` instead of unwinding. The error kind is chosen
//! by the caller through [`FromDiagnostic`] and defaults to [`Fault`] at the
//! call-site macros.

use conlog_common::{CallSite, FromDiagnostic};

/// Appends the call site to a message: `"<message>\nfile: <file>, line: <line>"`.
pub fn diagnostic_at(message: &str, site: CallSite) -> String {
    format!("{message}\n{site}")
}

/// Raises `message` tagged with the file and line of `site`.
pub fn throw_at<T, E: FromDiagnostic>(message: &str, site: CallSite) -> Result<T, E> {
    Err(E::from_diagnostic(diagnostic_at(message, site)))
}

/// Raises `message` as-is.
pub fn throw<T, E: FromDiagnostic>(message: &str) -> Result<T, E> {
    Err(E::from_diagnostic(message.to_string()))
}

/// Raises a pre-built error value unchanged.
pub fn throw_error<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// Raises `message` at `site` when `condition` is false.
pub fn assert_at<E: FromDiagnostic>(condition: bool, message: &str, site: CallSite) -> Result<(), E> {
    if condition {
        Ok(())
    } else {
        throw_at(message, site)
    }
}

/// Raises the error built by `error` when `condition` is false.
pub fn assert_or<E, F>(condition: bool, error: F) -> Result<(), E>
where
    F: FnOnce() -> E,
{
    if condition {
        Ok(())
    } else {
        Err(error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conlog_common::Fault;
    use std::io;

    fn site() -> CallSite {
        CallSite::new("app::net", "src/net.rs", 17)
    }

    #[test]
    fn throw_at_appends_location() {
        let err: Fault = throw_at::<(), _>("socket closed", site()).unwrap_err();
        assert_eq!(
            err.diagnostic(),
            Some("socket closed\nfile: src/net.rs, line: 17")
        );
    }

    #[test]
    fn throw_keeps_message() {
        let err: Fault = throw::<u8, _>("plain").unwrap_err();
        assert_eq!(format!("{err}"), "plain");
    }

    #[test]
    fn throw_error_passes_value_through() {
        let err = throw_error::<(), _>(io::Error::new(io::ErrorKind::NotFound, "gone")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn assert_true_is_silent() {
        let result: Result<(), Fault> = assert_at(true, "never", site());
        assert!(result.is_ok());
    }

    #[test]
    fn assert_false_raises_message() {
        let err: Fault = assert_at(false, "x", site()).unwrap_err();
        assert!(format!("{err}").contains('x'));
        assert!(format!("{err}").contains("line: 17"));
    }

    #[test]
    fn assert_selects_error_kind() {
        let err: io::Error = assert_at(false, "bad state", site()).unwrap_err();
        assert!(err.to_string().starts_with("bad state"));

        let err: String = assert_at(1 > 2, "math", site()).unwrap_err();
        assert_eq!(err, "math\nfile: src/net.rs, line: 17");
    }

    #[test]
    fn assert_or_builds_error_lazily() {
        let mut built = false;
        let ok: Result<(), &str> = assert_or(true, || {
            built = true;
            "unused"
        });
        assert!(ok.is_ok());
        assert!(!built);

        let err = assert_or(false, || "custom").unwrap_err();
        assert_eq!(err, "custom");
    }
}
