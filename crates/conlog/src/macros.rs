//! Call-site helpers.
//!
//! Each macro captures `module_path!()`, `file!()` and `line!()` at the
//! invocation and forwards to the functions of this crate.

/// Captures the current module, file and line as a [`CallSite`](crate::CallSite).
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::core::module_path!(), ::core::file!(), ::core::line!())
    };
}

/// Concatenates the arguments into a [`FormattedMessage`](crate::FormattedMessage).
///
/// Evaluates to `Result<FormattedMessage, Fault>`. Every argument must be
/// [`Loggable`](crate::Loggable); a single wide argument makes the message wide.
#[macro_export]
macro_rules! format_message {
    ($($arg:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut builder = $crate::MessageBuilder::new();
        $( builder.append(&$arg); )*
        builder.finish()
    }};
}

/// Logs a line through a category.
///
/// `log!(console, CATEGORY, Level, args...)` where `Level` is `Info`,
/// `Warning` or `Error`. Evaluates to `Result<(), Fault>`. When the category
/// is disabled, the arguments are not evaluated.
#[macro_export]
macro_rules! log {
    ($console:expr, $category:expr, $severity:ident $(, $arg:expr)* $(,)?) => {{
        use $crate::Emit as _;
        ($category).emit(
            &$console,
            $crate::Severity::$severity,
            $crate::call_site!(),
            || $crate::format_message!($($arg),*),
        )
    }};
}

/// Logs an info line through [`CORE`](crate::CORE).
#[macro_export]
macro_rules! log_info {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($console, $crate::CORE, Info $(, $arg)*)
    };
}

/// Logs a warning line through [`CORE`](crate::CORE).
#[macro_export]
macro_rules! log_warning {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($console, $crate::CORE, Warning $(, $arg)*)
    };
}

/// Logs an error line through [`CORE`](crate::CORE).
#[macro_export]
macro_rules! log_error {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($console, $crate::CORE, Error $(, $arg)*)
    };
}

/// Returns early with a [`Fault`](crate::Fault) built from the arguments.
///
/// The payload reads `"<module>: <message>\nfile: <file>, line: <line>"`. The
/// fault is converted with `From`, so the enclosing function may return any
/// error type that can be built from a `Fault`.
#[macro_export]
macro_rules! throw {
    ($($arg:expr),+ $(,)?) => {
        return ::core::result::Result::Err(::core::convert::From::from($crate::raised_at(
            $crate::call_site!(),
            $crate::format_message!(::core::module_path!(), ": ", $($arg),+),
        )))
    };
}

/// Returns early with a [`Fault`](crate::Fault) when a condition is false.
///
/// The message arguments are only formatted when the check fails. Without a
/// message, the stringified condition is used.
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $crate::ensure!($cond, ::core::concat!("assertion failed: ", ::core::stringify!($cond)))
    };
    ($cond:expr, $($arg:expr),+ $(,)?) => {
        if !$cond {
            $crate::throw!($($arg),+);
        }
    };
}

/// Declares a category as a `static`.
///
/// ```
/// conlog::declare_category! {
///     pub static DISK {
///         name: "Disk",
///         severities: Warning,
///         enabled: true,
///         debug_only: false,
///         timestamp: true,
///         colors: conlog::CategoryColors::DEFAULT,
///     }
/// }
/// assert!(DISK.is_enabled());
/// ```
///
/// The category's type records whether it is active: enabled, not
/// `debug_only` outside debug builds, and not compiled out by the `off`
/// feature.
#[macro_export]
macro_rules! declare_category {
    (
        $(#[$meta:meta])*
        $vis:vis static $ident:ident {
            name: $name:expr,
            severities: $severities:ident,
            enabled: $enabled:expr,
            debug_only: $debug_only:expr,
            timestamp: $timestamp:expr,
            colors: $colors:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis static $ident: $crate::Category<
            'static,
            { $crate::category_active($enabled, $debug_only, ::core::cfg!(debug_assertions)) },
        > = $crate::Category::new($name, $crate::Severity::$severities, $timestamp, $colors);
    };
}
