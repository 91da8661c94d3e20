use crate::declare_category;
use conlog_category::CategoryColors;

declare_category! {
    /// The default category behind [`log_info!`](crate::log_info),
    /// [`log_warning!`](crate::log_warning) and [`log_error!`](crate::log_error).
    ///
    /// Accepts every severity, writes timestamps, and is only active in debug
    /// builds.
    pub static CORE {
        name: "Core",
        severities: All,
        enabled: true,
        debug_only: true,
        timestamp: true,
        colors: CategoryColors::DEFAULT,
    }
}
