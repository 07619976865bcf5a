//! Status macros on top of `tracing`.
//!
//! Every line the CLI shows goes through the subscriber, so these only pick a
//! level and a target. The formatter decides how each target is rendered.

#[doc(hidden)]
pub use tracing as __tracing;

/// Target used by [`success!`]; the terminal formatter renders it differently from plain info.
pub const SUCCESS_TARGET: &str = "tcptune::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: "tcptune", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: "tcptune::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!(target: "tcptune", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!(target: "tcptune", $($arg)*)
    };
}
