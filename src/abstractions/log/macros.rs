//! Macros for generating log messages.

/// Shared expansion of the level macros. Not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_event {
    ($level:ident, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::tracing::event!(
                $crate::tracing::Level::$level,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! critical {
    ($threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::tracing::event!(
                $crate::tracing::Level::ERROR,
                critical = true,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
    ($($arg:tt)+) => {
        $crate::critical!(0, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(ERROR, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(ERROR, 0, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(WARN, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(WARN, 0, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(INFO, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(INFO, 0, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(DEBUG, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(DEBUG, 0, $($arg)+) };
}

#[macro_export]
macro_rules! trace {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(TRACE, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(TRACE, 0, $($arg)+) };
}


// The following makes the macros importable directly from the `log` module.
pub use {critical, error, warning, info, debug, trace};
