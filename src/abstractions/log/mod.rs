/*!

# Overview

The `log` module provides logging with a numeric verbosity threshold on top of the usual log levels. The log level
describes what _kind_ of message is logged, and the numeric threshold describes how _verbose_ the message is.

```
use fastsum::log::*;

// Any message logged with a greater threshold than 1 will not be emitted.
set_global_logging_threshold(1);

critical!(3, "A critical error occurred!"); // Not emitted
info!(1, "Processing started.");            // Emitted
trace!("Always emitted.");                  // Emitted, threshold 0
```

## Threshold

Higher thresholds mean more verbose messages. A message is emitted only if its threshold is _at most_ the global
threshold, which defaults to 1. A message logged without a threshold is logged at 0 and is always emitted.

The global threshold can also be taken from the `FASTSUM_LOG_THRESHOLD` environment variable by calling
[`configure_from_env`].

## Output

All log output goes to standard error, never standard output, so logging cannot interfere with a program's regular
output. Messages are prefixed with the (color coded) level name. Critical messages additionally carry `[CRITICAL]`.

# Macros

`critical!`, `error!`, `warning!`, `info!`, `debug!`, `trace!`, with syntax

```ignore
level!(threshold, "format string", args...);
level!("format string");             // threshold 0
```

A message that has format arguments must state its threshold explicitly, since a leading string literal would
otherwise be taken for the threshold.

The macros initialize the logger on first use; no explicit initialization is required.

*/
mod formatter;
mod threshold_filter;
mod macros;

use std::sync::{
    atomic::{AtomicU8, Ordering},
    LazyLock
  };

use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::CustomFieldFormatter;
pub use macros::*;

/// Environment variable consulted by [`configure_from_env`].
pub const THRESHOLD_ENV_VAR: &str = "FASTSUM_LOG_THRESHOLD";

const DEFAULT_THRESHOLD: u8 = 1;

/// Used for implicit initialization.
static INIT_LOGGER: LazyLock<()> = LazyLock::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(CustomFieldFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr),
      );

  // If the host application already installed a subscriber, we log through theirs.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// This does not need to be called directly. Initializes the logging system.
pub fn init_logger() {
  LazyLock::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(DEFAULT_THRESHOLD);

/// Sets the global threshold. Takes effect immediately, including for an already initialized logger.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}

/// Parses a threshold as written in the environment: a decimal `u8`, surrounding whitespace allowed.
pub fn parse_threshold(text: &str) -> Option<u8> {
  text.trim().parse::<u8>().ok()
}

/// Sets the global threshold from `FASTSUM_LOG_THRESHOLD` if it is set. An unparsable value is reported and
/// otherwise ignored.
pub fn configure_from_env() {
  let Some(raw) = std::env::var_os(THRESHOLD_ENV_VAR) else {
    return;
  };

  match raw.to_str().and_then(parse_threshold) {
    Some(threshold) => {
      set_global_logging_threshold(threshold);
      debug!(2, "logging threshold set to {} from {}", threshold, THRESHOLD_ENV_VAR);
    }
    None => {
      warning!(
        0,
        "ignoring invalid {}={:?}; keeping threshold {}",
        THRESHOLD_ENV_VAR,
        raw,
        get_global_logging_threshold()
      );
    }
  }
}
