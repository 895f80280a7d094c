use std::fmt::Debug;
use tracing::{
  field::{Field, Visit},
  Event,
  Subscriber
};
use tracing_subscriber::{
  Layer,
  layer::Context,
  registry::LookupSpan
};

use super::get_global_logging_threshold;

/// A "layer" that only lets through events whose `threshold` field is at or below the global logging threshold.
pub(crate) struct ThresholdFilterLayer;

impl<S> Layer<S> for ThresholdFilterLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
  fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
    let mut visitor = ThresholdVisitor { threshold: None };
    event.record(&mut visitor);

    // Events from outside our macros carry no threshold and are treated as threshold 0.
    visitor.threshold.unwrap_or(0) <= get_global_logging_threshold()
  }
}

/// Pulls the `threshold` field out of an event.
struct ThresholdVisitor {
  threshold: Option<u8>,
}

impl ThresholdVisitor {
  fn set(&mut self, value: i128) {
    match u8::try_from(value) {
      Ok(threshold) => self.threshold = Some(threshold),
      // Out of range thresholds are a programming error at the call site.
      Err(_) => panic!("Invalid threshold value supplied to the logger: {}", value),
    }
  }
}

impl Visit for ThresholdVisitor {
  fn record_i64(&mut self, field: &Field, value: i64) {
    if field.name() == "threshold" {
      self.set(value as i128);
    }
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == "threshold" {
      self.set(value as i128);
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
    if field.name() == "threshold" {
      panic!("Invalid threshold value supplied to the logger: {:?}", value);
    }
  }
}
