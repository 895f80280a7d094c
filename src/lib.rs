/*!

Sums integers by crossing into a natively compiled C kernel, and provides the greeting capability used by the
`another-command` demo.

*/

pub mod abstractions;
pub mod bridge;
pub mod greet;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::log;
pub use bridge::{super_fast_sum, NativeKernel, SumBridge, SumKernel};
pub use greet::{hello, Greeter, Hello};

// The logging macros expand to `$crate::tracing::...` so that dependents do not need `tracing` themselves.
#[doc(hidden)]
pub use tracing;
