/*!

The summation bridge: sums a slice of `i64` by handing it, without copying, to a natively compiled kernel.

The kernel is abstracted by [`SumKernel`]. [`SumBridge`] owns the one guard the boundary needs: an empty slice is
answered with `0` directly, so a kernel is never handed a pointer into an empty slice. Overflow wraps.

```
use fastsum::super_fast_sum;

assert_eq!(super_fast_sum(&[1, 2]), 3);
assert_eq!(super_fast_sum(&[]), 0);
```

*/

mod ffi;

use crate::log::trace;

/// Computes the wrapping sum of a contiguous, read-only, non-empty view of `i64`s.
pub trait SumKernel {
  /// `values` is never empty when called through a [`SumBridge`].
  fn sum(&self, values: &[i64]) -> i64;
}

/// The C kernel `fast_sum`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NativeKernel;

impl SumKernel for NativeKernel {
  fn sum(&self, values: &[i64]) -> i64 {
    debug_assert!(!values.is_empty());
    // A slice never holds more than `isize::MAX` bytes, so its length always fits in an `i64`.
    let count = values.len() as i64;

    // SAFETY: `values` is a live, non-empty slice borrowed for the duration of the call, so its pointer is non-null
    // and valid for `count` reads. The kernel does not write through it or retain it.
    unsafe { ffi::fast_sum(values.as_ptr(), count) }
  }
}

impl<K: SumKernel + ?Sized> SumKernel for &K {
  fn sum(&self, values: &[i64]) -> i64 {
    (**self).sum(values)
  }
}

/// Guards a [`SumKernel`] against empty input.
#[derive(Copy, Clone, Debug, Default)]
pub struct SumBridge<K: SumKernel> {
  kernel: K,
}

impl SumBridge<NativeKernel> {
  pub fn native() -> Self {
    SumBridge::new(NativeKernel)
  }
}

impl<K: SumKernel> SumBridge<K> {
  pub fn new(kernel: K) -> Self {
    SumBridge { kernel }
  }

  pub fn kernel(&self) -> &K {
    &self.kernel
  }

  /// Sums `values`, wrapping on overflow. The kernel is not consulted for an empty slice.
  pub fn sum(&self, values: &[i64]) -> i64 {
    if values.is_empty() {
      trace!(3, "empty input, skipping the kernel");
      return 0;
    }

    trace!(3, "summing {} values in the kernel", values.len());
    let result = self.kernel.sum(values);
    trace!(3, "kernel returned {}", result);

    result
  }
}

/// Sums `values` in the native C kernel.
pub fn super_fast_sum(values: &[i64]) -> i64 {
  SumBridge::native().sum(values)
}
