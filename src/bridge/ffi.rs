//! Declarations for the C kernel in `csrc/fast_sum.c`, which `build.rs` compiles and links.

extern "C" {
  /// Sums `n` contiguous values starting at `values`, wrapping on overflow.
  ///
  /// `values` must be non-null and valid for reads of `n >= 1` elements.
  pub(super) fn fast_sum(values: *const i64, n: i64) -> i64;
}
