//! Compiles the native summation kernel and links it into the library.

fn main() {
  println!("cargo:rerun-if-changed=csrc/fast_sum.c");
  println!("cargo:rerun-if-changed=csrc/fast_sum.h");

  cc::Build::new()
      .file("csrc/fast_sum.c")
      .include("csrc")
      .warnings(true)
      .compile("fast_sum");
}
