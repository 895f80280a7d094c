/*!

The greeting capability. Callers depend on [`Greeter`]; [`Hello`] is the library's own greeter.

*/

use std::io::{self, Write};

/// The line [`Hello`] greets with.
pub const HELLO_MESSAGE: &str = "Hello from the library.";

/// Anything with a parameterless greet operation.
pub trait Greeter {
  fn greet(&self);
}

impl<G: Greeter + ?Sized> Greeter for &G {
  fn greet(&self) {
    (**self).greet()
  }
}

/// Prints [`HELLO_MESSAGE`] to standard output.
#[derive(Copy, Clone, Debug, Default)]
pub struct Hello;

impl Hello {
  /// Writes the greeting line to `out`.
  pub fn greet_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HELLO_MESSAGE)
  }
}

impl Greeter for Hello {
  fn greet(&self) {
    self.greet_to(&mut io::stdout().lock()).expect("failed printing to stdout");
  }
}

/// Greets on standard output.
pub fn hello() {
  Hello.greet()
}
