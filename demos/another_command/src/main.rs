use std::io::{self, Write};

use fastsum::{
  log::{configure_from_env, debug},
  super_fast_sum,
  Greeter,
  Hello
};

/// Prints the two fixed lines, then hands over to `greeter`.
fn run<W: Write, G: Greeter>(out: &mut W, greeter: &G) -> io::Result<()> {
  writeln!(out, "Yes, i am the other binary.")?;
  writeln!(out, "Also, the super fast sum of 1 + 2 is {}", super_fast_sum(&[1, 2]))?;
  // The greeter writes on its own handle.
  out.flush()?;

  debug!(2, "calling the library greeter");
  greeter.greet();

  Ok(())
}

fn main() -> io::Result<()> {
  configure_from_env();

  let stdout = io::stdout();
  run(&mut stdout.lock(), &Hello)
}


#[cfg(test)]
mod tests {
  use std::cell::{Cell, RefCell};

  use super::*;

  /// Records how many lines had been written when it was asked to greet.
  struct SpyGreeter<'a> {
    out        : &'a RefCell<Vec<u8>>,
    calls      : Cell<u32>,
    lines_seen : Cell<usize>,
  }

  impl Greeter for SpyGreeter<'_> {
    fn greet(&self) {
      self.calls.set(self.calls.get() + 1);
      self.lines_seen.set(self.out.borrow().iter().filter(|b| **b == b'\n').count());
    }
  }

  /// A writer that appends into a shared buffer so the spy can inspect it.
  struct Shared<'a>(&'a RefCell<Vec<u8>>);

  impl Write for Shared<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.borrow_mut().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn prints_both_lines_then_greets_once() {
    let buffer  = RefCell::new(Vec::new());
    let greeter = SpyGreeter { out: &buffer, calls: Cell::new(0), lines_seen: Cell::new(0) };

    run(&mut Shared(&buffer), &greeter).unwrap();

    assert_eq!(greeter.calls.get(), 1);
    assert_eq!(greeter.lines_seen.get(), 2);
    assert_eq!(
      std::str::from_utf8(buffer.borrow().as_slice()).unwrap(),
      "Yes, i am the other binary.\nAlso, the super fast sum of 1 + 2 is 3\n"
    );
  }

  #[test]
  fn write_errors_propagate() {
    struct Broken;
    impl Write for Broken {
      fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
      }
      fn flush(&mut self) -> io::Result<()> {
        Ok(())
      }
    }

    let greeted = Cell::new(false);
    struct Flag<'a>(&'a Cell<bool>);
    impl Greeter for Flag<'_> {
      fn greet(&self) {
        self.0.set(true);
      }
    }

    let error = run(&mut Broken, &Flag(&greeted)).unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    assert!(!greeted.get());
  }
}
