//! The greeting itself.
//!
//! A greeting is two lines: the backing library's version, then the
//! recipient's name followed by [`HELLO`]. [`Greeter`] renders and writes
//! them; [`say_hello`] is the fire-and-forget form that prints to stdout.

use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::library::LibraryInfo;

/// Suffix of every greeting line.
pub const HELLO: &str = "Heeeeeeeeeeeeeeeeeello!";

/// Renders and writes greetings on behalf of a library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greeter {
    library: LibraryInfo,
}

impl Greeter {
    /// Greeter announcing this library's version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Greeter announcing another library's version.
    pub fn with_library(library: LibraryInfo) -> Self {
        Self { library }
    }

    /// The library announced in the version line.
    pub fn library(&self) -> LibraryInfo {
        self.library
    }

    /// First line of the greeting, without a trailing newline.
    pub fn version_line(&self) -> String {
        format!("{} version: {}", self.library.name, self.library.version)
    }

    /// Second line of the greeting, without a trailing newline.
    ///
    /// The name is used verbatim; an empty name leaves the segment blank.
    pub fn greeting_line(name: &str) -> String {
        format!("{}: {}", name, HELLO)
    }

    /// Write both lines to `out`.
    ///
    /// Always returns `Ok(true)` once both lines are written. Write and
    /// flush failures are returned as [`GreetError::Output`](crate::GreetError::Output).
    pub fn write_to<W: Write>(&self, out: &mut W, name: &str) -> Result<bool> {
        debug!(library = %self.library, name, "greeting");
        writeln!(out, "{}", self.version_line())?;
        writeln!(out, "{}", Self::greeting_line(name))?;
        out.flush()?;
        Ok(true)
    }
}

/// Print the library version and greet `name` on stdout.
///
/// Returns `true` on every call that completes.
///
/// # Panics
///
/// Panics if stdout cannot be written, like [`println!`].
pub fn say_hello(name: &str) -> bool {
    let stdout = io::stdout();
    say_hello_to(&mut stdout.lock(), name)
}

fn say_hello_to<W: Write>(out: &mut W, name: &str) -> bool {
    match Greeter::new().write_to(out, name) {
        Ok(ok) => ok,
        Err(e) => panic!("failed printing greeting: {}", e),
    }
}
