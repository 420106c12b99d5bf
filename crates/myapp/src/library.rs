//! Metadata about the library whose version is announced before a greeting

use std::fmt;

/// Display name of this library.
pub const NAME: &str = "myapp";

/// Version of this library, taken from Cargo at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name and version of a library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryInfo {
    /// Display name, used as the prefix of the version line
    pub name: &'static str,

    /// Version string, printed as-is
    pub version: &'static str,
}

impl LibraryInfo {
    /// Describe an arbitrary library.
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }

    /// Describe this library.
    pub const fn current() -> Self {
        Self::new(NAME, VERSION)
    }
}

impl Default for LibraryInfo {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for LibraryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
