//! # myapp
//!
//! Announces the version of a backing library, then greets someone with
//! considerably more `e`s than strictly necessary.
//!
//! ```
//! assert!(myapp::say_hello("World"));
//! ```
//!
//! [`Greeter`] is the same behavior with a configurable library and any
//! [`std::io::Write`] sink, for callers that want to capture the output or
//! handle write failures.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod greeting;
pub mod library;

// Re-export main types
pub use error::{GreetError, Result};
pub use greeting::{say_hello, Greeter, HELLO};
pub use library::{LibraryInfo, NAME, VERSION};
