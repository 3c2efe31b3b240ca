//! Generation flags for beansmith, loaded from `beansmith.toml`.
//!
//! ```toml
//! [model]
//! trim_strings = true
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod flags;
mod parse;

pub use error::{Error, Result};
pub use flags::GenerationFlags;
pub use parse::{DEFAULT_FILENAME, parse_str_with_filename};
