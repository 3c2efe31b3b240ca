//! Java source rendering building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`ImportCollector`] - Deduplicated single-type imports

mod code_builder;
mod imports;
mod renderable;

pub use code_builder::CodeBuilder;
pub use imports::ImportCollector;
pub use renderable::{CodeFragment, Renderable};
