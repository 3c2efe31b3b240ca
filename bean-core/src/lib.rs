//! Core naming rules and types for beansmith.
//!
//! This crate provides the identifier normalizer used to turn database
//! column names into JavaBeans property and accessor names, along with
//! the [`JavaType`] descriptor the rest of the workspace builds on.

mod naming;
mod types;

// Naming rules
pub use naming::{
    getter_name, normalize_property_name, setter_name, to_camel_case, valid_property_name,
};
// Type descriptors
pub use types::{ColumnSource, JavaType, PropertyDescriptor};
