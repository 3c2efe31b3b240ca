//! JavaBeans member synthesis for beansmith.
//!
//! Turns a [`PropertyDescriptor`] and a set of [`GenerationFlags`] into
//! the field, getter, setter and `toString` members of a generated model
//! class.
//!
//! # Module Organization
//!
//! - [`member`] - Output value types ([`CodeMember`] and its variants)
//! - [`synth`] - Member builders and the [`MemberSynthesizer`]
//! - [`comments`] - The [`CommentGenerator`] seam for Javadoc on members
//! - [`bean`] - Whole-class assembly ([`BeanClass`])
//! - [`builder`] - Java source rendering building blocks

pub mod bean;
pub mod builder;
pub mod comments;
pub mod member;
mod render;
pub mod synth;

pub use bean::BeanClass;
pub use beansmith_config::GenerationFlags;
pub use beansmith_core::{ColumnSource, JavaType, PropertyDescriptor};
pub use comments::{ColumnComments, CommentGenerator, NoComments};
pub use member::{
    AssignPolicy, CodeMember, FieldMember, GetterMember, Parameter, SetterMember, ToStringMember,
    Visibility,
};
pub use synth::{MemberSynthesizer, build_field, build_getter, build_setter, build_to_string};
