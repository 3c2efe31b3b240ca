//! Synthesized class members.
//!
//! These are output-only values: builders construct them and hand them to
//! whatever assembles the final class. Bodies are stored as source lines
//! without indentation.

use std::fmt;

use beansmith_core::JavaType;
use serde::Serialize;

/// Access modifier of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub ty: JavaType,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: JavaType, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

/// Backing field of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMember {
    pub visibility: Visibility,
    pub ty: JavaType,
    pub name: String,
    pub javadoc: Vec<String>,
}

/// Read accessor of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetterMember {
    pub visibility: Visibility,
    pub return_type: JavaType,
    pub name: String,
    pub body: Vec<String>,
    pub javadoc: Vec<String>,
}

/// How a setter stores its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignPolicy {
    /// Store the argument as given.
    Verbatim,
    /// Store `null` as `null`, anything else trimmed.
    NullSafeTrim,
}

impl AssignPolicy {
    /// The value a generated setter would store for `value`.
    ///
    /// Trimming follows `String.trim()`: it strips characters up to and
    /// including U+0020 from both ends.
    pub fn apply(&self, value: Option<&str>) -> Option<String> {
        match self {
            Self::Verbatim => value.map(str::to_string),
            Self::NullSafeTrim => value.map(|v| v.trim_matches(|c: char| c <= ' ').to_string()),
        }
    }
}

/// Write accessor of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetterMember {
    pub visibility: Visibility,
    pub name: String,
    pub parameter: Parameter,
    pub policy: AssignPolicy,
    pub body: Vec<String>,
    pub javadoc: Vec<String>,
}

/// `toString` override listing every field of the class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToStringMember {
    pub visibility: Visibility,
    pub return_type: JavaType,
    pub name: String,
    pub annotations: Vec<String>,
    /// `String.format` pattern, e.g. `Person [name=%s,age=%s]`.
    pub template: String,
    /// Field names substituted into `template`, in declaration order.
    pub arguments: Vec<String>,
    pub body: Vec<String>,
    pub javadoc: Vec<String>,
}

impl ToStringMember {
    /// Substitute `values` into the template positionally, the way the
    /// generated method does at runtime.
    ///
    /// Placeholders without a matching value are left as `%s`.
    pub fn render_with(&self, values: &[&dyn fmt::Display]) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut values = values.iter();
        let mut rest = self.template.as_str();

        while let Some(pos) = rest.find("%s") {
            out.push_str(&rest[..pos]);
            match values.next() {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push_str("%s"),
            }
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        out
    }
}

/// Any synthesized member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CodeMember {
    Field(FieldMember),
    Getter(GetterMember),
    Setter(SetterMember),
    ToString(ToStringMember),
}

impl CodeMember {
    pub fn name(&self) -> &str {
        match self {
            Self::Field(m) => &m.name,
            Self::Getter(m) => &m.name,
            Self::Setter(m) => &m.name,
            Self::ToString(m) => &m.name,
        }
    }
}

impl From<FieldMember> for CodeMember {
    fn from(member: FieldMember) -> Self {
        Self::Field(member)
    }
}

impl From<GetterMember> for CodeMember {
    fn from(member: GetterMember) -> Self {
        Self::Getter(member)
    }
}

impl From<SetterMember> for CodeMember {
    fn from(member: SetterMember) -> Self {
        Self::Setter(member)
    }
}

impl From<ToStringMember> for CodeMember {
    fn from(member: ToStringMember) -> Self {
        Self::ToString(member)
    }
}
