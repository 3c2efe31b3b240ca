//! Type descriptors shared between naming and member synthesis.

use std::fmt;

use serde::Serialize;

use crate::{to_camel_case, valid_property_name};

const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
];

const WILDCARD_BOUNDS: [&str; 2] = ["? extends ", "? super "];

/// A resolved Java type, identified by its fully qualified name.
///
/// Generic arguments are part of the name
/// (e.g. `java.util.List<java.lang.String>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JavaType {
    fully_qualified_name: String,
}

impl JavaType {
    pub fn new(fully_qualified_name: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
        }
    }

    /// `java.lang.String`
    pub fn string() -> Self {
        Self::new("java.lang.String")
    }

    /// The `boolean` primitive.
    pub fn boolean_primitive() -> Self {
        Self::new("boolean")
    }

    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    /// Whether accessors for this type use the `is` prefix.
    pub fn is_boolean_primitive(&self) -> bool {
        self.fully_qualified_name == "boolean"
    }

    pub fn is_string(&self) -> bool {
        self.fully_qualified_name == "java.lang.String"
    }

    pub fn is_primitive(&self) -> bool {
        PRIMITIVES.contains(&self.fully_qualified_name.as_str())
    }

    /// Package of the base type, if it has one (`java.util` for `java.util.Date`).
    pub fn package(&self) -> Option<&str> {
        let base = base_name(&self.fully_qualified_name);
        base.rfind('.').map(|i| &base[..i])
    }

    /// Whether the base type needs an import statement. Primitives, types
    /// without a package and `java.lang` types do not.
    pub fn needs_import(&self) -> bool {
        needs_import(base_name(&self.fully_qualified_name))
    }

    /// Type name as written inside a class body, with packages stripped from
    /// the base type and every generic argument.
    pub fn short_name(&self) -> String {
        shorten(&self.fully_qualified_name, &|_| true)
    }

    /// Type name as written inside a class body, where `is_visible` decides
    /// per base type (outer type and each generic argument) whether its simple
    /// name resolves. Types that do not resolve keep their package.
    pub fn source_name(&self, is_visible: &dyn Fn(&str) -> bool) -> String {
        shorten(&self.fully_qualified_name, is_visible)
    }

    /// Fully qualified names this type needs imported, base type first and
    /// then generic arguments in order. `java.lang` and primitives are skipped.
    pub fn imports(&self) -> Vec<String> {
        let mut imports = Vec::new();
        collect_imports(&self.fully_qualified_name, &mut imports);
        imports
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name)
    }
}

/// Where a property came from, for comment generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSource {
    pub table: String,
    pub column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl ColumnSource {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            remarks: None,
        }
    }

    /// Set the column remarks.
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }
}

/// A single property of a generated class, backed by one table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Canonical property name.
    pub name: String,
    /// Resolved Java type.
    pub ty: JavaType,
    /// Whether the column holds character data (drives setter trimming).
    pub string_column: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ColumnSource>,
}

impl PropertyDescriptor {
    /// Create a descriptor for an already-canonical property name.
    ///
    /// The property counts as a string column when its type is
    /// `java.lang.String`; use [`PropertyDescriptor::string_column`] to
    /// override.
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        let string_column = ty.is_string();
        Self {
            name: name.into(),
            ty,
            string_column,
            source: None,
        }
    }

    /// Create a descriptor from a raw column name (e.g., "FIRST_NAME" -> "firstName").
    pub fn from_column(column: &str, ty: JavaType) -> Self {
        let name = valid_property_name(&to_camel_case(column, false));
        Self::new(name, ty)
    }

    /// Override whether the property is treated as a string column.
    pub fn string_column(mut self, string_column: bool) -> Self {
        self.string_column = string_column;
        self
    }

    /// Attach the column this property was introspected from.
    pub fn source(mut self, source: ColumnSource) -> Self {
        self.source = Some(source);
        self
    }
}

/// Strip generic arguments and array brackets.
fn base_name(name: &str) -> &str {
    let name = name.trim();
    let name = match name.find('<') {
        Some(open) => &name[..open],
        None => name,
    };
    name.trim_end_matches("[]")
}

fn simple_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => &name[dot + 1..],
        None => name,
    }
}

fn needs_import(base: &str) -> bool {
    base.rfind('.').is_some_and(|dot| &base[..dot] != "java.lang")
}

fn shorten(name: &str, is_visible: &dyn Fn(&str) -> bool) -> String {
    let name = name.trim();
    for bound in WILDCARD_BOUNDS {
        if let Some(rest) = name.strip_prefix(bound) {
            return format!("{}{}", bound, shorten(rest, is_visible));
        }
    }
    let written = |base: &str| {
        if is_visible(base) {
            simple_name(base).to_string()
        } else {
            base.to_string()
        }
    };

    let element = name.trim_end_matches("[]");
    let dims = &name[element.len()..];

    match element.find('<') {
        Some(open) if element.ends_with('>') => {
            let args = split_type_args(&element[open + 1..element.len() - 1])
                .into_iter()
                .map(|arg| shorten(arg, is_visible))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}<{}>{}", written(&element[..open]), args, dims)
        }
        _ => format!("{}{}", written(element), dims),
    }
}

/// Split a generic argument list on top-level commas.
fn split_type_args(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in args.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = args[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}

fn collect_imports(name: &str, imports: &mut Vec<String>) {
    let mut name = name.trim();
    for bound in WILDCARD_BOUNDS {
        if let Some(rest) = name.strip_prefix(bound) {
            name = rest;
        }
    }

    let base = base_name(name);
    if needs_import(base) && !imports.iter().any(|i| i == base) {
        imports.push(base.to_string());
    }

    let element = name.trim_end_matches("[]");
    if let Some(open) = element.find('<')
        && element.ends_with('>')
    {
        for arg in split_type_args(&element[open + 1..element.len() - 1]) {
            collect_imports(arg, imports);
        }
    }
}
