//! Import collection for generated classes.

use beansmith_core::JavaType;
use indexmap::{IndexMap, IndexSet};

/// Tracks single-type imports for one class and decides how each type is
/// written in its body.
///
/// Maintains insertion order for deterministic output. A simple name binds to
/// the first type that claims it; later types with the same simple name are
/// not imported and keep their package when written.
///
/// # Example
///
/// ```
/// use beansmith_codegen::{JavaType, builder::ImportCollector};
///
/// let mut imports = ImportCollector::for_class(&JavaType::new("com.example.Event"));
/// imports.add_type(&JavaType::new("java.util.Date"));
/// imports.add_type(&JavaType::new("java.lang.String"));
/// imports.add_type(&JavaType::new("java.sql.Date"));
///
/// let lines: Vec<String> = imports.iter().map(|i| format!("import {};", i)).collect();
/// assert_eq!(lines, ["import java.util.Date;"]);
/// assert_eq!(imports.type_name(&JavaType::new("java.sql.Date")), "java.sql.Date");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    package: Option<String>,
    /// Simple name to the fully qualified name it resolves to.
    names: IndexMap<String, String>,
    imports: IndexSet<String>,
}

impl ImportCollector {
    /// Create a collector for the body of `class`.
    ///
    /// Types in the class's package resolve without an import, and the
    /// class's own simple name is taken.
    pub fn for_class(class: &JavaType) -> Self {
        let mut collector = Self {
            package: class.package().map(str::to_string),
            ..Self::default()
        };
        collector.names.insert(
            class.short_name(),
            class.fully_qualified_name().to_string(),
        );
        collector
    }

    /// Add a fully qualified import. Returns `false` when its simple name is
    /// already bound to a different type, in which case nothing is imported.
    pub fn add(&mut self, fully_qualified_name: &str) -> bool {
        let simple = simple_name(fully_qualified_name);
        if let Some(bound) = self.names.get(simple) {
            return bound == fully_qualified_name;
        }

        self.names
            .insert(simple.to_string(), fully_qualified_name.to_string());
        if package(fully_qualified_name) != self.package.as_deref() {
            self.imports.insert(fully_qualified_name.to_string());
        }
        true
    }

    /// Add every import a type needs, including its generic arguments.
    pub fn add_type(&mut self, ty: &JavaType) {
        for import in ty.imports() {
            self.add(&import);
        }
    }

    /// Whether `fully_qualified_name` can be written by its simple name.
    pub fn resolves(&self, fully_qualified_name: &str) -> bool {
        match self.names.get(simple_name(fully_qualified_name)) {
            Some(bound) => bound == fully_qualified_name,
            None => !JavaType::new(fully_qualified_name).needs_import(),
        }
    }

    /// How `ty` is written in the class body.
    pub fn type_name(&self, ty: &JavaType) -> String {
        ty.source_name(&|base| self.resolves(base))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

fn simple_name(fully_qualified_name: &str) -> &str {
    fully_qualified_name
        .rsplit_once('.')
        .map_or(fully_qualified_name, |(_, simple)| simple)
}

fn package(fully_qualified_name: &str) -> Option<&str> {
    fully_qualified_name
        .rsplit_once('.')
        .map(|(package, _)| package)
}
