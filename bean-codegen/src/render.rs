//! Java rendering of synthesized members.

use beansmith_core::JavaType;

use crate::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    member::{CodeMember, FieldMember, GetterMember, SetterMember, ToStringMember},
};

fn doc_fragments(javadoc: &[String]) -> Vec<CodeFragment> {
    if javadoc.is_empty() {
        Vec::new()
    } else {
        vec![CodeFragment::Javadoc(javadoc.to_vec())]
    }
}

fn method_fragments(
    javadoc: &[String],
    annotations: &[String],
    signature: String,
    body: &[String],
) -> Vec<CodeFragment> {
    let mut fragments = doc_fragments(javadoc);
    fragments.extend(annotations.iter().map(CodeFragment::line));
    fragments.push(CodeFragment::block(
        format!("{} {{", signature),
        body.iter().map(CodeFragment::line).collect(),
        Some("}".to_string()),
    ));
    fragments
}

/// How a member writes a type name in source.
pub(crate) type TypeName<'a> = &'a dyn Fn(&JavaType) -> String;

fn field_fragments(field: &FieldMember, type_name: TypeName<'_>) -> Vec<CodeFragment> {
    let mut fragments = doc_fragments(&field.javadoc);
    fragments.push(CodeFragment::line(format!(
        "{} {} {};",
        field.visibility.keyword(),
        type_name(&field.ty),
        field.name
    )));
    fragments
}

fn getter_fragments(getter: &GetterMember, type_name: TypeName<'_>) -> Vec<CodeFragment> {
    let signature = format!(
        "{} {} {}()",
        getter.visibility.keyword(),
        type_name(&getter.return_type),
        getter.name
    );
    method_fragments(&getter.javadoc, &[], signature, &getter.body)
}

fn setter_fragments(setter: &SetterMember, type_name: TypeName<'_>) -> Vec<CodeFragment> {
    let signature = format!(
        "{} void {}({} {})",
        setter.visibility.keyword(),
        setter.name,
        type_name(&setter.parameter.ty),
        setter.parameter.name
    );
    method_fragments(&setter.javadoc, &[], signature, &setter.body)
}

fn to_string_fragments(method: &ToStringMember, type_name: TypeName<'_>) -> Vec<CodeFragment> {
    let signature = format!(
        "{} {} {}()",
        method.visibility.keyword(),
        type_name(&method.return_type),
        method.name
    );
    method_fragments(&method.javadoc, &method.annotations, signature, &method.body)
}

impl CodeMember {
    /// Fragments for this member, writing types through `type_name`.
    pub(crate) fn fragments_with(&self, type_name: TypeName<'_>) -> Vec<CodeFragment> {
        match self {
            Self::Field(m) => field_fragments(m, type_name),
            Self::Getter(m) => getter_fragments(m, type_name),
            Self::Setter(m) => setter_fragments(m, type_name),
            Self::ToString(m) => to_string_fragments(m, type_name),
        }
    }

    /// Render this member as Java source at the top indentation level.
    ///
    /// Types are written by their short names, as if every one were imported.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for CodeMember {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments_with(&JavaType::short_name)
    }
}

#[cfg(test)]
mod tests {
    use beansmith_core::PropertyDescriptor;

    use crate::{GenerationFlags, build_field, build_getter, build_setter, build_to_string};

    use super::*;

    #[test]
    fn test_render_field() {
        let field = build_field(&PropertyDescriptor::new("XAxis", JavaType::new("double")));
        assert_eq!(CodeMember::from(field).render(), "private double XAxis;\n");
    }

    #[test]
    fn test_render_field_uses_short_name() {
        let field = build_field(&PropertyDescriptor::new(
            "tags",
            JavaType::new("java.util.List<java.lang.String>"),
        ));
        assert_eq!(
            CodeMember::from(field).render(),
            "private List<String> tags;\n"
        );
    }

    #[test]
    fn test_render_getter() {
        let getter = build_getter(&PropertyDescriptor::new("XAxis", JavaType::new("double")));
        assert_eq!(
            CodeMember::from(getter).render(),
            "public double getXAxis() {\n    return XAxis;\n}\n"
        );
    }

    #[test]
    fn test_render_setter() {
        let prop = PropertyDescriptor::new("name", JavaType::string());
        let setter = build_setter(&prop, &GenerationFlags::new().trim_strings(true));
        assert_eq!(
            CodeMember::from(setter).render(),
            "public void setName(String name) {\n    this.name = name == null ? null : name.trim();\n}\n"
        );
    }

    #[test]
    fn test_render_to_string() {
        let method = build_to_string(&JavaType::new("com.example.Person"), &[]);
        assert_eq!(
            CodeMember::from(method).render(),
            "@Override\npublic String toString() {\n    return \"Person []\";\n}\n"
        );
    }

    #[test]
    fn test_fragments_with_qualified_types() {
        let setter = CodeMember::from(build_setter(
            &PropertyDescriptor::new("shippedOn", JavaType::new("java.sql.Date")),
            &GenerationFlags::default(),
        ));
        let fragments = setter.fragments_with(&|ty| ty.fully_qualified_name().to_string());
        let mut builder = CodeBuilder::java();
        for fragment in fragments {
            builder.apply_fragment(fragment);
        }
        assert_eq!(
            builder.build(),
            "public void setShippedOn(java.sql.Date shippedOn) {\n    this.shippedOn = shippedOn;\n}\n"
        );
    }

    #[test]
    fn test_render_javadoc() {
        let mut field = build_field(&PropertyDescriptor::new("id", JavaType::new("long")));
        field.javadoc.push("Primary key".to_string());
        assert_eq!(
            CodeMember::from(field).render(),
            "/** Primary key */\nprivate long id;\n"
        );
    }
}
