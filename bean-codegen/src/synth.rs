//! Member builders.
//!
//! The free functions are the pure builders. [`MemberSynthesizer`] wraps
//! them with a fixed set of [`GenerationFlags`] and a [`CommentGenerator`].
//!
//! None of the builders validate their input: property names are expected
//! to have gone through the identifier normalizer already.

use beansmith_config::GenerationFlags;
use beansmith_core::{JavaType, PropertyDescriptor, getter_name, setter_name};
use tracing::trace;

use crate::{
    comments::{CommentGenerator, NoComments},
    member::{
        AssignPolicy, FieldMember, GetterMember, Parameter, SetterMember, ToStringMember,
        Visibility,
    },
};

/// Private backing field with the property's type and name.
pub fn build_field(property: &PropertyDescriptor) -> FieldMember {
    FieldMember {
        visibility: Visibility::Private,
        ty: property.ty.clone(),
        name: property.name.clone(),
        javadoc: Vec::new(),
    }
}

/// Public getter returning the field unmodified.
pub fn build_getter(property: &PropertyDescriptor) -> GetterMember {
    GetterMember {
        visibility: Visibility::Public,
        return_type: property.ty.clone(),
        name: getter_name(&property.name, &property.ty),
        body: vec![format!("return {};", property.name)],
        javadoc: Vec::new(),
    }
}

/// Public setter taking one parameter named after the property.
///
/// String columns are trimmed null-safely when `flags.trim_strings` is set;
/// everything else is assigned as given.
pub fn build_setter(property: &PropertyDescriptor, flags: &GenerationFlags) -> SetterMember {
    let name = &property.name;
    let policy = if flags.trim_strings && property.string_column {
        AssignPolicy::NullSafeTrim
    } else {
        AssignPolicy::Verbatim
    };

    let assignment = match policy {
        AssignPolicy::NullSafeTrim => {
            format!("this.{name} = {name} == null ? null : {name}.trim();")
        }
        AssignPolicy::Verbatim => format!("this.{name} = {name};"),
    };

    SetterMember {
        visibility: Visibility::Public,
        name: setter_name(name),
        parameter: Parameter::new(property.ty.clone(), name.clone()),
        policy,
        body: vec![assignment],
        javadoc: Vec::new(),
    }
}

/// `toString` override formatting `fields` as `Type [a=%s,b=%s]`.
///
/// An empty field list renders `Type []` and returns the literal directly.
pub fn build_to_string(ty: &JavaType, fields: &[FieldMember]) -> ToStringMember {
    let type_name = ty.short_name();
    let arguments: Vec<String> = fields.iter().map(|f| f.name.clone()).collect();

    let pairs = arguments
        .iter()
        .map(|name| format!("{name}=%s"))
        .collect::<Vec<_>>()
        .join(",");
    let template = format!("{type_name} [{pairs}]");

    let body = if arguments.is_empty() {
        format!("return \"{template}\";")
    } else {
        format!(
            "return String.format(\"{}\", {});",
            template,
            arguments.join(", ")
        )
    };

    ToStringMember {
        visibility: Visibility::Public,
        return_type: JavaType::string(),
        name: "toString".to_string(),
        annotations: vec!["@Override".to_string()],
        template,
        arguments,
        body: vec![body],
        javadoc: Vec::new(),
    }
}

/// Builds members with fixed flags, passing each through a comment generator.
///
/// # Example
///
/// ```
/// use beansmith_codegen::{GenerationFlags, JavaType, MemberSynthesizer, PropertyDescriptor};
///
/// let synth = MemberSynthesizer::new(GenerationFlags::new().trim_strings(true));
/// let prop = PropertyDescriptor::new("name", JavaType::string());
///
/// assert_eq!(synth.getter(&prop).name, "getName");
/// assert_eq!(
///     synth.setter(&prop).body,
///     ["this.name = name == null ? null : name.trim();"]
/// );
/// ```
#[derive(Clone, Copy)]
pub struct MemberSynthesizer<'a> {
    flags: GenerationFlags,
    comments: &'a dyn CommentGenerator,
}

impl<'a> MemberSynthesizer<'a> {
    /// Create a synthesizer that adds no comments.
    pub fn new(flags: GenerationFlags) -> Self {
        Self {
            flags,
            comments: &NoComments,
        }
    }

    /// Use a different comment generator.
    pub fn with_comments(mut self, comments: &'a dyn CommentGenerator) -> Self {
        self.comments = comments;
        self
    }

    pub fn flags(&self) -> &GenerationFlags {
        &self.flags
    }

    pub fn field(&self, property: &PropertyDescriptor) -> FieldMember {
        let mut field = build_field(property);
        self.comments.add_field_comment(&mut field, property);
        trace!(property = %property.name, ty = %property.ty, "built field");
        field
    }

    pub fn getter(&self, property: &PropertyDescriptor) -> GetterMember {
        let mut getter = build_getter(property);
        self.comments.add_getter_comment(&mut getter, property);
        trace!(property = %property.name, method = %getter.name, "built getter");
        getter
    }

    pub fn setter(&self, property: &PropertyDescriptor) -> SetterMember {
        let mut setter = build_setter(property, &self.flags);
        self.comments.add_setter_comment(&mut setter, property);
        trace!(
            property = %property.name,
            method = %setter.name,
            policy = ?setter.policy,
            "built setter"
        );
        setter
    }

    pub fn to_string_method(&self, ty: &JavaType, fields: &[FieldMember]) -> ToStringMember {
        let mut method = build_to_string(ty, fields);
        self.comments.add_to_string_comment(&mut method, ty);
        trace!(class = %ty, fields = fields.len(), "built toString");
        method
    }
}

impl Default for MemberSynthesizer<'_> {
    fn default() -> Self {
        Self::new(GenerationFlags::default())
    }
}

impl std::fmt::Debug for MemberSynthesizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberSynthesizer")
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trimming() -> GenerationFlags {
        GenerationFlags::new().trim_strings(true)
    }

    #[test]
    fn test_build_field() {
        let field = build_field(&PropertyDescriptor::new("XAxis", JavaType::new("double")));
        assert_eq!(field.visibility, Visibility::Private);
        assert_eq!(field.ty, JavaType::new("double"));
        assert_eq!(field.name, "XAxis");
    }

    #[test]
    fn test_build_getter() {
        let getter = build_getter(&PropertyDescriptor::new("firstName", JavaType::string()));
        assert_eq!(getter.visibility, Visibility::Public);
        assert_eq!(getter.return_type, JavaType::string());
        assert_eq!(getter.name, "getFirstName");
        assert_eq!(getter.body, ["return firstName;"]);
    }

    #[test]
    fn test_build_getter_boolean() {
        let getter = build_getter(&PropertyDescriptor::new(
            "active",
            JavaType::boolean_primitive(),
        ));
        assert_eq!(getter.name, "isActive");
        assert_eq!(getter.body, ["return active;"]);
    }

    #[test]
    fn test_build_setter_verbatim() {
        let prop = PropertyDescriptor::new("eMail", JavaType::string());
        let setter = build_setter(&prop, &GenerationFlags::default());

        assert_eq!(setter.visibility, Visibility::Public);
        assert_eq!(setter.name, "seteMail");
        assert_eq!(setter.parameter, Parameter::new(JavaType::string(), "eMail"));
        assert_eq!(setter.policy, AssignPolicy::Verbatim);
        assert_eq!(setter.body, ["this.eMail = eMail;"]);
        assert_eq!(setter.policy.apply(Some(" x ")).as_deref(), Some(" x "));
    }

    #[test]
    fn test_build_setter_trims_strings() {
        let prop = PropertyDescriptor::new("name", JavaType::string());
        let setter = build_setter(&prop, &trimming());

        assert_eq!(setter.policy, AssignPolicy::NullSafeTrim);
        assert_eq!(
            setter.body,
            ["this.name = name == null ? null : name.trim();"]
        );
        assert_eq!(setter.policy.apply(Some(" x ")).as_deref(), Some("x"));
        assert_eq!(setter.policy.apply(None), None);
    }

    #[test]
    fn test_build_setter_skips_non_string_columns() {
        let prop = PropertyDescriptor::new("age", JavaType::new("java.lang.Integer"));
        let setter = build_setter(&prop, &trimming());
        assert_eq!(setter.policy, AssignPolicy::Verbatim);
        assert_eq!(setter.body, ["this.age = age;"]);
    }

    #[test]
    fn test_build_setter_follows_string_column_flag() {
        // A String-typed property not backed by a character column is left alone.
        let prop = PropertyDescriptor::new("raw", JavaType::string()).string_column(false);
        assert_eq!(build_setter(&prop, &trimming()).policy, AssignPolicy::Verbatim);
    }

    #[test]
    fn test_build_to_string() {
        let fields = [
            build_field(&PropertyDescriptor::new("name", JavaType::string())),
            build_field(&PropertyDescriptor::new("age", JavaType::new("int"))),
        ];
        let method = build_to_string(&JavaType::new("com.example.Person"), &fields);

        assert_eq!(method.name, "toString");
        assert_eq!(method.visibility, Visibility::Public);
        assert_eq!(method.return_type, JavaType::string());
        assert_eq!(method.annotations, ["@Override"]);
        assert_eq!(method.template, "Person [name=%s,age=%s]");
        assert_eq!(method.arguments, ["name", "age"]);
        assert_eq!(
            method.body,
            ["return String.format(\"Person [name=%s,age=%s]\", name, age);"]
        );
        assert_eq!(method.render_with(&[&"Ada", &36]), "Person [name=Ada,age=36]");
    }

    #[test]
    fn test_build_to_string_single_field() {
        let fields = [build_field(&PropertyDescriptor::new(
            "id",
            JavaType::new("long"),
        ))];
        let method = build_to_string(&JavaType::new("Order"), &fields);
        assert_eq!(method.template, "Order [id=%s]");
        assert_eq!(method.body, ["return String.format(\"Order [id=%s]\", id);"]);
    }

    #[test]
    fn test_build_to_string_without_fields() {
        let method = build_to_string(&JavaType::new("com.example.Person"), &[]);
        assert_eq!(method.template, "Person []");
        assert!(method.arguments.is_empty());
        assert_eq!(method.body, ["return \"Person []\";"]);
        assert_eq!(method.render_with(&[]), "Person []");
    }

    #[test]
    fn test_synthesizer_uses_flags() {
        let prop = PropertyDescriptor::new("name", JavaType::string());

        let plain = MemberSynthesizer::default();
        assert_eq!(plain.setter(&prop).policy, AssignPolicy::Verbatim);

        let synth = MemberSynthesizer::new(trimming());
        assert!(synth.flags().trim_strings);
        assert_eq!(synth.setter(&prop).policy, AssignPolicy::NullSafeTrim);
    }

    #[test]
    fn test_synthesizer_applies_comments() {
        struct Marker;
        impl CommentGenerator for Marker {
            fn add_field_comment(&self, field: &mut FieldMember, property: &PropertyDescriptor) {
                field.javadoc.push(format!("field {}", property.name));
            }
            fn add_to_string_comment(&self, method: &mut ToStringMember, ty: &JavaType) {
                method.javadoc.push(format!("describes {}", ty.short_name()));
            }
        }

        let prop = PropertyDescriptor::new("name", JavaType::string());
        let synth = MemberSynthesizer::default().with_comments(&Marker);

        let field = synth.field(&prop);
        assert_eq!(field.javadoc, ["field name"]);
        // Hooks not overridden stay silent.
        assert!(synth.getter(&prop).javadoc.is_empty());

        let method = synth.to_string_method(&JavaType::new("a.b.Person"), &[field]);
        assert_eq!(method.javadoc, ["describes Person"]);
    }
}
