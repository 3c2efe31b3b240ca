//! Whole-class assembly.

use beansmith_core::{JavaType, PropertyDescriptor};
use tracing::debug;

use crate::{
    builder::{CodeBuilder, CodeFragment, ImportCollector, Renderable},
    member::{CodeMember, FieldMember},
    synth::MemberSynthesizer,
};

/// Members of one generated model class.
///
/// Members are ordered fields first, then a getter and setter per
/// property, then `toString`, all following property order.
#[derive(Debug, Clone)]
pub struct BeanClass {
    pub ty: JavaType,
    pub members: Vec<CodeMember>,
    pub imports: ImportCollector,
}

impl BeanClass {
    /// Synthesize every member for `properties` on the class `ty`.
    ///
    /// # Example
    ///
    /// ```
    /// use beansmith_codegen::{BeanClass, JavaType, MemberSynthesizer, PropertyDescriptor};
    ///
    /// let bean = BeanClass::synthesize(
    ///     JavaType::new("com.example.Person"),
    ///     &[PropertyDescriptor::from_column("FIRST_NAME", JavaType::string())],
    ///     &MemberSynthesizer::default(),
    /// );
    ///
    /// let names: Vec<&str> = bean.members.iter().map(|m| m.name()).collect();
    /// assert_eq!(names, ["firstName", "getFirstName", "setFirstName", "toString"]);
    /// ```
    pub fn synthesize(
        ty: JavaType,
        properties: &[PropertyDescriptor],
        synth: &MemberSynthesizer<'_>,
    ) -> Self {
        debug!(
            class = %ty,
            properties = properties.len(),
            trim_strings = synth.flags().trim_strings,
            "synthesizing bean"
        );

        let fields: Vec<FieldMember> = properties.iter().map(|p| synth.field(p)).collect();
        let to_string = synth.to_string_method(&ty, &fields);

        let mut imports = ImportCollector::for_class(&ty);
        for property in properties {
            imports.add_type(&property.ty);
        }

        let mut members: Vec<CodeMember> = Vec::with_capacity(properties.len() * 3 + 1);
        members.extend(fields.into_iter().map(CodeMember::from));
        for property in properties {
            members.push(synth.getter(property).into());
            members.push(synth.setter(property).into());
        }
        members.push(to_string.into());

        Self {
            ty,
            members,
            imports,
        }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldMember> {
        self.members.iter().filter_map(|m| match m {
            CodeMember::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Find a member by name. Fields and methods share the lookup, fields first.
    pub fn member(&self, name: &str) -> Option<&CodeMember> {
        self.members.iter().find(|m| m.name() == name)
    }

    /// Render the class as a Java compilation unit.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for BeanClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(package) = self.ty.package() {
            fragments.push(CodeFragment::line(format!("package {};", package)));
            fragments.push(CodeFragment::blank());
        }

        if !self.imports.is_empty() {
            fragments.extend(
                self.imports
                    .iter()
                    .map(|import| CodeFragment::line(format!("import {};", import))),
            );
            fragments.push(CodeFragment::blank());
        }

        let type_name = |ty: &JavaType| self.imports.type_name(ty);
        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.push(CodeFragment::sequence(member.fragments_with(&type_name)));
        }

        fragments.push(CodeFragment::block(
            format!("public class {} {{", self.ty.short_name()),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}
