//! Javadoc for synthesized members.
//!
//! Every builder run through a [`MemberSynthesizer`](crate::MemberSynthesizer)
//! offers the member to a [`CommentGenerator`] before returning it.

use beansmith_core::{ColumnSource, JavaType, PropertyDescriptor};

use crate::member::{FieldMember, GetterMember, SetterMember, ToStringMember};

/// Adds comments to members as they are synthesized.
///
/// All hooks default to doing nothing.
pub trait CommentGenerator: Send + Sync {
    fn add_field_comment(&self, _field: &mut FieldMember, _property: &PropertyDescriptor) {}

    fn add_getter_comment(&self, _getter: &mut GetterMember, _property: &PropertyDescriptor) {}

    fn add_setter_comment(&self, _setter: &mut SetterMember, _property: &PropertyDescriptor) {}

    fn add_to_string_comment(&self, _method: &mut ToStringMember, _ty: &JavaType) {}
}

/// Leaves members uncommented.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoComments;

impl CommentGenerator for NoComments {}

/// Documents members with the database column they were generated from.
///
/// Properties without a [`ColumnSource`] are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnComments;

impl ColumnComments {
    fn column_ref(source: &ColumnSource) -> String {
        format!("{}.{}", source.table, source.column)
    }
}

impl CommentGenerator for ColumnComments {
    fn add_field_comment(&self, field: &mut FieldMember, property: &PropertyDescriptor) {
        let Some(source) = &property.source else {
            return;
        };
        field.javadoc.push(format!(
            "This field corresponds to the database column {}",
            Self::column_ref(source)
        ));
        if let Some(remarks) = source.remarks.as_deref().filter(|r| !r.trim().is_empty()) {
            field.javadoc.push(String::new());
            field.javadoc.push(remarks.trim().to_string());
        }
    }

    fn add_getter_comment(&self, getter: &mut GetterMember, property: &PropertyDescriptor) {
        let Some(source) = &property.source else {
            return;
        };
        let column = Self::column_ref(source);
        getter.javadoc.push(format!(
            "This method returns the value of the database column {}",
            column
        ));
        getter.javadoc.push(String::new());
        getter
            .javadoc
            .push(format!("@return the value of {}", column));
    }

    fn add_setter_comment(&self, setter: &mut SetterMember, property: &PropertyDescriptor) {
        let Some(source) = &property.source else {
            return;
        };
        let column = Self::column_ref(source);
        setter.javadoc.push(format!(
            "This method sets the value of the database column {}",
            column
        ));
        setter.javadoc.push(String::new());
        setter.javadoc.push(format!(
            "@param {} the value for {}",
            setter.parameter.name, column
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenerationFlags, build_field, build_getter, build_setter};

    fn sourced() -> PropertyDescriptor {
        PropertyDescriptor::new("firstName", JavaType::string())
            .source(ColumnSource::new("PERSON", "FIRST_NAME").remarks("Given name"))
    }

    #[test]
    fn test_no_comments_leaves_members_untouched() {
        let prop = sourced();
        let mut field = build_field(&prop);
        NoComments.add_field_comment(&mut field, &prop);
        assert!(field.javadoc.is_empty());
    }

    #[test]
    fn test_column_comments_field() {
        let prop = sourced();
        let mut field = build_field(&prop);
        ColumnComments.add_field_comment(&mut field, &prop);
        assert_eq!(
            field.javadoc,
            [
                "This field corresponds to the database column PERSON.FIRST_NAME",
                "",
                "Given name",
            ]
        );
    }

    #[test]
    fn test_column_comments_accessors() {
        let prop = sourced();

        let mut getter = build_getter(&prop);
        ColumnComments.add_getter_comment(&mut getter, &prop);
        assert_eq!(
            getter.javadoc.last().map(String::as_str),
            Some("@return the value of PERSON.FIRST_NAME")
        );

        let mut setter = build_setter(&prop, &GenerationFlags::default());
        ColumnComments.add_setter_comment(&mut setter, &prop);
        assert_eq!(
            setter.javadoc.last().map(String::as_str),
            Some("@param firstName the value for PERSON.FIRST_NAME")
        );
    }

    #[test]
    fn test_column_comments_without_source() {
        let prop = PropertyDescriptor::new("age", JavaType::new("int"));
        let mut field = build_field(&prop);
        ColumnComments.add_field_comment(&mut field, &prop);
        assert!(field.javadoc.is_empty());
    }
}
