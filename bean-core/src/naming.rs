//! JavaBeans naming rules for properties and accessors.

use crate::JavaType;

/// Characters treated as word boundaries by [`to_camel_case`].
const WORD_SEPARATORS: [char; 8] = ['_', '-', '@', '$', '#', ' ', '/', '&'];

/// Normalize an optional raw identifier into a canonical property name.
///
/// Absent input stays absent; everything else goes through
/// [`valid_property_name`].
pub fn normalize_property_name(input: Option<&str>) -> Option<String> {
    input.map(valid_property_name)
}

/// Make sure a string is a valid JavaBeans property name.
///
/// - single characters are lowercased (`B` -> `b`)
/// - an uppercase first character followed by a non-uppercase one is
///   lowercased (`Yaxis` -> `yaxis`, `FirstName` -> `firstName`)
/// - anything else is left alone, which keeps acronyms intact (`URL`, `XAxis`)
pub fn valid_property_name(input: &str) -> String {
    let mut chars = input.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return input.to_lowercase();
    };

    if first.is_uppercase() && !second.is_uppercase() {
        first
            .to_lowercase()
            .chain(input[first.len_utf8()..].chars())
            .collect()
    } else {
        input.to_string()
    }
}

/// Convert a delimited string to camelCase (e.g., "first_name" -> "firstName").
///
/// Separators are dropped. A separator only capitalizes the next character
/// once something has been emitted, so leading separators are ignored.
/// With `capitalize_first` the result is PascalCase; an empty result stays
/// empty.
pub fn to_camel_case(input: &str, capitalize_first: bool) -> String {
    let mut result = String::with_capacity(input.len());
    let mut next_upper = false;

    for c in input.chars() {
        if WORD_SEPARATORS.contains(&c) {
            if !result.is_empty() {
                next_upper = true;
            }
        } else if next_upper {
            result.push(upper(c));
            next_upper = false;
        } else {
            result.push(lower(c));
        }
    }

    if capitalize_first {
        capitalize(&result)
    } else {
        result
    }
}

/// Getter method name for a property (e.g., "firstName" -> "getFirstName").
///
/// The `boolean` primitive gets an `is` prefix instead of `get`. The name
/// is expected to have been normalized already.
pub fn getter_name(property: &str, ty: &JavaType) -> String {
    let prefix = if ty.is_boolean_primitive() { "is" } else { "get" };
    format!("{}{}", prefix, accessor_stem(property))
}

/// Setter method name for a property (e.g., "firstName" -> "setFirstName").
pub fn setter_name(property: &str) -> String {
    format!("set{}", accessor_stem(property))
}

/// Uppercase a leading lowercase character unless the next one is uppercase
/// (`eMail` stays `eMail`, so its getter is `geteMail`).
fn accessor_stem(property: &str) -> String {
    let mut chars = property.chars();
    match (chars.next(), chars.next()) {
        (Some(first), second)
            if first.is_lowercase() && !second.is_some_and(char::is_uppercase) =>
        {
            let mut stem = String::with_capacity(property.len());
            stem.push(upper(first));
            stem.push_str(&property[first.len_utf8()..]);
            stem
        }
        _ => property.to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => std::iter::once(upper(c)).chain(chars).collect(),
    }
}

/// Uppercase one character, keeping it as is when its uppercase form is
/// longer than one character (`ß` stays `ß`, not `SS`).
fn upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

/// Lowercase one character, keeping it as is when its lowercase form is
/// longer than one character (`İ` stays `İ`).
fn lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
