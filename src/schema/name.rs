use crate::error::{Error, Result};

/// Checks a name against the GraphQL name grammar and returns a message describing the problem if
/// it doesn't match.
///
/// Names must start with a letter or an underscore and may only continue with letters, digits, or
/// underscores. Only ASCII characters are allowed.
/// [Reference](https://spec.graphql.org/October2021/#Name)
pub fn name_error(name: &str) -> Option<String> {
    let mut chars = name.chars();
    match chars.next() {
        None => Some("Expected name to be a non-empty string.".to_string()),
        Some(first) if !is_name_start(first) => Some(format!(
            "Names must start with [_a-zA-Z] but \"{name}\" does not."
        )),
        Some(_) if !chars.all(is_name_continue) => Some(format!(
            "Names must only contain [_a-zA-Z0-9] but \"{name}\" does not."
        )),
        Some(_) => None,
    }
}

/// Returns an error for names starting with `__`, which is reserved for introspection.
pub fn reserved_name_error(name: &str) -> Option<String> {
    if name.starts_with("__") {
        Some(format!(
            "Name \"{name}\" must not begin with \"__\", which is reserved by GraphQL introspection."
        ))
    } else {
        None
    }
}

/// Checks a name against the GraphQL name grammar.
pub fn assert_name(name: &str) -> Result<&str> {
    match name_error(name) {
        Some(message) => Err(Error::new(message, None)),
        None => Ok(name),
    }
}

/// Checks an enum value's name, which must match the name grammar and may not be a literal that's
/// reserved for other values.
pub fn assert_enum_value_name(name: &str) -> Result<&str> {
    if is_reserved_enum_value(name) {
        Err(Error::new(format!("Enum values cannot be named: {name}"), None))
    } else {
        assert_name(name)
    }
}

/// `true`, `false`, and `null` would be indistinguishable from Boolean and null literals.
#[inline]
pub fn is_reserved_enum_value(name: &str) -> bool {
    matches!(name, "true" | "false" | "null")
}

#[inline]
fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

#[inline]
fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
