use std::borrow::Cow;
use std::fmt::{self, Display};

/// A string key naming one slot of a block schema: either a struct field name
/// or a stream type tag. Tags carry no lexical grammar of their own; they are
/// only meaningful as keys into a registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagName(Cow<'static, str>);

impl TagName {
    /// Creates a tag from a static string, usable in const contexts.
    pub const fn new_static(s: &'static str) -> Self {
        TagName(Cow::Borrowed(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0.into()
    }
}

impl Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TagName {
    fn from(s: &str) -> Self {
        TagName(Cow::Owned(s.to_string()))
    }
}

impl From<String> for TagName {
    fn from(s: String) -> Self {
        TagName(Cow::Owned(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TagName::from("char_array")), "char_array");
    }

    #[test]
    fn test_static_and_owned_compare_equal() {
        const TITLE: TagName = TagName::new_static("title");
        assert_eq!(TITLE, TagName::from("title".to_string()));
    }
}
