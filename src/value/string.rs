use std::{
    borrow::Cow,
    fmt::{self, Display},
    ops::Deref,
    sync::Arc,
};

/// A reference-counted immutable string
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SharedString(Arc<str>);

impl SharedString {
    /// Extract a string slice containing the entire string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into one string per character, in order
    pub fn chars(&self) -> impl Iterator<Item = SharedString> + '_ {
        self.0.chars().map(SharedString::from)
    }
}

impl Deref for SharedString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<char> for SharedString {
    fn from(value: char) -> Self {
        Self(value.to_string().into())
    }
}

impl From<&str> for SharedString {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<Cow<'_, str>> for SharedString {
    fn from(value: Cow<'_, str>) -> Self {
        Self(value.into())
    }
}

impl From<String> for SharedString {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<SharedString> for String {
    fn from(string: SharedString) -> Self {
        // str is unsized so the Arc can't hand back its buffer; always copy
        string.as_str().to_owned()
    }
}
