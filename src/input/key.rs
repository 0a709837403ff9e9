use std::fmt;

/// Name given to keys the backend could not identify.
pub const UNKNOWN_KEY: &str = "UNKNOWN";

/// A single keyboard key.
///
/// `name` is the canonical upper-case identifier (`"ENTER"`, `"A"`,
/// `"ARROWLEFT"`); `text` is what the key typed, possibly empty.
///
/// Comparing a key against a string matches either the name (ignoring
/// case) or the exact text, so sketch code can write `key == "enter"` as
/// well as `key == "a"`. Comparing two keys requires both fields to match.
///
/// ```
/// # use sketch_input::Key;
/// let key = Key::new("a", "a");
/// assert!(key == "A");
/// assert!(key == "a");
/// assert_eq!(key.to_string(), "a");
/// assert_eq!(Key::named("enter").to_string(), "ENTER");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    name: String,
    text: String,
}

impl Key {
    /// Create a key from a backend name and the text it produced.
    #[must_use]
    pub fn new(name: &str, text: impl Into<String>) -> Self {
        Self {
            name: name.to_uppercase(),
            text: text.into(),
        }
    }

    /// Create a key that produced no text.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::new(name, String::new())
    }

    /// The placeholder used when a raw event carries no key identity.
    #[must_use]
    pub fn unknown() -> Self {
        Self::named(UNKNOWN_KEY)
    }

    /// Canonical upper-case name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Typed text, empty for non-printing keys.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this is the [`Key::unknown`] placeholder.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_KEY && self.text.is_empty()
    }

    /// Match against a key name (any case) or the exact typed text.
    #[must_use]
    pub fn equals_name(&self, other: &str) -> bool {
        other == self.text || other.to_uppercase() == self.name
    }

    fn has_printable_text(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphanumeric)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_printable_text() {
            f.write_str(&self.text)
        } else {
            f.write_str(&self.name)
        }
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.equals_name(other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.equals_name(other)
    }
}

impl PartialEq<String> for Key {
    fn eq(&self, other: &String) -> bool {
        self.equals_name(other)
    }
}

impl PartialEq<Key> for str {
    fn eq(&self, other: &Key) -> bool {
        other.equals_name(self)
    }
}

impl PartialEq<Key> for &str {
    fn eq(&self, other: &Key) -> bool {
        other.equals_name(self)
    }
}
