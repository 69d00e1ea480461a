//! Exported/private classification for Go identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Go visibility, decided purely by the first character of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Exported,
    Private,
}

impl Visibility {
    /// Classify a name: exported only when it starts with an upper-case letter.
    ///
    /// Leading underscores, digits and lower-case letters are all private, so
    /// `_Foo` is private even though an upper-case letter follows.
    #[must_use]
    pub fn of(name: &str) -> Self {
        if name.starts_with(char::is_uppercase) {
            Self::Exported
        } else {
            Self::Private
        }
    }

    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exported => "exported",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_table() {
        let cases = [
            ("_someFunc", Visibility::Private),
            ("herp", Visibility::Private),
            ("_SomeFunc", Visibility::Private),
            ("9Lives", Visibility::Private),
            ("SomeFunc", Visibility::Exported),
            ("ZooFunc", Visibility::Exported),
            ("Ünïcode", Visibility::Exported),
        ];
        for (name, expected) in cases {
            assert_eq!(Visibility::of(name), expected, "name: {name}");
        }
    }

    #[test]
    fn empty_name_is_private() {
        assert!(Visibility::of("").is_private());
    }

    #[test]
    fn display_matches_serde() {
        let json = serde_json::to_string(&Visibility::Exported).unwrap();
        assert_eq!(json, format!("\"{}\"", Visibility::Exported));
    }
}
