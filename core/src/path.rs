//! Key path parsing.
//!
//! A path is either a dotted string like `database.mongodb.host` or an
//! ordered sequence of keys like `["database", "mongodb", "host"]`. Both
//! normalize to the same [`KeyPath`]. Keys are borrowed from the input and
//! never copied.

use std::fmt;


/// Separator between keys in the string form of a path.
pub const DELIMITER: char = '.';


/// An ordered sequence of keys addressing a nested location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath<'a> {
    keys: Vec<&'a str>,
}

impl<'a> KeyPath<'a> {
    /// Parse a dotted string into its keys.
    ///
    /// Splits on every `.`, so leading, trailing and doubled dots produce
    /// empty-string keys. An empty input is a single empty key. There is no
    /// escape for a literal `.` inside a key.
    pub fn parse(input: &'a str) -> Self {
        KeyPath {
            keys: input.split(DELIMITER).collect(),
        }
    }

    /// Use an already-ordered sequence of keys as-is.
    pub fn from_keys<S: AsRef<str>>(keys: &'a [S]) -> Self {
        KeyPath {
            keys: keys.iter().map(|k| k.as_ref()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.keys.iter().copied()
    }

    /// Split into the keys leading to the terminal container and the final
    /// key naming the target property.
    ///
    /// Returns `None` for a path with no keys at all.
    pub fn split_leaf(&self) -> Option<(&[&'a str], &'a str)> {
        self.keys.split_last().map(|(leaf, parent)| (parent, *leaf))
    }

    /// Format back to a dotted string.
    pub fn to_dotted(&self) -> String {
        self.keys.join(".")
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted())
    }
}


/// Anything that can be viewed as a [`KeyPath`]: dotted strings and key
/// sequences.
pub trait AsKeyPath {
    fn key_path(&self) -> KeyPath<'_>;
}

impl AsKeyPath for str {
    fn key_path(&self) -> KeyPath<'_> {
        KeyPath::parse(self)
    }
}

impl AsKeyPath for String {
    fn key_path(&self) -> KeyPath<'_> {
        KeyPath::parse(self)
    }
}

impl<S: AsRef<str>> AsKeyPath for [S] {
    fn key_path(&self) -> KeyPath<'_> {
        KeyPath::from_keys(self)
    }
}

impl<S: AsRef<str>, const N: usize> AsKeyPath for [S; N] {
    fn key_path(&self) -> KeyPath<'_> {
        KeyPath::from_keys(self.as_slice())
    }
}

impl<S: AsRef<str>> AsKeyPath for Vec<S> {
    fn key_path(&self) -> KeyPath<'_> {
        KeyPath::from_keys(self.as_slice())
    }
}

impl<T: AsKeyPath + ?Sized> AsKeyPath for &T {
    fn key_path(&self) -> KeyPath<'_> {
        (**self).key_path()
    }
}

impl AsKeyPath for KeyPath<'_> {
    fn key_path(&self) -> KeyPath<'_> {
        KeyPath {
            keys: self.keys.clone(),
        }
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Parsing ---

    #[test]
    fn parse_single_key() {
        let p = KeyPath::parse("app");
        assert_eq!(p.as_slice(), &["app"]);
    }

    #[test]
    fn parse_nested_path() {
        let p = KeyPath::parse("database.mongodb.host");
        assert_eq!(p.len(), 3);
        assert_eq!(p.as_slice(), &["database", "mongodb", "host"]);
    }

    #[test]
    fn parse_empty_string_is_one_empty_key() {
        let p = KeyPath::parse("");
        assert_eq!(p.as_slice(), &[""]);
        assert!(!p.is_empty());
    }

    #[test]
    fn parse_keeps_empty_segments() {
        assert_eq!(KeyPath::parse(".a").as_slice(), &["", "a"]);
        assert_eq!(KeyPath::parse("a.").as_slice(), &["a", ""]);
        assert_eq!(KeyPath::parse("a..b").as_slice(), &["a", "", "b"]);
    }

    #[test]
    fn sequence_is_used_as_is() {
        let keys = ["database", "mongodb", "host"];
        let p = keys.key_path();
        assert_eq!(p.as_slice(), &keys);
    }

    #[test]
    fn sequence_keys_are_not_split() {
        let keys = vec!["a.b".to_string(), "c".to_string()];
        let p = keys.key_path();
        assert_eq!(p.as_slice(), &["a.b", "c"]);
    }

    #[test]
    fn sequence_borrows_keys() {
        let keys = vec![String::from("x"), String::from("y")];
        let p = keys.key_path();
        assert!(std::ptr::eq(p.as_slice()[0].as_ptr(), keys[0].as_ptr()));
    }

    #[test]
    fn string_and_sequence_agree() {
        let keys = ["database", "mongodb", "host"];
        let dotted = "database.mongodb.host".key_path();
        let seq = keys.key_path();
        assert_eq!(dotted, seq);
    }

    #[test]
    fn empty_sequence_has_no_keys() {
        let keys: Vec<String> = Vec::new();
        let p = keys.key_path();
        assert!(p.is_empty());
        assert!(p.split_leaf().is_none());
    }

    // --- Leaf splitting ---

    #[test]
    fn split_leaf_nested() {
        let p = KeyPath::parse("a.b.c");
        let (parent, leaf) = p.split_leaf().unwrap();
        assert_eq!(parent, &["a", "b"]);
        assert_eq!(leaf, "c");
    }

    #[test]
    fn split_leaf_single() {
        let p = KeyPath::parse("app");
        let (parent, leaf) = p.split_leaf().unwrap();
        assert!(parent.is_empty());
        assert_eq!(leaf, "app");
    }

    // --- Formatting ---

    #[test]
    fn to_dotted_round_trip() {
        let input = "database.mongodb.host";
        assert_eq!(KeyPath::parse(input).to_dotted(), input);
    }

    #[test]
    fn display_joins_sequence() {
        let keys = ["users", "name"];
        let p = keys.key_path();
        assert_eq!(format!("{}", p), "users.name");
    }
}
