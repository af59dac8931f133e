//! Container capability traits.
//!
//! A [`Container`] is a string-keyed mapping that traversal can look into
//! and mutate. A [`Node`] is a value stored in a container, which may or may
//! not itself be a container. Key existence is plain `lookup(key).is_some()`;
//! there is no inherited or fallback lookup.
//!
//! Implementations are provided for `serde_json` objects and `serde_yaml`
//! mappings.

use serde_json::map::Entry as JsonEntry;
use serde_json::{Map, Value as JsonValue};
use serde_yaml::mapping::Entry as YamlEntry;
use serde_yaml::{Mapping, Value as YamlValue};


/// A string-keyed mapping that paths can descend into.
pub trait Container {
    /// The type stored under each key.
    type Value: Node<Container = Self>;

    fn lookup(&self, key: &str) -> Option<&Self::Value>;

    fn lookup_mut(&mut self, key: &str) -> Option<&mut Self::Value>;

    /// Store `value` under `key`, replacing any previous value, and return a
    /// reference to the stored value.
    fn insert(&mut self, key: &str, value: Self::Value) -> &mut Self::Value;

    fn remove(&mut self, key: &str) -> Option<Self::Value>;

    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}


/// A value held by a [`Container`].
pub trait Node: Sized {
    /// The container type this value can hold when it is a mapping.
    type Container: Container<Value = Self>;

    /// View this value as a container, if it is one.
    fn as_container(&self) -> Option<&Self::Container>;

    fn as_container_mut(&mut self) -> Option<&mut Self::Container>;

    /// A fresh, empty container value, used when materializing missing
    /// intermediate keys.
    fn empty_container() -> Self;

    /// Loose truthiness: null, `false`, zero, NaN and the empty string are
    /// falsy. Everything else, empty mappings and sequences included, is
    /// truthy.
    fn is_truthy(&self) -> bool;
}


// ---------------------------------------------------------------------------
// serde_json
// ---------------------------------------------------------------------------

impl Container for Map<String, JsonValue> {
    type Value = JsonValue;

    fn lookup(&self, key: &str) -> Option<&JsonValue> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        self.get_mut(key)
    }

    fn insert(&mut self, key: &str, value: JsonValue) -> &mut JsonValue {
        match self.entry(key) {
            JsonEntry::Vacant(entry) => entry.insert(value),
            JsonEntry::Occupied(mut entry) => {
                entry.insert(value);
                entry.into_mut()
            }
        }
    }

    fn remove(&mut self, key: &str) -> Option<JsonValue> {
        Map::remove(self, key)
    }

    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl Node for JsonValue {
    type Container = Map<String, JsonValue>;

    fn as_container(&self) -> Option<&Self::Container> {
        self.as_object()
    }

    fn as_container_mut(&mut self) -> Option<&mut Self::Container> {
        self.as_object_mut()
    }

    fn empty_container() -> Self {
        JsonValue::Object(Map::new())
    }

    fn is_truthy(&self) -> bool {
        match self {
            JsonValue::Null => false,
            JsonValue::Bool(b) => *b,
            JsonValue::Number(n) => n.as_f64().map_or(true, number_is_truthy),
            JsonValue::String(s) => !s.is_empty(),
            JsonValue::Array(_) | JsonValue::Object(_) => true,
        }
    }
}


// ---------------------------------------------------------------------------
// serde_yaml
// ---------------------------------------------------------------------------

/// Keys are matched as strings first. A number or bool key whose string form
/// equals the requested key (`80` for `"80"`) is the same key, so writes
/// replace it instead of adding a string twin.
impl Container for Mapping {
    type Value = YamlValue;

    fn lookup(&self, key: &str) -> Option<&YamlValue> {
        yaml_key(self, key).and_then(|k| self.get(&k))
    }

    fn lookup_mut(&mut self, key: &str) -> Option<&mut YamlValue> {
        match yaml_key(self, key) {
            Some(k) => self.get_mut(&k),
            None => None,
        }
    }

    fn insert(&mut self, key: &str, value: YamlValue) -> &mut YamlValue {
        let k = yaml_key(self, key).unwrap_or_else(|| YamlValue::String(key.to_string()));
        match self.entry(k) {
            YamlEntry::Vacant(entry) => entry.insert(value),
            YamlEntry::Occupied(mut entry) => {
                entry.insert(value);
                entry.into_mut()
            }
        }
    }

    fn remove(&mut self, key: &str) -> Option<YamlValue> {
        let k = yaml_key(self, key)?;
        Mapping::remove(self, &k)
    }

    fn contains(&self, key: &str) -> bool {
        yaml_key(self, key).is_some()
    }
}

/// The key actually stored in `map` for the path key `key`, if any.
fn yaml_key(map: &Mapping, key: &str) -> Option<YamlValue> {
    if map.contains_key(key) {
        return Some(YamlValue::String(key.to_string()));
    }
    map.keys()
        .find(|candidate| match candidate {
            YamlValue::Number(n) => n.to_string() == key,
            YamlValue::Bool(b) => b.to_string() == key,
            _ => false,
        })
        .cloned()
}

impl Node for YamlValue {
    type Container = Mapping;

    // A tagged mapping (`!Settings {host: x}`) is still descended into.
    fn as_container(&self) -> Option<&Mapping> {
        match self {
            YamlValue::Mapping(map) => Some(map),
            YamlValue::Tagged(tagged) => tagged.value.as_container(),
            _ => None,
        }
    }

    fn as_container_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            YamlValue::Mapping(map) => Some(map),
            YamlValue::Tagged(tagged) => tagged.value.as_container_mut(),
            _ => None,
        }
    }

    fn empty_container() -> Self {
        YamlValue::Mapping(Mapping::new())
    }

    fn is_truthy(&self) -> bool {
        match self {
            YamlValue::Null => false,
            YamlValue::Bool(b) => *b,
            YamlValue::Number(n) => n.as_f64().map_or(true, number_is_truthy),
            YamlValue::String(s) => !s.is_empty(),
            YamlValue::Sequence(_) | YamlValue::Mapping(_) => true,
            YamlValue::Tagged(tagged) => tagged.value.is_truthy(),
        }
    }
}


fn number_is_truthy(n: f64) -> bool {
    n != 0.0 && !n.is_nan()
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
