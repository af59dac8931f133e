//! Attach the accessor operations to a container under chosen names.
//!
//! Rust cannot add methods to a value at runtime, so [`assign`] wraps the
//! container in an [`Assigned`] handle that owns a method table mapping
//! names to operations. Calls go through [`Assigned::call`] by name, or
//! through the fixed `deep_*` methods.
//!
//! ```
//! use deep_access_core::binder::{assign, Reply};
//! use deep_access_core::config::NameOverrides;
//! use serde_json::{json, Map};
//!
//! let mut obj = Map::new();
//! let names = NameOverrides::new().get("fetch");
//! let mut bound = assign(&mut obj, Some(&names));
//!
//! bound.call("deepSet", "app.name", [json!("My App")]).unwrap();
//! let reply = bound.call("fetch", "app.name", []).unwrap();
//! assert_eq!(reply, Reply::Found(&json!("My App")));
//! assert!(!bound.responds_to("deepGet"));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::access::{self, Lookup};
use crate::config::{MethodNames, NameOverrides};
use crate::container::Container;
use crate::error::{AccessError, CallError};
use crate::path::AsKeyPath;


/// One of the four path operations a method name can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    Set,
    Has,
    Delete,
}

impl Operation {
    /// Installation order used by [`assign`].
    pub const ALL: [Operation; 4] = [
        Operation::Get,
        Operation::Set,
        Operation::Has,
        Operation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Set => "set",
            Operation::Has => "has",
            Operation::Delete => "delete",
        }
    }

    fn name_in<'n>(&self, names: &'n MethodNames) -> &'n str {
        match self {
            Operation::Get => &names.get,
            Operation::Set => &names.set,
            Operation::Has => &names.has,
            Operation::Delete => &names.delete,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// What a dynamic call produced.
#[derive(Debug, PartialEq)]
pub enum Reply<'a, V> {
    /// `get` resolved the path.
    Found(&'a V),
    /// `get` did not resolve the path.
    NotFound,
    /// `set` stored the value; this is the stored copy.
    Stored(&'a mut V),
    /// Answer from `has`.
    Has(bool),
    /// `delete` ran; carries the removed value, if there was one.
    Deleted(Option<V>),
}


/// A container with the accessor operations installed as named methods.
pub struct Assigned<'c, C: Container> {
    target: &'c mut C,
    methods: HashMap<String, Operation>,
}

/// Install `get`, `set`, `has` and `delete` on `obj`.
///
/// Names come from `names`, falling back to `deepGet`, `deepSet`, `deepHas`
/// and `deepDelete`. If two operations resolve to the same name, the one
/// installed later (in `get`, `set`, `has`, `delete` order) wins.
pub fn assign<'c, C: Container>(obj: &'c mut C, names: Option<&NameOverrides>) -> Assigned<'c, C> {
    let names = names.map(NameOverrides::resolve).unwrap_or_default();
    let mut assigned = Assigned {
        target: obj,
        methods: HashMap::new(),
    };
    for op in Operation::ALL {
        assigned.define(op.name_in(&names), op);
    }
    log::debug!(
        "assigned methods get={} set={} has={} delete={}",
        names.get,
        names.set,
        names.has,
        names.delete
    );
    assigned
}

impl<'c, C: Container> Assigned<'c, C> {
    // -------------------------------------------------------------------
    // Method table
    // -------------------------------------------------------------------

    /// Point `name` at `op`, replacing any existing definition. Returns the
    /// operation it previously pointed at.
    pub fn define(&mut self, name: impl Into<String>, op: Operation) -> Option<Operation> {
        let name = name.into();
        let previous = self.methods.insert(name.clone(), op);
        if let Some(prev) = previous {
            if prev != op {
                log::debug!("method '{}' redefined from {} to {}", name, prev, op);
            }
        }
        previous
    }

    /// Remove a method. Returns the operation it pointed at.
    pub fn undefine(&mut self, name: &str) -> Option<Operation> {
        self.methods.remove(name)
    }

    /// The operation installed under `name`, if any.
    pub fn method(&self, name: &str) -> Option<Operation> {
        self.methods.get(name).copied()
    }

    pub fn responds_to(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// All installed methods, sorted by name.
    pub fn methods(&self) -> Vec<(&str, Operation)> {
        let mut all: Vec<(&str, Operation)> = self
            .methods
            .iter()
            .map(|(name, op)| (name.as_str(), *op))
            .collect();
        all.sort_by(|a, b| a.0.cmp(b.0));
        all
    }

    // -------------------------------------------------------------------
    // Dynamic dispatch
    // -------------------------------------------------------------------

    /// Invoke the method installed under `name` with the bound container as
    /// its first argument.
    ///
    /// `set` takes its value from the first element of `args`. Other
    /// operations ignore `args`.
    pub fn call<P, A>(&mut self, name: &str, path: &P, args: A) -> Result<Reply<'_, C::Value>, CallError>
    where
        P: AsKeyPath + ?Sized,
        A: IntoIterator<Item = C::Value>,
    {
        let op = self
            .method(name)
            .ok_or_else(|| CallError::UnknownMethod(name.to_string()))?;

        let reply = match op {
            Operation::Get => match access::get(&*self.target, path) {
                Lookup::Found(value) => Reply::Found(value),
                Lookup::NotFound => Reply::NotFound,
            },
            Operation::Set => {
                let value = args.into_iter().next().ok_or_else(|| CallError::MissingArgument {
                    method: name.to_string(),
                    argument: "value",
                })?;
                Reply::Stored(access::set(&mut *self.target, path, value)?)
            }
            Operation::Has => Reply::Has(access::has(&*self.target, path)),
            Operation::Delete => Reply::Deleted(access::delete(&mut *self.target, path)),
        };
        Ok(reply)
    }

    // -------------------------------------------------------------------
    // Fixed call sites
    // -------------------------------------------------------------------

    pub fn deep_get<P: AsKeyPath + ?Sized>(&self, path: &P) -> Lookup<&C::Value> {
        access::get(&*self.target, path)
    }

    pub fn deep_get_mut<P: AsKeyPath + ?Sized>(&mut self, path: &P) -> Lookup<&mut C::Value> {
        access::get_mut(&mut *self.target, path)
    }

    pub fn deep_set<P: AsKeyPath + ?Sized>(
        &mut self,
        path: &P,
        value: C::Value,
    ) -> Result<&mut C::Value, AccessError> {
        access::set(&mut *self.target, path, value)
    }

    pub fn deep_has<P: AsKeyPath + ?Sized>(&self, path: &P) -> bool {
        access::has(&*self.target, path)
    }

    pub fn deep_delete<P: AsKeyPath + ?Sized>(&mut self, path: &P) -> Option<C::Value> {
        access::delete(&mut *self.target, path)
    }

    // -------------------------------------------------------------------
    // Container access
    // -------------------------------------------------------------------

    pub fn target(&self) -> &C {
        &*self.target
    }

    pub fn target_mut(&mut self) -> &mut C {
        &mut *self.target
    }

    /// Drop the method table and hand the container back.
    pub fn into_inner(self) -> &'c mut C {
        self.target
    }
}

impl<C: Container + fmt::Debug> fmt::Debug for Assigned<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assigned")
            .field("target", &self.target)
            .field("methods", &self.methods())
            .finish()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture;
    use serde_json::{json, Value};

    // --- Installation ---

    #[test]
    fn default_names_installed() {
        let mut obj = fixture();
        let bound = assign(&mut obj, None);
        assert_eq!(
            bound.methods(),
            vec![
                ("deepDelete", Operation::Delete),
                ("deepGet", Operation::Get),
                ("deepHas", Operation::Has),
                ("deepSet", Operation::Set),
            ]
        );
    }

    #[test]
    fn override_replaces_default_name() {
        let mut obj = fixture();
        let names = NameOverrides::new().get("fetch");
        let bound = assign(&mut obj, Some(&names));
        assert_eq!(bound.method("fetch"), Some(Operation::Get));
        assert!(!bound.responds_to("deepGet"));
        assert!(bound.responds_to("deepSet"));
    }

    #[test]
    fn colliding_names_last_wins() {
        let mut obj = fixture();
        let names = NameOverrides::new().get("x").delete("x");
        let bound = assign(&mut obj, Some(&names));
        assert_eq!(bound.method("x"), Some(Operation::Delete));
        assert_eq!(bound.methods().len(), 3);
    }

    #[test]
    fn assign_does_not_touch_container() {
        let mut obj = fixture();
        let before = obj.clone();
        let bound = assign(&mut obj, None);
        assert_eq!(bound.target(), &before);
    }

    // --- Dynamic calls ---

    #[test]
    fn deep_get_assigned() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        let reply = bound.call("deepGet", "app", []).unwrap();
        assert_eq!(reply, Reply::Found(&json!("My App")));
    }

    #[test]
    fn deep_get_matches_get() {
        let mut obj = fixture();
        let expected = access::get(&obj, "database.mongodb").map(|v| v.clone());
        let mut bound = assign(&mut obj, None);
        match bound.call("deepGet", "database.mongodb", []).unwrap() {
            Reply::Found(v) => assert_eq!(Lookup::Found(v.clone()), expected),
            other => panic!("expected Found, got {:?}", other),
        }
        assert_eq!(bound.call("deepGet", "foo.bar", []).unwrap(), Reply::NotFound);
    }

    #[test]
    fn deep_set_assigned() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        let reply = bound.call("deepSet", "app", [json!("Foo App")]).unwrap();
        assert_eq!(reply, Reply::Stored(&mut json!("Foo App")));
        drop(bound);
        assert_eq!(obj["app"], json!("Foo App"));
    }

    #[test]
    fn deep_set_uses_first_extra_argument() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        bound
            .call("deepSet", "a.b", vec![json!(1), json!(2)])
            .unwrap();
        assert_eq!(bound.deep_get("a.b"), Lookup::Found(&json!(1)));
    }

    #[test]
    fn deep_set_without_value_fails() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        let err = bound.call("deepSet", "app", Vec::<Value>::new()).unwrap_err();
        assert_eq!(
            err,
            CallError::MissingArgument {
                method: "deepSet".into(),
                argument: "value",
            }
        );
    }

    #[test]
    fn deep_set_through_scalar_fails() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        let err = bound.call("deepSet", "port.number", [json!(1)]).unwrap_err();
        assert!(matches!(err, CallError::Access(AccessError::NotAContainer { .. })));
    }

    #[test]
    fn deep_has_assigned() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        assert_eq!(bound.call("deepHas", "app", []).unwrap(), Reply::Has(true));
    }

    #[test]
    fn deep_has_not_assigned() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        assert_eq!(
            bound.call("deepHas", "database.foo.bar", []).unwrap(),
            Reply::Has(false)
        );
    }

    #[test]
    fn deep_delete_assigned() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        let reply = bound.call("deepDelete", "app", []).unwrap();
        assert_eq!(reply, Reply::Deleted(Some(json!("My App"))));
        let obj = bound.into_inner();
        assert!(obj.get("app").is_none());
    }

    #[test]
    fn unknown_method() {
        let mut obj = fixture();
        let names = NameOverrides::new().get("fetch");
        let mut bound = assign(&mut obj, Some(&names));
        let err = bound.call("deepGet", "app", []).unwrap_err();
        assert_eq!(err, CallError::UnknownMethod("deepGet".into()));
        assert_eq!(
            bound.call("fetch", "app", []).unwrap(),
            Reply::Found(&json!("My App"))
        );
    }

    #[test]
    fn call_with_sequence_path() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        let keys = ["database", "mongodb", "host"];
        assert_eq!(
            bound.call("deepGet", &keys, []).unwrap(),
            Reply::Found(&json!("localhost"))
        );
    }

    // --- Redefinition ---

    #[test]
    fn define_and_undefine() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        assert_eq!(bound.define("deepGet", Operation::Has), Some(Operation::Get));
        assert_eq!(bound.call("deepGet", "app", []).unwrap(), Reply::Has(true));
        assert_eq!(bound.define("lookup", Operation::Get), None);
        assert_eq!(bound.undefine("deepHas"), Some(Operation::Has));
        assert!(!bound.responds_to("deepHas"));
        assert!(bound.responds_to("lookup"));
    }

    // --- Fixed call sites ---

    #[test]
    fn fixed_methods() {
        let mut obj = fixture();
        let mut bound = assign(&mut obj, None);
        bound.deep_set("cache.ttl", json!(60)).unwrap();
        assert!(bound.deep_has("cache.ttl"));
        if let Lookup::Found(ttl) = bound.deep_get_mut("cache.ttl") {
            *ttl = json!(120);
        }
        assert_eq!(bound.deep_get("cache.ttl"), Lookup::Found(&json!(120)));
        assert_eq!(bound.deep_delete("cache.ttl"), Some(json!(120)));
        assert!(!bound.deep_has("cache.ttl"));
        assert_eq!(bound.target_mut()["cache"], json!({}));
    }

    #[test]
    fn operation_names() {
        assert_eq!(Operation::Delete.to_string(), "delete");
        assert_eq!(Operation::Get.as_str(), "get");
        let all: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(all, vec!["get", "set", "has", "delete"]);
    }

    // --- Configured names ---

    #[test]
    fn names_loaded_from_file_drive_calls() {
        let dir = std::env::temp_dir()
            .join("deep_access_binder_tests")
            .join("names_loaded_from_file_drive_calls");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("names.yaml");
        std::fs::write(&path, "get: fetch\nhas: exists\n").unwrap();

        let names = NameOverrides::load(&path).unwrap();
        let mut obj = fixture();
        let mut bound = assign(&mut obj, Some(&names));
        assert!(bound.responds_to("fetch"));
        assert!(bound.responds_to("deepSet"));
        assert!(!bound.responds_to("deepGet"));

        match bound.call("fetch", "database.mongodb.host", []).unwrap() {
            Reply::Found(v) => assert_eq!(v, &json!("localhost")),
            other => panic!("expected Found, got {:?}", other),
        }
        match bound.call("exists", "database.mongodb.port", []).unwrap() {
            Reply::Has(present) => assert!(!present),
            other => panic!("expected Has, got {:?}", other),
        }
    }
}
