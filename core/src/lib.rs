//! Deep path access for nested key-value containers.
//!
//! Read, write, test and remove values inside nested maps by dotted path
//! (`database.mongodb.host`) or by key sequence
//! (`["database", "mongodb", "host"]`), and attach those operations to a
//! container under configurable method names.
//!
//! ```
//! use deep_access_core::{delete, get, has, set, Lookup};
//! use serde_json::{json, Map};
//!
//! let mut obj = Map::new();
//! set(&mut obj, "a.b.c", json!(1)).unwrap();
//! assert_eq!(get(&obj, "a.b.c"), Lookup::Found(&json!(1)));
//! assert!(has(&obj, ["a", "b"].as_slice()));
//! assert_eq!(delete(&mut obj, "a.b.c"), Some(json!(1)));
//! assert_eq!(get(&obj, "a.b.c"), Lookup::NotFound);
//! ```

pub mod access;
pub mod binder;
pub mod config;
pub mod container;
pub mod error;
pub mod path;
pub mod traverse;

#[cfg(test)]
mod testing;

pub use access::{delete, get, get_mut, has, has_truthy, set, Lookup};
pub use binder::{assign, Assigned, Operation, Reply};
pub use config::{MethodNames, NameOverrides};
pub use container::{Container, Node};
pub use error::{AccessError, CallError};
pub use path::{AsKeyPath, KeyPath};
pub use traverse::{traverse, traverse_mut, Halt, Traversal};
