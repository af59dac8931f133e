//! Deep get / set / has / delete on a root container.
//!
//! All four operations accept either a dotted string or a key sequence as
//! the path. Reads never fail: an absent path is [`Lookup::NotFound`].
//! `set` fills in missing intermediates with empty containers. `delete`
//! through a missing intermediate does nothing.

use crate::container::{Container, Node};
use crate::error::AccessError;
use crate::path::{AsKeyPath, KeyPath};
use crate::traverse::{traverse, traverse_mut, Traversal};


/// Result of reading a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The path resolved to a stored value.
    Found(T),
    /// Some key along the path is absent, or an intermediate value is not a
    /// container.
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::NotFound => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.found().unwrap_or(default)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(v) => Lookup::Found(f(v)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Lookup::Found(v),
            None => Lookup::NotFound,
        }
    }
}

impl<T> From<Lookup<T>> for Option<T> {
    fn from(lookup: Lookup<T>) -> Self {
        lookup.found()
    }
}


/// GET the value stored under `path`.
///
/// A stored `false` or `null` comes back as `Found`; only an absent path is
/// `NotFound`. An empty key sequence names no value and is `NotFound`; the
/// root itself is reached with [`crate::traverse`].
pub fn get<'c, C, P>(obj: &'c C, path: &P) -> Lookup<&'c C::Value>
where
    C: Container,
    P: AsKeyPath + ?Sized,
{
    let path = path.key_path();
    let Some((parent, leaf)) = path.split_leaf() else {
        return Lookup::NotFound;
    };
    traverse(obj, parent)
        .into_container()
        .and_then(|container| container.lookup(leaf))
        .into()
}


/// GET a mutable reference to the value stored under `path`.
pub fn get_mut<'c, C, P>(obj: &'c mut C, path: &P) -> Lookup<&'c mut C::Value>
where
    C: Container,
    P: AsKeyPath + ?Sized,
{
    let path = path.key_path();
    let Some((parent, leaf)) = path.split_leaf() else {
        return Lookup::NotFound;
    };
    traverse_mut(obj, parent, false)
        .into_container()
        .and_then(|container| container.lookup_mut(leaf))
        .into()
}


/// SET `value` under `path`, creating empty containers for any missing
/// intermediate keys. Returns a reference to the stored value.
///
/// A single-key path writes directly on `obj`. An existing value at the
/// leaf is replaced. An intermediate key holding a non-container value is an
/// error and is left untouched.
pub fn set<'c, C, P>(obj: &'c mut C, path: &P, value: C::Value) -> Result<&'c mut C::Value, AccessError>
where
    C: Container,
    P: AsKeyPath + ?Sized,
{
    let path = path.key_path();
    let (parent, leaf) = path.split_leaf().ok_or(AccessError::EmptyPath)?;
    match traverse_mut(obj, parent, true) {
        Traversal::Reached { container, .. } => Ok(container.insert(leaf, value)),
        // Missing keys were created, so only an existing scalar stops the walk.
        Traversal::Halted { index, .. } => Err(not_a_container(&path, index)),
    }
}


/// HAS a value under `path`?
///
/// True whenever `get` finds something, including stored falsy values.
/// See [`has_truthy`] for the looser check.
pub fn has<C, P>(obj: &C, path: &P) -> bool
where
    C: Container,
    P: AsKeyPath + ?Sized,
{
    get(obj, path).is_found()
}


/// Truthiness check: the path must exist and hold a truthy value.
///
/// A stored `false`, `0`, `""` or `null` reads as absent.
pub fn has_truthy<C, P>(obj: &C, path: &P) -> bool
where
    C: Container,
    P: AsKeyPath + ?Sized,
{
    match get(obj, path) {
        Lookup::Found(value) => value.is_truthy(),
        Lookup::NotFound => false,
    }
}


/// DELETE the value under `path`, returning it if one was removed.
///
/// Only the final key is removed. If an intermediate key is missing or not
/// a container there is nothing to delete from and the call is a no-op, so
/// deleting the same path twice is safe.
pub fn delete<C, P>(obj: &mut C, path: &P) -> Option<C::Value>
where
    C: Container,
    P: AsKeyPath + ?Sized,
{
    let path = path.key_path();
    let (parent, leaf) = path.split_leaf()?;
    match traverse_mut(obj, parent, false) {
        Traversal::Reached { container, .. } => container.remove(leaf),
        Traversal::Halted { index, reason } => {
            log::debug!(
                "delete of '{}' skipped: '{}' is {}",
                path,
                parent[..=index].join("."),
                reason
            );
            None
        }
    }
}


fn not_a_container(path: &KeyPath<'_>, index: usize) -> AccessError {
    let keys = path.as_slice();
    AccessError::NotAContainer {
        path: keys[..=index].join("."),
        key: keys[index].to_string(),
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
