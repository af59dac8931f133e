//! Walking a container through a sequence of keys.
//!
//! Every accessor operation is built on the two walkers here. They differ
//! only in mutability and in whether missing keys are filled in with empty
//! containers on the way down.

use std::fmt;

use crate::container::{Container, Node};


/// Why a traversal stopped before consuming all of its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// The key is not present on the current container.
    Missing,
    /// The key is present but its value is not a container.
    NotAContainer,
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Halt::Missing => f.write_str("missing"),
            Halt::NotAContainer => f.write_str("not a container"),
        }
    }
}


/// Outcome of walking a root through a sequence of keys.
#[derive(Debug)]
pub enum Traversal<T> {
    /// Every key resolved to a container. `depth` is the number of keys
    /// consumed.
    Reached { container: T, depth: usize },
    /// Stopped at `keys[index]`; nothing after it was looked at or created.
    Halted { index: usize, reason: Halt },
}

impl<T> Traversal<T> {
    pub fn is_reached(&self) -> bool {
        matches!(self, Traversal::Reached { .. })
    }

    /// The terminal container, if the walk reached one.
    pub fn into_container(self) -> Option<T> {
        match self {
            Traversal::Reached { container, .. } => Some(container),
            Traversal::Halted { .. } => None,
        }
    }

    pub fn halted_at(&self) -> Option<(usize, Halt)> {
        match self {
            Traversal::Reached { .. } => None,
            Traversal::Halted { index, reason } => Some((*index, *reason)),
        }
    }
}


/// Descend from `root` through `keys` without modifying anything.
///
/// An empty key sequence reaches `root` itself.
pub fn traverse<'c, C: Container>(root: &'c C, keys: &[&str]) -> Traversal<&'c C> {
    let mut current = root;
    for (index, key) in keys.iter().enumerate() {
        current = match current.lookup(key) {
            None => return halt(keys, index, Halt::Missing),
            Some(value) => match value.as_container() {
                Some(next) => next,
                None => return halt(keys, index, Halt::NotAContainer),
            },
        };
    }
    Traversal::Reached {
        container: current,
        depth: keys.len(),
    }
}


/// Descend from `root` through `keys` with mutable access.
///
/// With `create_missing`, any key the current container does not own is
/// first set to an empty container, so the walk only halts on an existing
/// non-container value. Containers created before such a halt are left in
/// place.
pub fn traverse_mut<'c, C: Container>(
    root: &'c mut C,
    keys: &[&str],
    create_missing: bool,
) -> Traversal<&'c mut C> {
    let mut current = root;
    for (index, key) in keys.iter().enumerate() {
        if create_missing && !current.contains(key) {
            log::trace!("creating empty container at '{}'", keys[..=index].join("."));
            current.insert(key, <C::Value as Node>::empty_container());
        }
        current = match current.lookup_mut(key) {
            None => return halt(keys, index, Halt::Missing),
            Some(value) => match value.as_container_mut() {
                Some(next) => next,
                None => return halt(keys, index, Halt::NotAContainer),
            },
        };
    }
    Traversal::Reached {
        container: current,
        depth: keys.len(),
    }
}


fn halt<T>(keys: &[&str], index: usize, reason: Halt) -> Traversal<T> {
    log::trace!(
        "traversal of '{}' halted at key {} ('{}'): {}",
        keys.join("."),
        index,
        keys[index],
        reason
    );
    Traversal::Halted { index, reason }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
