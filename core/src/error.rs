use std::fmt;

// ---------------------------------------------------------------------------
// Access errors
// ---------------------------------------------------------------------------

/// Failure of a write through a path.
///
/// Reads never fail; a missing path is reported as `Lookup::NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The path has no keys, so there is nothing to write to.
    EmptyPath,
    /// An intermediate key holds a value that cannot be descended into.
    NotAContainer {
        /// Dotted path up to and including the offending key.
        path: String,
        key: String,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::EmptyPath => write!(f, "path has no keys"),
            AccessError::NotAContainer { path, key } => {
                write!(f, "cannot descend into '{}' at '{}': not a container", key, path)
            }
        }
    }
}

impl std::error::Error for AccessError {}


// ---------------------------------------------------------------------------
// Call errors
// ---------------------------------------------------------------------------

/// Failure of a dynamic call through an assigned method table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// No method is installed under this name.
    UnknownMethod(String),
    /// The method needs an argument the call did not supply.
    MissingArgument {
        method: String,
        argument: &'static str,
    },
    /// The underlying path operation failed.
    Access(AccessError),
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::UnknownMethod(name) => write!(f, "no method named '{}'", name),
            CallError::MissingArgument { method, argument } => {
                write!(f, "method '{}' requires a '{}' argument", method, argument)
            }
            CallError::Access(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CallError::Access(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AccessError> for CallError {
    fn from(e: AccessError) -> Self {
        CallError::Access(e)
    }
}
