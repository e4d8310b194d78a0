//! Unified error handling for the Kat exporters
//!
//! Every failure an export can hit is fatal to that export: the pipeline
//! aborts and surfaces the error without committing a file.

use thiserror::Error;

/// Unified error type for all export operations
#[derive(Error, Debug)]
pub enum Error {
    // ==================== I/O Errors ====================

    /// Standard I/O error (sink could not be opened, a write failed, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Input Errors ====================

    /// No source object was provided by the host
    #[error("No object selected for export")]
    NoSelection,

    /// A corner needed UV data but the mesh carries no active UV layer
    #[error("Mesh has no active UV layer")]
    MissingUvChannel,

    /// Fewer sampled channels than the fixed nine (position/rotation/scale)
    #[error("Missing animation channels: expected {expected}, found {found}")]
    MissingAnimationChannel {
        expected: usize,
        found: usize,
    },

    /// A face references a material slot with no assigned material
    #[error("Face references unresolved material slot {slot}")]
    UnresolvedMaterial {
        slot: u32,
    },

    /// Snapshot data violates a structural invariant
    #[error("Invalid geometry: {message}")]
    InvalidGeometry {
        message: String,
    },

    // ==================== General Errors ====================

    /// Error with additional context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Result type using the unified Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an invalid geometry error
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Error::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Check if this is an input-data error (as opposed to an I/O failure)
    pub fn is_input_error(&self) -> bool {
        match self {
            Error::NoSelection
            | Error::MissingUvChannel
            | Error::MissingAnimationChannel { .. }
            | Error::UnresolvedMaterial { .. }
            | Error::InvalidGeometry { .. } => true,
            Error::WithContext { source, .. } => source.is_input_error(),
            Error::Io(_) => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
