//! Error handling for CableKit
//!
//! Provides error types for the layers that can actually fail:
//! - Catalog errors (malformed cable/conduit data, catalog files)
//! - Routing errors (a connection that cannot be resolved against the catalog)
//!
//! Geometry, path synthesis, and estimation never fail on well-typed input;
//! their non-fatal conditions are reported as warnings on the run result.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Catalog error type
///
/// Raised once, when catalog data is loaded and validated. A catalog that
/// passes validation is never re-checked per calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A cable specification failed validation
    #[error("Invalid cable spec '{id}': {reason}")]
    InvalidCableSpec {
        /// The cable family identifier.
        id: String,
        /// Why the entry was rejected.
        reason: String,
    },

    /// A conduit specification failed validation
    #[error("Invalid conduit spec '{id}': {reason}")]
    InvalidConduitSpec {
        /// The conduit identifier.
        id: String,
        /// Why the entry was rejected.
        reason: String,
    },

    /// The same identifier appears twice in one catalog
    #[error("Duplicate catalog entry: {id}")]
    DuplicateEntry {
        /// The repeated identifier.
        id: String,
    },

    /// The conduit catalog has no entries
    #[error("Conduit catalog is empty")]
    EmptyConduitCatalog,

    /// The catalog file could not be parsed
    #[error("Catalog parse error: {reason}")]
    Parse {
        /// The parser message.
        reason: String,
    },
}

/// Routing error type
///
/// Represents a connection that references data the engine cannot resolve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// The connection names a cable family absent from the catalog
    #[error("Unknown cable family: {family}")]
    UnknownCableFamily {
        /// The cable family tag on the connection.
        family: String,
    },

    /// A connection endpoint device is not present in the device set
    #[error("Device {device_id} not found for connection {connection_id}")]
    MissingEndpoint {
        /// The connection being resolved.
        connection_id: String,
        /// The device id that could not be found.
        device_id: String,
    },
}

/// Main error type for CableKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Routing error
    #[error(transparent)]
    Routing(#[from] RoutingError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a catalog error
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }

    /// Check if this is a routing error
    pub fn is_routing_error(&self) -> bool {
        matches!(self, Error::Routing(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
