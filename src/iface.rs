//! Boundary traits for the collaborators that consume encoded multihashes:
//! path resolution and content operations. This crate computes and encodes
//! digests; it neither parses path syntax nor stores content, so these
//! traits carry no implementations here. They exist so a backend's own
//! sentinel conditions stay distinguishable from the digest error taxonomy
//! when the two propagate together.

use std::io::{Read, Seek};
use thiserror::Error;

/// Errors owned by resolution and content backends.
#[derive(Debug, Error)]
pub enum OpError {
    /// The target is a directory, not readable as a byte stream.
    #[error("object is a directory")]
    IsDirectory,

    /// The underlying node is offline or unreachable.
    #[error("cannot resolve, node is offline")]
    Offline,

    /// A digest or codec failure from this crate, passed through intact.
    #[error(transparent)]
    Digest(#[from] crate::error::Error),

    /// Any other backend-specific failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Resolution from a hierarchical name to the node it references.
pub trait PathResolve {
    /// The path form handed across this boundary.
    type Path;
    /// The node a fully resolved path points at.
    type Node;

    /// resolve_path rewrites `path` into its fully resolved form.
    fn resolve_path(&self, path: &Self::Path) -> Result<Self::Path, OpError>;

    /// resolve_node returns the node `path` ultimately references.
    fn resolve_node(&self, path: &Self::Path) -> Result<Self::Node, OpError>;
}

/// File-level operations layered on top of content addressing.
pub trait ContentOps {
    /// The path form handed across this boundary.
    type Path;
    /// A link from a node to one of its children.
    type Link;
    /// Streamed content; callers may seek within it.
    type Reader: Read + Seek;

    /// add ingests `content` and returns the path addressing it.
    fn add(&mut self, content: &mut dyn Read) -> Result<Self::Path, OpError>;

    /// read opens the content at `path` as a seekable byte stream.
    fn read(&self, path: &Self::Path) -> Result<Self::Reader, OpError>;

    /// list_links enumerates the links of the node at `path`.
    fn list_links(&self, path: &Self::Path) -> Result<Vec<Self::Link>, OpError>;
}
