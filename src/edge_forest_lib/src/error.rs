//! Errors of the forest computation.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::graph::Vertex;

/// The ways in which a forest computation can fail.
///
/// None of these is recoverable for the current invocation: the caller gets
/// the error and no partial output.
#[derive(Error, Debug)]
pub enum ForestError {
    /// The input is not a table of rows with exactly two columns.
    #[error("edge table has invalid shape {shape:?}: {reason}")]
    InvalidShape {
        /// The dimensions that were supplied.
        shape: Vec<usize>,
        /// What is wrong with them.
        reason: String,
    },
    /// A vertex id is not smaller than the vertex count.
    #[error("vertex {vertex} in row {row} is out of range for {num_vertices} vertices")]
    OutOfRangeVertex {
        vertex: Vertex,
        row: usize,
        num_vertices: u64,
    },
    /// Memory for an internal buffer could not be reserved.
    #[error("unable to allocate {what}")]
    AllocationFailure {
        what: &'static str,
        #[source]
        source: Option<TryReserveError>,
    },
}

impl ForestError {
    /// Returns a closure that wraps a [`TryReserveError`] into an
    /// [`ForestError::AllocationFailure`] for the given buffer.
    pub(crate) fn alloc(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| ForestError::AllocationFailure {
            what,
            source: Some(source),
        }
    }

    pub(crate) fn invalid_shape(shape: &[usize], reason: impl Into<String>) -> Self {
        ForestError::InvalidShape {
            shape: shape.to_vec(),
            reason: reason.into(),
        }
    }
}
