use std::fmt;

use terroute_core::{Cell, Dims, SurfaceError};

/// Which end of a route a cell was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors that abort a search.
///
/// Failing to connect the endpoints is not an error; see
/// [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// An endpoint lies outside the cost surface.
    InvalidInput {
        endpoint: Endpoint,
        cell: Cell,
        dims: Dims,
    },
    /// The predecessor walk did not lead back to the start. The ledger is
    /// corrupt; this is a bug, not a property of the input.
    ReconstructionInvariantViolation { reached: Cell, steps: usize },
    /// The caller's [`CancelToken`](crate::CancelToken) fired.
    Cancelled,
    /// The configured deadline passed.
    DeadlineExceeded,
    /// More cells would be expanded than the configured budget allows.
    ExpansionLimit { limit: u64 },
    /// A cost lookup failed while computing route statistics.
    Surface(SurfaceError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                endpoint,
                cell,
                dims,
            } => write!(f, "{endpoint} cell {cell} is outside the {dims} grid"),
            Self::ReconstructionInvariantViolation { reached, steps } => write!(
                f,
                "predecessor chain stopped at {reached} after {steps} steps without reaching the start"
            ),
            Self::Cancelled => write!(f, "search cancelled"),
            Self::DeadlineExceeded => write!(f, "search deadline exceeded"),
            Self::ExpansionLimit { limit } => {
                write!(f, "search exceeded its budget of {limit} expansions")
            }
            Self::Surface(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SurfaceError> for SearchError {
    fn from(e: SurfaceError) -> Self {
        Self::Surface(e)
    }
}
