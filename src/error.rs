//! Engine error types.

use crate::draw::Region;
use thiserror::Error;

/// Programming errors surfaced by the geometry engine.
///
/// Neither variant is reachable from pointer input alone; they guard the closed
/// shape-kind and handle-region sets at the points where loosely typed data
/// enters the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Unsupported shape kind '{0}' (expected segment or rectangle)")]
    UnsupportedShapeKind(String),

    #[error("Region '{0}' is not a resize handle")]
    InvalidHandleRegion(Region),
}
