use anyhow::Result;

use crate::core::models::DisplayBounds;

/// Resolves the display a capture attempt should target - the one under the
/// pointer at activation time. Queried fresh per attempt, never cached.
pub trait DisplayResolver: Send + Sync {
    fn resolve_target_display(&self) -> Result<DisplayBounds>;
}
