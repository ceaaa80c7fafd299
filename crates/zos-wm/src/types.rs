//! Identifier aliases shared by the registry, the shell views and the host

/// Window identifier.
///
/// Ids are handed out in increasing order and never reused within a
/// `WindowRegistry`, so a stale id held by the host after a close can never
/// address a newer window.
pub type WindowId = u64;

/// Stacking index (higher = on top).
///
/// 64 bits wide: one index is consumed per open or focus, so the counter
/// cannot reach its ceiling in any real session.
pub type ZIndex = u64;
