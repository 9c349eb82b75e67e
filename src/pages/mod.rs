//! Routed pages.

/// The portfolio and blog page.
pub mod home;
/// Fallback for unknown paths.
pub mod not_found;
