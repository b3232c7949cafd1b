//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user input routed upward from a component (typing into
/// the search box, cycling a selector, pressing "Add to Cart") or lifecycle
/// events such as the one-time load at mount.
pub trait Intent: Send + 'static {}
