//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to produce successors, compared to skip
/// redundant updates, and complete enough to render without further lookups.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
