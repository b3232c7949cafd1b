use thiserror::Error;

use crate::catalog::FixtureError;

/// Programming-contract violations in the component tree.
///
/// These are never recovered from: the runtime aborts the session with the
/// error as soon as one surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("{component} must be rendered within a mounted catalog store")]
    MissingProvider { component: &'static str },
}

/// Errors surfaced by the app while handling input or navigation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Contract(#[from] ContractViolation),

    #[error("Failed to mount catalog: {0}")]
    Fixture(#[from] FixtureError),
}
