//! Domain-level error type used by the engine and the session service.
//!
//! This error type is HTTP- and storage-agnostic; storage failures are
//! reported through the session's storage warning instead. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Reasons a hand or settings command is rejected before any mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    NoWinner,
    MissingPoints,
    MissingDiscarder,
    DiscarderIsWinner,
    MissingCounts,
    InvalidSeat,
    PointsOutOfRange,
    DrawNotAllowed,
    VariantMismatch,
    InvalidStartingPoints,
    StartingPointsLocked,
    InvalidPlayerName,
    InvalidStartingDealer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    NothingToUndo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Incomplete or inconsistent input at a commit boundary
    Validation(ValidationKind, String),
    /// Request that cannot apply to the current state
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Destructive command sent without explicit confirmation
    ConfirmationRequired(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::ConfirmationRequired(d) => write!(f, "confirmation required: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn confirmation_required(detail: impl Into<String>) -> Self {
        Self::ConfirmationRequired(detail.into())
    }
}
