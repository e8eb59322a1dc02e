//! Error types for tasting sessions.

use thiserror::Error;

/// A rejected action.
///
/// Every variant is a precondition violation. The session that rejected the
/// action is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TastingError {
    #[error("Bottle label is blank")]
    BlankBottle,

    #[error("Collection cannot hold more bottles")]
    TooManyBottles,

    #[error("Cannot start a tasting without bottles")]
    NoBottles,

    #[error("Collection is locked once the tasting has started")]
    CollectionLocked,

    #[error("Tasting has already started")]
    AlreadyStarted,

    #[error("Tasting has not started")]
    NotStarted,

    #[error("Participant email is empty")]
    EmptyEmail,

    #[error("No numbers left to draw")]
    PoolExhausted,

    #[error("Number {number} has no bottle in this collection")]
    UnknownNumber { number: u32 },

    #[error("{remaining} numbers still to be drawn")]
    NumbersRemaining { remaining: usize },

    #[error("Tasting has been concluded")]
    AlreadyRevealed,

    #[error("Assignments are hidden until the tasting is concluded")]
    NotRevealed,
}

/// Failure reported by a [`Notifier`](crate::state::notify::Notifier).
///
/// Never propagated into session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("Notification rejected for {email}: {reason}")]
    Rejected { email: String, reason: String },
}

/// A serialized snapshot that breaks the session invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Bottle labels must not be blank")]
    BlankBottle,

    #[error("Collection holds too many bottles")]
    TooManyBottles,

    #[error("An active collection needs at least one bottle")]
    ActiveWithoutBottles,

    #[error("Draw numbers start at 1")]
    ZeroNumber,

    #[error("Number pool must be strictly ascending")]
    UnsortedPool,

    #[error("Number {number} is outside 1..={total}")]
    OutOfRange { number: u32, total: u32 },

    #[error("Number {number} is both drawn and available")]
    DrawnAndAvailable { number: u32 },

    #[error("Number {number} was drawn twice")]
    DuplicateDraw { number: u32 },

    #[error("Number {number} was never drawn nor left available")]
    MissingNumber { number: u32 },

    #[error("Participant #{number} does not hold the bottle at that position")]
    BottleMismatch { number: u32 },

    #[error("Draws recorded before the tasting started")]
    DrawsDuringSetup,

    #[error("Revealed before the tasting started")]
    RevealedDuringSetup,

    #[error("Revealed with {remaining} numbers still to be drawn")]
    RevealedWithNumbersRemaining { remaining: usize },
}
