//! Blind Tasting State Library
//!
//! This crate provides state management for blind spirit tastings.
//!
//! # Overview
//!
//! An organizer builds a named collection of bottles. Once the tasting starts
//! the collection is frozen and each participant draws a random, unused number
//! that maps to one bottle. When every number has been drawn the tasting is
//! concluded and the assignments are revealed.
//!
//! - **Session** - An immutable snapshot plus a pure transition function.
//!   Rejected actions leave the snapshot unchanged.
//!
//! - **Injected randomness** - Draws take any [`rand::Rng`], so tests can
//!   seed or stub the source.
//!
//! - **Notifications as effects** - A draw returns an effect; the manager
//!   hands it to a [`Notifier`] and ignores the outcome.
//!
//! # Design Principles
//!
//! 1. **No I/O** - This crate is pure state, no email, HTTP or storage.
//!
//! 2. **Serialization-ready** - All state types can be converted to JSON for clients.
//!
//! # Example
//!
//! ```rust
//! use blind_tasting_state::{RecordingNotifier, SessionPhase, TastingManager};
//!
//! let mut manager = TastingManager::with_seed(RecordingNotifier::new(), 42);
//!
//! manager.set_name("Islay night").unwrap();
//! manager.add_bottle("Lagavulin 16").unwrap();
//! manager.add_bottle("Ardbeg 10").unwrap();
//! manager.start_tasting().unwrap();
//!
//! let first = manager.draw("a@x.com").unwrap();
//! let second = manager.draw("b@x.com").unwrap();
//! assert_ne!(first.number, second.number);
//!
//! manager.conclude().unwrap();
//! assert_eq!(manager.phase(), SessionPhase::Reveal);
//! assert_eq!(manager.assignments().unwrap().len(), 2);
//! assert_eq!(manager.notifier().sent().len(), 2);
//! ```

pub mod error;
pub mod state;

pub use error::{NotifyError, SnapshotError, TastingError};

// Re-export everything from state module at crate root
pub use state::*;
