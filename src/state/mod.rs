//! State management for blind tastings.
//!
//! This module provides the core state types:
//!
//! - `collection` - The bottles being tasted and the setup-phase edits
//! - `pool` - Numbers not yet drawn
//! - `participant` - Draw records and the roster
//! - `phase` - Session phases and user actions
//! - `session` - Snapshot value and its transition function
//! - `notify` - Participant notification port
//! - `manager` - Stateful driver that runs effects
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      TastingManager                          │
//! │                                                              │
//! │   Action ──▶ Session::apply(rng) ──▶ (Session, Vec<Effect>)  │
//! │                                              │               │
//! │  ┌────────────────────────────────────┐      ▼               │
//! │  │              Session               │   Notifier           │
//! │  │                                    │   (fire-and-forget)  │
//! │  │  Collection   name, kind, bottles  │                      │
//! │  │  Roster       participants         │                      │
//! │  │  NumberPool   undrawn numbers      │                      │
//! │  │  revealed                          │                      │
//! │  └────────────────────────────────────┘                      │
//! │                                                              │
//! │        Setup ──▶ Tasting ──▶ Reveal   (reset ──▶ Setup)      │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod collection;
pub mod manager;
pub mod notify;
pub mod participant;
pub mod phase;
pub mod pool;
pub mod session;

// Re-export commonly used types
pub use collection::{Collection, SpiritKind, UnknownKind, DEFAULT_KIND};
pub use manager::TastingManager;
pub use notify::{LogNotifier, NoopNotifier, Notification, Notifier, RecordingNotifier};
pub use participant::{Participant, Roster};
pub use phase::{Action, SessionPhase};
pub use pool::NumberPool;
pub use session::{Effect, Session, Transition};
