//! Session phases and actions.
//!
//! # State Diagram
//!
//! ```text
//!   reset (from any phase)
//!  ┌─────────────────────────────────────────────┐
//!  ▼                                             │
//! ┌─────────┐  start_tasting  ┌─────────┐  conclude  ┌────────┐
//! │  Setup  │────────────────▶│ Tasting │───────────▶│ Reveal │
//! └─────────┘                 └─────────┘            └────────┘
//!   │ set_name                  │ draw
//!   │ set_kind                  │ (while numbers remain)
//!   │ add_bottle                │
//!   └──▶ Setup                  └──▶ Tasting
//! ```
//!
//! `conclude` is only accepted once every number has been drawn.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::collection::SpiritKind;

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Building the collection
    #[default]
    Setup,
    /// Collection locked, participants drawing
    Tasting,
    /// Assignments revealed
    Reveal,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Tasting => "tasting",
            Self::Reveal => "reveal",
        }
    }

    /// Check if the collection can still be edited.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Setup)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SetName { name: String },
    SetKind { kind: SpiritKind },
    AddBottle { label: String },
    StartTasting,
    Draw { email: String },
    Conclude,
    Reset,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SetName { .. } => "set_name",
            Self::SetKind { .. } => "set_kind",
            Self::AddBottle { .. } => "add_bottle",
            Self::StartTasting => "start_tasting",
            Self::Draw { .. } => "draw",
            Self::Conclude => "conclude",
            Self::Reset => "reset",
        }
    }
}
