//! Tasting session snapshot and its transition function.
//!
//! A [`Session`] is a plain value: the collection, the draw roster and the
//! pool of undrawn numbers. [`Session::apply`] takes the current snapshot and
//! an [`Action`] and returns the next snapshot plus the [`Effect`]s the caller
//! should run. It has no side effects; randomness is passed in.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collection::Collection;
use super::participant::{Participant, Roster};
use super::phase::{Action, SessionPhase};
use super::pool::NumberPool;
use crate::error::{SnapshotError, TastingError};

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Tell a participant which number they drew.
    NotifyParticipant { email: String, number: u32 },
}

/// Result of a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The new state after the transition.
    pub state: Session,
    /// Effects to execute.
    pub effects: Vec<Effect>,
}

/// One tasting session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SessionRepr")]
pub struct Session {
    collection: Collection,
    roster: Roster,
    pool: NumberPool,
    revealed: bool,
}

/// Wire form of [`Session`], checked before use.
#[derive(Deserialize)]
struct SessionRepr {
    collection: Collection,
    roster: Roster,
    pool: NumberPool,
    revealed: bool,
}

impl TryFrom<SessionRepr> for Session {
    type Error = SnapshotError;

    /// Every number in `1..=bottles` must be either available or drawn,
    /// never both, and each draw must hold the bottle at its position.
    fn try_from(repr: SessionRepr) -> Result<Self, Self::Error> {
        let SessionRepr {
            collection,
            roster,
            pool,
            revealed,
        } = repr;
        let total = collection.last_number();

        if let Some(&number) = pool.numbers().iter().find(|&&n| n > total) {
            return Err(SnapshotError::OutOfRange { number, total });
        }

        let mut drawn = HashSet::with_capacity(roster.len());
        for participant in roster.iter() {
            let number = participant.number;
            if number == 0 || number > total {
                return Err(SnapshotError::OutOfRange { number, total });
            }
            if !drawn.insert(number) {
                return Err(SnapshotError::DuplicateDraw { number });
            }
            if pool.contains(number) {
                return Err(SnapshotError::DrawnAndAvailable { number });
            }
            if collection.bottle(number) != Some(participant.bottle.as_str()) {
                return Err(SnapshotError::BottleMismatch { number });
            }
        }

        if pool.len() + drawn.len() != collection.bottle_count() {
            if let Some(number) = (1..=total).find(|n| !pool.contains(*n) && !drawn.contains(n)) {
                return Err(SnapshotError::MissingNumber { number });
            }
        }

        if !collection.is_active() {
            if !roster.is_empty() {
                return Err(SnapshotError::DrawsDuringSetup);
            }
            if revealed {
                return Err(SnapshotError::RevealedDuringSetup);
            }
        }
        if revealed && !pool.is_empty() {
            return Err(SnapshotError::RevealedWithNumbersRemaining {
                remaining: pool.len(),
            });
        }

        Ok(Self {
            collection,
            roster,
            pool,
            revealed,
        })
    }
}

impl Session {
    /// Fresh session in the setup phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, derived from the collection and reveal flag.
    pub fn phase(&self) -> SessionPhase {
        if self.revealed {
            SessionPhase::Reveal
        } else if self.collection.is_active() {
            SessionPhase::Tasting
        } else {
            SessionPhase::Setup
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn pool(&self) -> &NumberPool {
        &self.pool
    }

    /// Numbers still to be drawn.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Total numbers in this tasting.
    pub fn total(&self) -> usize {
        self.collection.bottle_count()
    }

    /// Check if a participant can draw right now.
    pub fn can_draw(&self) -> bool {
        self.phase() == SessionPhase::Tasting && !self.pool.is_empty()
    }

    /// Check if the collection can still be edited.
    pub fn can_edit(&self) -> bool {
        self.phase().is_editable()
    }

    /// Check if the tasting can be concluded.
    pub fn can_conclude(&self) -> bool {
        self.phase() == SessionPhase::Tasting && self.pool.is_empty()
    }

    /// Assignments in draw order. Only available once revealed.
    pub fn assignments(&self) -> Result<&[Participant], TastingError> {
        if self.revealed {
            Ok(self.roster.as_slice())
        } else {
            Err(TastingError::NotRevealed)
        }
    }

    /// Apply an action, returning the new state or an error.
    pub fn apply<R: Rng>(&self, action: Action, rng: &mut R) -> Result<Transition, TastingError> {
        let mut next = self.clone();
        let effects = next.step(action, rng)?;
        Ok(Transition {
            state: next,
            effects,
        })
    }

    /// Apply an action in place, returning error if invalid.
    ///
    /// On error the session is unchanged.
    pub fn apply_mut<R: Rng>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<Vec<Effect>, TastingError> {
        let Transition { state, effects } = self.apply(action, rng)?;
        *self = state;
        Ok(effects)
    }

    fn step<R: Rng>(&mut self, action: Action, rng: &mut R) -> Result<Vec<Effect>, TastingError> {
        match action {
            Action::SetName { name } => {
                self.collection.set_name(name)?;
                Ok(vec![])
            }
            Action::SetKind { kind } => {
                self.collection.set_kind(kind)?;
                Ok(vec![])
            }
            Action::AddBottle { label } => {
                self.collection.add_bottle(&label)?;
                // Any change to the bottle list resets the draw pool.
                self.pool = NumberPool::full(self.collection.last_number());
                Ok(vec![])
            }
            Action::StartTasting => {
                self.collection.lock()?;
                self.pool = NumberPool::full(self.collection.last_number());
                Ok(vec![])
            }
            Action::Draw { email } => self.draw(&email, rng),
            Action::Conclude => {
                self.ensure_tasting()?;
                if !self.pool.is_empty() {
                    return Err(TastingError::NumbersRemaining {
                        remaining: self.pool.len(),
                    });
                }
                self.revealed = true;
                Ok(vec![])
            }
            Action::Reset => {
                *self = Self::default();
                Ok(vec![])
            }
        }
    }

    fn draw<R: Rng>(&mut self, email: &str, rng: &mut R) -> Result<Vec<Effect>, TastingError> {
        self.ensure_tasting()?;
        if email.is_empty() {
            return Err(TastingError::EmptyEmail);
        }

        let number = self.pool.draw(rng).ok_or(TastingError::PoolExhausted)?;
        let bottle = self
            .collection
            .bottle(number)
            .ok_or(TastingError::UnknownNumber { number })?
            .to_string();

        self.roster.push(Participant::new(email, number, bottle));
        Ok(vec![Effect::NotifyParticipant {
            email: email.to_string(),
            number,
        }])
    }

    fn ensure_tasting(&self) -> Result<(), TastingError> {
        match self.phase() {
            SessionPhase::Setup => Err(TastingError::NotStarted),
            SessionPhase::Tasting => Ok(()),
            SessionPhase::Reveal => Err(TastingError::AlreadyRevealed),
        }
    }

    /// Convert to JSON for sending to clients.
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "phase": self.phase().as_str(),
            "collection": self.collection.to_json(),
            "remaining": self.remaining(),
            "total": self.total(),
            "participant_count": self.roster.len(),
            "can_edit": self.can_edit(),
            "can_conclude": self.can_conclude()
        });
        if let Ok(assignments) = self.assignments() {
            obj["assignments"] = assignments.iter().map(Participant::to_json).collect();
        }
        obj
    }
}
