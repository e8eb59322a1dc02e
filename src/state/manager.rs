//! Tasting manager.
//!
//! Owns the current [`Session`] together with the random source and the
//! [`Notifier`], applies actions in the order they arrive and runs the
//! resulting effects.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::collection::SpiritKind;
use super::notify::{Notification, Notifier};
use super::participant::Participant;
use super::phase::{Action, SessionPhase};
use super::session::{Effect, Session};
use crate::error::TastingError;

/// Drives one tasting session.
#[derive(Debug)]
pub struct TastingManager<N, R = StdRng> {
    session: Session,
    rng: R,
    notifier: N,
}

impl<N: Notifier> TastingManager<N, StdRng> {
    /// Manager with an OS-seeded random source.
    pub fn new(notifier: N) -> Self {
        Self::with_rng(notifier, StdRng::from_os_rng())
    }

    /// Manager with a reproducible random source.
    pub fn with_seed(notifier: N, seed: u64) -> Self {
        Self::with_rng(notifier, StdRng::seed_from_u64(seed))
    }
}

impl<N: Notifier, R: Rng> TastingManager<N, R> {
    pub fn with_rng(notifier: N, rng: R) -> Self {
        Self {
            session: Session::new(),
            rng,
            notifier,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_parts(self) -> (Session, R, N) {
        (self.session, self.rng, self.notifier)
    }

    /// Apply an action and run its effects.
    ///
    /// Rejected actions leave the session unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<(), TastingError> {
        let name = action.as_str();
        let from = self.session.phase();

        let effects = match self.session.apply_mut(action, &mut self.rng) {
            Ok(effects) => effects,
            Err(err) => {
                tracing::debug!(action = name, phase = %from, error = %err, "Action rejected");
                return Err(err);
            }
        };

        let to = self.session.phase();
        if from != to {
            tracing::info!(action = name, from = %from, to = %to, "Session phase changed");
        } else {
            tracing::debug!(action = name, phase = %to, "Action applied");
        }

        for effect in effects {
            self.run(effect);
        }
        Ok(())
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::NotifyParticipant { email, number } => {
                tracing::info!(
                    email = %email,
                    number,
                    remaining = self.session.remaining(),
                    "Number drawn"
                );
                let notification =
                    Notification::new(email, number, self.session.collection().name.clone());
                if let Err(err) = self.notifier.notify(&notification) {
                    tracing::warn!(
                        email = %notification.email,
                        number,
                        error = %err,
                        "Failed to notify participant"
                    );
                }
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), TastingError> {
        self.dispatch(Action::SetName { name: name.into() })
    }

    pub fn set_kind(&mut self, kind: SpiritKind) -> Result<(), TastingError> {
        self.dispatch(Action::SetKind { kind })
    }

    /// Append a bottle, returning its draw number.
    pub fn add_bottle(&mut self, label: impl Into<String>) -> Result<u32, TastingError> {
        self.dispatch(Action::AddBottle {
            label: label.into(),
        })?;
        Ok(self.session.collection().last_number())
    }

    pub fn start_tasting(&mut self) -> Result<(), TastingError> {
        self.dispatch(Action::StartTasting)
    }

    /// Draw a number for a participant.
    pub fn draw(&mut self, email: impl Into<String>) -> Result<Participant, TastingError> {
        self.dispatch(Action::Draw {
            email: email.into(),
        })?;
        // Roster is non-empty after a successful draw.
        self.session
            .roster()
            .last()
            .cloned()
            .ok_or(TastingError::PoolExhausted)
    }

    pub fn conclude(&mut self) -> Result<(), TastingError> {
        self.dispatch(Action::Conclude)
    }

    /// Assignments in draw order, once concluded.
    pub fn assignments(&self) -> Result<&[Participant], TastingError> {
        self.session.assignments()
    }

    /// Discard everything and start over.
    ///
    /// Accepted in every phase.
    pub fn reset(&mut self) -> Result<(), TastingError> {
        self.dispatch(Action::Reset)
    }
}
