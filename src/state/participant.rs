//! Participants and the draw roster.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A participant's draw.
///
/// `bottle` is copied from the collection at draw time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub email: String,
    pub number: u32,
    pub bottle: String,
}

impl Participant {
    pub fn new(email: impl Into<String>, number: u32, bottle: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            number,
            bottle: bottle.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "email": self.email,
            "number": self.number,
            "bottle": self.bottle
        })
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.number, self.bottle, self.email)
    }
}

/// Participants in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a draw.
    pub(crate) fn push(&mut self, participant: Participant) {
        debug_assert!(self.by_number(participant.number).is_none());
        self.participants.push(participant);
    }

    /// Get the participant holding a number.
    pub fn by_number(&self, number: u32) -> Option<&Participant> {
        self.participants.iter().find(|p| p.number == number)
    }

    /// Get every draw made with an email.
    ///
    /// The same email may draw more than once.
    pub fn by_email<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a Participant> + 'a {
        self.participants.iter().filter(move |p| p.email == email)
    }

    /// Drawn numbers in draw order.
    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.participants.iter().map(|p| p.number)
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.participants
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn last(&self) -> Option<&Participant> {
        self.participants.last()
    }
}
