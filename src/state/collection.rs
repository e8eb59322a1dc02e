//! Collection state.
//!
//! A collection is the named, typed list of bottles being tasted. It is
//! editable during setup and frozen once the tasting starts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SnapshotError, TastingError};

/// Kind selected for a fresh collection.
pub const DEFAULT_KIND: SpiritKind = SpiritKind::Whiskey;

/// Spirit kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpiritKind {
    #[default]
    Whiskey,
    Rum,
}

impl SpiritKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whiskey => "whiskey",
            Self::Rum => "rum",
        }
    }
}

impl fmt::Display for SpiritKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`SpiritKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown spirit kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for SpiritKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whiskey" => Ok(Self::Whiskey),
            "rum" => Ok(Self::Rum),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// Collection state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "CollectionRepr")]
pub struct Collection {
    /// Organizer-chosen display name
    pub name: String,

    /// Spirit kind
    pub kind: SpiritKind,

    /// Bottle labels; position + 1 is the draw number
    bottles: Vec<String>,

    /// Set when the tasting starts
    active: bool,
}

/// Wire form of [`Collection`], checked before use.
#[derive(Deserialize)]
struct CollectionRepr {
    name: String,
    kind: SpiritKind,
    bottles: Vec<String>,
    active: bool,
}

impl TryFrom<CollectionRepr> for Collection {
    type Error = SnapshotError;

    fn try_from(repr: CollectionRepr) -> Result<Self, Self::Error> {
        if repr.bottles.iter().any(|b| b.trim().is_empty()) {
            return Err(SnapshotError::BlankBottle);
        }
        if u32::try_from(repr.bottles.len()).is_err() {
            return Err(SnapshotError::TooManyBottles);
        }
        if repr.active && repr.bottles.is_empty() {
            return Err(SnapshotError::ActiveWithoutBottles);
        }
        Ok(Self {
            name: repr.name,
            kind: repr.kind,
            bottles: repr.bottles,
            active: repr.active,
        })
    }
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the tasting has started.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Bottle labels in draw-number order.
    pub fn bottles(&self) -> &[String] {
        &self.bottles
    }

    /// Count bottles.
    pub fn bottle_count(&self) -> usize {
        self.bottles.len()
    }

    /// Highest draw number, which is also the number of bottles.
    pub fn last_number(&self) -> u32 {
        // add_bottle and deserialization both keep the length within u32.
        u32::try_from(self.bottles.len()).unwrap_or(u32::MAX)
    }

    /// Get the bottle for a 1-based draw number.
    pub fn bottle(&self, number: u32) -> Option<&str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.bottles.get(index).map(String::as_str)
    }

    /// Rename the collection.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), TastingError> {
        self.ensure_editable()?;
        self.name = name.into();
        Ok(())
    }

    /// Change the spirit kind.
    pub fn set_kind(&mut self, kind: SpiritKind) -> Result<(), TastingError> {
        self.ensure_editable()?;
        self.kind = kind;
        Ok(())
    }

    /// Append a bottle, returning its draw number.
    ///
    /// The label is trimmed; blank labels are rejected.
    pub fn add_bottle(&mut self, label: &str) -> Result<u32, TastingError> {
        self.ensure_editable()?;
        let label = label.trim();
        if label.is_empty() {
            return Err(TastingError::BlankBottle);
        }
        let number =
            u32::try_from(self.bottles.len() + 1).map_err(|_| TastingError::TooManyBottles)?;
        self.bottles.push(label.to_string());
        Ok(number)
    }

    /// Freeze the collection.
    pub fn lock(&mut self) -> Result<(), TastingError> {
        if self.active {
            return Err(TastingError::AlreadyStarted);
        }
        if self.bottles.is_empty() {
            return Err(TastingError::NoBottles);
        }
        self.active = true;
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), TastingError> {
        if self.active {
            Err(TastingError::CollectionLocked)
        } else {
            Ok(())
        }
    }

    /// Convert to JSON for sending to clients.
    ///
    /// Bottle labels are only listed during setup.
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "name": self.name,
            "kind": self.kind.as_str(),
            "bottle_count": self.bottles.len(),
            "is_active": self.active
        });
        if !self.active {
            obj["bottles"] = serde_json::json!(self.bottles);
        }
        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_new() {
        let collection = Collection::new();
        assert_eq!(collection.name, "");
        assert_eq!(collection.kind, DEFAULT_KIND);
        assert_eq!(collection.bottle_count(), 0);
        assert!(!collection.is_active());
    }

    #[test]
    fn test_add_bottle() {
        let mut collection = Collection::new();

        assert_eq!(collection.add_bottle("  Lagavulin 16 ").unwrap(), 1);
        assert_eq!(collection.add_bottle("Ardbeg 10").unwrap(), 2);

        assert_eq!(collection.bottles(), ["Lagavulin 16", "Ardbeg 10"]);
        assert_eq!(collection.bottle(1), Some("Lagavulin 16"));
        assert_eq!(collection.bottle(2), Some("Ardbeg 10"));
        assert_eq!(collection.bottle(0), None);
        assert_eq!(collection.bottle(3), None);
        assert_eq!(collection.last_number(), 2);
    }

    #[test]
    fn test_blank_bottle_rejected() {
        let mut collection = Collection::new();

        assert_eq!(collection.add_bottle(""), Err(TastingError::BlankBottle));
        assert_eq!(collection.add_bottle(" \t\n"), Err(TastingError::BlankBottle));
        assert_eq!(collection.bottle_count(), 0);
    }

    #[test]
    fn test_lock() {
        let mut collection = Collection::new();

        // Nothing to taste yet
        assert_eq!(collection.lock(), Err(TastingError::NoBottles));
        assert!(!collection.is_active());

        collection.add_bottle("Plantation XO").unwrap();
        collection.lock().unwrap();
        assert!(collection.is_active());

        assert_eq!(collection.lock(), Err(TastingError::AlreadyStarted));
    }

    #[test]
    fn test_locked_collection_is_frozen() {
        let mut collection = Collection::new();
        collection.set_name("Friday").unwrap();
        collection.set_kind(SpiritKind::Rum).unwrap();
        collection.add_bottle("Appleton 12").unwrap();
        collection.lock().unwrap();

        let before = collection.clone();
        assert_eq!(collection.set_name("Saturday"), Err(TastingError::CollectionLocked));
        assert_eq!(
            collection.set_kind(SpiritKind::Whiskey),
            Err(TastingError::CollectionLocked)
        );
        assert_eq!(collection.add_bottle("Foursquare"), Err(TastingError::CollectionLocked));
        assert_eq!(collection, before);
    }

    #[test]
    fn test_deserialize_checks_collection() {
        let collection: Collection = serde_json::from_value(serde_json::json!({
            "name": "Islay night",
            "kind": "whiskey",
            "bottles": ["Oban 14"],
            "active": true
        }))
        .unwrap();
        assert!(collection.is_active());
        assert_eq!(collection.bottle(1), Some("Oban 14"));

        let blank = serde_json::from_value::<Collection>(serde_json::json!({
            "name": "", "kind": "rum", "bottles": ["  "], "active": false
        }));
        assert!(blank.is_err());

        let empty_active = serde_json::from_value::<Collection>(serde_json::json!({
            "name": "", "kind": "rum", "bottles": [], "active": true
        }));
        assert!(empty_active.is_err());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("whiskey".parse::<SpiritKind>(), Ok(SpiritKind::Whiskey));
        assert_eq!(" Rum ".parse::<SpiritKind>(), Ok(SpiritKind::Rum));
        assert!("gin".parse::<SpiritKind>().is_err());
        assert_eq!(SpiritKind::Rum.to_string(), "rum");
    }

    #[test]
    fn test_to_json_hides_bottles_once_active() {
        let mut collection = Collection::new();
        collection.add_bottle("Talisker 10").unwrap();

        let json = collection.to_json();
        assert_eq!(json["kind"], "whiskey");
        assert_eq!(json["bottles"][0], "Talisker 10");

        collection.lock().unwrap();
        let json = collection.to_json();
        assert_eq!(json["bottle_count"], 1);
        assert!(json.get("bottles").is_none());
    }
}
