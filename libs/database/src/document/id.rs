//! External identifier type.
//!
//! `RecordId` is the only place the store's native ObjectId is visible. Every
//! other crate sees a value that parses from and formats to a 24-character
//! hex string.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::error::{DocumentError, DocumentResult};

/// Store-assigned opaque record identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(ObjectId);

impl RecordId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parse the external string form, rejecting anything that is not 24 hex characters
    pub fn parse(raw: &str) -> DocumentResult<Self> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| DocumentError::InvalidIdentifier(raw.to_string()))
    }

    pub(crate) fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    pub(crate) fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl FromStr for RecordId {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let id = RecordId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let id = RecordId::parse("65A1F0C2E4B0A1B2C3D4E5F6").unwrap();
        assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["", "abc", "not-an-object-id-at-all!", "65a1f0c2e4b0a1b2c3d4e5f", "zz a1f0c2e4b0a1b2c3d4e5f6"] {
            let err = RecordId::parse(raw).unwrap_err();
            assert!(
                matches!(err, DocumentError::InvalidIdentifier(ref s) if s == raw),
                "expected InvalidIdentifier for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_new_ids_are_distinct_and_well_formed() {
        let a = RecordId::new();
        let b = RecordId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 24);
        assert_eq!(RecordId::parse(&a.to_string()).unwrap(), a);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = RecordId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("65a1f0c2e4b0a1b2c3d4e5f6"));

        let back: RecordId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        let result = serde_json::from_value::<RecordId>(serde_json::json!("nope"));
        assert!(result.is_err());
    }
}
