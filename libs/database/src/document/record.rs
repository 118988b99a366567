use mongodb::bson::{self, Bson, Document};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{DocumentError, DocumentResult};
use super::id::RecordId;

/// A stored document split into its identifier and remaining fields.
///
/// The `fields` never contain the store's `_id` key; the identifier lives in
/// `id` and is rendered under the external key `id` on the way out.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub fields: Document,
}

impl Record {
    pub fn new(id: RecordId, fields: Document) -> Self {
        Self { id, fields }
    }

    /// Split a raw store document, taking ownership of its `_id`
    pub(crate) fn from_document(mut doc: Document) -> DocumentResult<Self> {
        match doc.remove("_id") {
            Some(Bson::ObjectId(oid)) => Ok(Self {
                id: RecordId::from_object_id(oid),
                fields: doc,
            }),
            _ => Err(DocumentError::MissingIdentifier),
        }
    }

    /// Decode into an external type that carries the identifier as `id`
    pub fn deserialize<T: DeserializeOwned>(self) -> DocumentResult<T> {
        let mut doc = self.fields;
        // A stored `id` field never shadows the store identifier
        doc.insert("id", self.id.to_string());
        Ok(bson::from_document(doc)?)
    }
}

/// Serialize a value into storable fields.
///
/// Any `id` or `_id` key the value carries is dropped so the store assigns
/// the identifier.
pub fn to_fields<T: Serialize>(value: &T) -> DocumentResult<Document> {
    let mut doc = bson::to_document(value)?;
    doc.remove("_id");
    doc.remove("id");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use mongodb::bson::oid::ObjectId;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Widget {
        #[serde(default, skip_serializing)]
        id: String,
        name: String,
        price: f64,
    }

    #[test]
    fn test_from_document_moves_native_id() {
        let oid = ObjectId::new();
        let record = Record::from_document(doc! { "_id": oid, "name": "Mug" }).unwrap();

        assert_eq!(record.id.to_string(), oid.to_hex());
        assert!(!record.fields.contains_key("_id"));
        assert_eq!(record.fields.get_str("name").unwrap(), "Mug");
    }

    #[test]
    fn test_from_document_without_object_id() {
        let missing = Record::from_document(doc! { "name": "Mug" });
        assert!(matches!(missing, Err(DocumentError::MissingIdentifier)));

        let wrong_type = Record::from_document(doc! { "_id": "plain-string" });
        assert!(matches!(wrong_type, Err(DocumentError::MissingIdentifier)));
    }

    #[test]
    fn test_deserialize_exposes_id_as_string() {
        let id = RecordId::new();
        let record = Record::new(id, doc! { "name": "Mug", "price": 14.0 });

        let widget: Widget = record.deserialize().unwrap();
        assert_eq!(widget.id, id.to_string());
        assert_eq!(widget.name, "Mug");
        assert_eq!(widget.price, 14.0);
    }

    #[test]
    fn test_deserialize_store_id_wins_over_stored_id_field() {
        let id = RecordId::new();
        let record = Record::new(id, doc! { "id": "legacy-sku-7", "name": "Mug", "price": 14.0 });

        let widget: Widget = record.deserialize().unwrap();
        assert_eq!(widget.id, id.to_string());
        assert_eq!(widget.name, "Mug");
    }

    #[test]
    fn test_deserialize_reports_shape_mismatch() {
        let record = Record::new(RecordId::new(), doc! { "name": 7 });
        let result = record.deserialize::<Widget>();
        assert!(matches!(result, Err(DocumentError::Serialization(_))));
    }

    #[test]
    fn test_to_fields_strips_identifiers() {
        let fields = to_fields(&doc! { "_id": "x", "id": "y", "name": "Mug" }).unwrap();
        assert_eq!(fields, doc! { "name": "Mug" });
    }
}
