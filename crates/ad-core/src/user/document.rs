//! Mapping between [`UserProfile`] and the store's JSON document shape.

use serde_json::{Map, Value};

use super::profile::UserProfile;
use crate::ids::SubjectId;

/// Collection holding one document per account, keyed by uid.
pub const USERS_COLLECTION: &str = "users";

impl UserProfile {
    pub fn to_document(&self) -> Map<String, Value> {
        let mut doc = Map::new();
        doc.insert("uid".into(), Value::from(self.uid.as_str()));
        doc.insert("nombre".into(), Value::from(self.first_name.as_str()));
        doc.insert("apellidos".into(), Value::from(self.last_name.as_str()));
        doc.insert("correo".into(), Value::from(self.email.as_str()));
        doc.insert("celular".into(), Value::from(self.cellphone.as_str()));
        doc.insert(
            "documentoIdentidad".into(),
            Value::from(self.document_id.as_str()),
        );
        doc.insert("rol".into(), Value::from(self.role.as_str()));
        doc.insert("fechaRegistro".into(), Value::from(self.registered_at_ms));
        doc.insert("esAnonimo".into(), Value::from(self.anonymous));
        doc
    }

    /// Read a stored document. Missing or mistyped keys fall back to empty values.
    pub fn from_document(doc: &Map<String, Value>) -> Self {
        let text = |key: &str| {
            doc.get(key)
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string()
        };

        Self {
            uid: SubjectId::from(text("uid")),
            first_name: text("nombre"),
            last_name: text("apellidos"),
            email: text("correo"),
            cellphone: text("celular"),
            document_id: text("documentoIdentidad"),
            role: text("rol"),
            registered_at_ms: doc
                .get("fechaRegistro")
                .and_then(Value::as_i64)
                .unwrap_or(0),
            anonymous: doc
                .get("esAnonimo")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }
}
