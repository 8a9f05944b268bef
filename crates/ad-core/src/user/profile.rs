use serde::{Deserialize, Serialize};

use crate::ids::SubjectId;
use crate::registration::RegistrationForm;

pub const DEFAULT_ROLE: &str = "cliente";

/// Application-level user record, stored apart from the credential.
///
/// Field names on the wire follow the document store's existing schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: SubjectId,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidos")]
    pub last_name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "celular")]
    pub cellphone: String,
    #[serde(rename = "documentoIdentidad")]
    pub document_id: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "fechaRegistro")]
    pub registered_at_ms: i64,
    #[serde(rename = "esAnonimo")]
    pub anonymous: bool,
}

impl UserProfile {
    /// Build the record for a freshly created customer account.
    pub fn new_customer(uid: SubjectId, form: &RegistrationForm, registered_at_ms: i64) -> Self {
        Self {
            uid,
            first_name: form.name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            cellphone: form.cellphone.clone(),
            document_id: form.document_id.clone(),
            role: DEFAULT_ROLE.to_string(),
            registered_at_ms,
            anonymous: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::FormField;

    #[test]
    fn test_new_customer_copies_form_fields() {
        let mut form = RegistrationForm::default();
        form.set_field(FormField::Name, "Ana");
        form.set_field(FormField::LastName, "Lima");
        form.set_field(FormField::DocumentId, "12345678");
        form.set_field(FormField::Email, "a@b.com");
        form.set_field(FormField::Password, "secret");
        form.set_field(FormField::Cellphone, "987654321");

        let profile = UserProfile::new_customer(SubjectId::from("uid-1"), &form, 1_700_000_000_000);

        assert_eq!(profile.uid.as_str(), "uid-1");
        assert_eq!(profile.first_name, "Ana");
        assert_eq!(profile.last_name, "Lima");
        assert_eq!(profile.document_id, "12345678");
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.cellphone, "987654321");
        assert_eq!(profile.role, "cliente");
        assert_eq!(profile.registered_at_ms, 1_700_000_000_000);
        assert!(!profile.anonymous);
    }
}
