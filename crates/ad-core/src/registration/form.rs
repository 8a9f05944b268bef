use serde::{Deserialize, Serialize};

/// Editable text fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    LastName,
    DocumentId,
    Email,
    Password,
    Cellphone,
}

/// Snapshot of everything the user has typed on the sign-up screen.
///
/// Every field always holds a defined value; the defaults are empty strings,
/// terms not accepted and the password masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub last_name: String,
    pub document_id: String,
    pub email: String,
    pub password: String,
    pub cellphone: String,
    pub accepted_terms: bool,
    pub password_hidden: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            last_name: String::new(),
            document_id: String::new(),
            email: String::new(),
            password: String::new(),
            cellphone: String::new(),
            accepted_terms: false,
            password_hidden: true,
        }
    }
}

impl RegistrationForm {
    /// Replace the targeted field with `value`.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::LastName => self.last_name = value,
            FormField::DocumentId => self.document_id = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::Cellphone => self.cellphone = value,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::LastName => &self.last_name,
            FormField::DocumentId => &self.document_id,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::Cellphone => &self.cellphone,
        }
    }

    pub fn toggle_terms(&mut self) {
        self.accepted_terms = !self.accepted_terms;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_hidden = !self.password_hidden;
    }
}
