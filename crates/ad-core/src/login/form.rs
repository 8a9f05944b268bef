use serde::{Deserialize, Serialize};

use crate::registration::validation::MIN_PASSWORD_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub password_hidden: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            password_hidden: true,
        }
    }
}

impl LoginForm {
    /// Replace a field. Emails are stored trimmed, passwords verbatim.
    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Email => self.email = value.trim().to_string(),
            LoginField::Password => self.password = value,
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_hidden = !self.password_hidden;
    }
}

pub fn validate_login(form: &LoginForm) -> bool {
    form.email.contains('@') && form.password.chars().count() >= MIN_PASSWORD_LEN
}
