//! Registration form validation rules.
//!
//! The rules are evaluated on raw field values: nothing is trimmed, so a name
//! made only of spaces counts as present.

use super::form::RegistrationForm;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_DOCUMENT_ID_LEN: usize = 8;
pub const CELLPHONE_LEN: usize = 9;

/// A single broken registration rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    EmailMissingAt,
    PasswordTooShort { min_len: usize },
    NameEmpty,
    LastNameEmpty,
    DocumentIdTooShort { min_len: usize },
    CellphoneWrongLength { expected: usize },
    TermsNotAccepted,
}

/// Every rule the form currently breaks, in field order.
pub fn violations(form: &RegistrationForm) -> Vec<Violation> {
    let mut out = Vec::new();
    if !form.email.contains('@') {
        out.push(Violation::EmailMissingAt);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        out.push(Violation::PasswordTooShort {
            min_len: MIN_PASSWORD_LEN,
        });
    }
    if form.name.is_empty() {
        out.push(Violation::NameEmpty);
    }
    if form.last_name.is_empty() {
        out.push(Violation::LastNameEmpty);
    }
    if form.document_id.chars().count() < MIN_DOCUMENT_ID_LEN {
        out.push(Violation::DocumentIdTooShort {
            min_len: MIN_DOCUMENT_ID_LEN,
        });
    }
    if form.cellphone.chars().count() != CELLPHONE_LEN {
        out.push(Violation::CellphoneWrongLength {
            expected: CELLPHONE_LEN,
        });
    }
    if !form.accepted_terms {
        out.push(Violation::TermsNotAccepted);
    }
    out
}

/// Whether the form may be submitted.
pub fn validate(form: &RegistrationForm) -> bool {
    violations(form).is_empty()
}
