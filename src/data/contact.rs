use serde::{Deserialize, Serialize};

/// A stored contact record. The id is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile_phone: String,
}

/// The mutable fields of a contact, as submitted via the add and edit forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub mobile_phone: String,
}

/// The form field a validation error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    MobilePhone,
}

/// A single failed validation rule, keyed to the field it failed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: ContactField, message: &str) -> Self {
        Self {
            field,
            message: message.to_owned(),
        }
    }
}
