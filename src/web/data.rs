use crate::data::contact::{Contact, ContactInput};
use rocket::response::{Flash, Redirect};
use rocket::{FromForm, Responder};
use rocket_dyn_templates::Template;
use serde::Serialize;

/// The add-form body. Wire field names follow the original HTML forms.
#[derive(Debug, FromForm)]
pub struct NewContactForm {
    pub name: String,
    pub email: String,
    #[field(name = "mobilePhone")]
    pub mobile_phone: String,
}

/// The edit-form body, carrying the record id and the name before the edit
#[derive(Debug, FromForm)]
pub struct EditContactForm {
    pub id: String,
    #[field(name = "oldName")]
    pub old_name: String,
    pub name: String,
    pub email: String,
    #[field(name = "mobilePhone")]
    pub mobile_phone: String,
}

#[derive(Debug, FromForm)]
pub struct DeleteContactForm {
    pub name: String,
}

impl From<NewContactForm> for ContactInput {
    fn from(value: NewContactForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            mobile_phone: value.mobile_phone,
        }
    }
}

impl From<&EditContactForm> for ContactInput {
    fn from(value: &EditContactForm) -> Self {
        Self {
            name: value.name.clone(),
            email: value.email.clone(),
            mobile_phone: value.mobile_phone.clone(),
        }
    }
}

/// What the edit template renders: the form fields plus the hidden id and
/// oldName values, regardless of whether they come from a lookup or from a
/// rejected submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditContactView {
    pub id: String,
    pub old_name: String,
    pub name: String,
    pub email: String,
    pub mobile_phone: String,
}

impl From<Contact> for EditContactView {
    fn from(value: Contact) -> Self {
        Self {
            id: value.id,
            old_name: value.name.clone(),
            name: value.name,
            email: value.email,
            mobile_phone: value.mobile_phone,
        }
    }
}

impl From<&EditContactForm> for EditContactView {
    fn from(value: &EditContactForm) -> Self {
        Self {
            id: value.id.clone(),
            old_name: value.old_name.clone(),
            name: value.name.clone(),
            email: value.email.clone(),
            mobile_phone: value.mobile_phone.clone(),
        }
    }
}

/// A form submission either redirects with a flash message or re-renders the
/// form with validation errors.
#[derive(Responder)]
pub enum FormResponse {
    Redirect(Flash<Redirect>),
    Invalid(Template),
}
