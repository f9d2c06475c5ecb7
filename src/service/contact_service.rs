use super::{Error, Result};
use crate::constants::{
    VALIDATION_EMAIL_INVALID, VALIDATION_MOBILE_PHONE_INVALID, VALIDATION_NAME_REQUIRED,
    VALIDATION_NAME_TAKEN,
};
use crate::data::contact::{Contact, ContactField, ContactInput, FieldError};
use crate::persistence::{self, contact::ContactStoreApi};
use crate::util::validate;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Returns all stored contacts
    async fn get_contacts(&self) -> Result<Vec<Contact>>;

    /// Looks up a single contact by its name
    async fn get_contact_by_name(&self, name: &str) -> Result<Option<Contact>>;

    /// Checks the given input against the contact validation rules and returns
    /// the list of failed fields, empty if the input is accepted. For edits,
    /// `prior_name` carries the name the record had before, so a contact can
    /// keep its own name.
    async fn validate_contact<'a>(
        &self,
        input: &ContactInput,
        prior_name: Option<&'a str>,
    ) -> Result<Vec<FieldError>>;

    /// Persists a new contact and returns it with its assigned id
    async fn add_contact(&self, input: ContactInput) -> Result<Contact>;

    /// Overwrites the mutable fields of the contact with the given id
    async fn update_contact(&self, id: &str, input: ContactInput) -> Result<()>;

    /// Deletes the contact with the given name
    async fn delete_contact_by_name(&self, name: &str) -> Result<()>;
}

/// The contact service is responsible for managing the contacts
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStoreApi>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.store.get_all().await?;
        Ok(contacts)
    }

    async fn get_contact_by_name(&self, name: &str) -> Result<Option<Contact>> {
        let contact = self.store.get_by_name(name).await?;
        Ok(contact)
    }

    async fn validate_contact<'a>(
        &self,
        input: &ContactInput,
        prior_name: Option<&'a str>,
    ) -> Result<Vec<FieldError>> {
        let mut errors = vec![];

        if input.name.trim().is_empty() {
            errors.push(FieldError::new(ContactField::Name, VALIDATION_NAME_REQUIRED));
        } else {
            // a contact may keep its own name on edit
            let keeps_own_name = prior_name.is_some_and(|prior| prior == input.name);
            if !keeps_own_name && self.store.get_by_name(&input.name).await?.is_some() {
                errors.push(FieldError::new(ContactField::Name, VALIDATION_NAME_TAKEN));
            }
        }

        if !validate::is_valid_email(&input.email) {
            errors.push(FieldError::new(ContactField::Email, VALIDATION_EMAIL_INVALID));
        }

        if !validate::is_valid_mobile_phone(&input.mobile_phone) {
            errors.push(FieldError::new(
                ContactField::MobilePhone,
                VALIDATION_MOBILE_PHONE_INVALID,
            ));
        }

        Ok(errors)
    }

    async fn add_contact(&self, input: ContactInput) -> Result<Contact> {
        let contact = self.store.insert(&input).await?;
        Ok(contact)
    }

    async fn update_contact(&self, id: &str, input: ContactInput) -> Result<()> {
        match self.store.update(id, &input).await {
            Err(persistence::Error::NoSuchEntity(_, _)) => Err(Error::NotFound),
            Err(e) => Err(e.into()),
            Ok(()) => Ok(()),
        }
    }

    async fn delete_contact_by_name(&self, name: &str) -> Result<()> {
        self.store.delete_by_name(name).await?;
        Ok(())
    }
}
