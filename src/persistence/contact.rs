use super::Result;
use crate::data::contact::{Contact, ContactInput};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Persistent storage for contact records.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Returns all stored contacts
    async fn get_all(&self) -> Result<Vec<Contact>>;
    /// Returns the contact with the given name, if there is one
    async fn get_by_name(&self, name: &str) -> Result<Option<Contact>>;
    /// Stores a new contact and returns it with its assigned id
    async fn insert(&self, data: &ContactInput) -> Result<Contact>;
    /// Overwrites the fields of the contact with the given id
    async fn update(&self, id: &str, data: &ContactInput) -> Result<()>;
    /// Deletes the contact with the given name
    async fn delete_by_name(&self, name: &str) -> Result<()>;
}
