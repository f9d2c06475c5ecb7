use super::Result;
use crate::{
    data::contact::{Contact, ContactInput},
    persistence::{contact::ContactStoreApi, Error},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use surrealdb::{engine::any::Any, sql::Thing, Surreal};

#[derive(Clone)]
pub struct SurrealContactStore {
    db: Surreal<Any>,
}

impl SurrealContactStore {
    const TABLE: &'static str = "contacts";

    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactStoreApi for SurrealContactStore {
    async fn get_all(&self) -> Result<Vec<Contact>> {
        let all: Vec<ContactDb> = self.db.select(Self::TABLE).await?;
        Ok(all.into_iter().map(|c| c.into()).collect())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Contact>> {
        let result: Vec<ContactDb> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE name = $name")
            .bind(("table", Self::TABLE))
            .bind(("name", name.to_owned()))
            .await?
            .take(0)?;
        Ok(result.first().map(|c| c.to_owned().into()))
    }

    async fn insert(&self, data: &ContactInput) -> Result<Contact> {
        let entity: ContactDb = data.into();
        let result: Option<ContactDb> = self.db.create(Self::TABLE).content(entity).await?;
        match result {
            None => Err(Error::InsertFailed(data.name.clone())),
            Some(c) => Ok(c.into()),
        }
    }

    async fn update(&self, id: &str, data: &ContactInput) -> Result<()> {
        let entity: ContactDb = data.into();
        let result: Option<ContactDb> = self.db.update((Self::TABLE, id)).content(entity).await?;
        match result {
            None => Err(Error::NoSuchEntity("contact".to_string(), id.to_owned())),
            Some(_) => Ok(()),
        }
    }

    async fn delete_by_name(&self, name: &str) -> Result<()> {
        self.db
            .query("DELETE FROM type::table($table) WHERE name = $name")
            .bind(("table", Self::TABLE))
            .bind(("name", name.to_owned()))
            .await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub name: String,
    pub email: String,
    pub mobile_phone: String,
}

impl From<ContactDb> for Contact {
    fn from(value: ContactDb) -> Self {
        Self {
            id: value.id.map(|t| t.id.to_raw()).unwrap_or_default(),
            name: value.name,
            email: value.email,
            mobile_phone: value.mobile_phone,
        }
    }
}

impl From<&ContactInput> for ContactDb {
    fn from(value: &ContactInput) -> Self {
        Self {
            id: None,
            name: value.name.clone(),
            email: value.email.clone(),
            mobile_phone: value.mobile_phone.clone(),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::persistence::db::get_memory_db;

    async fn get_store() -> SurrealContactStore {
        let mem_db = get_memory_db("test", "contact")
            .await
            .expect("could not create memory db");
        SurrealContactStore::new(mem_db)
    }

    fn contact_input(name: &str) -> ContactInput {
        ContactInput {
            name: name.to_owned(),
            email: "budi@example.com".to_string(),
            mobile_phone: "081234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_by_name() {
        let store = get_store().await;
        let created = store.insert(&contact_input("Budi")).await.unwrap();
        assert!(!created.id.is_empty());

        let res = store.get_by_name("Budi").await;
        assert!(res.is_ok());
        let contact = res.unwrap().unwrap();
        assert_eq!(contact.id, created.id);
        assert_eq!(contact.name, "Budi");
        assert_eq!(contact.email, "budi@example.com");
        assert_eq!(contact.mobile_phone, "081234567890");
    }

    #[tokio::test]
    async fn test_get_by_name_returns_none_for_unknown_name() {
        let store = get_store().await;
        let res = store.get_by_name("Budi").await;
        assert!(res.is_ok());
        assert!(res.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all() {
        let store = get_store().await;
        store.insert(&contact_input("Budi")).await.unwrap();
        store.insert(&contact_input("Andi")).await.unwrap();

        let res = store.get_all().await;
        assert!(res.is_ok());
        let all = res.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|c| c.name == "Budi"));
        assert!(all.iter().any(|c| c.name == "Andi"));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let store = get_store().await;
        let created = store.insert(&contact_input("Budi")).await.unwrap();

        let mut data = contact_input("Budi");
        data.mobile_phone = "081234567891".to_string();
        store.update(&created.id, &data).await.unwrap();

        let contact = store.get_by_name("Budi").await.unwrap().unwrap();
        assert_eq!(contact.id, created.id);
        assert_eq!(contact.mobile_phone, "081234567891");
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let store = get_store().await;
        let res = store.update("nonexistent", &contact_input("Budi")).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_delete_by_name() {
        let store = get_store().await;
        store.insert(&contact_input("Budi")).await.unwrap();

        store.delete_by_name("Budi").await.unwrap();

        assert!(store.get_by_name("Budi").await.unwrap().is_none());
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_name_is_a_no_op_for_unknown_name() {
        let store = get_store().await;
        let res = store.delete_by_name("Budi").await;
        assert!(res.is_ok());
    }
}
