use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::ContactId,
    protocol::{Contact, ContactFields},
};

use crate::error::StoreError;

/// The remote contact store: a REST collection at `{base_url}/contacts`.
/// Front ends and tests can substitute their own implementation; the
/// controller only ever sees this trait.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>, StoreError>;
    async fn create(&self, fields: &ContactFields) -> Result<(), StoreError>;
    async fn update(&self, id: &ContactId, fields: &ContactFields) -> Result<(), StoreError>;
    async fn delete(&self, id: &ContactId) -> Result<(), StoreError>;
}

/// HTTP implementation backed by `reqwest`. Non-success statuses become
/// [`StoreError::Transport`] via `error_for_status`; create/update response
/// bodies are not consumed beyond the success signal.
pub struct HttpContactStore {
    http: Client,
    base_url: String,
}

impl HttpContactStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/contacts", self.base_url)
    }

    fn resource_url(&self, id: &ContactId) -> String {
        format!("{}/contacts/{id}", self.base_url)
    }
}

#[async_trait]
impl ContactStore for HttpContactStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let contacts = self
            .http
            .get(self.collection_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(contacts)
    }

    async fn create(&self, fields: &ContactFields) -> Result<(), StoreError> {
        self.http
            .post(self.collection_url())
            .json(fields)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update(&self, id: &ContactId, fields: &ContactFields) -> Result<(), StoreError> {
        self.http
            .put(self.resource_url(id))
            .json(fields)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, id: &ContactId) -> Result<(), StoreError> {
        self.http
            .delete(self.resource_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
