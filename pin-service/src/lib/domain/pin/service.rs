use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::pin::models::CreatePinCommand;
use crate::domain::pin::models::ListPinsQuery;
use crate::domain::pin::models::Pin;
use crate::domain::pin::models::PinId;
use crate::domain::pin::models::UpdatePinCommand;
use crate::pin::errors::PinError;
use crate::pin::ports::PinRepository;
use crate::pin::ports::PinServicePort;

/// Domain service implementation for pin operations.
pub struct PinService<PR>
where
    PR: PinRepository,
{
    repository: Arc<PR>,
}

impl<PR> PinService<PR>
where
    PR: PinRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PinServicePort for PinService<PR>
where
    PR: PinRepository,
{
    async fn list_pins(&self, query: ListPinsQuery) -> Result<Vec<Pin>, PinError> {
        self.repository.list(&query).await
    }

    async fn get_pin(&self, id: &PinId) -> Result<Pin, PinError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PinError::NotFound(id.to_string()))
    }

    async fn create_pin(&self, command: CreatePinCommand) -> Result<Pin, PinError> {
        let pin = Pin {
            id: PinId::new(),
            title: command.title,
            body: command.body,
            image_link: command.image_link,
            author: command.author,
            date_created: Utc::now(),
        };

        self.repository.create(pin).await
    }

    async fn update_pin(&self, id: &PinId, command: UpdatePinCommand) -> Result<Pin, PinError> {
        let mut pin = self.get_pin(id).await?;

        if let Some(title) = command.title {
            pin.title = title;
        }

        if let Some(body) = command.body {
            pin.body = body;
        }

        if let Some(image_link) = command.image_link {
            pin.image_link = image_link;
        }

        if let Some(author) = command.author {
            pin.author = author;
        }

        self.repository.update(pin).await
    }

    async fn delete_pin(&self, id: &PinId) -> Result<(), PinError> {
        self.repository.delete(id).await
    }
}
