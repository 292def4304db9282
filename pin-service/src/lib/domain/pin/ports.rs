use async_trait::async_trait;

use crate::domain::pin::models::CreatePinCommand;
use crate::domain::pin::models::ListPinsQuery;
use crate::domain::pin::models::Pin;
use crate::domain::pin::models::PinId;
use crate::domain::pin::models::UpdatePinCommand;
use crate::pin::errors::PinError;

/// Port for pin domain service operations.
#[async_trait]
pub trait PinServicePort: Send + Sync + 'static {
    /// List pins matching the filter, in the requested order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_pins(&self, query: ListPinsQuery) -> Result<Vec<Pin>, PinError>;

    /// Retrieve a pin by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Pin does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_pin(&self, id: &PinId) -> Result<Pin, PinError>;

    /// Create a new pin dated now.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_pin(&self, command: CreatePinCommand) -> Result<Pin, PinError>;

    /// Update the provided fields of an existing pin.
    ///
    /// # Errors
    /// * `NotFound` - Pin does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_pin(&self, id: &PinId, command: UpdatePinCommand) -> Result<Pin, PinError>;

    /// Delete an existing pin.
    ///
    /// # Errors
    /// * `NotFound` - Pin does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_pin(&self, id: &PinId) -> Result<(), PinError>;
}

/// Persistence operations for pin aggregate.
#[async_trait]
pub trait PinRepository: Send + Sync + 'static {
    async fn list(&self, query: &ListPinsQuery) -> Result<Vec<Pin>, PinError>;

    /// # Returns
    /// Optional pin entity (None if not found)
    async fn find_by_id(&self, id: &PinId) -> Result<Option<Pin>, PinError>;

    async fn create(&self, pin: Pin) -> Result<Pin, PinError>;

    /// # Errors
    /// * `NotFound` - Pin does not exist
    async fn update(&self, pin: Pin) -> Result<Pin, PinError>;

    /// # Errors
    /// * `NotFound` - Pin does not exist
    async fn delete(&self, id: &PinId) -> Result<(), PinError>;
}
