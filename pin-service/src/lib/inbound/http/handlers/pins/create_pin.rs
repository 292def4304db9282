use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::pin::models::CreatePinCommand;
use crate::domain::pin::models::ImageLink;
use crate::domain::pin::models::PinAuthor;
use crate::domain::pin::models::PinBody;
use crate::domain::pin::models::PinTitle;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PinResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::pin::errors::PinError;

pub async fn create_pin(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    body: Result<Json<CreatePinRequest>, JsonRejection>,
) -> Result<ApiSuccess<PinResponseData>, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    let pin = state.pin_service.create_pin(command).await?;
    tracing::info!(pin_id = %pin.id, user_id = %auth_user.user_id, "Pin created");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&pin).into()))
}

/// HTTP request body for creating a pin (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePinRequest {
    title: String,
    body: String,
    image_link: String,
    author: String,
}

impl CreatePinRequest {
    fn try_into_command(self) -> Result<CreatePinCommand, PinError> {
        Ok(CreatePinCommand {
            title: PinTitle::new(self.title)?,
            body: PinBody::new(self.body)?,
            image_link: ImageLink::new(self.image_link)?,
            author: PinAuthor::new(self.author)?,
        })
    }
}
