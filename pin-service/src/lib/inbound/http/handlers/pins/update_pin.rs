use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::pin::models::ImageLink;
use crate::domain::pin::models::PinAuthor;
use crate::domain::pin::models::PinBody;
use crate::domain::pin::models::PinId;
use crate::domain::pin::models::PinTitle;
use crate::domain::pin::models::UpdatePinCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PinResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::pin::errors::PinError;

/// HTTP request body for updating a pin (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdatePinRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image_link: Option<String>,
    pub author: Option<String>,
}

impl UpdatePinRequest {
    fn try_into_command(self) -> Result<UpdatePinCommand, PinError> {
        Ok(UpdatePinCommand {
            title: self.title.map(PinTitle::new).transpose()?,
            body: self.body.map(PinBody::new).transpose()?,
            image_link: self.image_link.map(ImageLink::new).transpose()?,
            author: self.author.map(PinAuthor::new).transpose()?,
        })
    }
}

pub async fn update_pin(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePinRequest>, JsonRejection>,
) -> Result<ApiSuccess<PinResponseData>, ApiError> {
    // Parse pin ID and request at HTTP boundary - errors automatically converted
    let pin_id = PinId::from_string(&id).map_err(PinError::from)?;
    let Json(body) = body?;
    let command = body.try_into_command()?;

    let pin = state.pin_service.update_pin(&pin_id, command).await?;
    tracing::info!(pin_id = %pin.id, user_id = %auth_user.user_id, "Pin updated");

    Ok(ApiSuccess::new(StatusCode::OK, (&pin).into()))
}
