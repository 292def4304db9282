use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::domain::pin::models::PinId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::pin::errors::PinError;

pub async fn delete_pin(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<DeletePinResponseData>, ApiError> {
    let pin_id = PinId::from_string(&id).map_err(PinError::from)?;

    state.pin_service.delete_pin(&pin_id).await?;
    tracing::info!(pin_id = %pin_id, user_id = %auth_user.user_id, "Pin deleted");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeletePinResponseData {
            id: pin_id.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePinResponseData {
    pub id: String,
}
