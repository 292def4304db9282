use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::pin::models::PinId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PinResponseData;
use crate::inbound::http::router::AppState;
use crate::pin::errors::PinError;

pub async fn get_pin(
    State(state): State<AppState>,
    Path(pin_id): Path<String>,
) -> Result<ApiSuccess<PinResponseData>, ApiError> {
    let pin_id = PinId::from_string(&pin_id).map_err(PinError::from)?;

    state
        .pin_service
        .get_pin(&pin_id)
        .await
        .map_err(ApiError::from)
        .map(|ref pin| ApiSuccess::new(StatusCode::OK, pin.into()))
}
