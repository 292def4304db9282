use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::pin::models::ListPinsQuery;
use crate::domain::pin::models::OrderDirection;
use crate::domain::pin::models::PinOrderField;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PinResponseData;
use crate::inbound::http::router::AppState;
use crate::pin::errors::PinError;

#[derive(Debug, Default, Deserialize)]
pub struct ListPinsParams {
    author: Option<String>,
    order_by: Option<String>,
    order_dir: Option<String>,
}

impl ListPinsParams {
    fn try_into_query(self) -> Result<ListPinsQuery, PinError> {
        Ok(ListPinsQuery {
            author: self.author.filter(|author| !author.is_empty()),
            order_by: self
                .order_by
                .as_deref()
                .map(str::parse::<PinOrderField>)
                .transpose()?
                .unwrap_or_default(),
            order_dir: self
                .order_dir
                .as_deref()
                .map(str::parse::<OrderDirection>)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

pub async fn list_pins(
    State(state): State<AppState>,
    params: Result<Query<ListPinsParams>, QueryRejection>,
) -> Result<ApiSuccess<ListPinsResponseData>, ApiError> {
    let Query(params) = params?;
    let query = params.try_into_query()?;

    state
        .pin_service
        .list_pins(query)
        .await
        .map_err(ApiError::from)
        .map(|pins| {
            let pins: Vec<PinResponseData> = pins.iter().map(|p| p.into()).collect();
            ApiSuccess::new(
                StatusCode::OK,
                ListPinsResponseData {
                    count: pins.len(),
                    pins,
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPinsResponseData {
    pub pins: Vec<PinResponseData>,
    pub count: usize,
}
