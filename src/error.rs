use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::database::StoreError;
use crate::handlers::shared::ApiResponse;
use crate::services::geocoding::GeocodeError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Address could not be geocoded: {0}")]
    GeocodeNotFound(String),

    #[error("Geocoding provider unreachable: {0}")]
    ProviderUnreachable(String),

    #[error("Geocoding provider returned an invalid response: {0}")]
    ProviderResponseInvalid(String),

    #[error("Geocoding provider rejected the request: {0}")]
    ProviderRejected(String),

    #[error("Database error: {0}")]
    BackendUnavailable(sqlx::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::GeocodeNotFound(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ProviderUnreachable(_)
            | AppError::ProviderResponseInvalid(_)
            | AppError::ProviderRejected(_) => StatusCode::BAD_GATEWAY,
            AppError::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        if status_code.is_server_error() {
            log::error!(
                "Request failed with status {}: {}",
                status_code,
                error_message
            );
        } else {
            log::warn!(
                "Request failed with status {}: {}",
                status_code,
                error_message
            );
        }

        let response_body = ApiResponse::<()>::error(&error_message);

        HttpResponse::build(status_code).json(response_body)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => AppError::NotFound(format!("Location {} not found", id)),
            StoreError::BackendUnavailable(e) => AppError::BackendUnavailable(e),
        }
    }
}

impl From<GeocodeError> for AppError {
    fn from(error: GeocodeError) -> Self {
        match error {
            GeocodeError::NotFound(query) => AppError::GeocodeNotFound(query),
            GeocodeError::ProviderUnreachable(reason) => AppError::ProviderUnreachable(reason),
            GeocodeError::ProviderResponseInvalid(reason) => {
                AppError::ProviderResponseInvalid(reason)
            }
            rejected @ GeocodeError::ProviderRejected { .. } => {
                AppError::ProviderRejected(rejected.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Validation("bad id".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                AppError::GeocodeNotFound("q".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::ProviderUnreachable("timeout".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::ProviderResponseInvalid("eof".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::BackendUnavailable(sqlx::Error::PoolClosed),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{}", error);
        }
    }

    #[test]
    fn test_store_errors_keep_their_kind() {
        let id = Uuid::new_v4();

        assert!(matches!(
            AppError::from(StoreError::NotFound(id)),
            AppError::NotFound(msg) if msg.contains(&id.to_string())
        ));
        assert!(matches!(
            AppError::from(StoreError::BackendUnavailable(sqlx::Error::PoolTimedOut)),
            AppError::BackendUnavailable(_)
        ));
    }

    #[test]
    fn test_geocode_errors_keep_their_kind() {
        assert!(matches!(
            AppError::from(GeocodeError::NotFound("q".into())),
            AppError::GeocodeNotFound(_)
        ));
        assert!(matches!(
            AppError::from(GeocodeError::ProviderRejected {
                status: "OVER_QUERY_LIMIT".into(),
                message: None,
            }),
            AppError::ProviderRejected(msg) if msg.contains("OVER_QUERY_LIMIT")
        ));
    }
}
