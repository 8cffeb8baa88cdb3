use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::types::ApiResponse;

/// JSON body extractor that reports rejections through `AppError`
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => {
                return AppError::BadRequest(format!("Invalid JSON data: {}", err)).into_response()
            }
            JsonRejection::JsonSyntaxError(err) => {
                return AppError::BadRequest(format!("Invalid JSON syntax: {}", err))
                    .into_response()
            }
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            JsonRejection::BytesRejection(err) => format!("Failed to read request body: {}", err),
            _ => "Failed to parse JSON body".to_string(),
        };

        // Oversized bodies and wrong content types keep their own status codes
        (status, Json(ApiResponse::<()>::error(Some(message), None))).into_response()
    }
}
