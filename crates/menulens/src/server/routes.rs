//! Route handlers for the Menulens API.
//!
//! `POST /api/process-menu` accepts a multipart upload (`image` file plus
//! the caller's `openaiKey`), runs the orchestration flow with
//! request-scoped provider clients, and returns the enriched dish list.

use axum::extract::multipart::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use menulens_core::{MenuOrchestrator, MenuRequest, MenuResponse, OrchestrateError};
use serde_json::json;

use super::AppState;

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API-level error mapped to the service's JSON error bodies.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with `{"error": ...}`
    BadRequest(String),
    /// 500 with `{"error": ..., "details": ...}`
    Internal { error: String, details: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": error }))).into_response()
            }
            ApiError::Internal { error, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error, "details": details })),
            )
                .into_response(),
        }
    }
}

impl From<OrchestrateError> for ApiError {
    fn from(err: OrchestrateError) -> Self {
        match err {
            OrchestrateError::Validation { message } => ApiError::BadRequest(message),
            OrchestrateError::ExtractionParse { message } => ApiError::Internal {
                error: "Failed to parse menu items".to_string(),
                details: message,
            },
            OrchestrateError::ExtractionService { message, .. }
            | OrchestrateError::Generation { message, .. } => ApiError::Internal {
                error: "Failed to process menu".to_string(),
                details: message,
            },
        }
    }
}

/// The fields pulled out of the multipart body.
#[derive(Default)]
struct Upload {
    image: Option<(Vec<u8>, String)>,
    api_key: Option<String>,
}

/// Read the multipart form, collecting the image part and the key field.
///
/// Unknown fields are skipped; a second occurrence of a known field
/// overwrites the first.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    let mut upload = Upload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
                upload.image = Some((bytes.to_vec(), mime_type));
            }
            Some("openaiKey") => {
                let key = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
                upload.api_key = Some(key);
            }
            _ => {}
        }
    }

    Ok(upload)
}

/// `POST /api/process-menu`
pub async fn process_menu(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MenuResponse>, ApiError> {
    let upload = read_upload(&mut multipart).await?;

    let Some((image_bytes, mime_type)) = upload.image else {
        return Err(ApiError::BadRequest("No image file provided".to_string()));
    };
    let api_key = match upload.api_key {
        Some(key) if !key.is_empty() => key,
        _ => {
            return Err(ApiError::BadRequest(
                "OpenAI API key is required".to_string(),
            ))
        }
    };

    // Fresh provider clients per request: the credential stays scoped to
    // this call context
    let orchestrator = MenuOrchestrator::for_request(&state.config, &api_key);
    let response = orchestrator
        .process_menu(MenuRequest {
            image_bytes,
            mime_type,
            api_key,
        })
        .await?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::extract::FromRequest;
    use axum::http::Request;
    use menulens_core::Config;
    use std::sync::Arc;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const BOUNDARY: &str = "menulens-test-boundary";

    /// One part of a hand-built multipart form.
    enum Part<'a> {
        File {
            name: &'a str,
            mime: &'a str,
            bytes: &'a [u8],
        },
        Text {
            name: &'a str,
            value: &'a str,
        },
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::File { name, mime, bytes } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; \
                             filename=\"menu.jpg\"\r\nContent-Type: {mime}\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                    body.extend_from_slice(b"\r\n");
                }
                Part::Text { name, value } => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                    body.extend_from_slice(b"\r\n");
                }
            }
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn multipart_from(parts: &[Part<'_>]) -> Multipart {
        let request = Request::builder()
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();
        Multipart::from_request(request, &()).await.unwrap()
    }

    fn state() -> State<AppState> {
        State(AppState {
            config: Arc::new(Config::default()),
        })
    }

    #[tokio::test]
    async fn test_missing_image_field_is_400() {
        let multipart = multipart_from(&[Part::Text {
            name: "openaiKey",
            value: "sk-test",
        }])
        .await;

        let err = process_menu(state(), multipart).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No image file provided");
    }

    #[tokio::test]
    async fn test_missing_key_field_is_400() {
        let multipart = multipart_from(&[Part::File {
            name: "image",
            mime: "image/jpeg",
            bytes: &[0xFF, 0xD8, 0xFF, 0xE0],
        }])
        .await;

        let err = process_menu(state(), multipart).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "OpenAI API key is required");
    }

    #[tokio::test]
    async fn test_empty_key_field_is_400() {
        let multipart = multipart_from(&[
            Part::File {
                name: "image",
                mime: "image/jpeg",
                bytes: &[0xFF, 0xD8, 0xFF, 0xE0],
            },
            Part::Text {
                name: "openaiKey",
                value: "",
            },
        ])
        .await;

        let err = process_menu(state(), multipart).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "OpenAI API key is required");
    }

    #[tokio::test]
    async fn test_read_upload_collects_both_fields() {
        let mut multipart = multipart_from(&[
            Part::File {
                name: "image",
                mime: "image/png",
                bytes: &[0x89, 0x50, 0x4E, 0x47],
            },
            Part::Text {
                name: "openaiKey",
                value: "sk-test",
            },
            Part::Text {
                name: "ignored",
                value: "skipped",
            },
        ])
        .await;

        let upload = read_upload(&mut multipart).await.unwrap();
        let (bytes, mime_type) = upload.image.unwrap();
        assert_eq!(bytes, vec![0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(mime_type, "image/png");
        assert_eq!(upload.api_key.as_deref(), Some("sk-test"));
    }

    #[tokio::test]
    async fn test_health_shape() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "OK");
        // RFC 3339 timestamp with a date-time separator
        assert!(body["timestamp"].as_str().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn test_validation_error_maps_to_400() {
        let err = ApiError::from(OrchestrateError::Validation {
            message: "No image file provided".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No image file provided");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_parse_error_maps_to_500_with_details() {
        let err = ApiError::from(OrchestrateError::ExtractionParse {
            message: "reply did not contain a JSON dish array".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to parse menu items");
        assert!(body["details"].as_str().unwrap().contains("JSON dish array"));
    }

    #[tokio::test]
    async fn test_service_error_maps_to_500() {
        let err = ApiError::from(OrchestrateError::ExtractionService {
            message: "vision HTTP 503".to_string(),
            status_code: Some(503),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to process menu");
    }
}
