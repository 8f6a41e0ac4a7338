//! Lambda HTTP trigger adapter.
//!
//! Decodes the API Gateway request body, runs the [`CodegenService`] and
//! renders the [`Outcome`] according to the configured [`ResponseMode`].
//! Response bodies are JSON-encoded strings.

use aws_config::SdkConfig;
use lambda_http::{Body, Request, Response};
use tracing::warn;

use crate::application::CodegenService;
use crate::domain::outcome::COMPLETE_MESSAGE;
use crate::domain::{GenerationRequest, Outcome};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_service;
use crate::infrastructure::config::response::ResponseMode;
use crate::infrastructure::config::settings::Config;

/// Transport-neutral HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status_code: u16,
    /// JSON-encoded body.
    pub body: String,
}

impl ApiResponse {
    fn json_message(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: serde_json::Value::String(message.to_string()).to_string(),
        }
    }

    /// Render an outcome under the given mode.
    #[must_use]
    pub fn render(mode: ResponseMode, outcome: &Outcome) -> Self {
        match mode {
            ResponseMode::Legacy => Self::json_message(200, COMPLETE_MESSAGE),
            ResponseMode::Structured => Self::json_message(outcome.status_code(), &outcome.message()),
        }
    }

    /// Convert into a `lambda_http` response.
    ///
    /// # Errors
    ///
    /// Returns an error if the response cannot be assembled.
    pub fn into_http(self) -> std::result::Result<Response<Body>, lambda_http::Error> {
        let response = Response::builder()
            .status(self.status_code)
            .header("content-type", "application/json")
            .body(Body::from(self.body))?;
        Ok(response)
    }
}

/// Handle one raw trigger body.
///
/// A body that does not decode never reaches the service, so no outbound
/// call is made for it.
///
/// # Errors
///
/// In [`ResponseMode::Legacy`], an undecodable body is returned as an error
/// and fails the invocation. In structured mode it becomes a 400 response.
pub async fn respond(service: &CodegenService, mode: ResponseMode, body: &[u8]) -> Result<ApiResponse> {
    let request = match GenerationRequest::from_body(body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected generation request");
            return match mode {
                ResponseMode::Legacy => Err(e.into()),
                ResponseMode::Structured => Ok(ApiResponse::render(
                    mode,
                    &Outcome::BadInput {
                        reason: e.to_string(),
                    },
                )),
            };
        }
    };

    let outcome = service.process(&request).await;
    if mode == ResponseMode::Legacy && !outcome.is_success() {
        warn!(
            status = outcome.status_code(),
            "Acknowledging a failed request in legacy response mode"
        );
    }
    Ok(ApiResponse::render(mode, &outcome))
}

/// Lambda entry point for one HTTP event.
///
/// Builds fresh service clients from the shared SDK configuration, so no
/// mutable state crosses invocations.
///
/// # Errors
///
/// Returns an error for undecodable bodies in legacy mode.
pub async fn handle(
    config: &Config,
    sdk_config: &SdkConfig,
    event: Request,
) -> std::result::Result<Response<Body>, lambda_http::Error> {
    let service = build_service(config, sdk_config);
    let body: &[u8] = event.body().as_ref();
    let response = respond(&service, config.response_mode, body).await?;
    response.into_http()
}
