use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;

use super::*;
use crate::SessionToken;
use crate::api::models::ValidationErrors;

impl ApiClient {
    /// Build auth headers from the given session token.
    fn auth_headers(&self, token: &SessionToken) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&token.bearer()).unwrap());
        headers
    }

    /// Execute a GET request with auth headers.
    pub(super) async fn authenticated_get(
        &self,
        url: &str,
        token: &SessionToken,
    ) -> Result<String, NimbusError> {
        let headers = self.auth_headers(token);
        let resp = self.http.get(url).headers(headers).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!(url, "Got 401, session token is stale or missing");
            return Err(NimbusError::ApiError {
                status: 401,
                message: body,
            });
        }

        if !status.is_success() {
            return Err(api_error(status.as_u16(), body));
        }

        Ok(body)
    }

    /// Execute a POST request with auth headers and JSON body.
    pub(super) async fn authenticated_post(
        &self,
        url: &str,
        token: &SessionToken,
        body: &impl Serialize,
    ) -> Result<String, NimbusError> {
        let headers = self.auth_headers(token);
        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        let resp_body = resp.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), resp_body));
        }

        Ok(resp_body)
    }
}

/// Convert a non-success response to `ApiError`, flattening structured
/// validation payloads into a readable message.
fn api_error(status: u16, body: String) -> NimbusError {
    let message = match serde_json::from_str::<ValidationErrors>(&body) {
        Ok(v) if !v.errors.is_empty() => v.flatten(),
        _ => body,
    };
    NimbusError::ApiError { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_flattens_validation_payload() {
        let body = r#"{"errors":{"interval":["must be positive"],"name":["required","too short"]}}"#;
        let err = api_error(422, body.to_string());
        match err {
            NimbusError::ApiError { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "interval: must be positive; name: required, too short");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_passes_plain_body_through() {
        let err = api_error(503, "upstream unavailable".to_string());
        match err {
            NimbusError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
