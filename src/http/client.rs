use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::http::csrf::{CsrfToken, read_cookie};
use crate::http::{ApiRequest, Credentials, Method, RawResponse, Transport, TransportError};
use crate::models::config::ConsoleConfig;

/// Body of an outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// Structured data, serialized to JSON.
    Json(Value),
    /// Pre-formed payload (multipart upload, form data) sent untouched.
    Raw {
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl RequestBody {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|err| ApiError::Encode(err.to_string()))
    }
}

/// Decoded body of a successful response.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiValue {
    /// HTTP 204.
    NoContent,
    Json(Value),
    Text(String),
}

impl ApiValue {
    /// Deserializes a JSON body into `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            ApiValue::Json(value) => {
                serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
            }
            ApiValue::Text(_) => Err(ApiError::Decode("expected a JSON body".to_string())),
            ApiValue::NoContent => Err(ApiError::Decode("response had no content".to_string())),
        }
    }
}

/// Best-effort decoded body of an error response.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBody {
    Empty,
    Json(Value),
    Text(String),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("API error {status}")]
    Status { status: u16, body: ErrorBody },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status of an API error response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Issues requests against the admin API root with the console's conventions:
/// JSON accept header, same-origin credentials and a CSRF header on mutations.
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    csrf: Option<CsrfToken>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, csrf: Option<CsrfToken>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            csrf,
        }
    }

    /// Builds a client from configuration, reading the CSRF token out of `cookies`.
    pub fn from_config(transport: T, config: &ConsoleConfig, cookies: &str) -> Self {
        let base_url = match &config.origin {
            Some(origin) => format!(
                "{}/{}",
                origin.trim_end_matches('/'),
                config.api_base.trim_start_matches('/')
            ),
            None => config.api_base.clone(),
        };
        let csrf = read_cookie(cookies, &config.csrf_cookie).map(|value| CsrfToken {
            header: config.csrf_header.clone(),
            value,
        });
        Self::new(transport, base_url, csrf)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute (or page-relative) URL of an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Performs one request and normalizes its outcome.
    ///
    /// Every non-2xx response becomes [`ApiError::Status`]; callers decide how
    /// to recover.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<RequestBody>,
    ) -> ApiResult<ApiValue> {
        let request = self.prepare(path, method, body)?;
        let response = self.transport.send(request).await?;
        interpret(response)
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request(path, Method::Get, None).await?.decode()
    }

    pub async fn send_json<B: Serialize>(
        &self,
        path: &str,
        method: Method,
        body: &B,
    ) -> ApiResult<ApiValue> {
        let body = RequestBody::json(body)?;
        self.request(path, method, Some(body)).await
    }

    fn prepare(
        &self,
        path: &str,
        method: Method,
        body: Option<RequestBody>,
    ) -> ApiResult<ApiRequest> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];

        let body = match body {
            Some(RequestBody::Json(value)) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(serde_json::to_vec(&value).map_err(|err| ApiError::Encode(err.to_string()))?)
            }
            Some(RequestBody::Raw {
                content_type,
                bytes,
            }) => {
                if let Some(content_type) = content_type {
                    headers.push(("Content-Type".to_string(), content_type));
                }
                Some(bytes)
            }
            None => None,
        };

        if method.is_mutating() {
            if let Some(csrf) = &self.csrf {
                headers.push((csrf.header.clone(), csrf.value.clone()));
            }
        }

        Ok(ApiRequest {
            method,
            url: self.url(path),
            headers,
            body,
            credentials: Credentials::SameOrigin,
        })
    }
}

fn interpret(response: RawResponse) -> ApiResult<ApiValue> {
    if response.status == 204 {
        return Ok(ApiValue::NoContent);
    }

    let is_json = response.is_json();
    let text = String::from_utf8_lossy(&response.body).into_owned();

    if !response.is_success() {
        let body = if text.is_empty() {
            ErrorBody::Empty
        } else if is_json {
            serde_json::from_str(&text)
                .map(ErrorBody::Json)
                .unwrap_or(ErrorBody::Text(text))
        } else {
            ErrorBody::Text(text)
        };
        return Err(ApiError::Status {
            status: response.status,
            body,
        });
    }

    if is_json {
        serde_json::from_str(&text)
            .map(ApiValue::Json)
            .map_err(|err| ApiError::Decode(err.to_string()))
    } else {
        Ok(ApiValue::Text(text))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    struct FixedTransport {
        response: Result<RawResponse, TransportError>,
        sent: RefCell<Vec<ApiRequest>>,
    }

    impl FixedTransport {
        fn replying(status: u16, content_type: Option<&str>, body: &str) -> Self {
            Self {
                response: Ok(RawResponse {
                    status,
                    content_type: content_type.map(str::to_string),
                    body: body.as_bytes().to_vec(),
                }),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for FixedTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
            self.sent.borrow_mut().push(request);
            self.response.clone()
        }
    }

    fn client(transport: FixedTransport) -> ApiClient<FixedTransport> {
        ApiClient::new(
            transport,
            "/adminpanel/api/",
            Some(CsrfToken {
                header: "X-CSRFToken".into(),
                value: "tok".into(),
            }),
        )
    }

    #[test]
    fn get_sets_accept_and_skips_csrf() {
        let api = client(FixedTransport::replying(200, Some("application/json"), "[]"));

        let value = block_on(api.request("grievances/?page=1", Method::Get, None)).unwrap();

        assert_eq!(value, ApiValue::Json(json!([])));
        let sent = api.transport().sent.borrow();
        assert_eq!(sent[0].url, "/adminpanel/api/grievances/?page=1");
        assert_eq!(sent[0].header("accept"), Some("application/json"));
        assert_eq!(sent[0].header("X-CSRFToken"), None);
        assert_eq!(sent[0].credentials, Credentials::SameOrigin);
    }

    #[test]
    fn mutation_serializes_json_and_attaches_csrf() {
        let api = client(FixedTransport::replying(200, Some("application/json"), "{}"));

        block_on(api.send_json("grievances/4/", Method::Patch, &json!({ "status": "resolved" })))
            .unwrap();

        let sent = api.transport().sent.borrow();
        assert_eq!(sent[0].method, Method::Patch);
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        assert_eq!(sent[0].header("X-CSRFToken"), Some("tok"));
        assert_eq!(sent[0].body.as_deref(), Some(br#"{"status":"resolved"}"#.as_slice()));
    }

    #[test]
    fn raw_bodies_pass_through_untouched() {
        let api = client(FixedTransport::replying(201, Some("application/json"), "{}"));
        let body = RequestBody::Raw {
            content_type: Some("multipart/form-data; boundary=x".into()),
            bytes: b"--x\r\n".to_vec(),
        };

        block_on(api.request("uploads/", Method::Post, Some(body))).unwrap();

        let sent = api.transport().sent.borrow();
        assert_eq!(sent[0].header("content-type"), Some("multipart/form-data; boundary=x"));
        assert_eq!(sent[0].body.as_deref(), Some(b"--x\r\n".as_slice()));
    }

    #[test]
    fn no_content_is_explicit() {
        let api = client(FixedTransport::replying(204, None, ""));
        let value = block_on(api.request("categories/3/", Method::Delete, None)).unwrap();
        assert_eq!(value, ApiValue::NoContent);
    }

    #[test]
    fn plain_text_success_is_returned_as_text() {
        let api = client(FixedTransport::replying(200, Some("text/plain"), "ok"));
        let value = block_on(api.request("ping/", Method::Get, None)).unwrap();
        assert_eq!(value, ApiValue::Text("ok".into()));
    }

    #[test]
    fn json_error_keeps_status_and_decoded_body() {
        let api = client(FixedTransport::replying(
            400,
            Some("application/json; charset=utf-8"),
            r#"{"detail":"assigned_officer is required"}"#,
        ));

        let err = block_on(api.request("grievances/1/assign/", Method::Post, None)).unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                body: ErrorBody::Json(json!({ "detail": "assigned_officer is required" })),
            }
        );
    }

    #[test]
    fn text_error_keeps_raw_body() {
        let api = client(FixedTransport::replying(502, Some("text/html"), "<h1>Bad gateway</h1>"));

        let err = block_on(api.request("grievances/", Method::Get, None)).unwrap_err();

        assert_eq!(err.status(), Some(502));
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                body: ErrorBody::Text("<h1>Bad gateway</h1>".into()),
            }
        );
    }

    #[test]
    fn malformed_json_error_falls_back_to_text() {
        let api = client(FixedTransport::replying(500, Some("application/json"), "oops"));
        let err = block_on(api.request("grievances/", Method::Get, None)).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                body: ErrorBody::Text("oops".into()),
            }
        );
    }

    #[test]
    fn transport_failure_is_distinct_from_api_errors() {
        let api = client(FixedTransport {
            response: Err(TransportError("connection refused".into())),
            sent: RefCell::new(Vec::new()),
        });
        let err = block_on(api.request("grievances/", Method::Get, None)).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn from_config_joins_origin_and_reads_csrf_cookie() {
        let config = ConsoleConfig {
            origin: Some("https://admin.example.org/".into()),
            ..ConsoleConfig::default()
        };
        let api = ApiClient::from_config(
            FixedTransport::replying(200, Some("application/json"), "{}"),
            &config,
            "sessionid=s; csrftoken=abc",
        );

        assert_eq!(api.url("grievances/"), "https://admin.example.org/adminpanel/api/grievances/");
        block_on(api.request("grievances/1/", Method::Patch, None)).unwrap();
        assert_eq!(
            api.transport().sent.borrow()[0].header("X-CSRFToken"),
            Some("abc")
        );
    }
}
