//! [`Transport`] backed by `reqwest`.
//!
//! On `wasm32` reqwest drives the browser `fetch` API and the page's own
//! cookie jar supplies credentials. Native hosts have no jar, so the
//! configured cookie header is attached to same-origin requests instead.

use reqwest::header::CONTENT_TYPE;

use crate::http::{ApiRequest, Credentials, Method, RawResponse, Transport, TransportError};

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    cookies: Option<String>,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            cookies: None,
        }
    }

    /// Cookie header sent with same-origin requests from native hosts.
    pub fn with_cookies(mut self, cookies: impl Into<String>) -> Self {
        self.cookies = Some(cookies.into());
        self
    }

    fn build(&self, request: ApiRequest) -> reqwest::RequestBuilder {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = self.with_credentials(builder, request.credentials);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        builder
    }

    #[cfg(target_arch = "wasm32")]
    fn with_credentials(
        &self,
        builder: reqwest::RequestBuilder,
        credentials: Credentials,
    ) -> reqwest::RequestBuilder {
        match credentials {
            Credentials::SameOrigin => builder.fetch_credentials_same_origin(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn with_credentials(
        &self,
        builder: reqwest::RequestBuilder,
        credentials: Credentials,
    ) -> reqwest::RequestBuilder {
        match (credentials, &self.cookies) {
            (Credentials::SameOrigin, Some(cookies)) => {
                builder.header(reqwest::header::COOKIE, cookies.as_str())
            }
            (Credentials::SameOrigin, None) => builder,
        }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = request.url.clone();
        let response = self.build(request).send().await.map_err(|err| {
            log::error!("Request to {url} failed: {err}");
            TransportError(err.to_string())
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError(err.to_string()))?
            .to_vec();

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}
