use std::time::Duration;

use reqwest::blocking::{Client as ReqwestClient, RequestBuilder, Response};
use reqwest::Method;
use saucerest_domain::{constants, SauceRestError};
use tracing::debug;

use crate::errors::InfraError;

/// Blocking HTTP client that sends exactly one attempt per request.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder once.
    ///
    /// Any HTTP status is returned as a response; only transport failures
    /// (timeouts, refused connections, malformed requests) are errors.
    pub fn send(&self, builder: RequestBuilder) -> Result<Response, SauceRestError> {
        let request = builder.build().map_err(|err| SauceRestError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        let timeout_ms = request.timeout().map(|t| t.as_millis());
        debug!(%method, %url, ?timeout_ms, "sending HTTP request");

        match self.client.execute(request) {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %url, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(constants::DOWNLOAD_TIMEOUT_MS),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    /// Fallback timeout for requests that do not set their own.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `SauceRestError::Config` if the TLS backend cannot be set up.
    pub fn build(self) -> Result<HttpClient, SauceRestError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| {
            SauceRestError::Config(format!("Failed to build HTTP client: {err}"))
        })?;

        Ok(HttpClient { client })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use tokio::runtime::Runtime;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn start_server(runtime: &Runtime, template: ResponseTemplate) -> MockServer {
        runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET")).respond_with(template).mount(&server).await;
            server
        })
    }

    #[test]
    fn returns_successful_response_once() {
        let runtime = Runtime::new().unwrap();
        let server = start_server(&runtime, ResponseTemplate::new(200).set_body_string("ok"));

        let client = HttpClient::builder().build().expect("http client");
        let response = client.send(client.request(Method::GET, server.uri())).expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let requests = runtime.block_on(server.received_requests()).unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn does_not_retry_server_errors() {
        let runtime = Runtime::new().unwrap();
        let server = start_server(&runtime, ResponseTemplate::new(500));

        let client = HttpClient::builder().build().expect("http client");
        let response = client.send(client.request(Method::GET, server.uri())).expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let requests = runtime.block_on(server.received_requests()).unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn per_request_timeout_surfaces_as_timeout_error() {
        let runtime = Runtime::new().unwrap();
        let server = start_server(
            &runtime,
            ResponseTemplate::new(200).set_delay(Duration::from_secs(2)),
        );

        let client = HttpClient::builder().build().expect("http client");
        let request =
            client.request(Method::GET, server.uri()).timeout(Duration::from_millis(100));

        match client.send(request) {
            Err(SauceRestError::Timeout(msg)) => assert!(msg.contains("timed out")),
            other => panic!("expected timeout, got {:?}", other.map(|r| r.status())),
        }
    }

    #[test]
    fn sends_configured_user_agent() {
        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(header("user-agent", "saucerest-test"))
                .respond_with(ResponseTemplate::new(200))
                .mount(&server)
                .await;
            server
        });

        let client = HttpClient::builder().user_agent("saucerest-test").build().unwrap();
        let response = client.send(client.request(Method::GET, server.uri())).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn refused_connection_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::builder().build().unwrap();
        let result = client.send(client.request(Method::GET, format!("http://{addr}")));
        assert!(matches!(result, Err(SauceRestError::Network(_))));
    }
}
