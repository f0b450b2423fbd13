#![allow(dead_code)]

use std::sync::Arc;

use saucerest_domain::{ClientConfig, Credentials};
use saucerest_infra::{MemoryDiagnosticSink, RemoteJobClient};
use tokio::runtime::Runtime;
use wiremock::MockServer;

pub const ACCOUNT: &str = "user";
pub const ACCESS_TOKEN: &str = "key";
/// `Basic base64("user:key")`
pub const AUTH_HEADER: &str = "Basic dXNlcjprZXk=";

/// Mock service plus a client pointed at it.
///
/// The mock server runs on its own thread, so the blocking client is called
/// outside `block_on`; only mounting and inspecting mocks goes through the
/// runtime.
pub struct MockSauce {
    pub runtime: Runtime,
    pub server: MockServer,
    pub sink: Arc<MemoryDiagnosticSink>,
    pub client: RemoteJobClient,
}

impl MockSauce {
    pub fn start() -> Self {
        Self::start_with(|config| config)
    }

    /// Start with a customized config. Both base URLs point at the mock
    /// server before `customize` runs.
    pub fn start_with(customize: impl FnOnce(ClientConfig) -> ClientConfig) -> Self {
        let runtime = Runtime::new().expect("runtime should start");
        let server = runtime.block_on(MockServer::start());

        let config = customize(ClientConfig {
            base_url: server.uri(),
            artifact_base_url: server.uri(),
            ..ClientConfig::default()
        });

        let sink = Arc::new(MemoryDiagnosticSink::new());
        let client = RemoteJobClient::builder()
            .credentials(Credentials::new(ACCOUNT, ACCESS_TOKEN))
            .config(config)
            .diagnostics(sink.clone())
            .build()
            .expect("client should build");

        Self { runtime, server, sink, client }
    }

    pub fn mount(&self, mock: wiremock::Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn received(&self) -> Vec<wiremock::Request> {
        self.runtime.block_on(self.server.received_requests()).unwrap_or_default()
    }
}

/// Base URL of a port nothing listens on.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Client against `base_url` for both endpoint roots, recording into `sink`.
pub fn client_for(base_url: &str, sink: Arc<MemoryDiagnosticSink>) -> RemoteJobClient {
    RemoteJobClient::builder()
        .credentials(Credentials::new(ACCOUNT, ACCESS_TOKEN))
        .config(ClientConfig {
            base_url: base_url.to_string(),
            artifact_base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
        .diagnostics(sink)
        .build()
        .expect("client should build")
}
