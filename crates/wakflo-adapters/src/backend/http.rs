//! HTTP backend client.
//!
//! Blocking `reqwest` with JSON bodies. The CLI makes at most a handful of
//! calls per invocation, one at a time, so there is no async runtime.

use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};
use wakflo_core::{
    application::{ApplicationError, ports::BackendClient},
    error::{WakfloError, WakfloResult},
};

/// Backend used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/v1";
/// Request timeout used when nothing is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackendConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub token: Option<String>,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token: None,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    data: String,
}

#[derive(Deserialize)]
struct IconsResponse {
    #[serde(default)]
    icons: Vec<String>,
}

#[derive(Deserialize)]
struct CategoriesResponse {
    #[serde(default)]
    keys: Vec<String>,
}

/// `BackendClient` talking to the Wakflo REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::blocking::Client,
    config: HttpBackendConfig,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> WakfloResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("wakflo-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WakfloError::Configuration {
                message: format!("could not build HTTP client: {e}"),
            })?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: reqwest::blocking::RequestBuilder,
    ) -> WakfloResult<T> {
        let request = match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .map_err(|e| external(operation, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(external(operation, format!("HTTP {status}: {}", body.trim())));
        }

        response
            .json::<T>()
            .map_err(|e| external(operation, format!("invalid response: {e}")))
    }

    fn generate(&self, operation: &str, path: &str, prompt: &str, kind: &str) -> WakfloResult<String> {
        let body = GenerateRequest { prompt, kind };
        let response: GenerateResponse =
            self.send(operation, self.client.post(self.url(path)).json(&body))?;
        Ok(response.data)
    }
}

fn external(operation: &str, reason: String) -> WakfloError {
    ApplicationError::ExternalService {
        operation: operation.to_string(),
        reason,
    }
    .into()
}

/// Strip the quotes models like to wrap short answers in.
pub fn trim_quotes(text: &str) -> String {
    text.trim().trim_matches(|c: char| c == '"' || c == '\'').trim().to_string()
}

impl BackendClient for HttpBackend {
    #[instrument(skip(self))]
    fn generate_description(&self, prompt: &str, kind: &str) -> WakfloResult<String> {
        let text = self.generate("Generate description", "ai/generate-description", prompt, kind)?;
        debug!(length = text.len(), "Description generated");
        Ok(trim_quotes(&text))
    }

    #[instrument(skip(self))]
    fn generate_documentation(&self, prompt: &str, kind: &str) -> WakfloResult<String> {
        self.generate("Generate documentation", "ai/generate-documentation", prompt, kind)
    }

    #[instrument(skip(self))]
    fn search_icons(&self, name: &str) -> WakfloResult<Vec<String>> {
        let request = self.client.get(self.url("icons/search")).query(&[("name", name)]);
        let response: IconsResponse = self.send("Search icons", request)?;
        debug!(count = response.icons.len(), "Icons found");
        Ok(response.icons)
    }

    #[instrument(skip(self))]
    fn list_categories(&self) -> WakfloResult<Vec<String>> {
        let response: CategoriesResponse =
            self.send("List categories", self.client.get(self.url("categories")))?;
        Ok(response.keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve one request with a fixed response; returns the raw request.
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length")
                                .then(|| v.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).to_string()
        });

        (base, handle)
    }

    fn backend(base_url: String) -> HttpBackend {
        HttpBackend::new(HttpBackendConfig {
            base_url,
            timeout: Duration::from_secs(5),
            token: Some("secret".into()),
        })
        .unwrap()
    }

    #[test]
    fn description_is_posted_and_unquoted() {
        let (base, handle) = serve_once("200 OK", r#"{"data":"\"Runs Python scripts\""}"#);
        let text = backend(base)
            .generate_description("Demo integration action called Run", "action")
            .unwrap();
        assert_eq!(text, "Runs Python scripts");

        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /ai/generate-description "));
        assert!(request.contains(r#""type":"action""#));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer secret"));
    }

    #[test]
    fn icons_are_searched_by_name() {
        let (base, handle) = serve_once("200 OK", r#"{"icons":["mdi:slack","logos:slack"]}"#);
        let icons = backend(base).search_icons("Slack").unwrap();
        assert_eq!(icons, vec!["mdi:slack", "logos:slack"]);
        assert!(handle.join().unwrap().starts_with("GET /icons/search?name=Slack "));
    }

    #[test]
    fn categories_are_listed() {
        let (base, handle) = serve_once("200 OK", r#"{"keys":["app","ai"]}"#);
        assert_eq!(backend(base).list_categories().unwrap(), vec!["app", "ai"]);
        handle.join().unwrap();
    }

    #[test]
    fn http_errors_become_external_service_failures() {
        let (base, handle) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
        let err = backend(base).generate_documentation("x", "integration").unwrap_err();
        assert!(matches!(
            err,
            WakfloError::Application(ApplicationError::ExternalService { ref reason, .. })
                if reason.contains("500")
        ));
        handle.join().unwrap();
    }

    #[test]
    fn malformed_body_is_reported() {
        let (base, handle) = serve_once("200 OK", "not json");
        assert!(backend(base).list_categories().is_err());
        handle.join().unwrap();
    }

    #[test]
    fn quotes_are_trimmed() {
        assert_eq!(trim_quotes(" \"'hello'\" "), "hello");
        assert_eq!(trim_quotes("it's"), "it's");
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let backend = backend("http://example.test/v1/".into());
        assert_eq!(backend.url("categories"), "http://example.test/v1/categories");
    }
}
