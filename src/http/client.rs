use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::FetchError;

/// Thin JSON-over-HTTP client that classifies every failure into a [`FetchError`]
#[derive(Clone)]
pub struct JsonClient {
    client: Client,
}

impl JsonClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.send_get_request(url).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Self::parse_body(url, &body)
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })
    }

    fn parse_body(url: &str, body: &str) -> Result<Value, FetchError> {
        serde_json::from_str(body).map_err(|source| FetchError::MalformedJson {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn client() -> JsonClient {
        JsonClient::new("tierlist-viewer-tests", 5).unwrap()
    }

    /// Serve one canned HTTP/1.1 response on a local port and return its URL
    async fn serve_once(status_line: &str, content_type: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            content_type,
            body.len(),
            body
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/rankings/overall", addr)
    }

    #[tokio::test]
    async fn server_error_status_is_classified() {
        let url = serve_once("503 Service Unavailable", "application/json", r#"{"error":"down"}"#).await;
        match client().get_json(&url).await {
            Err(FetchError::Status { status, url: failed }) => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(failed, url);
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn html_body_with_ok_status_is_malformed_json() {
        let url = serve_once("200 OK", "text/html", "<html><body>maintenance</body></html>").await;
        let err = client().get_json(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedJson { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn closed_port_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client()
            .get_json(&format!("http://{}/rankings/overall", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn ok_json_response_is_returned() {
        let url = serve_once("200 OK", "application/json", r#"{"players":[{"id":1,"name":"Alex"}]}"#).await;
        let value = client().get_json(&url).await.unwrap();
        assert_eq!(value["players"][0]["name"], "Alex");
    }

    #[test]
    fn html_error_page_is_malformed_json() {
        let err = JsonClient::parse_body("http://api/rankings/overall", "<html>502</html>").unwrap_err();
        assert!(matches!(err, FetchError::MalformedJson { .. }));
    }

    #[test]
    fn json_body_is_parsed() {
        let value = JsonClient::parse_body("http://api", r#"{"players": []}"#).unwrap();
        assert!(value["players"].is_array());
    }
}
