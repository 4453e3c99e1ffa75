//! ModelGateway implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{GenerateRequest, ModelGateway, ProviderError};

use super::client::{error_message, GeminiClient};

fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(e.without_url().to_string())
    }
}

#[async_trait]
impl ModelGateway for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, ProviderError> {
        let body = self.build_request_body(request);
        let url = self.api_url();

        debug!(
            model = %self.config.model,
            has_context = request.context.is_some(),
            has_image = request.image.is_some(),
            "Gemini API request"
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "HTTP {status}: {}",
                error_message(&text)
            )));
        }

        // Reading the body can still time out; only decoding is a parse error.
        let bytes = response.bytes().await.map_err(transport_error)?;
        let json: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| ProviderError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    use super::*;
    use crate::gemini::GeminiConfig;

    enum Reply {
        Respond(String),
        /// Send these bytes, then hold the connection open without finishing.
        Stall(String),
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    /// Read one request: headers, then `content-length` bytes of body.
    async fn read_request(socket: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let body_len = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                return;
            }
        }
    }

    /// Serve a single connection on localhost and return its base URL.
    async fn serve_once(reply: Reply) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            match reply {
                Reply::Respond(raw) => {
                    socket.write_all(raw.as_bytes()).await.unwrap();
                    let _ = socket.shutdown().await;
                }
                Reply::Stall(raw) => {
                    socket.write_all(raw.as_bytes()).await.unwrap();
                    tokio::time::sleep(Duration::from_secs(10)).await;
                }
            }
        });
        format!("http://{addr}/v1beta/models")
    }

    fn client(base_url: String) -> GeminiClient {
        GeminiClient::new(
            GeminiConfig::new("test-key")
                .with_base_url(base_url)
                .with_timeout(Duration::from_millis(300)),
        )
        .unwrap()
    }

    fn request() -> GenerateRequest {
        GenerateRequest {
            system_instruction: "Be brief.".into(),
            context: None,
            user_text: Some("hello".into()),
            image: None,
        }
    }

    #[tokio::test]
    async fn success_returns_reply_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hi there"}]},"finishReason":"STOP"}]}"#;
        let url = serve_once(Reply::Respond(http_response("200 OK", body))).await;

        let reply = client(url).generate(&request()).await.unwrap();
        assert_eq!(reply, "Hi there");
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let body = r#"{"error":{"code":429,"message":"Resource exhausted"}}"#;
        let url = serve_once(Reply::Respond(http_response("429 Too Many Requests", body))).await;

        let err = client(url).generate(&request()).await.unwrap_err();
        assert_eq!(err, ProviderError::RateLimited);
    }

    #[tokio::test]
    async fn error_status_carries_provider_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        let url = serve_once(Reply::Respond(http_response("400 Bad Request", body))).await;

        let err = client(url).generate(&request()).await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::Api("HTTP 400 Bad Request: API key not valid.".into())
        );
    }

    #[tokio::test]
    async fn invalid_json_body_is_parse_error() {
        let url = serve_once(Reply::Respond(http_response("200 OK", "not json {"))).await;

        let err = client(url).generate(&request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn stalled_response_times_out() {
        let url = serve_once(Reply::Stall(String::new())).await;

        let err = client(url).generate(&request()).await.unwrap_err();
        assert_eq!(err, ProviderError::Timeout);
    }

    #[tokio::test]
    async fn stalled_body_times_out() {
        // Headers promise more body than is ever sent.
        let head = "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{\"candidates\"";
        let url = serve_once(Reply::Stall(head.into())).await;

        let err = client(url).generate(&request()).await.unwrap_err();
        assert_eq!(err, ProviderError::Timeout);
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}/v1beta/models"))
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Network(_)), "got {err:?}");
    }
}
