//! HTTP delivery sink.

use std::time::Duration;

use async_trait::async_trait;

use super::Sink;
use crate::domain::Notification;
use crate::error::RelayError;

/// Sink that POSTs each payload as `{"data": <payload>}` to a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpSink {
    client: reqwest::Client,
    url: reqwest::Url,
    endpoint: String,
}

impl HttpSink {
    /// Builds a sink for `url` with a per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Config`] if `url` does not parse or the
    /// HTTP client cannot be constructed.
    pub fn new(url: &str, call_timeout: Duration) -> Result<Self, RelayError> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| RelayError::Config(format!("invalid sink url {url}: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(call_timeout)
            .build()
            .map_err(|e| RelayError::Config(format!("failed to build http client: {e}")))?;
        let endpoint = url.to_string();
        Ok(Self {
            client,
            url,
            endpoint,
        })
    }
}

#[async_trait]
impl Sink for HttpSink {
    async fn deliver(&self, notification: &Notification) -> Result<u16, RelayError> {
        let body = serde_json::json!({ "data": notification.payload });
        let response = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Delivery {
                status: None,
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            Err(RelayError::delivery_status(status.as_u16()))
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::net::SocketAddr;

    use axum::Json;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;
    use tokio::sync::mpsc;

    use super::*;

    /// Spawns an in-process sink server that records every JSON body it
    /// receives and answers with `status`.
    async fn spawn_sink(
        status: StatusCode,
    ) -> (SocketAddr, mpsc::UnboundedReceiver<serde_json::Value>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Router::new().route(
            "/ingest",
            post(move |Json(body): Json<serde_json::Value>| {
                let tx = tx.clone();
                async move {
                    let _ = tx.send(body);
                    status
                }
            }),
        );
        let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
            panic!("failed to bind test listener");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("failed to read test listener addr");
        };
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        (addr, rx)
    }

    #[tokio::test]
    async fn posts_payload_wrapped_in_data_field() {
        let (addr, mut received) = spawn_sink(StatusCode::CREATED).await;
        let sink = match HttpSink::new(
            &format!("http://{addr}/ingest"),
            Duration::from_secs(5),
        ) {
            Ok(sink) => sink,
            Err(e) => panic!("sink construction failed: {e}"),
        };

        let payload = r#"{"table_name":"people","action":"INSERT","data":"(1,...)"}"#;
        let notification = Notification::new("data_changes", payload);
        let result = sink.deliver(&notification).await;
        assert_eq!(result.ok(), Some(201));

        let Some(body) = received.recv().await else {
            panic!("sink server received nothing");
        };
        assert_eq!(body, serde_json::json!({ "data": payload }));
    }

    #[tokio::test]
    async fn non_2xx_is_a_delivery_error_with_status() {
        let (addr, _received) = spawn_sink(StatusCode::INTERNAL_SERVER_ERROR).await;
        let sink = match HttpSink::new(
            &format!("http://{addr}/ingest"),
            Duration::from_secs(5),
        ) {
            Ok(sink) => sink,
            Err(e) => panic!("sink construction failed: {e}"),
        };

        let result = sink.deliver(&Notification::new("data_changes", "(1,x)")).await;
        let Err(RelayError::Delivery { status, .. }) = result else {
            panic!("expected delivery error");
        };
        assert_eq!(status, Some(500));
    }

    #[tokio::test]
    async fn unreachable_sink_is_a_delivery_error_without_status() {
        let sink = match HttpSink::new("http://127.0.0.1:9/ingest", Duration::from_millis(500)) {
            Ok(sink) => sink,
            Err(e) => panic!("sink construction failed: {e}"),
        };
        let result = sink.deliver(&Notification::new("data_changes", "(1,x)")).await;
        let Err(RelayError::Delivery { status, .. }) = result else {
            panic!("expected delivery error");
        };
        assert_eq!(status, None);
    }
}
