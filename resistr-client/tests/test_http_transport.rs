//! End-to-end tests of `PredictionClient` over real HTTP.
//!
//! Each test starts a one-shot server on a loopback port that reads a single
//! request and answers with a canned response.

use std::time::Duration;

use resistr_client::{ClientConfig, PredictionClient, RequestError};
use resistr_core::{Antibiotic, ResistanceStatus, validate};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Read one HTTP/1.1 request (headers plus `Content-Length` body).
async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.expect("Failed to read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serve a single response and hand back the raw request that was received.
async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("Failed to accept");
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("Failed to write response");
        stream.shutdown().await.ok();
        request
    });

    (base_url, handle)
}

fn client_for(base_url: String, timeout: Duration) -> PredictionClient {
    let config = ClientConfig::builder()
        .with_base_url(base_url)
        .with_timeout(timeout)
        .finish()
        .expect("Failed to build config");
    PredictionClient::new(config).expect("Failed to build client")
}

fn success_body() -> String {
    let predictions: serde_json::Map<String, serde_json::Value> = Antibiotic::ALL
        .iter()
        .map(|a| {
            let status = match a {
                Antibiotic::Rifampin | Antibiotic::Isoniazid => "Resistant",
                _ => "Susceptible",
            };
            (a.key().to_string(), serde_json::Value::from(status))
        })
        .collect();
    serde_json::json!({ "predictions": predictions }).to_string()
}

#[tokio::test]
async fn test_predict_over_http() {
    let (base_url, server) = serve_once("200 OK", success_body()).await;
    let client = client_for(base_url, Duration::from_secs(5));
    let sequence = validate("essalaaaqamasaaafeta").unwrap();

    let result = client.predict_once(&sequence).await.expect("prediction failed");
    assert_eq!(result.get(Antibiotic::Rifampin), ResistanceStatus::Resistant);
    assert_eq!(result.get(Antibiotic::Kanamycin), ResistanceStatus::Susceptible);
    assert_eq!(result.summary().percentage, 18);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /predict HTTP/1.1"));
    assert!(
        request
            .to_ascii_lowercase()
            .contains("content-type: application/json")
    );
    assert!(request.ends_with(r#"{"epitope_sequence":"ESSALAAAQAMASAAAFETA"}"#));
}

#[tokio::test]
async fn test_service_fault_detail_over_http() {
    let body = r#"{"detail": "Model inference failed"}"#.to_string();
    let (base_url, server) = serve_once("500 Internal Server Error", body).await;
    let client = client_for(base_url, Duration::from_secs(5));
    let sequence = validate("SIINFEKLA").unwrap();

    let err = client.predict_once(&sequence).await.unwrap_err();
    assert_eq!(
        err,
        RequestError::ServiceFault {
            message: "Model inference failed".to_string()
        }
    );
    assert_eq!(err.to_string(), "Model inference failed");
    server.await.unwrap();
}

#[tokio::test]
async fn test_service_unavailable_over_http() {
    let body = r#"{"detail": "Model not loaded"}"#.to_string();
    let (base_url, server) = serve_once("503 Service Unavailable", body).await;
    let client = client_for(base_url, Duration::from_secs(5));
    let sequence = validate("SIINFEKLA").unwrap();

    assert_eq!(
        client.predict_once(&sequence).await.unwrap_err(),
        RequestError::ServiceUnavailable
    );
    server.await.unwrap();
}

#[tokio::test]
async fn test_health_over_http() {
    let body = r#"{"status": "healthy", "model_loaded": true}"#.to_string();
    let (base_url, server) = serve_once("200 OK", body).await;
    let client = client_for(base_url, Duration::from_secs(5));

    let health = client.check_health().await.expect("health check failed");
    assert!(health.model_loaded);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /health HTTP/1.1"));
}

#[tokio::test]
async fn test_refused_connection_is_network_failure() {
    // grab a free port, then close it again
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = client_for(base_url, Duration::from_secs(5));
    let sequence = validate("SIINFEKLA").unwrap();

    let err = client.predict_once(&sequence).await.unwrap_err();
    assert!(matches!(err, RequestError::NetworkFailure { .. }), "{err:?}");
}

#[tokio::test]
async fn test_timeout_is_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    // accept and then stay silent
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
        drop(stream);
    });

    let client = client_for(base_url, Duration::from_millis(200));
    let sequence = validate("SIINFEKLA").unwrap();

    let err = client.predict_once(&sequence).await.unwrap_err();
    assert!(matches!(err, RequestError::NetworkFailure { .. }), "{err:?}");
    server.abort();
}

#[tokio::test]
async fn test_invalid_base_url_is_unexpected_failure() {
    let client = client_for("not a url".to_string(), Duration::from_secs(1));
    let sequence = validate("SIINFEKLA").unwrap();

    let err = client.predict_once(&sequence).await.unwrap_err();
    assert!(matches!(err, RequestError::UnexpectedFailure { .. }), "{err:?}");
}
