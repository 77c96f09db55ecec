//! HTTP-level tests for the Gemini client against a one-shot local server.

use genui_llm::{CompletionConfig, CompletionError, CompletionService, GeminiClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve exactly one request with a canned response; yields the raw request.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(request);
    });

    (format!("http://{addr}/v1beta"), rx)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
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

fn client_for(endpoint: String) -> GeminiClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    GeminiClient::with_http_client(
        CompletionConfig::new()
            .with_api_key("test-key")
            .with_model("gemini-test")
            .with_endpoint(endpoint),
        http,
    )
}

#[tokio::test]
async fn success_returns_first_candidate_text() {
    let (endpoint, request) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"{\"layout\":\"single\"}"}]}}]}"#,
    )
    .await;

    let text = client_for(endpoint)
        .complete("You are a planner.", "User Request: login form")
        .await
        .unwrap();
    assert_eq!(text, r#"{"layout":"single"}"#);

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /v1beta/models/gemini-test:generateContent?key=test-key"));
    assert!(request.contains(r#""text":"You are a planner.\n\nUser Request: login form""#));
    assert!(request.contains(r#""maxOutputTokens":4096"#));
}

#[tokio::test]
async fn upstream_failure_carries_body() {
    let (endpoint, _request) = serve_once(
        "429 Too Many Requests",
        r#"{"error":{"code":429,"message":"quota exceeded"}}"#,
    )
    .await;

    let err = client_for(endpoint).complete("s", "u").await.unwrap_err();
    match err {
        CompletionError::Service(message) => {
            assert!(message.contains("429"));
            assert!(message.contains("quota exceeded"));
        }
        other => panic!("expected Service error, got {other:?}"),
    }
}

#[tokio::test]
async fn success_without_text_is_malformed() {
    let (endpoint, _request) = serve_once("200 OK", r#"{"candidates":[]}"#).await;

    let err = client_for(endpoint).complete("s", "u").await.unwrap_err();
    assert!(matches!(err, CompletionError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_service_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(format!("http://{addr}"))
        .complete("s", "u")
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::Service(_)));
}
