// HTTP client tests against a local mock server
use algoskel::llm::client::LlmClient;
use algoskel::llm::client_impl::ChatCompletionsClient;
use algoskel::llm::error::LlmError;
use mockito::Matcher;
use serde_json::json;

const PATH: &str = "/api/v3/chat/completions";

fn client(server: &mockito::ServerGuard, api_key: &str) -> ChatCompletionsClient {
    ChatCompletionsClient::new(
        api_key.to_string(),
        "deepseek-v3-250324".to_string(),
        format!("{}{}", server.url(), PATH),
        Some(10),
    )
    .unwrap()
}

#[tokio::test]
async fn test_complete_success_sends_expected_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer test_key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "model": "deepseek-v3-250324",
                "temperature": 0.3
            })),
            Matcher::Regex(r#""role":"system""#.to_string()),
            Matcher::Regex(r#""role":"user","content":"give me a skeleton""#.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices": [{"message": {"role": "assistant", "content": "```go\nfunc f(){}\n```"}}]}"#,
        )
        .create_async()
        .await;

    let reply = client(&server, "test_key")
        .complete("give me a skeleton")
        .await
        .unwrap();

    assert_eq!(reply, "```go\nfunc f(){}\n```");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_keyless_endpoint_sends_no_authorization() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"choices": [{"message": {"content": "ok"}}]}"#)
        .create_async()
        .await;

    let reply = client(&server, "none").complete("hi").await.unwrap();
    assert_eq!(reply, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_carries_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(503)
        .with_body("model overloaded")
        .expect(1)
        .create_async()
        .await;

    let err = client(&server, "k").complete("hi").await.unwrap_err();
    assert_eq!(
        err,
        LlmError::UpstreamStatus {
            status: 503,
            body: "model overloaded".to_string()
        }
    );
    // No retry on failure
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_is_upstream_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(401)
        .with_body(r#"{"error": "invalid api key"}"#)
        .create_async()
        .await;

    let err = client(&server, "bad").complete("hi").await.unwrap_err();
    match err {
        LlmError::UpstreamStatus { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("expected UpstreamStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_response_shape() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("this is not json")
        .create_async()
        .await;

    let err = client(&server, "k").complete("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::ResponseShape(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_empty_choices_is_response_shape() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let err = client(&server, "k").complete("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::ResponseShape(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_missing_message_is_response_shape() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"choices": [{"text": "legacy completion"}]}"#)
        .create_async()
        .await;

    let err = client(&server, "k").complete("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::ResponseShape(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = ChatCompletionsClient::new(
        "k".to_string(),
        "m".to_string(),
        "http://127.0.0.1:1/v1/chat/completions".to_string(),
        Some(5),
    )
    .unwrap();

    let err = client.complete("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_invalid_url_is_request_build_error() {
    let client = ChatCompletionsClient::new(
        "k".to_string(),
        "m".to_string(),
        "not a url".to_string(),
        None,
    )
    .unwrap();

    let err = client.complete("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::RequestBuild(_)), "got {:?}", err);
}

/// Serves one connection: reads the whole request, then answers with a
/// body shorter than its Content-Length and hangs up.
async fn truncated_body_server(status_line: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request).to_string();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if request.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: 1000\r\n\r\n{{\"choi",
            status_line
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}/v1/chat/completions", addr)
}

#[tokio::test]
async fn test_truncated_success_body_is_body_read_error() {
    let endpoint = truncated_body_server("HTTP/1.1 200 OK").await;
    let client =
        ChatCompletionsClient::new("k".to_string(), "m".to_string(), endpoint, Some(10)).unwrap();

    let err = client.complete("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::BodyRead(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_truncated_error_body_is_body_read_error() {
    let endpoint = truncated_body_server("HTTP/1.1 500 Internal Server Error").await;
    let client =
        ChatCompletionsClient::new("k".to_string(), "m".to_string(), endpoint, Some(10)).unwrap();

    let err = client.complete("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::BodyRead(_)), "got {:?}", err);
}
