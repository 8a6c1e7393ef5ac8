// Tests for GeminiImageClient against a local stand-in for the REST API.
//
// Each stub server accepts exactly one connection, records the raw request,
// and answers with a canned response.

use magic_color_core::ImageRef;
use magic_color_error::{GeminiErrorKind, MagicColorErrorKind};
use magic_color_models::{GeminiImageClient, GeminiSettingsBuilder, ImageGenerator};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct Captured {
    head: String,
    body: String,
}

async fn serve_once(
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> anyhow::Result<(String, JoinHandle<anyhow::Result<Captured>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base = format!("http://{}", listener.local_addr()?);

    let handle: JoinHandle<anyhow::Result<Captured>> = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;

        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        let header_end = loop {
            let n = socket.read(&mut buf).await?;
            anyhow::ensure!(n > 0, "connection closed before headers");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        while raw.len() < header_end + content_length {
            let n = socket.read(&mut buf).await?;
            anyhow::ensure!(n > 0, "connection closed before body");
            raw.extend_from_slice(&buf[..n]);
        }
        let request_body = String::from_utf8_lossy(&raw[header_end..]).to_string();

        let reply_head = format!(
            "HTTP/1.1 {} Stub\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            content_type,
            body.len()
        );
        socket.write_all(reply_head.as_bytes()).await?;
        socket.write_all(&body).await?;
        socket.shutdown().await?;

        Ok(Captured {
            head,
            body: request_body,
        })
    });

    Ok((base, handle))
}

fn client_for(base: &str) -> anyhow::Result<GeminiImageClient> {
    let settings = GeminiSettingsBuilder::default()
        .api_base(format!("{}/v1beta", base))
        .timeout_secs(10u64)
        .build()?;
    Ok(GeminiImageClient::with_api_key("test-key", settings)?)
}

const IMAGE_REPLY: &str = r#"{"candidates":[{"content":{"role":"model","parts":[
    {"text":"Here you go"},
    {"inlineData":{"mimeType":"image/png","data":"TElORUFSVA=="}}
]},"finishReason":"STOP"}]}"#;

#[tokio::test]
async fn test_generate_line_art_returns_inline_image() -> anyhow::Result<()> {
    let (base, server) = serve_once(200, "application/json", IMAGE_REPLY.into()).await?;
    let client = client_for(&base)?;

    let image = client.generate_line_art("A cute dinosaur").await?;
    assert_eq!(image.to_uri(), "data:image/png;base64,TElORUFSVA==");

    let captured = server.await??;
    assert!(captured
        .head
        .starts_with("POST /v1beta/models/gemini-2.5-flash-image:generateContent"));
    assert!(captured.head.to_ascii_lowercase().contains("x-goog-api-key: test-key"));

    let sent: serde_json::Value = serde_json::from_str(&captured.body)?;
    let text = sent["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
    assert!(text.contains("Subject: A cute dinosaur."));
    assert_eq!(sent["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
    Ok(())
}

#[tokio::test]
async fn test_colorize_sends_line_art_then_instruction() -> anyhow::Result<()> {
    let (base, server) = serve_once(200, "application/json", IMAGE_REPLY.into()).await?;
    let client = client_for(&base)?;

    let line_art = ImageRef::inline("image/png", "T1VUTElORQ==");
    client.colorize(&line_art, "A cute dinosaur").await?;

    let captured = server.await??;
    let sent: serde_json::Value = serde_json::from_str(&captured.body)?;
    let parts = &sent["contents"][0]["parts"];
    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
    assert_eq!(parts[0]["inlineData"]["data"], "T1VUTElORQ==");
    assert!(parts[1]["text"]
        .as_str()
        .unwrap_or_default()
        .ends_with("The subject is A cute dinosaur."));
    Ok(())
}

#[tokio::test]
async fn test_colorize_downloads_remote_line_art() -> anyhow::Result<()> {
    let (image_base, image_server) = serve_once(200, "image/jpeg", vec![0xFF, 0xD8, 0xFF]).await?;
    let (api_base, api_server) = serve_once(200, "application/json", IMAGE_REPLY.into()).await?;
    let client = client_for(&api_base)?;

    let remote = ImageRef::Remote(format!("{}/seed/cat/800/800", image_base));
    client.colorize(&remote, "A happy cat eating pizza").await?;

    let fetched = image_server.await??;
    assert!(fetched.head.starts_with("GET /seed/cat/800/800"));

    let sent: serde_json::Value = serde_json::from_str(&api_server.await??.body)?;
    let inline = &sent["contents"][0]["parts"][0]["inlineData"];
    assert_eq!(inline["mimeType"], "image/jpeg");
    assert_eq!(inline["data"], "/9j/");
    Ok(())
}

#[tokio::test]
async fn test_missing_image_is_an_error() -> anyhow::Result<()> {
    let reply = r#"{"candidates":[{"content":{"parts":[{"text":"I cannot draw that"}]},"finishReason":"STOP"}]}"#;
    let (base, server) = serve_once(200, "application/json", reply.into()).await?;
    let client = client_for(&base)?;

    let err = client.generate_line_art("something").await.unwrap_err();
    match err.kind() {
        MagicColorErrorKind::Gemini(e) => match &e.kind {
            GeminiErrorKind::NoImage(reason) => assert!(reason.contains("I cannot draw that")),
            other => panic!("unexpected kind: {}", other),
        },
        other => panic!("unexpected error: {}", other),
    }
    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_http_error_carries_status() -> anyhow::Result<()> {
    let (base, server) = serve_once(
        503,
        "application/json",
        br#"{"error":{"message":"overloaded"}}"#.to_vec(),
    )
    .await?;
    let client = client_for(&base)?;

    let err = client.generate_line_art("A castle in the clouds").await.unwrap_err();
    match err.kind() {
        MagicColorErrorKind::Gemini(e) => match &e.kind {
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => {
                assert_eq!(*status_code, 503);
                assert!(message.contains("overloaded"));
            }
            other => panic!("unexpected kind: {}", other),
        },
        other => panic!("unexpected error: {}", other),
    }
    server.await??;
    Ok(())
}

#[cfg(feature = "api")]
#[tokio::test]
async fn test_real_gemini_line_art() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let client = GeminiImageClient::new(Default::default())?;
    let image = client.generate_line_art("A space rocket landing").await?;
    assert!(image.mime().is_some());
    Ok(())
}
