//! Integration tests for the upstream API client against a local mock server.

use tiny_http::{Header, Response, Server};

use framecast::{ClientConfig, Credential, Error, FigmaClient, ImageFormat, RenderOptions};

/// Start a mock upstream on an ephemeral port. The handler maps a request
/// path (with query) to `(status, json_body)`; it must answer every request
/// the test under it will produce.
fn start_mock<F>(handler: F) -> String
where
    F: Fn(&str) -> (u16, String) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr();
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let has_token = request
                .headers()
                .iter()
                .any(|h| h.field.equiv("X-Figma-Token"));
            let (status, body) = if has_token {
                handler(request.url())
            } else {
                (403, r#"{"error":"missing credential"}"#.to_string())
            };
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header("Content-Type: application/json".parse::<Header>().unwrap());
            let _ = request.respond(response);
        }
    });
    format!("http://{}", addr)
}

fn client_for(base_url: String) -> FigmaClient {
    let mut config = ClientConfig::new(Credential::PersonalToken("test-token".into()));
    config.base_url = base_url;
    config.timeout_ms = 5_000;
    FigmaClient::new(config).expect("client should build")
}

fn file_json() -> String {
    r#"{
        "document": {
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [
                {
                    "id": "0:1",
                    "name": "Page 1",
                    "type": "CANVAS",
                    "children": [
                        {
                            "id": "1:1",
                            "name": "Screen",
                            "type": "FRAME",
                            "absoluteBoundingBox": {"x": 0, "y": 0, "width": 390, "height": 844}
                        }
                    ]
                }
            ]
        },
        "lastModified": "2024-05-01T12:00:00Z"
    }"#
    .to_string()
}

#[tokio::test]
async fn get_file_and_list_frames() {
    let base = start_mock(|path| match path {
        p if p.starts_with("/images/KEY") => {
            (200, r#"{"images": {"1:1": "https://cdn.test/1-1.png"}}"#.into())
        }
        "/files/KEY" => (200, file_json()),
        _ => (404, r#"{"error":"no route"}"#.into()),
    });
    let client = client_for(base);

    let listing = framecast::list_frames(&client, "KEY").await.unwrap();
    assert_eq!(listing.last_modified, "2024-05-01T12:00:00Z");
    assert_eq!(listing.frames.len(), 1);
    assert_eq!(listing.frames[0].page, "Page 1");
    assert_eq!(
        listing.frames[0].preview_url.as_deref(),
        Some("https://cdn.test/1-1.png")
    );
}

#[tokio::test]
async fn missing_node_is_not_found() {
    let base = start_mock(|path| {
        assert!(path.starts_with("/files/KEY/nodes"));
        (200, r#"{"nodes": {}}"#.into())
    });
    let client = client_for(base);

    let err = client.get_node_subtree("KEY", "9:9").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(ref id) if id == "9:9"));
}

#[tokio::test]
async fn upstream_failure_is_distinguished() {
    let base = start_mock(|_| (500, r#"{"error":"boom"}"#.into()));
    let client = client_for(base);

    let err = client.get_file("KEY").await.unwrap_err();
    assert!(matches!(err, Error::UpstreamError { status: 500, .. }));
}

#[tokio::test]
async fn credential_header_is_sent() {
    // The mock answers 403 whenever the token header is absent, so a
    // successful call proves the header went out.
    let base = start_mock(|_| (200, file_json()));
    let client = client_for(base);
    assert!(client.get_file("KEY").await.is_ok());
}

#[tokio::test]
async fn empty_image_batch_short_circuits() {
    // No /images route exists; the call must not hit the network at all.
    let base = start_mock(|_| (404, "{}".into()));
    let client = client_for(base);

    let urls = client
        .get_image_urls("KEY", &[], ImageFormat::Png, 2.0)
        .await
        .unwrap();
    assert!(urls.is_empty());
}

#[tokio::test]
async fn null_image_urls_are_dropped() {
    let base = start_mock(|path| {
        assert!(path.starts_with("/images/KEY"));
        (
            200,
            r#"{"images": {"1:2": "https://cdn.test/a.png", "1:3": null}}"#.into(),
        )
    });
    let client = client_for(base);

    let urls = client
        .get_image_urls("KEY", &["1:2".into(), "1:3".into()], ImageFormat::Png, 2.0)
        .await
        .unwrap();
    assert_eq!(urls.len(), 1);
    assert_eq!(urls.get("1:2").map(String::as_str), Some("https://cdn.test/a.png"));
}

#[tokio::test]
async fn render_frame_end_to_end_over_http() {
    let base = start_mock(|path| {
        if path.starts_with("/files/KEY/nodes") {
            (
                200,
                r#"{
                    "nodes": {
                        "1:1": {
                            "document": {
                                "id": "1:1",
                                "name": "Screen",
                                "type": "FRAME",
                                "absoluteBoundingBox": {"x": 0, "y": 0, "width": 390, "height": 844},
                                "children": [
                                    {
                                        "id": "1:5",
                                        "name": "Photo",
                                        "type": "RECTANGLE",
                                        "absoluteBoundingBox": {"x": 10, "y": 10, "width": 100, "height": 100},
                                        "fills": [{"type": "IMAGE"}]
                                    }
                                ]
                            }
                        }
                    }
                }"#
                .into(),
            )
        } else if path.starts_with("/images/KEY") {
            assert!(path.contains("ids=1:5"));
            assert!(path.contains("format=png"));
            (200, r#"{"images": {"1:5": "https://cdn.test/photo.png"}}"#.into())
        } else {
            (404, r#"{"error":"no route"}"#.into())
        }
    });
    let client = client_for(base);

    let frame = framecast::render_frame(&client, "KEY", "1:1", &RenderOptions::default())
        .await
        .unwrap();
    assert_eq!(frame.frame_id, "1:1");
    assert_eq!(frame.format, "html");
    assert_eq!(frame.width, 390.0);
    assert_eq!(frame.height, 844.0);
    assert!(frame.code.starts_with("<!doctype html>"));
    assert!(frame
        .code
        .contains("background-image:url('https://cdn.test/photo.png')"));
}
