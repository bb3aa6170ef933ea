//! Loopback HTTP tests for the navigator: a throwaway TCP listener serves
//! canned responses, one per connection, and records what the client sent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;

use collection_json_net::{HttpNavigator, NavigationError, Navigator};
use url::Url;

const COLLECTION_BODY: &str = r#"{"collection":{"version":"1.0","href":"http://example.org/friends/"}}"#;
const MEDIA_TYPE: &str = "application/vnd.collection+json";

/// Serve a fixed sequence of responses, one per connection, reporting each
/// request's head back on a channel. Returns the base URL of the listener.
fn serve(responses: Vec<String>) -> (Url, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let request = read_request_head(&mut stream);
            let _ = tx.send(request);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    (Url::parse(&format!("http://{addr}/")).unwrap(), rx)
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        match stream.read(&mut byte) {
            Ok(1) => head.push(byte[0]),
            _ => break,
        }
    }
    String::from_utf8_lossy(&head).to_string()
}

fn response(status_line: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut out = format!("HTTP/1.1 {status_line}\r\n");
    for (name, value) in headers {
        out.push_str(&format!("{name}: {value}\r\n"));
    }
    out.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ));
    out
}

fn ok_collection() -> String {
    response("200 OK", &[("Content-Type", MEDIA_TYPE)], COLLECTION_BODY)
}

// ============================================================================
// Success path
// ============================================================================

#[test]
fn follow_parses_a_collection_response() {
    let (base, requests) = serve(vec![ok_collection()]);
    let collection = HttpNavigator::new().follow(&base).unwrap();
    assert_eq!(
        "http://example.org/friends/",
        collection.href().unwrap().as_str()
    );

    let request = requests.recv().unwrap().to_ascii_lowercase();
    assert!(
        request.contains("accept: application/vnd.collection+json,*/*;q=0.1"),
        "missing accept header in request:\n{request}"
    );
}

#[test]
fn follow_resolves_relative_redirects() {
    let (base, requests) = serve(vec![
        response("302 Found", &[("Location", "/next")], ""),
        ok_collection(),
    ]);
    let collection = HttpNavigator::new().follow(&base).unwrap();
    assert_eq!(
        "http://example.org/friends/",
        collection.href().unwrap().as_str()
    );

    let _first = requests.recv().unwrap();
    let second = requests.recv().unwrap();
    assert!(
        second.starts_with("GET /next "),
        "redirect target not requested:\n{second}"
    );
}

// ============================================================================
// Failure paths
// ============================================================================

#[test]
fn follow_rejects_a_wrong_content_type() {
    let (base, _requests) = serve(vec![response(
        "200 OK",
        &[("Content-Type", "application/json")],
        COLLECTION_BODY,
    )]);
    let err = HttpNavigator::new().follow(&base).unwrap_err();
    match err {
        NavigationError::ContentType { found } => assert_eq!("application/json", found),
        other => panic!("expected ContentType, got {other:?}"),
    }
}

#[test]
fn follow_rejects_a_content_type_with_parameters() {
    let (base, _requests) = serve(vec![response(
        "200 OK",
        &[("Content-Type", "application/vnd.collection+json; charset=utf-8")],
        COLLECTION_BODY,
    )]);
    let err = HttpNavigator::new().follow(&base).unwrap_err();
    assert!(
        matches!(err, NavigationError::ContentType { .. }),
        "got {err:?}"
    );
}

#[test]
fn follow_surfaces_the_body_of_an_error_status() {
    let (base, _requests) = serve(vec![response(
        "404 Not Found",
        &[("Content-Type", "text/plain")],
        "no such collection",
    )]);
    let err = HttpNavigator::new().follow(&base).unwrap_err();
    match err {
        NavigationError::Status { status, body } => {
            assert_eq!(404, status);
            assert_eq!("no such collection", body);
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn follow_fails_on_a_redirect_without_location() {
    let (base, _requests) = serve(vec![response("302 Found", &[], "")]);
    let err = HttpNavigator::new().follow(&base).unwrap_err();
    assert!(
        matches!(err, NavigationError::MissingLocation),
        "got {err:?}"
    );
}

#[test]
fn follow_gives_up_on_a_redirect_loop() {
    let redirect = response("302 Found", &[("Location", "/")], "");
    let (base, _requests) = serve(vec![redirect.clone(), redirect.clone(), redirect.clone(), redirect]);
    let err = HttpNavigator::new()
        .with_max_redirects(3)
        .follow(&base)
        .unwrap_err();
    match err {
        NavigationError::TooManyRedirects { limit } => assert_eq!(3, limit),
        other => panic!("expected TooManyRedirects, got {other:?}"),
    }
}

#[test]
fn follow_reports_an_unparsable_body_as_a_document_error() {
    let (base, _requests) = serve(vec![response(
        "200 OK",
        &[("Content-Type", MEDIA_TYPE)],
        "{\"items\": []}",
    )]);
    let err = HttpNavigator::new().follow(&base).unwrap_err();
    assert!(matches!(err, NavigationError::Document(_)), "got {err:?}");
}
