use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    sync::Arc,
    thread,
};

use usergen_core::{
    card::CardText,
    error::Error,
    generator::{Generator, View},
    webapi::WebApi,
};

const JANE: &str = r#"{"results":[{"name":{"first":"Jane","last":"Doe"},"gender":"female","email":"jane@x.com","location":{"city":"Linz","state":"Upper Austria","country":"Austria"},"login":{"md5":"abc123"},"cell":"+43 000","picture":{"large":"http://x/img.jpg"}}]}"#;

/// Serve each canned `(status line, body)` to one connection, in order.
fn serve(responses: Vec<(&'static str, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
        }
    });
    format!("http://{addr}/api/")
}

#[test]
fn mount_fetch_renders_card() {
    let url = serve(vec![("200 OK", JANE.to_string())]);
    let api = WebApi::new(url, None, None);
    let mut generator = Generator::default();

    let ticket = generator.begin_fetch();
    assert_eq!(generator.view(), View::Hidden);
    generator.complete(ticket, api.get_random_user().map(Arc::new));

    let View::Card { user, thank_you } = generator.view() else {
        panic!("expected card, got {:?}", generator.view());
    };
    assert!(!thank_you);
    let card = CardText::from_record(&user);
    assert_eq!(card.name, "Jane Doe");
    assert_eq!(card.gender, "Female");
    assert_eq!(card.email, "jane@x.com");
    assert_eq!(card.location, "Linz, Upper Austria, Austria");
    assert_eq!(card.login, "abc123");
    assert_eq!(card.phone, "+43 000");
    assert_eq!(card.picture, "http://x/img.jpg");
}

#[test]
fn non_success_status_is_an_error() {
    let url = serve(vec![("503 Service Unavailable", "{}".to_string())]);
    let api = WebApi::new(url, None, None);
    assert!(matches!(
        api.get_random_user(),
        Err(Error::UnexpectedStatus(503))
    ));
}

#[test]
fn malformed_body_is_an_error() {
    let url = serve(vec![("200 OK", "<html>".to_string())]);
    let api = WebApi::new(url, None, None);
    assert!(matches!(api.get_random_user(), Err(Error::JsonError(_))));
}

#[test]
fn empty_results_is_an_error() {
    let url = serve(vec![("200 OK", r#"{"results":[]}"#.to_string())]);
    let api = WebApi::new(url, None, None);
    assert!(matches!(api.get_random_user(), Err(Error::EmptyResults)));
}

#[test]
fn failed_refetch_keeps_previous_user() {
    let url = serve(vec![
        ("200 OK", JANE.to_string()),
        ("500 Internal Server Error", String::new()),
    ]);
    let api = WebApi::new(url, None, None);
    let mut generator = Generator::default();

    let first = generator.begin_fetch();
    generator.complete(first, api.get_random_user().map(Arc::new));
    let second = generator.begin_fetch();
    generator.complete(second, api.get_random_user().map(Arc::new));

    assert!(generator.is_error());
    assert!(!generator.is_loading());
    assert_eq!(generator.view(), View::Error);
    assert_eq!(generator.user().unwrap().full_name(), "Jane Doe");
}

#[test]
fn unreachable_host_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = WebApi::new(format!("http://{addr}/api/"), None, None);
    assert!(api.get_random_user().is_err());
}

#[test]
fn image_rejects_non_http_urls() {
    let api = WebApi::new("http://127.0.0.1:1/api/", None, None);
    assert!(matches!(
        api.get_image("file:///etc/passwd"),
        Err(Error::InvalidUrl(_))
    ));
    assert!(matches!(api.get_image("not a url"), Err(Error::InvalidUrl(_))));
}
