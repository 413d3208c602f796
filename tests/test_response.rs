use simple_http_server::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_response_builder_auto_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body("This is the body")
        .build();

    assert_eq!(response.header("Content-Length"), Some("16"));
}

#[test]
fn test_content_length_counts_characters() {
    let response = ResponseBuilder::new(StatusCode::Ok).body("héllo").build();
    assert_eq!(response.header("Content-Length"), Some("5"));
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[test]
fn test_response_ok_header_order() {
    let response = Response::ok("<p>hi</p>");

    assert_eq!(response.status, StatusCode::Ok);
    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, ["Server", "Content-Type", "Content-Length"]);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.header("Server"), Some("Custom"));
}

#[test]
fn test_response_not_found_helper() {
    let response = Response::not_found("gone");

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, "gone");
    assert_eq!(response.header("Content-Length"), Some("4"));
}
