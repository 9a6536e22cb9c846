//! Shared test utilities and fixtures.

use crate::client::QbitClient;
use crate::request::{Body, HttpRequest};
use crate::response::HttpResponse;
use crate::transport::MockTransport;

pub(crate) const BASE_URL: &str = "http://localhost:8080";
pub(crate) const SID: &str = "abc123";

pub(crate) fn ok(body: &str) -> HttpResponse {
    HttpResponse::new(200, body)
}

pub(crate) fn status(code: u16) -> HttpResponse {
    HttpResponse::new(code, "")
}

pub(crate) fn login_ok(sid: &str) -> HttpResponse {
    ok("Ok.").with_header("set-cookie", format!("SID={sid}; HttpOnly; path=/"))
}

pub(crate) fn client(mock: MockTransport) -> QbitClient<MockTransport> {
    QbitClient::with_transport(BASE_URL, mock).unwrap()
}

pub(crate) fn logged_in_client(mock: MockTransport) -> QbitClient<MockTransport> {
    let client = client(mock);
    client.set_session_cookie(Some(SID.to_string()));
    client
}

pub(crate) fn path(request: &HttpRequest) -> &str {
    request.url.path()
}

pub(crate) fn form(request: &HttpRequest) -> &str {
    match &request.body {
        Body::Form(text) => text,
        Body::Multipart(_) => panic!("Expected form body, got multipart"),
    }
}
