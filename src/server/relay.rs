use poem::{Body, Response};
use std::io;
use tokio_stream::StreamExt;

/// Turns the upstream response into ours without touching it: same status,
/// same headers, body streamed through as it arrives.
pub fn relay(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let headers = upstream.headers().clone();

    let body = Body::from_bytes_stream(
        upstream
            .bytes_stream()
            .map(|chunk| chunk.map_err(|err| io::Error::new(io::ErrorKind::Other, err))),
    );

    let mut response = Response::builder().status(status).body(body);
    *response.headers_mut() = headers;

    response
}
