use lambda_http::{
    http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    Body, Error, Response,
};
use serde::Serialize;

const APPLICATION_JSON: &str = "application/json";
const TEXT_PLAIN: &str = "text/plain";

/// 200 with `body` serialized as compact JSON.
pub fn ok<T>(body: &T) -> Result<Response<Body>, Error>
where
    T: Serialize,
{
    render(200, APPLICATION_JSON, serde_json::to_string(body)?)
}

pub fn ok_message(body: impl Into<String>) -> Result<Response<Body>, Error> {
    render(200, TEXT_PLAIN, body.into())
}

pub fn bad_request(body: impl Into<String>) -> Result<Response<Body>, Error> {
    render(400, TEXT_PLAIN, body.into())
}

pub fn not_found(body: impl Into<String>) -> Result<Response<Body>, Error> {
    render(404, TEXT_PLAIN, body.into())
}

pub fn bad_gateway(body: impl Into<String>) -> Result<Response<Body>, Error> {
    render(502, TEXT_PLAIN, body.into())
}

fn render(status: u16, content_type: &str, body: String) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, content_type)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_CREDENTIALS, "true")
        .body(Body::Text(body))?;
    Ok(response)
}
