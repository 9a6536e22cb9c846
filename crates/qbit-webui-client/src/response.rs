//! Interpretation of WebUI HTTP responses.

use serde_json::Value;
use tracing::warn;

use qbit_webui_types::{Params, QbitError, UnexpectedResponse};

use crate::endpoint::{Auth, Decoder, Endpoint, SUCCESS};

/// A received response, independent of any HTTP library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Header pairs in the order received.
    pub headers: Vec<(String, String)>,
    /// Body text.
    pub body: String,
}

impl HttpResponse {
    /// Response without headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Adds a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Values of every header called `name`, compared case-insensitively.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// [`Decoder::String`]
    String(String),
    /// [`Decoder::Int`]
    Int(i64),
    /// [`Decoder::Bool`]
    Bool(bool),
    /// [`Decoder::Json`]
    Json(Value),
    /// [`Decoder::None`]
    None,
}

impl Decoded {
    /// Text form; integers and booleans are formatted, JSON is serialized.
    pub fn into_string(self) -> String {
        match self {
            Decoded::String(s) => s,
            Decoded::Int(i) => i.to_string(),
            Decoded::Bool(b) => b.to_string(),
            Decoded::Json(v) => v.to_string(),
            Decoded::None => String::new(),
        }
    }

    /// Integer form; anything that is not an integer is 0.
    pub fn into_int(self) -> i64 {
        match self {
            Decoded::Int(i) => i,
            Decoded::Bool(b) => i64::from(b),
            Decoded::String(s) => parse_leading_int(&s),
            Decoded::Json(v) => v.as_i64().unwrap_or_default(),
            Decoded::None => 0,
        }
    }

    /// Boolean form.
    pub fn into_bool(self) -> bool {
        match self {
            Decoded::Bool(b) => b,
            Decoded::Int(i) => i != 0,
            Decoded::String(s) => truthy(&s),
            Decoded::Json(v) => v.as_bool().unwrap_or_default(),
            Decoded::None => false,
        }
    }

    /// JSON form; scalars become JSON scalars, [`Decoded::None`] is `null`.
    pub fn into_json(self) -> Value {
        match self {
            Decoded::Json(v) => v,
            Decoded::String(s) => Value::String(s),
            Decoded::Int(i) => Value::from(i),
            Decoded::Bool(b) => Value::Bool(b),
            Decoded::None => Value::Null,
        }
    }
}

/// Maps the status code to an error, or passes a success through.
pub fn check_status(
    endpoint: &Endpoint,
    params: &Params,
    response: &HttpResponse,
) -> Result<(), QbitError> {
    if let Some(rule) = endpoint.rule_for(response.status) {
        return Err(rule.to_error(params));
    }
    if endpoint.auth == Auth::Cookie && response.status == 403 {
        return Err(QbitError::session_rejected());
    }
    if response.status != SUCCESS {
        return Err(UnexpectedResponse::Status(response.status).into());
    }
    Ok(())
}

/// Decodes a successful body with the endpoint's decoder.
pub fn decode(decoder: Decoder, body: &str) -> Result<Decoded, QbitError> {
    let text = body.trim();
    Ok(match decoder {
        Decoder::String => Decoded::String(text.to_string()),
        Decoder::Int => Decoded::Int(parse_leading_int(text)),
        Decoder::Bool => Decoded::Bool(truthy(text)),
        Decoder::Json => Decoded::Json(
            serde_json::from_str(text)
                .map_err(|_| UnexpectedResponse::InvalidJson(body.to_string()))?,
        ),
        Decoder::None => Decoded::None,
    })
}

/// Status check followed by decoding.
pub fn interpret(
    endpoint: &Endpoint,
    params: &Params,
    response: &HttpResponse,
) -> Result<Decoded, QbitError> {
    check_status(endpoint, params, response)?;
    decode(endpoint.decoder, &response.body)
}

fn truthy(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && text != "0"
}

/// Optional sign and leading digits, like C `atoi`. Saturates on overflow.
fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len < rest.len() {
        warn!("Coercing non-integer body {text:?} to its leading integer");
    }
    let magnitude = rest[..digits_len].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });
    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints;

    #[test]
    fn int_parsing_follows_leading_digits() {
        assert_eq!(parse_leading_int("1024"), 1024);
        assert_eq!(parse_leading_int(" 42\n"), 42);
        assert_eq!(parse_leading_int("-7"), -7);
        assert_eq!(parse_leading_int("12abc"), 12);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-"), 0);
    }

    #[test]
    fn decoders() {
        assert_eq!(
            decode(Decoder::String, " v4.6.2\n").unwrap(),
            Decoded::String("v4.6.2".into())
        );
        assert_eq!(decode(Decoder::Bool, "1").unwrap(), Decoded::Bool(true));
        assert_eq!(decode(Decoder::Bool, "0").unwrap(), Decoded::Bool(false));
        assert_eq!(decode(Decoder::Bool, "").unwrap(), Decoded::Bool(false));
        assert_eq!(
            decode(Decoder::Json, r#"{"a":1}"#).unwrap(),
            Decoded::Json(serde_json::json!({"a": 1}))
        );
        assert_eq!(decode(Decoder::None, "Ok.").unwrap(), Decoded::None);
    }

    #[test]
    fn invalid_json_keeps_body() {
        match decode(Decoder::Json, "not-json") {
            Err(QbitError::UnexpectedResponse(UnexpectedResponse::InvalidJson(body))) => {
                assert_eq!(body, "not-json");
            }
            other => panic!("Expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn status_precedence() {
        let params = Params::new().with("hashes", "abc");

        // Endpoint rule wins over the generic 403 mapping.
        let err = check_status(
            &endpoints::torrents::SET_LOCATION,
            &params,
            &HttpResponse::new(403, ""),
        )
        .unwrap_err();
        assert!(matches!(err, QbitError::OperationFailed(_)));

        let err = check_status(
            &endpoints::torrents::SET_CATEGORY,
            &params,
            &HttpResponse::new(403, "Forbidden"),
        )
        .unwrap_err();
        assert!(matches!(err, QbitError::Unauthorized(_)));

        let err = check_status(
            &endpoints::auth::LOGIN,
            &params,
            &HttpResponse::new(403, ""),
        )
        .unwrap_err();
        assert!(matches!(err, QbitError::TooManyFailedLogins));

        let err = check_status(
            &endpoints::torrents::PAUSE,
            &params,
            &HttpResponse::new(500, ""),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            QbitError::UnexpectedResponse(UnexpectedResponse::Status(500))
        ));
    }

    #[test]
    fn conversions_are_total() {
        assert_eq!(Decoded::None.into_string(), "");
        assert_eq!(Decoded::Int(5).into_string(), "5");
        assert_eq!(Decoded::String("12x".into()).into_int(), 12);
        assert!(Decoded::Int(3).into_bool());
        assert_eq!(Decoded::None.into_json(), Value::Null);
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = HttpResponse::new(200, "Ok.")
            .with_header("set-cookie", "SID=a")
            .with_header("Set-Cookie", "other=b")
            .with_header("Content-Type", "text/plain");
        let values: Vec<_> = response.header_values("SET-COOKIE").collect();
        assert_eq!(values, vec!["SID=a", "other=b"]);
    }
}
