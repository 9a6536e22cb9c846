//! Construction of WebUI HTTP requests from endpoint descriptors.

use std::path::PathBuf;

use url::Url;
use url::form_urlencoded;

use qbit_webui_types::{AddTorrent, Params, QbitError};

use crate::endpoint::{Auth, Endpoint};
use crate::session::SID_COOKIE;

/// Content type of every non-upload request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP method. The WebUI API only needs `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `POST`
    Post,
}

/// A fully built request, independent of any HTTP library.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Always [`Method::Post`].
    pub method: Method,
    /// Absolute endpoint URL.
    pub url: Url,
    /// Header pairs in insertion order.
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: Body,
}

impl HttpRequest {
    /// Value of the first header called `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// `application/x-www-form-urlencoded` text.
    Form(String),
    /// `multipart/form-data` parts; the boundary is chosen by the transport.
    Multipart(Vec<Part>),
}

/// One part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// File field, read by the transport when the request is sent.
    File {
        /// Field name.
        name: String,
        /// Local path of the file.
        path: PathBuf,
        /// File name announced to the server.
        filename: String,
    },
}

/// Credential attached to a request, chosen from [`Endpoint::auth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Credential {
    Cookie(String),
    Referer(String),
}

impl Credential {
    fn header(&self) -> (String, String) {
        match self {
            Credential::Cookie(sid) => ("Cookie".into(), format!("{SID_COOKIE}={sid}")),
            Credential::Referer(origin) => ("Referer".into(), origin.clone()),
        }
    }
}

/// `Referer` value used by login: the origin of the base URL.
pub(crate) fn referer(base: &Url) -> String {
    base.origin().ascii_serialization()
}

/// Form-encodes `params` in insertion order.
pub fn encode_form(params: &Params) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

fn endpoint_url(base: &Url, endpoint: &Endpoint) -> Result<Url, QbitError> {
    base.join(endpoint.path().trim_start_matches('/'))
        .map_err(|e| QbitError::InvalidArgument(format!("invalid URL for {endpoint}: {e}")))
}

/// Builds a form-encoded request for `endpoint`.
pub(crate) fn build_form(
    base: &Url,
    endpoint: &Endpoint,
    credential: &Credential,
    params: &Params,
) -> Result<HttpRequest, QbitError> {
    debug_assert_eq!(
        matches!(credential, Credential::Referer(_)),
        endpoint.auth == Auth::Referer
    );
    Ok(HttpRequest {
        method: Method::Post,
        url: endpoint_url(base, endpoint)?,
        headers: vec![
            ("Content-Type".into(), FORM_CONTENT_TYPE.into()),
            credential.header(),
        ],
        body: Body::Form(encode_form(params)),
    })
}

/// Builds the multipart upload for `torrents/add`.
///
/// Part order: the newline-joined `urls`, one `torrents` file part per path,
/// then the scalar options.
pub(crate) fn build_add_torrent(
    base: &Url,
    endpoint: &Endpoint,
    credential: &Credential,
    torrent: &AddTorrent,
) -> Result<HttpRequest, QbitError> {
    let mut parts = Vec::new();
    if !torrent.urls().is_empty() {
        parts.push(Part::Text {
            name: "urls".into(),
            value: torrent.urls().join("\n"),
        });
    }
    for path in torrent.torrents() {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                QbitError::InvalidArgument(format!("not a file path: {}", path.display()))
            })?;
        parts.push(Part::File {
            name: "torrents".into(),
            path: path.clone(),
            filename,
        });
    }
    parts.extend(torrent.options().to_params().iter().map(|(name, value)| Part::Text {
        name: name.into(),
        value: value.into(),
    }));

    Ok(HttpRequest {
        method: Method::Post,
        url: endpoint_url(base, endpoint)?,
        headers: vec![credential.header()],
        body: Body::Multipart(parts),
    })
}
