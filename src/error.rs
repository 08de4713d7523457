use crate::common::FullResponse;
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub(crate) type Result<T, E = TvdbError> = core::result::Result<T, E>;

/// Crate specific error types.
#[derive(Clone, Debug)]
pub enum TvdbError {
    /// Error was caused by something library internal. This only happens if something was
    /// implemented incorrectly (which hopefully should never be the case) or if TheTVDB
    /// surprisingly changed specific parts of their api which broke a part of this crate.
    Internal(TvdbErrorContext),

    /// Some sort of error occurred while requesting the api.
    Request(TvdbErrorContext),
    /// While decoding the api response body something went wrong.
    Decode(TvdbErrorContext),

    /// Something went wrong while logging in or the session token was rejected.
    Authentication(TvdbErrorContext),

    /// Generally malformed or invalid user input.
    Input(TvdbErrorContext),
}

impl Display for TvdbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TvdbError::Internal(context) => write!(f, "{}", context),
            TvdbError::Request(context) => write!(f, "{}", context),
            TvdbError::Decode(context) => write!(f, "{}", context),
            TvdbError::Authentication(context) => write!(f, "{}", context),
            TvdbError::Input(context) => write!(f, "{}", context),
        }
    }
}

impl Error for TvdbError {}

impl From<serde_json::Error> for TvdbError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(TvdbErrorContext::new(err.to_string()))
    }
}

impl From<reqwest::Error> for TvdbError {
    fn from(err: reqwest::Error) -> Self {
        let mut context = TvdbErrorContext::new(err.to_string());
        if let Some(url) = err.url() {
            context = context.with_url(url.clone());
        }
        if let Some(status) = err.status() {
            context = context.with_status(status);
        }

        if err.is_request()
            || err.is_redirect()
            || err.is_timeout()
            || err.is_connect()
            || err.is_body()
            || err.is_status()
        {
            TvdbError::Request(context)
        } else if err.is_decode() {
            TvdbError::Decode(context)
        } else if err.is_builder() {
            TvdbError::Internal(context)
        } else {
            TvdbError::Internal(TvdbErrorContext::new(format!(
                "Could not determine request error type - {}",
                err
            )))
        }
    }
}

/// Information about a [`TvdbError`].
#[derive(Clone, Debug)]
pub struct TvdbErrorContext {
    pub message: String,
    pub url: Option<String>,
    pub status: Option<StatusCode>,
    pub value: Option<String>,
}

impl Display for TvdbErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut res = self.message.clone();

        if let Some(url) = &self.url {
            res.push_str(&format!(" ({})", url));
        }
        if let Some(status) = &self.status {
            res.push_str(&format!(" [http {}]", status.as_u16()));
        }
        if let Some(value) = &self.value {
            res.push_str(&format!(": {}", value));
        }

        write!(f, "{}", res)
    }
}

impl From<String> for TvdbErrorContext {
    fn from(string: String) -> Self {
        TvdbErrorContext::new(string)
    }
}

impl From<&str> for TvdbErrorContext {
    fn from(str: &str) -> Self {
        TvdbErrorContext::new(str)
    }
}

impl TvdbErrorContext {
    pub(crate) fn new<S: ToString>(message: S) -> Self {
        Self {
            message: message.to_string(),
            url: None,
            status: None,
            value: None,
        }
    }

    pub(crate) fn with_url<S: AsRef<str>>(mut self, url: S) -> Self {
        self.url = Some(url.as_ref().to_string());

        self
    }

    pub(crate) fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);

        self
    }

    pub(crate) fn with_value(mut self, value: &[u8]) -> Self {
        self.value = Some(
            std::str::from_utf8(value)
                .unwrap_or("-- not displayable --")
                .to_string(),
        );

        self
    }
}

/// Error responses (and the odd 2xx response) carry their message in a top level `Error` field.
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(rename = "Error")]
    error: String,
}

/// Check if a json value which came back with a 2xx status is actually an error in disguise.
pub(crate) fn is_request_error(value: &Value) -> Result<()> {
    if let Ok(err) = serde_json::from_value::<ApiError>(value.clone()) {
        return Err(TvdbError::Request(TvdbErrorContext::new(err.error)));
    }
    Ok(())
}

/// Turn a plain transport response into the decoded envelope plus status and headers, or the
/// matching [`TvdbError`] when the response reports a failure.
pub(crate) async fn check_request_full<T: DeserializeOwned>(
    url: String,
    resp: Response,
) -> Result<FullResponse<T>> {
    let status = resp.status();
    let headers = resp.headers().clone();

    if !status.is_success() {
        let raw = resp.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ApiError>(&raw)
            .map(|err| err.error)
            .unwrap_or_else(|_| {
                if status.is_server_error() {
                    "Server error detected. Try again later".to_string()
                } else {
                    "Unexpected client error".to_string()
                }
            });
        let context = TvdbErrorContext::new(message)
            .with_url(&url)
            .with_status(status);
        return Err(if status == StatusCode::UNAUTHORIZED {
            TvdbError::Authentication(context)
        } else {
            TvdbError::Request(context)
        });
    }

    let content_length = resp.content_length().unwrap_or(0);
    let _raw = resp.bytes().await?;
    let mut raw: &[u8] = _raw.as_ref();

    // to ensure compatibility with `T`, convert a empty response to {}
    if raw.is_empty() && (content_length == 0) {
        raw = "{}".as_bytes();
    }

    let value: Value = serde_json::from_slice(raw).map_err(|e| {
        TvdbError::Decode(
            TvdbErrorContext::new(format!("{} at {}:{}", e, e.line(), e.column()))
                .with_url(&url)
                .with_value(raw),
        )
    })?;
    is_request_error(&value).map_err(|e| {
        if let TvdbError::Request(context) = e {
            TvdbError::Request(context.with_url(&url).with_status(status))
        } else {
            e
        }
    })?;
    let body = serde_json::from_value::<T>(value.clone()).map_err(|e| {
        TvdbError::Decode(
            TvdbErrorContext::new(format!("{} at {}:{}", e, e.line(), e.column()))
                .with_url(&url)
                .with_value(value.to_string().as_bytes()),
        )
    })?;

    Ok(FullResponse {
        status,
        headers,
        body,
    })
}

/// [`check_request_full`] for HEAD requests which have no body to decode; only the headers are
/// of interest.
pub(crate) fn check_request_head(url: String, resp: Response) -> Result<HeaderMap> {
    let status = resp.status();
    if !status.is_success() {
        let context = TvdbErrorContext::new("Unexpected http status")
            .with_url(&url)
            .with_status(status);
        return Err(if status == StatusCode::UNAUTHORIZED {
            TvdbError::Authentication(context)
        } else {
            TvdbError::Request(context)
        });
    }

    Ok(resp.headers().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_shaped_bodies_are_rejected() {
        let value: Value = serde_json::from_str(r#"{"Error": "Not Authorized"}"#).unwrap();
        let err = is_request_error(&value).unwrap_err();
        assert!(matches!(err, TvdbError::Request(_)));
        assert!(err.to_string().contains("Not Authorized"));
    }

    #[test]
    fn regular_bodies_pass_the_error_check() {
        let value: Value = serde_json::from_str(r#"{"data": {"id": 121361}}"#).unwrap();
        assert!(is_request_error(&value).is_ok());
    }

    #[test]
    fn context_renders_url_and_status() {
        let context = TvdbErrorContext::new("ID: 0 not found")
            .with_url("https://api.thetvdb.com/series/0")
            .with_status(StatusCode::NOT_FOUND);
        assert_eq!(
            context.to_string(),
            "ID: 0 not found (https://api.thetvdb.com/series/0) [http 404]"
        );
    }
}
