//! Response envelopes shared by all endpoints.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;

/// Standard response envelope. Every successful json response delivers its payload under a
/// `data` field; the payload-returning endpoint methods unwrap it, the `*_full` methods hand
/// the whole envelope out.
#[derive(Clone, Debug, Deserialize)]
pub struct ResponseData<T> {
    pub data: T,
}

/// Envelope of paginated endpoints. Next to the current page of `data`, `links` points at the
/// surrounding pages. The library does not walk pages on its own, pass the wanted page as
/// request option instead.
#[derive(Clone, Debug, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default)]
    pub links: PageLinks,
    pub data: Vec<T>,
}

/// Positions of the surrounding pages of a [`PagedResponse`].
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageLinks {
    pub first: Option<u32>,
    pub last: Option<u32>,
    pub next: Option<u32>,
    pub prev: Option<u32>,
}

/// The complete transport response of a call: http status, response headers and the decoded
/// response envelope. Returned by the `*_full` variant of every endpoint method.
#[derive(Clone, Debug)]
pub struct FullResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: T,
}
