//! # tvdb-rs
//!
//! A easy-to-use, batteries-included library for the [TheTVDB](https://thetvdb.com/) v2 api,
//! completely written in Rust.
//!
//! An api key is required to use this library (the same key the website hands out for api v2
//! access), plus the account name and user key of the account the api key belongs to. The
//! library logs in lazily: the first api call fetches a session token, every following call
//! reuses it and a expired token is renewed transparently by retrying the failed call exactly
//! once after a fresh login.
//!
//! # Example
//!
//! ```no_run
//! use tvdb_rs::{Credentials, Tvdb};
//! use tvdb_rs::series::SeriesOptions;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let tvdb = Tvdb::builder()
//!     .credentials(Credentials::new("account", "user key", "api key"))
//!     .build()?;
//!
//! let series = tvdb.series(121361, SeriesOptions::default()).await?;
//! println!("{}", series.series_name.unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! Every endpoint comes in two flavors: the plain method returns the decoded payload of the
//! response envelope, the `*_full` sibling returns the whole transport response (status,
//! headers and the decoded envelope) for callers which need pagination links or raw headers.

pub mod common;
pub mod episodes;
pub mod error;
pub mod languages;
pub mod search;
pub mod series;
pub mod tvdb;
pub mod updates;

// internal
mod internal;
mod macros;

// internal
pub(crate) use error::Result;
pub(crate) use macros::{enum_values, options};

pub use common::{FullResponse, PageLinks, PagedResponse, ResponseData};
pub use episodes::Episode;
pub use error::TvdbError;
pub use languages::Language;
pub use search::SeriesSearchResult;
pub use series::{Actor, Series};
pub use tvdb::{Credentials, Locale, Tvdb, TvdbBuilder};
pub use updates::Update;
