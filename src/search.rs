//! Series search.

use crate::common::{FullResponse, ResponseData};
use crate::internal::serde::deserialize_maybe_empty_date;
use crate::{options, Result, Tvdb};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A series as the search endpoint reports it. Only a subset of the fields of a full
/// [`crate::Series`] record; fetch the series by its `id` for the rest.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesSearchResult {
    pub id: u32,
    /// May be missing when the series has no translation in the requested language.
    pub series_name: Option<String>,
    pub aliases: Vec<String>,
    pub banner: String,
    #[serde(deserialize_with = "deserialize_maybe_empty_date")]
    pub first_aired: Option<NaiveDate>,
    pub network: String,
    pub overview: Option<String>,
    pub slug: String,
    pub status: String,
}

/// Which query parameters the search endpoint accepts, as reported by
/// `/search/series/params`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSeriesParams {
    pub params: Vec<String>,
}

options! {
    /// What to match a series search against. The api requires exactly one of the fields to be
    /// set and rejects combined matches.
    SearchOptions;
    /// Match against the (translated) series name.
    name(String, "name") = None,
    /// Match against the IMDB id of a series.
    imdb_id(String, "imdbId") = None,
    /// Match against the Zap2it id of a series.
    zap2it_id(String, "zap2itId") = None,
    /// Match against the url slug of a series.
    slug(String, "slug") = None
}

options! {
    SearchParamsOptions;
}

impl Tvdb {
    /// Search for series. Returns a 404-shaped error when nothing matches, just like the api
    /// itself does.
    pub async fn search_series(&self, options: SearchOptions) -> Result<Vec<SeriesSearchResult>> {
        Ok(self.search_series_full(options).await?.body.data)
    }

    /// [`Tvdb::search_series`], returning the whole transport response.
    pub async fn search_series_full(
        &self,
        options: SearchOptions,
    ) -> Result<FullResponse<ResponseData<Vec<SeriesSearchResult>>>> {
        self.executor
            .get("/search/series")
            .query(options.to_query(&[]))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Return the query parameters the search endpoint accepts.
    pub async fn search_series_params(&self, options: SearchParamsOptions) -> Result<Vec<String>> {
        Ok(self.search_series_params_full(options).await?.body.data.params)
    }

    /// [`Tvdb::search_series_params`], returning the whole transport response.
    pub async fn search_series_params_full(
        &self,
        options: SearchParamsOptions,
    ) -> Result<FullResponse<ResponseData<SearchSeriesParams>>> {
        self.executor
            .get("/search/series/params")
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }
}
