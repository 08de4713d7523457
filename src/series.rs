//! Series records and everything hanging off a single series: actors, episodes, images and
//! the key-filtered record view.

use crate::common::{FullResponse, PagedResponse, ResponseData};
use crate::episodes::Episode;
use crate::internal::serde::{deserialize_maybe_empty_date, deserialize_maybe_null_to_default};
use crate::{options, Result, Tvdb};
use chrono::NaiveDate;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// The full record of a series.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Series {
    pub id: u32,
    /// May be missing when the series has no translation in the requested language.
    pub series_name: Option<String>,
    pub aliases: Vec<String>,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub banner: String,
    /// Id of the series in the predecessor api, as string for historical reasons.
    pub series_id: String,
    pub status: String,
    #[serde(deserialize_with = "deserialize_maybe_empty_date")]
    pub first_aired: Option<NaiveDate>,
    pub network: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub network_id: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub runtime: String,
    pub genre: Vec<String>,
    pub overview: Option<String>,
    pub last_updated: u64,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub airs_day_of_week: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub airs_time: String,
    /// Content rating ("TV-MA", ...), not to be confused with [`Series::site_rating`].
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub rating: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub imdb_id: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub zap2it_id: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub added: String,
    pub site_rating: f64,
    pub site_rating_count: u32,
    pub slug: String,
}

/// A cast member of a series.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Actor {
    pub id: u32,
    pub series_id: u32,
    pub name: String,
    pub role: String,
    pub sort_order: u32,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub image: String,
    pub image_author: Option<u32>,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub image_added: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub last_updated: String,
}

/// Which seasons and how many episodes of a series exist, split by aired and dvd ordering.
/// The counts are strings because that is what the api sends.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodesSummary {
    pub aired_seasons: Vec<String>,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub aired_episodes: String,
    pub dvd_seasons: Vec<String>,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub dvd_episodes: String,
}

/// How many images of each kind exist for a series.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageCounts {
    pub fanart: u32,
    pub poster: u32,
    pub season: u32,
    pub seasonwide: u32,
    pub series: u32,
}

/// Community rating of an [`Image`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RatingsInfo {
    pub average: f64,
    pub count: u32,
}

/// A single image record of the image query endpoint. `file_name` and `thumbnail` are paths
/// below `https://thetvdb.com/banners/`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    pub id: u32,
    pub key_type: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub sub_key: String,
    pub file_name: String,
    pub language_id: u32,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub resolution: String,
    pub ratings_info: RatingsInfo,
    pub thumbnail: String,
}

/// One valid image query combination as reported by the image query params endpoint.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageQueryParam {
    pub key_type: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub language_id: String,
    pub resolution: Vec<String>,
    pub sub_key: Vec<String>,
}

options! {
    SeriesOptions;
}

options! {
    EpisodesOptions;
    /// Page of results to fetch, the api serves 100 episodes per page.
    page(u32, "page") = None
}

options! {
    /// Query episodes of a series by their position or ids. The api combines all set fields
    /// with a logical and.
    EpisodesQueryOptions;
    aired_season(u32, "airedSeason") = None,
    aired_episode(u32, "airedEpisode") = None,
    imdb_id(String, "imdbId") = None,
    dvd_season(u32, "dvdSeason") = None,
    dvd_episode(u32, "dvdEpisode") = None,
    absolute_number(u32, "absoluteNumber") = None,
    page(u32, "page") = None
}

options! {
    /// Narrow down which images to fetch. `key_type` decides which of the other fields the api
    /// accepts; `series_images_query_params` reports the valid combinations.
    ImagesQueryOptions;
    key_type(String, "keyType") = None,
    resolution(String, "resolution") = None,
    sub_key(String, "subKey") = None
}

impl Tvdb {
    /// Return the full record of a series by its api id.
    pub async fn series(&self, id: u32, options: SeriesOptions) -> Result<Series> {
        Ok(self.series_full(id, options).await?.body.data)
    }

    /// [`Tvdb::series`], returning the whole transport response.
    pub async fn series_full(
        &self,
        id: u32,
        options: SeriesOptions,
    ) -> Result<FullResponse<ResponseData<Series>>> {
        self.executor
            .get(format!("/series/{id}"))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Issue a HEAD request for a series and return only the response headers. Useful to read
    /// `Last-Modified` without paying for the body.
    pub async fn series_head(&self, id: u32, options: SeriesOptions) -> Result<HeaderMap> {
        self.executor
            .head(format!("/series/{id}"))
            .locale(options.language.as_ref())?
            .request_head()
            .await
    }

    /// Return the cast of a series.
    pub async fn series_actors(&self, id: u32, options: SeriesOptions) -> Result<Vec<Actor>> {
        Ok(self.series_actors_full(id, options).await?.body.data)
    }

    /// [`Tvdb::series_actors`], returning the whole transport response.
    pub async fn series_actors_full(
        &self,
        id: u32,
        options: SeriesOptions,
    ) -> Result<FullResponse<ResponseData<Vec<Actor>>>> {
        self.executor
            .get(format!("/series/{id}/actors"))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Return one page of all episodes of a series. The full envelope with the pagination
    /// links is available through [`Tvdb::series_episodes_full`].
    pub async fn series_episodes(
        &self,
        id: u32,
        options: EpisodesOptions,
    ) -> Result<Vec<Episode>> {
        Ok(self.series_episodes_full(id, options).await?.body.data)
    }

    /// [`Tvdb::series_episodes`], returning the whole transport response.
    pub async fn series_episodes_full(
        &self,
        id: u32,
        options: EpisodesOptions,
    ) -> Result<FullResponse<PagedResponse<Episode>>> {
        self.executor
            .get(format!("/series/{id}/episodes"))
            .query(options.to_query(&[]))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Query episodes of a series by position or ids.
    pub async fn series_episodes_query(
        &self,
        id: u32,
        options: EpisodesQueryOptions,
    ) -> Result<Vec<Episode>> {
        Ok(self.series_episodes_query_full(id, options).await?.body.data)
    }

    /// [`Tvdb::series_episodes_query`], returning the whole transport response.
    pub async fn series_episodes_query_full(
        &self,
        id: u32,
        options: EpisodesQueryOptions,
    ) -> Result<FullResponse<PagedResponse<Episode>>> {
        self.executor
            .get(format!("/series/{id}/episodes/query"))
            .query(options.to_query(&[]))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Return the query parameters the episode query endpoint accepts.
    pub async fn series_episodes_query_params(
        &self,
        id: u32,
        options: SeriesOptions,
    ) -> Result<Vec<String>> {
        Ok(self
            .series_episodes_query_params_full(id, options)
            .await?
            .body
            .data)
    }

    /// [`Tvdb::series_episodes_query_params`], returning the whole transport response.
    pub async fn series_episodes_query_params_full(
        &self,
        id: u32,
        options: SeriesOptions,
    ) -> Result<FullResponse<ResponseData<Vec<String>>>> {
        self.executor
            .get(format!("/series/{id}/episodes/query/params"))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Return which seasons and how many episodes of a series exist.
    pub async fn series_episodes_summary(
        &self,
        id: u32,
        options: SeriesOptions,
    ) -> Result<EpisodesSummary> {
        Ok(self.series_episodes_summary_full(id, options).await?.body.data)
    }

    /// [`Tvdb::series_episodes_summary`], returning the whole transport response.
    pub async fn series_episodes_summary_full(
        &self,
        id: u32,
        options: SeriesOptions,
    ) -> Result<FullResponse<ResponseData<EpisodesSummary>>> {
        self.executor
            .get(format!("/series/{id}/episodes/summary"))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Return a series record reduced to the given keys. The api decides which keys are valid;
    /// unknown ones are silently dropped from the result, hence the dynamic return value.
    pub async fn series_filter(
        &self,
        id: u32,
        keys: &[&str],
        options: SeriesOptions,
    ) -> Result<serde_json::Value> {
        Ok(self.series_filter_full(id, keys, options).await?.body.data)
    }

    /// [`Tvdb::series_filter`], returning the whole transport response.
    pub async fn series_filter_full(
        &self,
        id: u32,
        keys: &[&str],
        options: SeriesOptions,
    ) -> Result<FullResponse<ResponseData<serde_json::Value>>> {
        self.executor
            .get(format!("/series/{id}/filter"))
            .query(options.to_query(&[("keys".to_string(), keys.join(","))]))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Return how many images of each kind exist for a series.
    pub async fn series_images(&self, id: u32, options: SeriesOptions) -> Result<ImageCounts> {
        Ok(self.series_images_full(id, options).await?.body.data)
    }

    /// [`Tvdb::series_images`], returning the whole transport response.
    pub async fn series_images_full(
        &self,
        id: u32,
        options: SeriesOptions,
    ) -> Result<FullResponse<ResponseData<ImageCounts>>> {
        self.executor
            .get(format!("/series/{id}/images"))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Return image records of a series matching the given query.
    pub async fn series_images_query(
        &self,
        id: u32,
        options: ImagesQueryOptions,
    ) -> Result<Vec<Image>> {
        Ok(self.series_images_query_full(id, options).await?.body.data)
    }

    /// [`Tvdb::series_images_query`], returning the whole transport response.
    pub async fn series_images_query_full(
        &self,
        id: u32,
        options: ImagesQueryOptions,
    ) -> Result<FullResponse<ResponseData<Vec<Image>>>> {
        self.executor
            .get(format!("/series/{id}/images/query"))
            .query(options.to_query(&[]))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Return the valid image query combinations for a series.
    pub async fn series_images_query_params(
        &self,
        id: u32,
        options: SeriesOptions,
    ) -> Result<Vec<ImageQueryParam>> {
        Ok(self
            .series_images_query_params_full(id, options)
            .await?
            .body
            .data)
    }

    /// [`Tvdb::series_images_query_params`], returning the whole transport response.
    pub async fn series_images_query_params_full(
        &self,
        id: u32,
        options: SeriesOptions,
    ) -> Result<FullResponse<ResponseData<Vec<ImageQueryParam>>>> {
        self.executor
            .get(format!("/series/{id}/images/query/params"))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }
}
