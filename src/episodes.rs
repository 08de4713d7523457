//! Single episode records.

use crate::common::{FullResponse, ResponseData};
use crate::internal::serde::{
    deserialize_maybe_empty_date, deserialize_maybe_null_to_default, deserialize_number_from_string,
};
use crate::{options, Result, Tvdb};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// In which language the texts of an [`Episode`] record were delivered. Mirrors the
/// `Accept-Language` header of the request which fetched it.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeLanguage {
    pub episode_name: String,
    pub overview: String,
}

/// A single episode. The episode list endpoints deliver the same shape with the tail of the
/// fields left at their defaults.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Episode {
    pub id: u32,
    pub aired_season: Option<u32>,
    #[serde(rename = "airedSeasonID")]
    pub aired_season_id: Option<u32>,
    pub aired_episode_number: Option<u32>,
    pub episode_name: Option<String>,
    #[serde(deserialize_with = "deserialize_maybe_empty_date")]
    pub first_aired: Option<NaiveDate>,
    pub guest_stars: Vec<String>,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
    pub overview: Option<String>,
    pub language: EpisodeLanguage,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub production_code: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub show_url: String,
    pub last_updated: u64,
    pub last_updated_by: u32,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub dvd_discid: String,
    pub dvd_season: Option<u32>,
    /// Fractional numbers do happen, some discs squeeze two episodes into one chapter.
    pub dvd_episode_number: Option<f64>,
    pub dvd_chapter: Option<f64>,
    pub absolute_number: Option<u32>,

    pub series_id: u32,
    pub airs_after_season: Option<u32>,
    pub airs_before_season: Option<u32>,
    pub airs_before_episode: Option<u32>,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub filename: String,
    pub thumb_author: Option<u32>,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub thumb_added: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub thumb_width: Option<u32>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub thumb_height: Option<u32>,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub imdb_id: String,
    pub site_rating: f64,
    pub site_rating_count: u32,
}

options! {
    EpisodeOptions;
}

impl Tvdb {
    /// Return the full record of a single episode by its api id.
    pub async fn episode(&self, id: u32, options: EpisodeOptions) -> Result<Episode> {
        Ok(self.episode_full(id, options).await?.body.data)
    }

    /// [`Tvdb::episode`], returning the whole transport response.
    pub async fn episode_full(
        &self,
        id: u32,
        options: EpisodeOptions,
    ) -> Result<FullResponse<ResponseData<Episode>>> {
        self.executor
            .get(format!("/episodes/{id}"))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }
}
