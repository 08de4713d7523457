//! Languages the api can deliver translations in.

use crate::common::{FullResponse, ResponseData};
use crate::{options, Result, Tvdb};
use serde::{Deserialize, Serialize};

/// A single language record of the `/languages` endpoint. The `abbreviation` is what
/// [`crate::Locale`] wraps and what the `Accept-Language` header carries.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub id: u32,
    pub abbreviation: String,
    pub name: String,
    pub english_name: String,
}

options! {
    LanguageOptions;
}

impl Tvdb {
    /// Return all languages the api knows.
    pub async fn languages(&self, options: LanguageOptions) -> Result<Vec<Language>> {
        Ok(self.languages_full(options).await?.body.data)
    }

    /// [`Tvdb::languages`], returning the whole transport response.
    pub async fn languages_full(
        &self,
        options: LanguageOptions,
    ) -> Result<FullResponse<ResponseData<Vec<Language>>>> {
        self.executor
            .get("/languages")
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Return a single language by its api id.
    pub async fn language(&self, id: u32, options: LanguageOptions) -> Result<Language> {
        Ok(self.language_full(id, options).await?.body.data)
    }

    /// [`Tvdb::language`], returning the whole transport response.
    pub async fn language_full(
        &self,
        id: u32,
        options: LanguageOptions,
    ) -> Result<FullResponse<ResponseData<Language>>> {
        self.executor
            .get(format!("/languages/{id}"))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }
}
