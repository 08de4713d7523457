//! Recently updated series.

use crate::common::{FullResponse, ResponseData};
use crate::{options, Result, Tvdb};
use serde::{Deserialize, Serialize};

/// A series which changed within the queried time window.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Update {
    /// Series id, fetchable via [`crate::Tvdb::series`].
    pub id: u32,
    /// Unix timestamp of the last change.
    pub last_updated: u64,
}

options! {
    /// Time window to report updated series for. The api requires `from_time` and caps the
    /// window at one week; anything longer is answered with an error which this library, as
    /// with all query validation, passes through.
    UpdatedOptions;
    /// Lower bound of the window as unix timestamp.
    from_time(u64, "fromTime") = None,
    /// Optional upper bound of the window as unix timestamp.
    to_time(u64, "toTime") = None
}

options! {
    UpdatedParamsOptions;
}

impl Tvdb {
    /// Return all series that changed within the given time window.
    pub async fn updated(&self, options: UpdatedOptions) -> Result<Vec<Update>> {
        Ok(self.updated_full(options).await?.body.data)
    }

    /// [`Tvdb::updated`], returning the whole transport response.
    pub async fn updated_full(
        &self,
        options: UpdatedOptions,
    ) -> Result<FullResponse<ResponseData<Vec<Update>>>> {
        self.executor
            .get("/updated/query")
            .query(options.to_query(&[]))
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }

    /// Return the query parameters the update endpoint accepts.
    pub async fn updated_params(&self, options: UpdatedParamsOptions) -> Result<Vec<String>> {
        Ok(self.updated_params_full(options).await?.body.data)
    }

    /// [`Tvdb::updated_params`], returning the whole transport response.
    pub async fn updated_params_full(
        &self,
        options: UpdatedParamsOptions,
    ) -> Result<FullResponse<ResponseData<Vec<String>>>> {
        self.executor
            .get("/updated/query/params")
            .locale(options.language.as_ref())?
            .request_full()
            .await
    }
}
