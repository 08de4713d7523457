//! Builder and access to the [`Tvdb`] struct which is required to make any action.

use crate::enum_values;
use reqwest::Client;
use std::sync::Arc;

enum_values! {
    /// Enum of languages the api can translate series and episode records into. The values are
    /// the two letter abbreviations the `/languages` endpoint reports.
    #[allow(non_camel_case_types)]
    #[derive(Hash, Ord, PartialOrd)]
    pub enum Locale {
        cs = "cs"
        da = "da"
        de = "de"
        el = "el"
        en = "en"
        es = "es"
        fi = "fi"
        fr = "fr"
        he = "he"
        hr = "hr"
        hu = "hu"
        it = "it"
        ja = "ja"
        ko = "ko"
        nl = "nl"
        no = "no"
        pl = "pl"
        pt = "pt"
        ru = "ru"
        sl = "sl"
        sv = "sv"
        tr = "tr"
        zh = "zh"
    }
}

impl Locale {
    pub fn all() -> Vec<Locale> {
        vec![
            Locale::cs,
            Locale::da,
            Locale::de,
            Locale::el,
            Locale::en,
            Locale::es,
            Locale::fi,
            Locale::fr,
            Locale::he,
            Locale::hr,
            Locale::hu,
            Locale::it,
            Locale::ja,
            Locale::ko,
            Locale::nl,
            Locale::no,
            Locale::pl,
            Locale::pt,
            Locale::ru,
            Locale::sl,
            Locale::sv,
            Locale::tr,
            Locale::zh,
        ]
    }

    pub fn to_human_readable(&self) -> String {
        match self {
            Locale::cs => "Czech",
            Locale::da => "Danish",
            Locale::de => "German",
            Locale::el => "Greek",
            Locale::en => "English",
            Locale::es => "Spanish",
            Locale::fi => "Finnish",
            Locale::fr => "French",
            Locale::he => "Hebrew",
            Locale::hr => "Croatian",
            Locale::hu => "Hungarian",
            Locale::it => "Italian",
            Locale::ja => "Japanese",
            Locale::ko => "Korean",
            Locale::nl => "Dutch",
            Locale::no => "Norwegian",
            Locale::pl => "Polish",
            Locale::pt => "Portuguese",
            Locale::ru => "Russian",
            Locale::sl => "Slovenian",
            Locale::sv => "Swedish",
            Locale::tr => "Turkish",
            Locale::zh => "Chinese",
            Locale::Custom(custom) => custom.as_str(),
        }
        .to_string()
    }
}

/// Starting point of this whole library.
#[derive(Clone, Debug)]
pub struct Tvdb {
    pub(crate) executor: Arc<Executor>,
}

impl Tvdb {
    pub fn builder() -> TvdbBuilder {
        TvdbBuilder::default()
    }

    /// Return the (cloned) [`Client`] which is internally used to make requests.
    pub fn client(&self) -> Client {
        self.executor.client.clone()
    }

    /// Return the current session token, if one is held. Useful to inspect or persist the
    /// session; a token is obtained by [`Tvdb::authenticate`] or lazily by the first api call.
    pub async fn session_token(&self) -> Option<String> {
        self.executor.session.read().await.token.clone()
    }

    /// Log in with the configured credentials and store the received session token for all
    /// following calls. Calling this by hand is optional, any api call authenticates on its
    /// own when no token is held yet.
    ///
    /// A failed login never retries and leaves a previously held token untouched.
    pub async fn authenticate(&self) -> Result<String> {
        self.executor.authenticate().await
    }

    /// Just like [`Tvdb::authenticate`] but returns the whole login response instead of only
    /// the token. The token is stored for all following calls nevertheless.
    pub async fn authenticate_full(&self) -> Result<FullResponse<LoginResponse>> {
        let login = self.executor.login().await?;
        self.executor.session.write().await.token = Some(login.body.token.clone());
        Ok(login)
    }
}

mod auth {
    use crate::common::FullResponse;
    use crate::error::{check_request_full, check_request_head, TvdbError, TvdbErrorContext};
    use crate::{Locale, Result, Tvdb};
    use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
    use reqwest::{Client, Method, Url};
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Serialize};
    use std::fmt::{Debug, Formatter};
    use std::future::Future;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    pub(crate) const DEFAULT_BASE_URL: &str = "https://api.thetvdb.com";

    /// Version pin of the remote api, sent as `Accept` header with every request.
    const ACCEPT_VERSION: &str = "application/vnd.thetvdb.v2.2.0";

    /// Account credentials used to obtain session tokens from the login endpoint. All three
    /// values come from the TheTVDB account settings page.
    #[derive(Clone, Serialize)]
    pub struct Credentials {
        username: String,
        #[serde(rename = "userkey")]
        user_key: String,
        #[serde(rename = "apikey")]
        api_key: String,
    }

    impl Credentials {
        pub fn new<S: Into<String>>(username: S, user_key: S, api_key: S) -> Self {
            Self {
                username: username.into(),
                user_key: user_key.into(),
                api_key: api_key.into(),
            }
        }
    }

    /// Credentials must never end up in log output, so all fields are masked.
    impl Debug for Credentials {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Credentials")
                .field("username", &"<redacted>")
                .field("user_key", &"<redacted>")
                .field("api_key", &"<redacted>")
                .finish()
        }
    }

    /// Response of the login endpoint. The token it carries is valid for 24 hours.
    #[derive(Clone, Debug, Deserialize)]
    pub struct LoginResponse {
        pub token: String,
    }

    #[derive(Clone, Default)]
    pub(crate) struct Session {
        pub(crate) token: Option<String>,
    }

    impl Debug for Session {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Session")
                .field("token", if self.token.is_some() { &"<held>" } else { &"<none>" })
                .finish()
        }
    }

    /// Internal struct to execute all requests with.
    #[derive(Debug)]
    pub struct Executor {
        pub(crate) client: Client,
        pub(crate) base_url: Url,
        pub(crate) credentials: Credentials,
        pub(crate) default_locale: Option<Locale>,

        /// Must be behind a lock because `Executor` is always passed inside of `Arc` which does
        /// not allow direct changes to the struct.
        pub(crate) session: RwLock<Session>,
    }

    impl Executor {
        pub(crate) fn get(self: &Arc<Self>, target: impl Into<String>) -> ExecutorRequestBuilder {
            ExecutorRequestBuilder::new(self.clone(), Method::GET, target.into())
        }

        pub(crate) fn head(self: &Arc<Self>, target: impl Into<String>) -> ExecutorRequestBuilder {
            ExecutorRequestBuilder::new(self.clone(), Method::HEAD, target.into())
        }

        /// Resolve a request target against the configured base url. Absolute targets pass
        /// through unchanged; relative ones are appended segment-wise, which percent-encodes
        /// every segment and collapses duplicate `/` introduced by concatenation.
        pub(crate) fn resolve(&self, target: &str) -> Result<Url> {
            if target.starts_with("http://") || target.starts_with("https://") {
                return Url::parse(target).map_err(|e| {
                    TvdbError::Input(TvdbErrorContext::new(e.to_string()).with_url(target))
                });
            }

            let mut url = self.base_url.clone();
            {
                let mut segments = url.path_segments_mut().map_err(|_| {
                    TvdbError::Input(
                        TvdbErrorContext::new("base url cannot be a base")
                            .with_url(self.base_url.as_str()),
                    )
                })?;
                segments.pop_if_empty();
                segments.extend(target.split('/').filter(|segment| !segment.is_empty()));
            }
            Ok(url)
        }

        /// Send the credentials to the login endpoint. The session is not touched here, a
        /// failed login therefore keeps any token obtained earlier.
        pub(crate) async fn login(self: &Arc<Self>) -> Result<FullResponse<LoginResponse>> {
            let url = self.resolve("/login")?;
            tracing::debug!(url = %url, "requesting new session token");
            let resp = self
                .client
                .post(url.clone())
                .json(&self.credentials)
                .send()
                .await?;
            check_request_full(url.to_string(), resp).await
        }

        /// Log in and replace the held session token with the fresh one.
        pub(crate) async fn authenticate(self: &Arc<Self>) -> Result<String> {
            let login = self.login().await?;
            let token = login.body.token;
            self.session.write().await.token = Some(token.clone());
            tracing::debug!("session token stored");
            Ok(token)
        }

        /// Run a request attempt with a guaranteed session token, retrying exactly once after
        /// re-authentication when an attempt with an existing token fails.
        ///
        /// - No token held: authenticate first, then dispatch a single attempt. Its outcome is
        ///   final, there is no retry on this path.
        /// - Token held: dispatch. On success that's it; on any failure (the api signals an
        ///   expired token with a 401, but other failures are treated the same) authenticate
        ///   and dispatch exactly one more attempt, whose outcome is final.
        ///
        /// `attempt` must build a fresh request on every invocation, it is called up to twice.
        /// Errors of [`Executor::authenticate`] itself propagate without a further attempt.
        ///
        /// Concurrent calls sharing this executor may observe a missing/expired token at the
        /// same time and then log in redundantly; the last login wins. Callers which need
        /// strict single-flight authentication must serialize [`Tvdb::authenticate`] on their
        /// side.
        pub(crate) async fn execute_authenticated<T, F, Fut>(
            self: &Arc<Self>,
            attempt: F,
        ) -> Result<T>
        where
            F: Fn() -> Fut,
            Fut: Future<Output = Result<T>>,
        {
            if self.session.read().await.token.is_none() {
                self.authenticate().await?;
                return attempt().await;
            }

            match attempt().await {
                Ok(value) => Ok(value),
                Err(err) => {
                    tracing::debug!(error = %err, "request failed, renewing session and retrying once");
                    self.authenticate().await?;
                    attempt().await
                }
            }
        }
    }

    impl Default for Executor {
        fn default() -> Self {
            Self {
                client: Client::new(),
                base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
                credentials: Credentials::new("", "", ""),
                default_locale: None,
                session: RwLock::new(Session::default()),
            }
        }
    }

    /// Descriptor of one outbound request. Building and dispatching are separated so that a
    /// retry constructs a completely fresh request instead of replaying the first one.
    pub(crate) struct ExecutorRequestBuilder {
        executor: Arc<Executor>,
        method: Method,
        target: String,
        query: Vec<(String, String)>,
        headers: HeaderMap,
    }

    impl ExecutorRequestBuilder {
        pub(crate) fn new(executor: Arc<Executor>, method: Method, target: String) -> Self {
            Self {
                executor,
                method,
                target,
                query: vec![],
                headers: HeaderMap::new(),
            }
        }

        pub(crate) fn query(mut self, mut params: Vec<(String, String)>) -> Self {
            self.query.append(&mut params);

            self
        }

        pub(crate) fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
            self.headers.insert(name, value);

            self
        }

        /// Pin the `Accept-Language` of this one request. Passing [`None`] keeps the client
        /// default (if any).
        pub(crate) fn locale(self, locale: Option<&Locale>) -> Result<Self> {
            let Some(locale) = locale else {
                return Ok(self);
            };
            let value = HeaderValue::from_str(&locale.to_string()).map_err(|_| {
                TvdbError::Input(TvdbErrorContext::new(format!(
                    "locale '{locale}' is not a valid header value"
                )))
            })?;
            Ok(self.header(header::ACCEPT_LANGUAGE, value))
        }

        /// Turn the descriptor into a dispatchable request: resolve the target against the
        /// base url, attach the bearer token (explicitly set `Authorization` headers win) and
        /// fall back to the client default language if the call pinned none.
        pub(crate) fn build_attempt(&self, token: Option<&str>) -> Result<reqwest::RequestBuilder> {
            let url = self.executor.resolve(&self.target)?;
            let mut builder = self
                .executor
                .client
                .request(self.method.clone(), url)
                .headers(self.headers.clone());

            if !self.query.is_empty() {
                builder = builder.query(&self.query);
            }

            if let Some(token) = token {
                if !self.headers.contains_key(header::AUTHORIZATION) {
                    builder = builder.bearer_auth(token);
                }
            }

            if !self.headers.contains_key(header::ACCEPT_LANGUAGE) {
                if let Some(locale) = &self.executor.default_locale {
                    builder = builder.header(header::ACCEPT_LANGUAGE, locale.to_string());
                }
            }

            Ok(builder)
        }

        async fn dispatch_full<T: DeserializeOwned>(&self) -> Result<FullResponse<T>> {
            let token = self.executor.session.read().await.token.clone();
            let request = self.build_attempt(token.as_deref())?.build()?;
            let url = request.url().to_string();
            tracing::debug!(method = %request.method(), url = %url, "dispatching api request");
            let resp = self.executor.client.execute(request).await?;
            check_request_full(url, resp).await
        }

        async fn dispatch_head(&self) -> Result<HeaderMap> {
            let token = self.executor.session.read().await.token.clone();
            let request = self.build_attempt(token.as_deref())?.build()?;
            let url = request.url().to_string();
            tracing::debug!(method = %request.method(), url = %url, "dispatching api request");
            let resp = self.executor.client.execute(request).await?;
            check_request_head(url, resp)
        }

        pub(crate) async fn request_full<T: DeserializeOwned>(self) -> Result<FullResponse<T>> {
            let executor = self.executor.clone();
            executor
                .execute_authenticated(|| self.dispatch_full::<T>())
                .await
        }

        pub(crate) async fn request_head(self) -> Result<HeaderMap> {
            let executor = self.executor.clone();
            executor.execute_authenticated(|| self.dispatch_head()).await
        }
    }

    /// A builder to construct a new [`Tvdb`] instance. To create it, call [`Tvdb::builder`].
    pub struct TvdbBuilder {
        client: Option<Client>,
        base_url: String,
        credentials: Option<Credentials>,
        default_language: Option<Locale>,
        detect_proxy: bool,
    }

    impl Default for TvdbBuilder {
        fn default() -> Self {
            Self {
                client: None,
                base_url: DEFAULT_BASE_URL.to_string(),
                credentials: None,
                default_language: None,
                detect_proxy: true,
            }
        }
    }

    impl TvdbBuilder {
        /// Set a custom client that will be used in all api requests. When set, the builder's
        /// [`TvdbBuilder::detect_proxy`] flag has no effect, proxy handling is then up to the
        /// given client.
        pub fn client(mut self, client: Client) -> TvdbBuilder {
            self.client = Some(client);
            self
        }

        /// Override the api origin. Mostly useful to point the client at a mirror or a test
        /// server; defaults to the official v2 origin.
        pub fn base_url<S: Into<String>>(mut self, base_url: S) -> TvdbBuilder {
            self.base_url = base_url.into();
            self
        }

        /// Set the credentials used to log in. Required.
        pub fn credentials(mut self, credentials: Credentials) -> TvdbBuilder {
            self.credentials = Some(credentials);
            self
        }

        /// Set the language all results should be translated to unless a call overrides it via
        /// its request options. Without it the api falls back to English.
        pub fn default_language(mut self, language: Locale) -> TvdbBuilder {
            self.default_language = Some(language);
            self
        }

        /// Whether requests should be routed through the proxy the `http_proxy` /
        /// `https_proxy` environment variables point at (matched against the scheme of the
        /// final request url). Enabled by default.
        pub fn detect_proxy(mut self, detect_proxy: bool) -> TvdbBuilder {
            self.detect_proxy = detect_proxy;
            self
        }

        /// Construct the [`Tvdb`] client. No login happens here, the first api call (or an
        /// explicit [`Tvdb::authenticate`]) obtains the session token.
        pub fn build(self) -> Result<Tvdb> {
            let base_url = Url::parse(&self.base_url).map_err(|e| {
                TvdbError::Input(
                    TvdbErrorContext::new(format!("invalid base url: {e}"))
                        .with_url(&self.base_url),
                )
            })?;
            let credentials = self.credentials.ok_or_else(|| {
                TvdbError::Input("credentials are required, set them with TvdbBuilder::credentials".into())
            })?;

            let client = match self.client {
                Some(client) => client,
                None => {
                    let mut headers = HeaderMap::new();
                    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_VERSION));
                    let mut builder = Client::builder()
                        .user_agent(concat!("tvdb-rs/", env!("CARGO_PKG_VERSION")))
                        .default_headers(headers);
                    if !self.detect_proxy {
                        builder = builder.no_proxy();
                    }
                    builder.build()?
                }
            };

            Ok(Tvdb {
                executor: Arc::new(Executor {
                    client,
                    base_url,
                    credentials,
                    default_locale: self.default_language,
                    session: RwLock::new(Session::default()),
                }),
            })
        }
    }
}

use crate::common::FullResponse;
use crate::Result;

pub(crate) use auth::Executor;
pub use auth::{Credentials, LoginResponse, TvdbBuilder};
