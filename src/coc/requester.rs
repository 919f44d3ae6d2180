//! HTTP client for the Clash of Clans API.
//!
//! This module provides the [`CocRequester`] struct for looking up players and
//! verifying account ownership against the Clash of Clans API.

use std::time::Duration;

use log::{debug, info};
use mockall::automock;
use reqwest::{
    Client, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};

use crate::{
    coc::response_structs::{PlayerStats, VerificationResult, VerifyTokenRequest},
    config::Coc,
    error::{CommandError, UpstreamError},
};

/// HTTP client for requesting data from the Clash of Clans API.
///
/// Every request carries the bearer token and a JSON content type. No retry is
/// attempted: failures are returned to the caller immediately.
///
/// # Examples
///
/// ```no_run
/// let coc_requester = CocRequester::new(&config.coc)?;
/// let stats = coc_requester.lookup_player("#2PP").await?;
/// println!("Stats: {}", stats);
/// ```
pub struct CocRequester {
    /// Clash of Clans API base url, without trailing slash
    url: String,
    /// Base url of the public player summary pages
    summary_url: String,
    /// HTTP client with the authentication headers
    client: Client,
}

/// Trait for making requests to the Clash of Clans API.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait Requester {
    /// Fetches the profile of the player identified by `tag`.
    async fn lookup_player(&self, tag: &str) -> Result<PlayerStats, CommandError>;
    /// Checks that `code` is the in-game API token of the player identified by `tag`.
    async fn verify_token(&self, tag: &str, code: &str)
    -> Result<VerificationResult, CommandError>;
    /// Link to the public summary page of a player.
    fn get_summary_url(&self, name: &str, tag: &str) -> String;
}

impl CocRequester {
    /// Create a new [CocRequester].
    ///
    /// # Arguments
    ///
    /// * `config` - The `coc` section of the configuration: API url, token,
    ///   summary url and optional request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the token can't be used as a header value or if the
    /// HTTP client can't be built.
    pub fn new(config: &Coc) -> Result<Self, anyhow::Error> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.token))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(CocRequester {
            url: config.url.trim_end_matches('/').to_owned(),
            summary_url: config.summary_url.trim_end_matches('/').to_owned(),
            client: builder.build()?,
        })
    }

    fn player_url(&self, tag: &str) -> String {
        format!("{}/players/{}", &self.url, urlencoding::encode(tag))
    }
}

impl Requester for CocRequester {
    /// Request `GET /players/{playerTag}`.
    ///
    /// # Errors
    ///
    /// * [`CommandError::NotFound`] when the API answers 404
    /// * [`CommandError::Upstream`] on any other non-200 status, network or JSON error
    async fn lookup_player(&self, tag: &str) -> Result<PlayerStats, CommandError> {
        let url = self.player_url(tag);
        info!("request player {}", tag);
        debug!("request GET {}", &url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                debug!("response from {} -> 404", &url);
                return Err(CommandError::NotFound(tag.to_owned()));
            }
            status => return Err(UpstreamError::Status(status).into()),
        }

        let stats: PlayerStats = response.json().await?;
        debug!("response from {} -> {}", &url, &stats);

        Ok(stats)
    }

    /// Request `POST /players/{playerTag}/verifytoken` with `{"token": code}`.
    ///
    /// # Errors
    ///
    /// * [`CommandError::Upstream`] on any non-200 status, network or JSON error
    async fn verify_token(
        &self,
        tag: &str,
        code: &str,
    ) -> Result<VerificationResult, CommandError> {
        let url = format!("{}/verifytoken", self.player_url(tag));
        info!("request token verification of player {}", tag);
        debug!("request POST {}", &url);

        let response = self
            .client
            .post(&url)
            .json(&VerifyTokenRequest { token: code })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamError::Status(status).into());
        }

        let result: VerificationResult = response.json().await?;
        debug!("response from {} -> {}", &url, &result);

        Ok(result)
    }

    fn get_summary_url(&self, name: &str, tag: &str) -> String {
        let slug = format!("{}-{}", name, tag.trim_start_matches('#')).to_lowercase();
        format!(
            "{}/{}/summary",
            &self.summary_url,
            urlencoding::encode(&slug)
        )
    }
}
