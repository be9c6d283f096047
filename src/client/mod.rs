//! HTTP binding for the hosted data service.
//!
//! This module provides the typed request-issuing handle every service is
//! constructed with. Row operations speak the backend's REST dialect under
//! `/rest/v1`, object operations live in [`storage`].

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{self, Error, Result};

pub mod query;
pub mod storage;

pub use query::{Order, Query};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Accept header value asking the REST layer for a single bare JSON object
/// instead of a one-element array. A no-rows response then carries the
/// backend's no-rows error code.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Request-issuing handle for the hosted backend.
///
/// Cheap to clone; the underlying HTTP client pools connections. There is
/// no global instance of this type: construct one from
/// [`crate::config::BackendConfig`] and pass it to each service, so tests
/// can point everything at a fake backend.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// Create a client for the given backend endpoint and access key.
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Fetch the rows of `table` matching `query`.
    ///
    /// No matches is an empty vec, never an error.
    pub async fn select<T: DeserializeOwned>(&self, table: &str, query: Query) -> Result<Vec<T>> {
        let response = self
            .request(Method::GET, &self.rest_url(table))
            .query(query.params())
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch exactly one row, raising [`Error::NotFound`] when it is absent.
    pub async fn select_one<T: DeserializeOwned>(&self, table: &str, query: Query) -> Result<T> {
        match self.fetch_single(table, query).await? {
            Some(row) => Ok(row),
            None => Err(Error::NotFound),
        }
    }

    /// Fetch at most one row, mapping the backend's no-rows condition to
    /// `Ok(None)`. This is the one failure shape that bypasses error
    /// normalization.
    pub async fn select_maybe_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Query,
    ) -> Result<Option<T>> {
        self.fetch_single(table, query).await
    }

    /// Insert a row and return the persisted representation, including the
    /// backend-assigned identifier and timestamps.
    pub async fn insert<T, B>(&self, table: &str, row: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, &self.rest_url(table))
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(row)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Patch the rows matching `query` with the supplied fields and return
    /// the updated row.
    pub async fn update<T, B>(&self, table: &str, query: Query, patch: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::PATCH, &self.rest_url(table))
            .query(query.params())
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(patch)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Delete the rows matching `query`.
    pub async fn delete(&self, table: &str, query: Query) -> Result<()> {
        let response = self
            .request(Method::DELETE, &self.rest_url(table))
            .query(query.params())
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn fetch_single<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Query,
    ) -> Result<Option<T>> {
        let response = self
            .request(Method::GET, &self.rest_url(table))
            .query(query.params())
            .header(ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(Some(response.json().await?));
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if error::is_no_rows(&body) {
            return Ok(None);
        }

        Err(error::normalize(status, &body))
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    pub(crate) async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error::normalize(status, &body))
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}
