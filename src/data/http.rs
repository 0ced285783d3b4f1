use super::source::VariationBackend;
use crate::config::BackendConfig;
use crate::error::{Result, RvarError};
use crate::types::{DetailTarget, GridPage, GridQuery, PageResponse, PageResult, PageState};
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Backend reached over HTTP
pub struct HttpBackend {
    client: Client,
    trait_variations: Url,
    grid: Url,
    upload: Url,
    genotype: Url,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RvarError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            trait_variations: config.endpoint(&config.trait_variations_path)?,
            grid: config.endpoint(&config.grid_path)?,
            upload: config.endpoint(&config.upload_path)?,
            genotype: config.endpoint(&config.genotype_path)?,
        })
    }

    fn send<Q: Serialize + ?Sized>(&self, url: &Url, query: &Q) -> Result<Response> {
        log::debug!("GET {}", url);
        self.client
            .get(url.clone())
            .query(query)
            .send()
            .and_then(Response::error_for_status)
            .map_err(|e| RvarError::fetch_failed(url.path(), e))
    }

    fn get_json<T, Q>(&self, url: &Url, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let body = self
            .send(url, query)?
            .text()
            .map_err(|e| RvarError::fetch_failed(url.path(), e))?;
        serde_json::from_str(&body).map_err(|e| RvarError::fetch_failed(url.path(), e))
    }

    fn get_text<Q: Serialize + ?Sized>(&self, url: &Url, query: &Q) -> Result<String> {
        self.send(url, query)?
            .text()
            .map_err(|e| RvarError::fetch_failed(url.path(), e))
    }
}

impl VariationBackend for HttpBackend {
    fn trait_variations(&self, state: &PageState) -> Result<PageResult> {
        let response: PageResponse = self.get_json(&self.trait_variations, &state.query_pairs())?;
        Ok(response.into())
    }

    fn variation_grid(&self, query: &GridQuery) -> Result<GridPage> {
        self.get_json(&self.grid, &query.query_pairs())
    }

    fn upload_form(&self) -> Result<String> {
        self.get_text(&self.upload, &[] as &[(&str, &str)])
    }

    fn variation_detail(&self, target: &DetailTarget) -> Result<String> {
        let url = Url::parse(&target.url).map_err(|e| RvarError::fetch_failed(&target.url, e))?;
        // The query is already part of the target URL
        self.get_text(&url, &[] as &[(&str, &str)])
    }

    fn genotype(&self, user: &str, vrn: &str) -> Result<String> {
        self.get_text(&self.genotype, &[("user", user), ("vrn", vrn)])
    }
}
