use super::fetch_runner::{Completed, FetchRunner};
use crate::browser::{DetailRequest, FetchRequest, GenotypeRequest, GridRequest, UploadRequest};
use crate::data::VariationBackend;
use crate::error::Result;
use crate::types::{GridPage, PageResult};
use std::sync::Arc;

pub type GenotypeOutput = (String, Result<String>);

/// Runs controller requests against the backend without blocking the UI
pub struct BackendService {
    backend: Arc<dyn VariationBackend>,
    pages: FetchRunner<Result<PageResult>>,
    grid: FetchRunner<Result<GridPage>>,
    detail: FetchRunner<Result<String>>,
    upload: FetchRunner<Result<String>>,
    genotypes: FetchRunner<GenotypeOutput>,
}

impl BackendService {
    pub fn new(backend: Arc<dyn VariationBackend>) -> Self {
        Self {
            backend,
            pages: FetchRunner::new("trait-variations"),
            grid: FetchRunner::new("variation-grid"),
            detail: FetchRunner::new("variation-detail"),
            upload: FetchRunner::new("personal-upload"),
            genotypes: FetchRunner::new("personal-genotype"),
        }
    }

    pub fn fetch_page(&mut self, request: FetchRequest) -> Result<()> {
        let backend = Arc::clone(&self.backend);
        self.pages
            .dispatch(request.generation, move || backend.trait_variations(&request.state))
    }

    pub fn fetch_grid(&mut self, request: GridRequest) -> Result<()> {
        let backend = Arc::clone(&self.backend);
        self.grid
            .dispatch(request.generation, move || backend.variation_grid(&request.query))
    }

    pub fn fetch_detail(&mut self, request: DetailRequest) -> Result<()> {
        let backend = Arc::clone(&self.backend);
        self.detail
            .dispatch(request.generation, move || backend.variation_detail(&request.target))
    }

    pub fn fetch_upload(&mut self, request: UploadRequest) -> Result<()> {
        let backend = Arc::clone(&self.backend);
        self.upload.dispatch(request.generation, move || backend.upload_form())
    }

    pub fn fetch_genotypes(&mut self, requests: Vec<GenotypeRequest>) -> Result<()> {
        for request in requests {
            let backend = Arc::clone(&self.backend);
            self.genotypes.dispatch(request.generation, move || {
                let genotype = backend.genotype(&request.user, &request.vrn);
                (request.vrn, genotype)
            })?;
        }
        Ok(())
    }

    pub fn poll_pages(&mut self) -> Vec<Completed<Result<PageResult>>> {
        self.pages.poll()
    }

    pub fn poll_grid(&mut self) -> Vec<Completed<Result<GridPage>>> {
        self.grid.poll()
    }

    pub fn poll_detail(&mut self) -> Vec<Completed<Result<String>>> {
        self.detail.poll()
    }

    pub fn poll_upload(&mut self) -> Vec<Completed<Result<String>>> {
        self.upload.poll()
    }

    pub fn poll_genotypes(&mut self) -> Vec<Completed<GenotypeOutput>> {
        self.genotypes.poll()
    }

    pub fn is_busy(&self) -> bool {
        self.pages.is_busy()
            || self.grid.is_busy()
            || self.detail.is_busy()
            || self.upload.is_busy()
            || self.genotypes.is_busy()
    }
}
