use crate::error::Result;
use crate::types::{DetailTarget, GridPage, GridQuery, PageResult, PageState};

/// Read access to the variation backend.
///
/// Implementations block; callers run them off the UI thread.
pub trait VariationBackend: Send + Sync {
    /// One page of variation groups for a phenotype
    fn trait_variations(&self, state: &PageState) -> Result<PageResult>;

    /// One page of the raw variation grid
    fn variation_grid(&self, query: &GridQuery) -> Result<GridPage>;

    /// Personal upload form for the logged in user
    fn upload_form(&self) -> Result<String>;

    /// Server-rendered detail page for a clicked variation group
    fn variation_detail(&self, target: &DetailTarget) -> Result<String>;

    /// The user's genotype at one variation
    fn genotype(&self, user: &str, vrn: &str) -> Result<String>;
}
