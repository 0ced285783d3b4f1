pub mod detail;
pub mod generation;
pub mod personal;
pub mod selection;
pub mod trait_browser;
pub mod variation_grid;

pub use detail::{DetailEvent, DetailRequest, DetailStatus, DetailView};
pub use generation::GenerationCounter;
pub use personal::{GenotypeRequest, GenotypeStatus, PersonalPage, UploadRequest, LOGIN_PROMPT};
pub use selection::SelectableList;
pub use trait_browser::{
    BrowserEffect, BrowserEvent, FetchRequest, ListStatus, PagingControls, RenderedItem,
    RenderedList, TraitBrowser, WIDGET_CONTENT_CLASS,
};
pub use variation_grid::{GridEvent, GridRequest, VariationGrid};
