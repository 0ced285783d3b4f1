//! Paginated list of variation groups for a selected health trait.
//!
//! The browser owns its [`PageState`] and hands out [`FetchRequest`]s; whoever
//! runs the request reports back through [`TraitBrowser::complete`]. Results for
//! anything but the latest request are discarded.

use super::generation::GenerationCounter;
use super::selection::SelectableList;
use crate::error::{Result, RvarError};
use crate::types::{DetailTarget, PageDirection, PageResult, PageState, VariationGroup};
use reqwest::Url;

/// Styling marker carried by every rendered list item
pub const WIDGET_CONTENT_CLASS: &str = "ui-widget-content";

/// Request for one page of variation groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub state: PageState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub class: &'static str,
    pub label: String,
    /// Joined member string shown inside the item
    pub display: String,
    pub members: Vec<String>,
}

impl From<VariationGroup> for RenderedItem {
    fn from(group: VariationGroup) -> Self {
        let display = group.display();
        Self {
            class: WIDGET_CONTENT_CLASS,
            label: group.label,
            display,
            members: group.members,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagingControls {
    pub forward_enabled: bool,
    pub back_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedList {
    pub status: ListStatus,
    pub items: Vec<RenderedItem>,
    pub paging: PagingControls,
}

/// Interactions raised by the trait browser widgets, keyed by item position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserEvent {
    SelectPhenotype(usize),
    Page(PageDirection),
    Hover(Option<usize>),
    ItemClicked(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEffect {
    None,
    Fetch(FetchRequest),
    Navigate(DetailTarget),
}

pub struct TraitBrowser {
    phenotypes: SelectableList<String>,
    state: Option<PageState>,
    default_limit: usize,
    detail_endpoint: Url,
    generation: GenerationCounter,
    header: String,
    rendered: RenderedList,
    hovered: Option<usize>,
}

impl TraitBrowser {
    pub fn new(phenotypes: Vec<String>, default_limit: usize, detail_endpoint: Url) -> Self {
        Self {
            phenotypes: SelectableList::new(phenotypes),
            state: None,
            default_limit,
            detail_endpoint,
            generation: GenerationCounter::new(),
            header: String::new(),
            rendered: RenderedList::default(),
            hovered: None,
        }
    }

    pub fn phenotypes(&self) -> &SelectableList<String> {
        &self.phenotypes
    }

    pub fn state(&self) -> Option<&PageState> {
        self.state.as_ref()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn rendered(&self) -> &RenderedList {
        &self.rendered
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Dispatch a widget interaction
    pub fn handle_event(&mut self, event: BrowserEvent) -> Result<BrowserEffect> {
        log::debug!("Trait browser event: {:?}", event);
        match event {
            BrowserEvent::SelectPhenotype(index) => {
                let Some(term) = self.phenotypes.get(index).cloned() else {
                    return Ok(BrowserEffect::None);
                };
                self.phenotypes.toggle(index);
                self.open_phenotype(term).map(BrowserEffect::Fetch)
            }
            BrowserEvent::Page(direction) => Ok(self
                .adjust_page(direction)
                .map_or(BrowserEffect::None, BrowserEffect::Fetch)),
            BrowserEvent::Hover(index) => {
                self.hovered = index.filter(|&i| i < self.rendered.items.len());
                Ok(BrowserEffect::None)
            }
            BrowserEvent::ItemClicked(index) => Ok(self
                .click_item(index)
                .map_or(BrowserEffect::None, BrowserEffect::Navigate)),
        }
    }

    /// Show the first page of `term`, highlighting it among the candidates
    pub fn select_phenotype(&mut self, term: &str) -> Result<FetchRequest> {
        let term = term.to_string();
        match self.phenotypes.position(&term) {
            Some(index) => {
                self.phenotypes.select(index);
            }
            None => self.phenotypes.clear_selection(),
        }
        self.open_phenotype(term)
    }

    fn open_phenotype(&mut self, term: String) -> Result<FetchRequest> {
        let state = PageState::first_page(term, self.default_limit)?;
        self.header = state.phenotype.clone();
        Ok(self.fetch_and_render(state))
    }

    /// Make `state` current and issue the request for it. The list shows as
    /// loading until the matching [`complete`](Self::complete) call.
    pub fn fetch_and_render(&mut self, state: PageState) -> FetchRequest {
        let generation = self.generation.issue();
        log::debug!(
            "Requesting {} [{}..+{}] as generation {}",
            state.phenotype,
            state.start,
            state.limit,
            generation
        );
        self.state = Some(state.clone());
        self.rendered.status = ListStatus::Loading;
        self.rendered.items.clear();
        self.hovered = None;
        FetchRequest { generation, state }
    }

    /// Move one page in `direction`, or reload on [`PageDirection::Reload`].
    /// Nothing happens without a phenotype or when going back from the first page.
    pub fn adjust_page(&mut self, direction: PageDirection) -> Option<FetchRequest> {
        let current = self.state.as_ref()?;
        let next = current.shifted(direction);
        if direction != PageDirection::Reload && next.start == current.start {
            log::debug!("Paging {:+} from start {} is a no-op", direction.offset(), current.start);
            return None;
        }
        Some(self.fetch_and_render(next))
    }

    /// Apply the outcome of request `generation`. Returns the number of rendered
    /// items; stale generations leave the view untouched.
    pub fn complete(&mut self, generation: u64, result: Result<PageResult>) -> Result<usize> {
        self.generation.check(generation)?;

        match result {
            Ok(page) => {
                self.rendered = RenderedList {
                    status: ListStatus::Loaded,
                    items: page.groups.into_iter().map(RenderedItem::from).collect(),
                    paging: PagingControls {
                        forward_enabled: page.has_more,
                        back_enabled: page.has_less,
                    },
                };
                Ok(self.rendered.items.len())
            }
            Err(e) => {
                let reason = match &e {
                    RvarError::FetchFailed { reason, .. } => reason.clone(),
                    other => other.to_string(),
                };
                self.rendered = RenderedList {
                    status: ListStatus::Failed(reason),
                    items: Vec::new(),
                    paging: PagingControls::default(),
                };
                Err(e)
            }
        }
    }

    /// Detail tab target for the item at `index`
    pub fn click_item(&self, index: usize) -> Option<DetailTarget> {
        let item = self.rendered.items.get(index)?;
        let mut url = self.detail_endpoint.clone();
        url.query_pairs_mut().append_pair("vrn", &item.display);
        Some(DetailTarget {
            members: item.members.clone(),
            display: item.display.clone(),
            url: url.to_string(),
        })
    }
}
