use super::generation::GenerationCounter;
use super::trait_browser::ListStatus;
use crate::error::Result;
use crate::types::{GridColumn, GridPage, GridQuery, SortOrder, VariationRow};

pub const GRID_CAPTION: &str = "Variations";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRequest {
    pub generation: u64,
    pub query: GridQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    Sort(GridColumn),
    NextPage,
    PreviousPage,
    SelectRow(usize),
    Reload,
}

/// Server-paged table of raw variations
pub struct VariationGrid {
    query: GridQuery,
    generation: GenerationCounter,
    page: GridPage,
    status: ListStatus,
    selected: Option<usize>,
}

impl VariationGrid {
    pub fn new(rows: usize) -> Self {
        Self {
            query: GridQuery {
                page: 1,
                rows,
                sort_column: GridColumn::Id,
                sort_order: SortOrder::Desc,
            },
            generation: GenerationCounter::new(),
            page: GridPage::default(),
            status: ListStatus::Idle,
            selected: None,
        }
    }

    pub fn query(&self) -> &GridQuery {
        &self.query
    }

    pub fn rows(&self) -> &[VariationRow] {
        &self.page.rows
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&VariationRow> {
        self.selected.and_then(|i| self.page.rows.get(i))
    }

    pub fn has_next(&self) -> bool {
        self.query.page < self.page.total
    }

    pub fn has_previous(&self) -> bool {
        self.query.page > 1
    }

    pub fn handle_event(&mut self, event: GridEvent) -> Option<GridRequest> {
        match event {
            GridEvent::Sort(column) => Some(self.sort_by(column)),
            GridEvent::NextPage => self.next_page(),
            GridEvent::PreviousPage => self.previous_page(),
            GridEvent::SelectRow(index) => {
                self.select_row(index);
                None
            }
            GridEvent::Reload => Some(self.load()),
        }
    }

    /// Request the current page again
    pub fn load(&mut self) -> GridRequest {
        let generation = self.generation.issue();
        self.status = ListStatus::Loading;
        GridRequest {
            generation,
            query: self.query.clone(),
        }
    }

    /// Sorting by the active column flips the order, a new column starts ascending
    pub fn sort_by(&mut self, column: GridColumn) -> GridRequest {
        if self.query.sort_column == column {
            self.query.sort_order = self.query.sort_order.flipped();
        } else {
            self.query.sort_column = column;
            self.query.sort_order = SortOrder::Asc;
        }
        self.query.page = 1;
        self.load()
    }

    pub fn next_page(&mut self) -> Option<GridRequest> {
        if !self.has_next() {
            return None;
        }
        self.query.page += 1;
        Some(self.load())
    }

    pub fn previous_page(&mut self) -> Option<GridRequest> {
        if !self.has_previous() {
            return None;
        }
        self.query.page -= 1;
        Some(self.load())
    }

    pub fn complete(&mut self, generation: u64, result: Result<GridPage>) -> Result<usize> {
        self.generation.check(generation)?;
        self.selected = None;

        match result {
            Ok(page) => {
                if page.page > 0 {
                    self.query.page = page.page;
                }
                self.page = page;
                self.status = ListStatus::Loaded;
                Ok(self.page.rows.len())
            }
            Err(e) => {
                self.page.rows.clear();
                self.status = ListStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn select_row(&mut self, index: usize) -> Option<&VariationRow> {
        let row = self.page.rows.get(index)?;
        log::info!("Selected variation {} ({})", row.id, row.genotype);
        self.selected = Some(index);
        self.page.rows.get(index)
    }

    pub fn view_records(&self) -> String {
        if self.page.records == 0 || self.page.rows.is_empty() {
            return "No records to view".to_string();
        }
        let first = (self.query.page - 1) * self.query.rows + 1;
        let last = first + self.page.rows.len() - 1;
        format!("View {} - {} of {}", first, last, self.page.records)
    }
}
