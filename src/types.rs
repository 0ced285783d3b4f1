use crate::error::{Result, RvarError};
use serde::{Deserialize, Serialize};

/// Separator used when a group's members are shown as a single string
pub const MEMBER_SEPARATOR: &str = ", ";

/// Current position of the trait browser: which phenotype, which page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub phenotype: String,
    pub start: usize,
    pub limit: usize,
}

impl PageState {
    pub fn new(phenotype: impl Into<String>, start: usize, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(RvarError::InvalidPage("limit must be greater than 0".to_string()));
        }
        Ok(Self {
            phenotype: phenotype.into(),
            start,
            limit,
        })
    }

    /// First page of a phenotype
    pub fn first_page(phenotype: impl Into<String>, limit: usize) -> Result<Self> {
        Self::new(phenotype, 0, limit)
    }

    /// State one page away in `direction`. Going back from the first page clamps at 0.
    pub fn shifted(&self, direction: PageDirection) -> Self {
        let start = match direction {
            PageDirection::Back => self.start.saturating_sub(self.limit),
            PageDirection::Reload => self.start,
            PageDirection::Forward => self.start.saturating_add(self.limit),
        };
        Self {
            phenotype: self.phenotype.clone(),
            start,
            limit: self.limit,
        }
    }

    /// Query parameters sent to the trait variation endpoint
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("phenotype", self.phenotype.clone()),
            ("start", self.start.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Back,
    Reload,
    Forward,
}

impl PageDirection {
    pub fn offset(self) -> i32 {
        match self {
            PageDirection::Back => -1,
            PageDirection::Reload => 0,
            PageDirection::Forward => 1,
        }
    }
}

impl TryFrom<i32> for PageDirection {
    type Error = RvarError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            -1 => Ok(PageDirection::Back),
            0 => Ok(PageDirection::Reload),
            1 => Ok(PageDirection::Forward),
            other => Err(RvarError::InvalidPage(format!(
                "page direction must be -1, 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// One rendered list item: a set of variant ids shown together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationGroup {
    pub label: String,
    pub members: Vec<String>,
}

impl VariationGroup {
    pub fn new(members: Vec<String>) -> Self {
        let label = members.join(MEMBER_SEPARATOR);
        Self { label, members }
    }

    pub fn with_label(label: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            label: label.into(),
            members,
        }
    }

    pub fn display(&self) -> String {
        self.members.join(MEMBER_SEPARATOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageResult {
    pub groups: Vec<VariationGroup>,
    pub has_more: bool,
    pub has_less: bool,
}

/// Body returned by the trait variation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub variations: Vec<GroupEntry>,
    #[serde(default)]
    pub hasmore: bool,
    #[serde(default)]
    pub hasless: bool,
}

/// Older servers send bare variant ids instead of groups
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GroupEntry {
    Single(String),
    Group {
        variations: Vec<String>,
        #[serde(default)]
        label: Option<String>,
    },
}

impl From<GroupEntry> for VariationGroup {
    fn from(entry: GroupEntry) -> Self {
        match entry {
            GroupEntry::Single(id) => VariationGroup::new(vec![id]),
            GroupEntry::Group { variations, label: Some(label) } => {
                VariationGroup::with_label(label, variations)
            }
            GroupEntry::Group { variations, label: None } => VariationGroup::new(variations),
        }
    }
}

impl From<PageResponse> for PageResult {
    fn from(response: PageResponse) -> Self {
        Self {
            groups: response.variations.into_iter().map(VariationGroup::from).collect(),
            has_more: response.hasmore,
            has_less: response.hasless,
        }
    }
}

/// Where the detail tab navigates after an item click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTarget {
    pub members: Vec<String>,
    pub display: String,
    pub url: String,
}

/// Raw variation as listed by the data grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationRow {
    pub id: String,
    #[serde(default)]
    pub genotype: String,
}

/// One page of the data grid, in the grid's non-repeating JSON layout
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridPage {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub records: usize,
    #[serde(default)]
    pub rows: Vec<VariationRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridColumn {
    Id,
    Genotype,
}

impl GridColumn {
    pub const ALL: [GridColumn; 2] = [GridColumn::Id, GridColumn::Genotype];

    pub fn index(self) -> &'static str {
        match self {
            GridColumn::Id => "id",
            GridColumn::Genotype => "genotype",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GridColumn::Id => "Id",
            GridColumn::Genotype => "Genotype",
        }
    }

    pub fn width(self) -> f32 {
        match self {
            GridColumn::Id => 150.0,
            GridColumn::Genotype => 250.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridQuery {
    pub page: usize,
    pub rows: usize,
    pub sort_column: GridColumn,
    pub sort_order: SortOrder,
}

impl GridQuery {
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("page", self.page.to_string()),
            ("rows", self.rows.to_string()),
            ("sidx", self.sort_column.index().to_string()),
            ("sord", self.sort_order.as_str().to_string()),
        ]
    }
}
