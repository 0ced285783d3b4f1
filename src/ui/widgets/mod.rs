pub mod detail_view;
pub mod paging_controls;
pub mod phenotype_selector;
pub mod variation_grid;
pub mod variation_list;

pub use detail_view::DetailPanel;
pub use paging_controls::PagingBar;
pub use phenotype_selector::PhenotypeSelector;
pub use variation_grid::VariationGridTable;
pub use variation_list::VariationList;
