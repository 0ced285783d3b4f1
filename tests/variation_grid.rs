use rvar::browser::{GridEvent, ListStatus, VariationGrid};
use rvar::types::{GridColumn, GridPage, SortOrder, VariationRow};
use rvar::RvarError;

fn page(page: usize, total: usize, records: usize, ids: &[&str]) -> GridPage {
    GridPage {
        page,
        total,
        records,
        rows: ids
            .iter()
            .map(|id| VariationRow {
                id: id.to_string(),
                genotype: "CT".to_string(),
            })
            .collect(),
    }
}

#[test]
fn test_grid_response_layout() {
    let body = r#"{"page":1,"total":3,"records":52,"rows":[{"id":"rs999","genotype":"AA"},{"id":"rs998"}]}"#;
    let parsed: GridPage = serde_json::from_str(body).unwrap();

    assert_eq!(parsed.records, 52);
    assert_eq!(parsed.rows[0].genotype, "AA");
    assert_eq!(parsed.rows[1].genotype, "");
}

#[test]
fn test_sorting_resets_to_first_page() {
    let mut grid = VariationGrid::new(2);
    let request = grid.load();
    grid.complete(request.generation, Ok(page(1, 3, 6, &["rs6", "rs5"]))).unwrap();
    let request = grid.handle_event(GridEvent::NextPage).unwrap();
    grid.complete(request.generation, Ok(page(2, 3, 6, &["rs4", "rs3"]))).unwrap();

    let request = grid.handle_event(GridEvent::Sort(GridColumn::Genotype)).unwrap();
    assert_eq!(request.query.page, 1);
    assert_eq!(request.query.sort_column, GridColumn::Genotype);
    assert_eq!(request.query.sort_order, SortOrder::Asc);
    assert_eq!(grid.status(), &ListStatus::Loading);
}

#[test]
fn test_view_records_on_second_page() {
    let mut grid = VariationGrid::new(2);
    let request = grid.load();
    grid.complete(request.generation, Ok(page(1, 3, 5, &["rs5", "rs4"]))).unwrap();
    assert_eq!(grid.view_records(), "View 1 - 2 of 5");

    let request = grid.handle_event(GridEvent::NextPage).unwrap();
    grid.complete(request.generation, Ok(page(2, 3, 5, &["rs3", "rs2"]))).unwrap();
    assert_eq!(grid.view_records(), "View 3 - 4 of 5");
}

#[test]
fn test_stale_grid_page_discarded() {
    let mut grid = VariationGrid::new(2);
    let old = grid.load();
    let new = grid.handle_event(GridEvent::Reload).unwrap();

    grid.complete(new.generation, Ok(page(1, 1, 1, &["rs1"]))).unwrap();
    let result = grid.complete(old.generation, Ok(page(1, 1, 2, &["rs7", "rs8"])));

    assert!(matches!(result, Err(RvarError::StaleResponse { .. })));
    assert_eq!(grid.rows().len(), 1);
    assert_eq!(grid.rows()[0].id, "rs1");
}

#[test]
fn test_failed_grid_load() {
    let mut grid = VariationGrid::new(2);
    let request = grid.load();
    let result = grid.complete(
        request.generation,
        Err(RvarError::fetch_failed("/data/variations", "timed out")),
    );

    assert!(result.is_err());
    assert!(matches!(grid.status(), ListStatus::Failed(_)));
    assert!(grid.rows().is_empty());
    assert_eq!(grid.view_records(), "No records to view");
}

#[test]
fn test_row_selection_event() {
    let mut grid = VariationGrid::new(2);
    let request = grid.load();
    grid.complete(request.generation, Ok(page(1, 1, 2, &["rs2", "rs1"]))).unwrap();

    assert!(grid.handle_event(GridEvent::SelectRow(1)).is_none());
    assert_eq!(grid.selected_row().map(|r| r.id.as_str()), Some("rs1"));
}
