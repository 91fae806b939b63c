use super::*;

#[test]
fn sort_indicator_marks_only_active_column() {
    assert_eq!(sort_indicator(SortColumn::Title, false, SortColumn::Title), " ↑");
    assert_eq!(sort_indicator(SortColumn::Title, true, SortColumn::Title), " ↓");
    assert_eq!(sort_indicator(SortColumn::Title, false, SortColumn::Year), "");
}

#[test]
fn optional_cell_uses_dash_for_missing_values() {
    assert_eq!(optional_cell(Some(2017)), "2017");
    assert_eq!(optional_cell::<u32>(None), "—");
}

#[test]
fn added_cell_keeps_date_part() {
    assert_eq!(added_cell(Some("2024-03-01T10:22:00Z")), "2024-03-01");
    assert_eq!(added_cell(Some("2024-03-01")), "2024-03-01");
    assert_eq!(added_cell(None), "—");
}

#[test]
fn pager_label_is_one_based_and_pluralized() {
    assert_eq!(pager_label(0, 3, 25), "Page 1 of 3 · 25 documents");
    assert_eq!(pager_label(0, 1, 1), "Page 1 of 1 · 1 document");
}
