use griddom::datatable::{
    compare_cells, filter_rows, paginate, sort_view, Row, SortDirection, SortKey, ViewState,
};

fn rows(data: &[&[&str]]) -> Vec<Row> {
    data.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn materialize<'a>(rows: &'a [Row], view: &[usize]) -> Vec<&'a Row> {
    view.iter().map(|&i| &rows[i]).collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_empty_query_returns_all_in_order() {
    let rows = rows(&[&["Bob", "30"], &["Ann", "25"], &["Cy", "25"]]);
    assert_eq!(filter_rows(&rows, ""), vec![0, 1, 2]);
}

#[test]
fn test_filter_is_case_insensitive() {
    let rows = rows(&[&["Alice", "Berlin"], &["bob", "PARIS"], &["Carol", "Oslo"]]);
    assert_eq!(filter_rows(&rows, "ALICE"), vec![0]);
    assert_eq!(filter_rows(&rows, "paris"), vec![1]);
}

#[test]
fn test_filter_matches_any_cell() {
    let rows = rows(&[&["Alice", "Berlin"], &["Bob", "Berlin"], &["Carol", "Oslo"]]);
    assert_eq!(filter_rows(&rows, "berlin"), vec![0, 1]);
}

#[test]
fn test_filter_substring_match() {
    let rows = rows(&[&["Albertine"], &["Bert"], &["Cora"]]);
    assert_eq!(filter_rows(&rows, "bert"), vec![0, 1]);
}

#[test]
fn test_filter_no_matches() {
    let rows = rows(&[&["Alice"], &["Bob"]]);
    assert!(filter_rows(&rows, "xyz").is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let all = rows(&[&["Alice", "Berlin"], &["Bob", "Paris"], &["Alba", "Rome"]]);
    let once = filter_rows(&all, "al");

    // Filtering the already-filtered rows again returns them all unchanged
    let filtered: Vec<Row> = once.iter().map(|&i| all[i].clone()).collect();
    let twice = filter_rows(&filtered, "al");
    assert_eq!(twice, (0..filtered.len()).collect::<Vec<_>>());
}

#[test]
fn test_filter_only_returns_matching_rows() {
    let all = rows(&[&["ant", "1"], &["bee", "2"], &["cat", "3"], &["ANTELOPE", "4"]]);
    let view = filter_rows(&all, "ant");
    for &i in &view {
        assert!(
            all[i].iter().any(|c| c.to_lowercase().contains("ant")),
            "row {i} must contain the query"
        );
    }
    assert_eq!(view, vec![0, 3]);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_numeric_sort_with_stable_ties() {
    // Scenario: sort by the age column, ascending; ties keep prior order
    let rows = rows(&[&["Bob", "30"], &["Ann", "25"], &["Cy", "25"]]);
    let mut view = vec![0, 1, 2];
    sort_view(
        &rows,
        &mut view,
        SortKey {
            column: 1,
            direction: SortDirection::Ascending,
        },
    );
    assert_eq!(view, vec![1, 2, 0], "Ann and Cy tie on 25, Ann stays first");
}

#[test]
fn test_numeric_compare_not_lexicographic() {
    let rows = rows(&[&["9"], &["10"], &["2"]]);
    let mut view = vec![0, 1, 2];
    sort_view(
        &rows,
        &mut view,
        SortKey {
            column: 0,
            direction: SortDirection::Ascending,
        },
    );
    assert_eq!(view, vec![2, 0, 1], "2 < 9 < 10 numerically");
}

#[test]
fn test_string_sort_case_insensitive() {
    let rows = rows(&[&["banana"], &["Apple"], &["cherry"]]);
    let mut view = vec![0, 1, 2];
    sort_view(
        &rows,
        &mut view,
        SortKey {
            column: 0,
            direction: SortDirection::Ascending,
        },
    );
    assert_eq!(view, vec![1, 0, 2]);
}

#[test]
fn test_mixed_column_decided_per_pair() {
    // "10" vs "9" compares numerically even though "x" is in the column
    let rows = rows(&[&["x"], &["10"], &["9"]]);
    let mut view = vec![0, 1, 2];
    sort_view(
        &rows,
        &mut view,
        SortKey {
            column: 0,
            direction: SortDirection::Ascending,
        },
    );
    let sorted = materialize(&rows, &view);
    let pos_9 = sorted.iter().position(|r| r[0] == "9").unwrap();
    let pos_10 = sorted.iter().position(|r| r[0] == "10").unwrap();
    assert!(pos_9 < pos_10, "9 sorts before 10 in a mixed column");
}

#[test]
fn test_ascending_then_descending_reverses() {
    let rows = rows(&[&["3"], &["1"], &["4"], &["2"]]);
    let mut asc = vec![0, 1, 2, 3];
    sort_view(
        &rows,
        &mut asc,
        SortKey {
            column: 0,
            direction: SortDirection::Ascending,
        },
    );
    let mut desc = vec![0, 1, 2, 3];
    sort_view(
        &rows,
        &mut desc,
        SortKey {
            column: 0,
            direction: SortDirection::Descending,
        },
    );

    let reversed: Vec<usize> = asc.iter().rev().copied().collect();
    assert_eq!(desc, reversed);
}

#[test]
fn test_sort_twice_ascending_is_idempotent() {
    let rows = rows(&[&["b"], &["a"], &["c"]]);
    let key = SortKey {
        column: 0,
        direction: SortDirection::Ascending,
    };
    let mut view = vec![0, 1, 2];
    sort_view(&rows, &mut view, key);
    let once = view.clone();
    sort_view(&rows, &mut view, key);
    assert_eq!(view, once);
}

#[test]
fn test_ragged_rows_sort_as_empty_cells() {
    let rows = rows(&[&["z", "9"], &["a"]]);
    let mut view = vec![0, 1];
    sort_view(
        &rows,
        &mut view,
        SortKey {
            column: 1,
            direction: SortDirection::Ascending,
        },
    );
    assert_eq!(view, vec![1, 0], "missing cell compares as empty string");
}

#[test]
fn test_compare_cells_numeric_and_string() {
    use std::cmp::Ordering;
    assert_eq!(compare_cells("2", "10"), Ordering::Less);
    assert_eq!(compare_cells("abc", "ABD"), Ordering::Less);
    assert_eq!(compare_cells("1.5", "1.50"), Ordering::Equal);
    assert_eq!(compare_cells("x", "10"), Ordering::Greater, "string compare");
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_paginate_basic() {
    let slice = paginate(5, 2, 1);
    assert_eq!((slice.start, slice.end), (0, 2));
    assert_eq!(slice.total_pages, 3);
}

#[test]
fn test_paginate_last_partial_page() {
    // Scenario: pageSize=2, 5 rows, currentPage=3 -> the last single row
    let slice = paginate(5, 2, 3);
    assert_eq!((slice.start, slice.end), (4, 5));
    assert_eq!(slice.total_pages, 3);
    assert_eq!(slice.len(), 1);
}

#[test]
fn test_paginate_empty_view() {
    let slice = paginate(0, 10, 1);
    assert_eq!(slice.total_pages, 0);
    assert!(slice.is_empty());
}

#[test]
fn test_paginate_page_beyond_end_is_empty() {
    let slice = paginate(5, 2, 9);
    assert!(slice.is_empty());
    assert_eq!(slice.total_pages, 3);
}

#[test]
fn test_paginate_never_exceeds_page_size() {
    for page in 1..=4 {
        let slice = paginate(7, 3, page);
        assert!(slice.len() <= 3, "page {page} has at most page_size rows");
    }
}

#[test]
fn test_pages_concatenate_to_full_view() {
    let len = 7;
    let page_size = 3;
    let total = paginate(len, page_size, 1).total_pages;

    let mut seen = Vec::new();
    for page in 1..=total {
        let slice = paginate(len, page_size, page);
        seen.extend(slice.start..slice.end);
    }
    assert_eq!(seen, (0..len).collect::<Vec<_>>());
}

// ============================================================================
// View derivation
// ============================================================================

#[test]
fn test_derive_filters_then_sorts() {
    let rows = rows(&[
        &["Bob", "30"],
        &["Ann", "25"],
        &["Cy", "25"],
        &["Annette", "40"],
    ]);

    let mut state = ViewState::new(10);
    state.query = "ann".to_string();
    state.sort = Some(SortKey {
        column: 1,
        direction: SortDirection::Descending,
    });

    let view = state.derive(&rows);
    let names: Vec<&str> = materialize(&rows, &view)
        .iter()
        .map(|r| r[0].as_str())
        .collect();
    assert_eq!(names, vec!["Annette", "Ann"]);
}

#[test]
fn test_derive_without_sort_preserves_dataset_order() {
    let rows = rows(&[&["c"], &["a"], &["b"]]);
    let state = ViewState::new(10);
    assert_eq!(state.derive(&rows), vec![0, 1, 2]);
}

#[test]
fn test_direction_toggle() {
    assert_eq!(
        SortDirection::Ascending.toggled(),
        SortDirection::Descending
    );
    assert_eq!(
        SortDirection::Descending.toggled(),
        SortDirection::Ascending
    );
}
