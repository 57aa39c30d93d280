use std::cmp::Ordering;

use super::extract::Row;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The active sort: column index plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: usize,
    pub direction: SortDirection,
}

/// Mutable interaction state driving view derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Search query; empty means no filtering.
    pub query: String,
    /// Active sort, if any. Survives filtering and paging.
    pub sort: Option<SortKey>,
    /// Current page, 1-based.
    pub current_page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            sort: None,
            current_page: 1,
            page_size,
        }
    }

    /// Derive the visible row order: filter, then sort. Returns indices into
    /// the dataset. Recomputed on every call; nothing is cached.
    pub fn derive(&self, rows: &[Row]) -> Vec<usize> {
        let mut view = filter_rows(rows, &self.query);
        if let Some(key) = self.sort {
            sort_view(rows, &mut view, key);
        }
        view
    }
}

/// Rows where at least one cell contains the query, case-insensitively.
/// An empty query returns every row in dataset order. Pure and idempotent.
pub fn filter_rows(rows: &[Row], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let needle = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            row.iter()
                .any(|cell| cell.to_lowercase().contains(&needle))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Order a view by the given column. The sort is stable: rows with equal
/// keys keep their prior relative order.
pub fn sort_view(rows: &[Row], view: &mut [usize], key: SortKey) {
    view.sort_by(|&a, &b| {
        let ordering = compare_cells(cell_at(rows, a, key.column), cell_at(rows, b, key.column));
        match key.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn cell_at(rows: &[Row], row: usize, column: usize) -> &str {
    rows[row].get(column).map(String::as_str).unwrap_or("")
}

/// Compare two cells: numerically when both parse as finite numbers,
/// otherwise case-insensitively by code point. Decided per pair, so mixed
/// columns degrade gracefully instead of flipping wholesale.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    if let (Ok(x), Ok(y)) = (a.parse::<f64>(), b.parse::<f64>()) {
        if !x.is_nan() && !y.is_nan() {
            return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
        }
    }

    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// One page's bounds within a derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    /// Start index within the view, inclusive.
    pub start: usize,
    /// End index within the view, exclusive.
    pub end: usize,
    /// Total page count; 0 when the view is empty.
    pub total_pages: usize,
}

impl PageSlice {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Slice the view into the requested page, clipped to bounds. A page past
/// the end produces an empty slice; callers reset to page 1 on the
/// transitions that can shrink the view.
pub fn paginate(len: usize, page_size: usize, current_page: usize) -> PageSlice {
    let total_pages = len.div_ceil(page_size);
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(len);
    let end = start.saturating_add(page_size).min(len);

    PageSlice {
        start,
        end,
        total_pages,
    }
}
