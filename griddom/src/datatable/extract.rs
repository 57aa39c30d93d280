use crate::element::{find_child_by_tag, Element, Tag};

/// One extracted table row: ordered cell strings, position mapping to the
/// originating column. Cell counts are not validated against the header
/// count; ragged rows pass through as-is.
pub type Row = Vec<String>;

/// The dataset captured from a table element at initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl TableData {
    /// Number of columns: header count, or the widest row when there is no
    /// header section.
    pub fn column_count(&self) -> usize {
        if self.headers.is_empty() {
            self.rows.iter().map(Vec::len).max().unwrap_or(0)
        } else {
            self.headers.len()
        }
    }
}

/// Read a table element's head and body into a [`TableData`].
///
/// Cell text is the subtree's text content, trimmed. A missing head or body
/// section yields empty headers or an empty dataset; never an error.
/// Read-only: the element tree is left untouched.
pub fn extract(table: &Element) -> TableData {
    let headers = match find_child_by_tag(table, Tag::THead) {
        Some(thead) => header_cells(thead),
        None => Vec::new(),
    };

    let rows = match find_child_by_tag(table, Tag::TBody) {
        Some(tbody) => tbody
            .child_elements()
            .iter()
            .filter(|child| child.tag == Tag::Tr)
            .map(row_cells)
            .collect(),
        None => Vec::new(),
    };

    TableData { headers, rows }
}

/// Header cells live either in the head section's first row or, in sloppy
/// markup, directly under the head section.
fn header_cells(thead: &Element) -> Vec<String> {
    match find_child_by_tag(thead, Tag::Tr) {
        Some(tr) => row_cells(tr),
        None => row_cells(thead),
    }
}

fn row_cells(row: &Element) -> Vec<String> {
    row.child_elements()
        .iter()
        .filter(|child| matches!(child.tag, Tag::Th | Tag::Td))
        .map(|cell| cell.text_content().trim().to_string())
        .collect()
}
