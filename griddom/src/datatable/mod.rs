//! Data table widget: search, sort and paginate over rows extracted from a
//! table element.
//!
//! The dataset is captured once at construction. Every interaction mutates
//! the view state and re-derives filter -> sort -> page -> element tree,
//! synchronously, in that order.

mod config;
mod extract;
mod registry;
mod render;
mod view;

pub use config::{ConfigError, TableConfig};
pub use extract::{extract, Row, TableData};
pub use registry::{PageEvent, TableRegistry};
pub use view::{
    compare_cells, filter_rows, paginate, sort_view, PageSlice, SortDirection, SortKey, ViewState,
};

use crate::element::Element;
use crate::event::{Event, Key};
use crate::focus::FocusState;
use crate::text_input::TextInputState;

/// A data table attached to a table element.
///
/// Holds the pristine source element (returned on destroy), the dataset
/// extracted from it, and the interaction state. The component's own
/// subtree is rebuilt from scratch by [`DataTable::element`] on every
/// frame; derived views are never cached across state changes.
#[derive(Debug)]
pub struct DataTable {
    table_id: String,
    source: Element,
    data: TableData,
    state: ViewState,
    config: TableConfig,
}

impl DataTable {
    /// Extract the dataset from `table` and set up default view state.
    /// The only failure is an invalid configuration.
    pub fn new(table: Element, config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let data = extract::extract(&table);
        let state = ViewState::new(config.page_size);
        Ok(Self {
            table_id: table.id.clone(),
            source: table,
            data,
            state,
            config,
        })
    }

    /// ID of the table element this instance is attached to.
    pub fn id(&self) -> &str {
        &self.table_id
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn data(&self) -> &TableData {
        &self.data
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// Set the search query. Always resets to the first page.
    pub fn search(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.state.current_page = 1;
        log::debug!(
            "[datatable] {} query={:?} page=1",
            self.table_id,
            self.state.query
        );
    }

    /// Sort by a column. Repeat invocations on the same column flip the
    /// direction; a new column starts ascending. The current page is
    /// preserved. Out-of-range columns are ignored.
    pub fn sort(&mut self, column: usize) -> bool {
        if column >= self.data.column_count() {
            return false;
        }

        let direction = match self.state.sort {
            Some(key) if key.column == column => key.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.state.sort = Some(SortKey { column, direction });
        log::debug!(
            "[datatable] {} sort col={} {:?}",
            self.table_id,
            column,
            direction
        );
        true
    }

    /// Jump to a page, clamped to the valid range.
    /// Returns true if the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let total = self.page_slice().total_pages;
        let page = page.clamp(1, total.max(1));
        if page == self.state.current_page {
            return false;
        }
        self.state.current_page = page;
        log::debug!("[datatable] {} page={}", self.table_id, page);
        true
    }

    /// The derived row order: filter, then sort. Indices into the dataset.
    pub fn view(&self) -> Vec<usize> {
        self.state.derive(&self.data.rows)
    }

    /// Bounds of the current page within the derived view.
    pub fn page_slice(&self) -> PageSlice {
        self.slice_of(self.view().len())
    }

    fn slice_of(&self, view_len: usize) -> PageSlice {
        if self.config.pagination {
            paginate(view_len, self.state.page_size, self.state.current_page)
        } else {
            PageSlice {
                start: 0,
                end: view_len,
                total_pages: if view_len == 0 { 0 } else { 1 },
            }
        }
    }

    /// The rows visible on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<&Row> {
        let view = self.view();
        let slice = self.slice_of(view.len());
        view[slice.start..slice.end]
            .iter()
            .map(|&i| &self.data.rows[i])
            .collect()
    }

    /// Build the component subtree: search control, table, caption and
    /// pagination controls, in that order.
    pub fn element(&self, focus: &FocusState, inputs: &TextInputState) -> Element {
        render::build(self, focus, inputs)
    }

    /// Route an event into the component. Returns true when state changed
    /// and the host should re-render. Events targeting other components
    /// are ignored.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Change { target, text } => {
                if self.config.searchable
                    && *target == self.search_id()
                    && *text != self.state.query
                {
                    self.search(text.clone());
                    return true;
                }
                false
            }
            Event::Click {
                target: Some(target),
                ..
            } => self.activate(target),
            Event::Key {
                target: Some(target),
                key: Key::Enter,
                ..
            } => self.activate(target),
            _ => false,
        }
    }

    /// Activation of one of the component's controls, by element ID.
    fn activate(&mut self, target: &str) -> bool {
        if self.config.sortable {
            if let Some(column) = target
                .strip_prefix(&format!("{}-th-", self.table_id))
                .and_then(|s| s.parse::<usize>().ok())
            {
                return self.sort(column);
            }
        }

        if self.config.pagination {
            if let Some(page) = target.strip_prefix(&format!("{}-page-", self.table_id)) {
                return match page {
                    "prev" => self.set_page(self.state.current_page.saturating_sub(1)),
                    "next" => self.set_page(self.state.current_page + 1),
                    n => match n.parse::<usize>() {
                        Ok(n) => self.set_page(n),
                        Err(_) => false,
                    },
                };
            }
        }

        false
    }

    /// Re-extract the dataset from the pristine source element and reset
    /// the view state. Used when the page environment changes underneath
    /// the component (theme switch).
    pub fn rebuild(&mut self) {
        self.data = extract::extract(&self.source);
        self.state = ViewState::new(self.config.page_size);
        log::debug!("[datatable] {} rebuilt", self.table_id);
    }

    /// Tear the component down, handing back the original table element.
    pub fn into_table(self) -> Element {
        self.source
    }

    // Derived element IDs, shared between the renderer and event routing.

    pub fn wrapper_id(&self) -> String {
        format!("{}-wrapper", self.table_id)
    }

    pub fn search_id(&self) -> String {
        format!("{}-search", self.table_id)
    }

    fn header_cell_id(&self, column: usize) -> String {
        format!("{}-th-{}", self.table_id, column)
    }

    fn body_id(&self) -> String {
        format!("{}-tbody", self.table_id)
    }

    fn row_id(&self, position: usize) -> String {
        format!("{}-tr-{}", self.table_id, position)
    }

    fn caption_id(&self) -> String {
        format!("{}-caption", self.table_id)
    }

    fn pager_id(&self) -> String {
        format!("{}-pager", self.table_id)
    }

    fn page_button_id(&self, label: &str) -> String {
        format!("{}-page-{}", self.table_id, label)
    }
}
