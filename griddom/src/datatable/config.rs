use thiserror::Error;

/// Behaviour switches for a [`DataTable`](super::DataTable).
///
/// An explicit struct with documented defaults; validated once at
/// construction, never re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Header activation toggles sorting. Default `true`.
    pub sortable: bool,
    /// Render the search input. Default `true`.
    pub searchable: bool,
    /// Render pagination controls and slice the view into pages.
    /// Default `true`.
    pub pagination: bool,
    /// Rows per page. Default `10`; must be at least 1.
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            sortable: true,
            searchable: true,
            pagination: true,
            page_size: 10,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
}
