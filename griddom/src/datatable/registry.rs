use std::collections::HashMap;

use crate::element::Element;
use crate::event::Event;

use super::{ConfigError, DataTable, TableConfig};

/// Page-level environment notifications forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The active theme changed; instances re-initialize.
    ThemeChanged,
    /// The page is going away; all instances are destroyed.
    Teardown,
}

/// Owns the data table instances on a page, keyed by table element ID.
///
/// Components are looked up here instead of hanging instance state off the
/// element tree; the host application holds the registry.
#[derive(Debug, Default)]
pub struct TableRegistry {
    tables: HashMap<String, DataTable>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a data table to `table`. Any previous instance registered
    /// under the same element ID is destroyed first, so re-initialization
    /// is idempotent and never an error.
    pub fn init(
        &mut self,
        table: Element,
        config: TableConfig,
    ) -> Result<&mut DataTable, ConfigError> {
        config.validate()?;

        let id = table.id.clone();
        if self.tables.remove(&id).is_some() {
            log::debug!("[datatable] {id} re-initialized, prior instance destroyed");
        }

        let instance = DataTable::new(table, config)?;
        Ok(self.tables.entry(id).or_insert(instance))
    }

    /// Detach and drop the instance for `id`, handing back the original
    /// table element.
    pub fn destroy(&mut self, id: &str) -> Option<Element> {
        self.tables.remove(id).map(DataTable::into_table)
    }

    pub fn get(&self, id: &str) -> Option<&DataTable> {
        self.tables.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut DataTable> {
        self.tables.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tables.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataTable> {
        self.tables.values()
    }

    /// Offer an event to every registered instance. Each instance only
    /// reacts to its own element IDs. Returns true when any state changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let mut changed = false;
        for table in self.tables.values_mut() {
            changed |= table.handle_event(event);
        }
        changed
    }

    /// React to a page-level notification.
    pub fn on_page_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::ThemeChanged => {
                for table in self.tables.values_mut() {
                    table.rebuild();
                }
            }
            PageEvent::Teardown => {
                log::debug!("[datatable] teardown, destroying {} instance(s)", self.len());
                self.tables.clear();
            }
        }
    }
}
