pub mod buffer;
pub mod datatable;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod text_input;
pub mod types;

pub use buffer::Buffer;
pub use datatable::{DataTable, PageEvent, TableConfig, TableRegistry};
pub use element::{find_child_by_tag, find_element, Content, Element, Tag};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{layout, LayoutResult, Rect};
pub use terminal::Terminal;
pub use text_input::{TextInputData, TextInputState};
pub use types::*;
