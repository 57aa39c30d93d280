use super::Element;

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
    /// Editable single-line input field.
    TextInput {
        value: String,
        cursor: usize,
        selection: Option<(usize, usize)>,
        placeholder: Option<String>,
        focused: bool,
    },
}
