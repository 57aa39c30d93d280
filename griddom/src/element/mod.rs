mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the first direct child with the given tag.
pub fn find_child_by_tag(parent: &Element, tag: Tag) -> Option<&Element> {
    parent.child_elements().iter().find(|c| c.tag == tag)
}
