use std::collections::HashMap;

use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};

/// Data for a single text input: text content and cursor state.
/// The cursor is a character index into `text`.
#[derive(Debug, Clone, Default)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
    /// Anchor position for selection. When Some and != cursor, text is selected.
    pub anchor: Option<usize>,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            anchor: None,
        }
    }

    /// Get the selection range as (start, end) where start <= end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some((anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Select all text.
    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.anchor = Some(0);
            self.cursor = self.char_count();
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Remove the selected range, placing the cursor at its start.
    /// Returns false when nothing was selected.
    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            return false;
        };
        let byte_start = byte_index(&self.text, start);
        let byte_end = byte_index(&self.text, end);
        self.text.replace_range(byte_start..byte_end, "");
        self.cursor = start;
        self.clear_selection();
        true
    }
}

/// Tracks text input state for multiple elements, keyed by element ID.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text value for an input.
    pub fn get(&self, id: &str) -> &str {
        self.inputs.get(id).map(|d| d.text.as_str()).unwrap_or("")
    }

    /// Get the full input data (text, cursor, selection).
    pub fn get_data(&self, id: &str) -> Option<&TextInputData> {
        self.inputs.get(id)
    }

    /// Get mutable access to input data, creating it if missing.
    pub fn get_data_mut(&mut self, id: &str) -> &mut TextInputData {
        self.inputs.entry(id.to_string()).or_default()
    }

    /// Set the text value for an input, placing the cursor at the end.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        self.inputs.insert(id.to_string(), TextInputData::new(text));
    }

    /// Process events and handle text editing for elements that capture
    /// input. Produces `Change` and `Submit` events; everything else passes
    /// through untouched.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            if let Event::Key {
                target: Some(target),
                key,
                modifiers,
            } = event
            {
                let captures = find_element(root, target)
                    .map(|el| el.captures_input && !el.disabled)
                    .unwrap_or(false);

                if captures {
                    match self.handle_key(target, *key, *modifiers) {
                        TextEditResult::Changed => {
                            output.push(Event::Change {
                                target: target.clone(),
                                text: self.get(target).to_string(),
                            });
                            continue;
                        }
                        TextEditResult::Submitted => {
                            output.push(Event::Submit {
                                target: target.clone(),
                            });
                            continue;
                        }
                        TextEditResult::Handled => continue,
                        TextEditResult::Ignored => {}
                    }
                }
            }
            output.push(event.clone());
        }

        output
    }

    /// Handle a key press for text editing.
    fn handle_key(&mut self, id: &str, key: Key, modifiers: Modifiers) -> TextEditResult {
        let data = self.get_data_mut(id);

        match key {
            Key::Char('a') if modifiers.ctrl => {
                data.select_all();
                TextEditResult::Handled
            }

            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                data.delete_selection();
                let byte_pos = byte_index(&data.text, data.cursor);
                data.text.insert(byte_pos, c);
                data.cursor += 1;
                TextEditResult::Changed
            }

            Key::Backspace if modifiers.none() => {
                if data.delete_selection() {
                    TextEditResult::Changed
                } else if data.cursor > 0 {
                    let byte_end = byte_index(&data.text, data.cursor);
                    let byte_start = byte_index(&data.text, data.cursor - 1);
                    data.text.replace_range(byte_start..byte_end, "");
                    data.cursor -= 1;
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if data.delete_selection() {
                    TextEditResult::Changed
                } else if data.cursor < data.char_count() {
                    let byte_start = byte_index(&data.text, data.cursor);
                    let byte_end = byte_index(&data.text, data.cursor + 1);
                    data.text.replace_range(byte_start..byte_end, "");
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if !modifiers.ctrl => {
                move_cursor(data, -1, modifiers.shift);
                TextEditResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                move_cursor(data, 1, modifiers.shift);
                TextEditResult::Handled
            }

            Key::Home if !modifiers.ctrl => {
                move_cursor_to(data, 0, modifiers.shift);
                TextEditResult::Handled
            }

            Key::End if !modifiers.ctrl => {
                move_cursor_to(data, data.char_count(), modifiers.shift);
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

fn move_cursor(data: &mut TextInputData, delta: i32, extend_selection: bool) {
    if !extend_selection {
        // Collapse an existing selection to its edge in the move direction
        if let Some((start, end)) = data.selection() {
            data.cursor = if delta < 0 { start } else { end };
            data.clear_selection();
            return;
        }
    } else if data.anchor.is_none() {
        data.anchor = Some(data.cursor);
    }

    let max = data.text.chars().count() as i32;
    data.cursor = (data.cursor as i32 + delta).clamp(0, max) as usize;
}

fn move_cursor_to(data: &mut TextInputData, position: usize, extend_selection: bool) {
    if extend_selection {
        if data.anchor.is_none() {
            data.anchor = Some(data.cursor);
        }
    } else {
        data.clear_selection();
    }
    data.cursor = position;
}

/// Convert a character index to a byte index.
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
