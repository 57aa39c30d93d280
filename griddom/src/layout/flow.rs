use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Justify, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out an element tree within the available area.
///
/// Flow layout only: children stack along the parent's direction, sized by
/// `Size::{Fixed, Auto, Fill, Flex}`, separated by `gap`, distributed by
/// `justify` and aligned on the cross axis by `align`.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let children = element.child_elements();
    if children.is_empty() {
        return;
    }

    let border = border_size(element);
    let inner = rect
        .inset(element.padding)
        .shrink(border, border, border, border);

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_avail = if is_row { inner.height } else { inner.width };
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    // First pass: fixed and auto sizes, flex weights
    let mut fixed_total: u16 = 0;
    let mut flex_weight: u16 = 0;
    for child in children {
        match main_axis(child, is_row) {
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n),
            Size::Auto => {
                fixed_total = fixed_total.saturating_add(estimate_size(child, is_row));
            }
            Size::Fill => flex_weight += 1,
            Size::Flex(w) => flex_weight += w.max(1),
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let per_weight = if flex_weight > 0 {
        remaining / flex_weight
    } else {
        0
    };

    // Second pass: concrete main-axis sizes
    let mains: Vec<u16> = children
        .iter()
        .map(|child| match main_axis(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => per_weight,
            Size::Flex(w) => per_weight.saturating_mul(w.max(1)),
        })
        .collect();

    let used: u16 = mains
        .iter()
        .fold(0u16, |acc, m| acc.saturating_add(*m))
        .saturating_add(gap_total);
    let extra = main_size.saturating_sub(used);

    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::Center => (extra / 2, element.gap),
        Justify::End => (extra, element.gap),
        Justify::SpaceBetween => {
            if children.len() > 1 {
                (0, extra / (children.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
    };

    let mut offset = start_offset;
    for (child, main) in children.iter().zip(mains) {
        let cross = match cross_axis(child, is_row) {
            Size::Fixed(n) => n.min(cross_avail),
            Size::Fill | Size::Flex(_) => cross_avail,
            Size::Auto => {
                if element.align == Align::Stretch {
                    cross_avail
                } else {
                    estimate_size(child, !is_row).min(cross_avail)
                }
            }
        };

        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => cross_avail.saturating_sub(cross) / 2,
            Align::End => cross_avail.saturating_sub(cross),
        };

        let clamped_main = main.min(main_size.saturating_sub(offset));

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset,
                inner.y + cross_offset,
                clamped_main,
                cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y + offset,
                cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(between_gap);
    }
}

fn main_axis(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

fn cross_axis(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.height
    } else {
        element.width
    }
}

fn border_size(element: &Element) -> u16 {
    if element.style.border == Border::None {
        0
    } else {
        1
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

/// Intrinsic size of an element along one axis, for `Size::Auto`.
/// An explicit fixed size wins over the content estimate.
fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let explicit = if is_width {
        element.width
    } else {
        element.height
    };
    if let Size::Fixed(n) = explicit {
        return n;
    }

    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };
    let chrome = padding + border_size(element) * 2;

    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            if is_width {
                display_width(text) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::TextInput {
            value, placeholder, ..
        } => {
            if is_width {
                let placeholder_width = placeholder
                    .as_deref()
                    .map(display_width)
                    .unwrap_or(0);
                // One extra column for the cursor at the end of the value
                (display_width(value) + 1).max(placeholder_width) as u16
            } else {
                1
            }
        }
        Content::Children(children) => {
            let along_main = (element.direction == Direction::Row) == is_width;
            if along_main {
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .fold(0u16, |acc, s| acc.saturating_add(s))
                    .saturating_add(gap_total)
            } else {
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
    };

    content.saturating_add(chrome)
}
