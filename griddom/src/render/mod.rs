use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, ColorContext, Rgb, TextStyle};

pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    colors: &ColorContext,
) {
    render_element(element, layout, buf, colors, Rgb::new(255, 255, 255));
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    colors: &ColorContext,
    inherited_fg: Rgb,
) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    if let Some(bg) = &element.style.background {
        fill_rect(buf, *rect, colors.resolve(bg));
    }

    // Foreground inherits down the tree
    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| colors.resolve(c))
        .unwrap_or(inherited_fg);

    render_border(element, *rect, buf, fg);

    let mut text_style = element.style.text_style;
    if element.disabled {
        text_style.dim = true;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            paint_text(text, element, *rect, buf, fg, text_style);
        }
        Content::TextInput {
            value,
            cursor,
            selection,
            placeholder,
            focused,
        } => {
            paint_input(
                element,
                *rect,
                buf,
                fg,
                text_style,
                value,
                *cursor,
                *selection,
                placeholder.as_deref(),
                *focused,
            );
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, colors, fg);
            }
        }
    }
}

fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = if element.style.border == Border::None {
        0
    } else {
        1
    };
    rect.inset(element.padding).shrink(border, border, border, border)
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn paint_text(
    text: &str,
    element: &Element,
    rect: Rect,
    buf: &mut Buffer,
    fg: Rgb,
    style: TextStyle,
) {
    let inner = inner_rect(element, rect);
    if inner.is_empty() {
        return;
    }

    let visible = truncate_to_width(text, inner.width as usize);
    let offset = align_offset(
        display_width(&visible),
        inner.width as usize,
        element.text_align,
    );

    put_line(buf, inner, inner.x + offset as u16, &visible, fg, style);
}

#[allow(clippy::too_many_arguments)]
fn paint_input(
    element: &Element,
    rect: Rect,
    buf: &mut Buffer,
    fg: Rgb,
    style: TextStyle,
    value: &str,
    cursor: usize,
    selection: Option<(usize, usize)>,
    placeholder: Option<&str>,
    focused: bool,
) {
    let inner = inner_rect(element, rect);
    if inner.is_empty() {
        return;
    }

    if value.is_empty() {
        if let Some(placeholder) = placeholder {
            let visible = truncate_to_width(placeholder, inner.width as usize);
            put_line(buf, inner, inner.x, &visible, fg, style.dim());
        }
    } else {
        let visible = truncate_to_width(value, inner.width as usize);
        put_line(buf, inner, inner.x, &visible, fg, style);
    }

    if let Some((start, end)) = selection {
        for idx in start..end {
            invert_cell(buf, inner, column_of(value, idx, inner));
        }
    }

    // Block cursor; sits one past the text when at the end
    if focused {
        invert_cell(buf, inner, column_of(value, cursor, inner));
    }
}

/// Screen column of the character at `char_idx`, clipped to the inner rect.
fn column_of(value: &str, char_idx: usize, inner: Rect) -> u16 {
    let width: usize = value
        .chars()
        .take(char_idx)
        .map(char_width)
        .sum();
    let x = inner.x as usize + width;
    x.min(inner.right().saturating_sub(1) as usize) as u16
}

fn invert_cell(buf: &mut Buffer, inner: Rect, x: u16) {
    if let Some(cell) = buf.get_mut(x, inner.y) {
        std::mem::swap(&mut cell.fg, &mut cell.bg);
    }
}

fn put_line(buf: &mut Buffer, inner: Rect, start_x: u16, text: &str, fg: Rgb, style: TextStyle) {
    let y = inner.y;
    if y >= buf.height() {
        return;
    }

    let mut x = start_x;
    for ch in text.chars() {
        let w = char_width(ch).max(1) as u16;
        if x + w > inner.right() {
            break;
        }

        // Preserve the background laid down by fills
        let bg = buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::new(0, 0, 0));
        buf.set(
            x,
            y,
            Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style),
        );

        if w == 2 {
            if let Some(cell) = buf.get_mut(x + 1, y) {
                cell.char = ' ';
                cell.wide_continuation = true;
            }
        }

        x += w;
    }
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer, fg: Rgb) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        // Background stays as filled
    }
}
