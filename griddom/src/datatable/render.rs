use crate::element::Element;
use crate::focus::FocusState;
use crate::text::display_width;
use crate::text_input::{TextInputData, TextInputState};
use crate::types::{Color, Edges, Size, Style};

use super::extract::Row;
use super::view::{PageSlice, SortDirection};
use super::DataTable;

/// Column wider than this is truncated at render time.
const MAX_COLUMN_WIDTH: u16 = 32;

/// Build the component subtree for the current view state.
pub(super) fn build(dt: &DataTable, focus: &FocusState, inputs: &TextInputState) -> Element {
    let view = dt.view();
    let slice = dt.slice_of(view.len());
    let page_rows: Vec<&Row> = view[slice.start..slice.end]
        .iter()
        .map(|&i| &dt.data.rows[i])
        .collect();
    let widths = column_widths(dt, &page_rows);

    let mut wrapper = Element::col()
        .id(dt.wrapper_id())
        .width(Size::Auto)
        .gap(1)
        .style(Style::new().foreground(Color::var("foreground")));

    if dt.config.searchable {
        wrapper = wrapper.child(search_control(dt, focus, inputs));
    }

    wrapper = wrapper
        .child(table(dt, &page_rows, &widths))
        .child(caption(dt, slice, view.len()));

    if dt.config.pagination && slice.total_pages > 0 {
        wrapper = wrapper.child(pager(dt, slice, focus));
    }

    wrapper
}

fn search_control(dt: &DataTable, focus: &FocusState, inputs: &TextInputState) -> Element {
    let id = dt.search_id();
    let is_focused = focus.focused() == Some(id.as_str());
    let empty = TextInputData::default();
    let data = inputs.get_data(&id).unwrap_or(&empty);

    Element::text_input("")
        .id(id)
        .width(Size::Fixed(30))
        .height(Size::Fixed(1))
        .placeholder("Search...")
        .input_state(data, is_focused)
        .style(Style::new().background(Color::var("surface")))
}

fn table(dt: &DataTable, page_rows: &[&Row], widths: &[u16]) -> Element {
    let mut table = Element::table().id(&dt.table_id).width(Size::Auto);

    if !dt.data.headers.is_empty() {
        table = table.child(Element::thead().child(header_row(dt, widths)));
    }

    let body_rows = page_rows.iter().enumerate().map(|(position, row)| {
        let mut tr = Element::tr().id(dt.row_id(position)).gap(1);
        for (column, width) in widths.iter().enumerate() {
            let text = row.get(column).map(String::as_str).unwrap_or("");
            tr = tr.child(
                Element::td(text)
                    .width(Size::Fixed(*width))
                    .height(Size::Fixed(1)),
            );
        }
        tr
    });

    table.child(Element::tbody().id(dt.body_id()).children(body_rows))
}

fn header_row(dt: &DataTable, widths: &[u16]) -> Element {
    let mut tr = Element::tr().gap(1);

    for (column, header) in dt.data.headers.iter().enumerate() {
        let label = match dt.state.sort {
            Some(key) if key.column == column => match key.direction {
                SortDirection::Ascending => format!("{header} ▲"),
                SortDirection::Descending => format!("{header} ▼"),
            },
            _ => header.clone(),
        };

        let width = widths.get(column).copied().unwrap_or(1);
        let mut th = Element::th(label)
            .id(dt.header_cell_id(column))
            .width(Size::Fixed(width))
            .height(Size::Fixed(1))
            .style(Style::new().background(Color::var("surface")).bold());

        if dt.config.sortable {
            th = th.focusable(true).clickable(true);
        }

        tr = tr.child(th);
    }

    tr
}

fn caption(dt: &DataTable, slice: PageSlice, total: usize) -> Element {
    let text = if total == 0 || slice.is_empty() {
        "Showing 0 to 0 of 0 entries".to_string()
    } else {
        format!(
            "Showing {} to {} of {} entries",
            slice.start + 1,
            slice.end,
            total
        )
    };

    Element::caption(text)
        .id(dt.caption_id())
        .height(Size::Fixed(1))
        .style(Style::new().foreground(Color::var("muted")))
}

fn pager(dt: &DataTable, slice: PageSlice, focus: &FocusState) -> Element {
    let current = dt.state.current_page;
    let mut pager = Element::row().id(dt.pager_id()).gap(1);

    pager = pager.child(page_button(
        dt,
        focus,
        "prev",
        "Prev",
        current == 1,
        false,
    ));

    for page in 1..=slice.total_pages {
        pager = pager.child(page_button(
            dt,
            focus,
            &page.to_string(),
            &page.to_string(),
            false,
            page == current,
        ));
    }

    pager.child(page_button(
        dt,
        focus,
        "next",
        "Next",
        current == slice.total_pages,
        false,
    ))
}

fn page_button(
    dt: &DataTable,
    focus: &FocusState,
    suffix: &str,
    label: &str,
    disabled: bool,
    active: bool,
) -> Element {
    let id = dt.page_button_id(suffix);

    let mut style = if active {
        Style::new()
            .background(Color::var("accent"))
            .foreground(Color::var("background"))
            .bold()
    } else {
        Style::new().background(Color::var("surface"))
    };

    if focus.focused() == Some(id.as_str()) {
        style = style.underline();
    }

    Element::button(label)
        .id(id)
        .padding(Edges::horizontal(1))
        .height(Size::Fixed(1))
        .disabled(disabled)
        .style(style)
}

/// Column widths from the widest of header (plus sort indicator) and the
/// page's cell contents, capped.
fn column_widths(dt: &DataTable, page_rows: &[&Row]) -> Vec<u16> {
    let columns = dt.data.column_count();
    let mut widths = vec![1u16; columns];

    for (column, width) in widths.iter_mut().enumerate() {
        let mut max = dt
            .data
            .headers
            .get(column)
            .map(|h| {
                let indicator = if dt.config.sortable { 2 } else { 0 };
                display_width(h) + indicator
            })
            .unwrap_or(0);

        for row in page_rows {
            if let Some(cell) = row.get(column) {
                max = max.max(display_width(cell));
            }
        }

        *width = (max.max(1) as u16).min(MAX_COLUMN_WIDTH);
    }

    widths
}
