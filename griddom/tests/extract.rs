use griddom::datatable::{extract, TableData};
use griddom::Element;

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn test_extract_headers_and_rows() {
    let table = Element::table()
        .child(
            Element::thead().child(
                Element::tr()
                    .child(Element::th("Name"))
                    .child(Element::th("City")),
            ),
        )
        .child(
            Element::tbody()
                .child(
                    Element::tr()
                        .child(Element::td("Ann"))
                        .child(Element::td("Oslo")),
                )
                .child(
                    Element::tr()
                        .child(Element::td("Bob"))
                        .child(Element::td("Rome")),
                ),
        );

    let data = extract(&table);
    assert_eq!(data.headers, vec!["Name", "City"]);
    assert_eq!(
        data.rows,
        vec![vec!["Ann", "Oslo"], vec!["Bob", "Rome"]]
    );
}

#[test]
fn test_missing_thead_tolerated() {
    let table = Element::table().child(
        Element::tbody().child(Element::tr().child(Element::td("x"))),
    );
    let data = extract(&table);
    assert!(data.headers.is_empty());
    assert_eq!(data.rows, vec![vec!["x"]]);
}

#[test]
fn test_missing_tbody_tolerated() {
    let table = Element::table().child(
        Element::thead().child(Element::tr().child(Element::th("A"))),
    );
    let data = extract(&table);
    assert_eq!(data.headers, vec!["A"]);
    assert!(data.rows.is_empty());
}

#[test]
fn test_empty_table() {
    let data = extract(&Element::table());
    assert_eq!(data, TableData::default());
}

#[test]
fn test_cell_text_is_trimmed() {
    let table = Element::table().child(
        Element::tbody().child(
            Element::tr()
                .child(Element::td("  padded  "))
                .child(Element::td("\ttabbed\n")),
        ),
    );
    let data = extract(&table);
    assert_eq!(data.rows, vec![vec!["padded", "tabbed"]]);
}

#[test]
fn test_nested_markup_concatenates_text() {
    let cell = Element::td("").child(Element::text("Ann ")).child(
        Element::box_().child(Element::text("(admin)")),
    );
    let table = Element::table()
        .child(Element::tbody().child(Element::tr().child(cell)));

    let data = extract(&table);
    assert_eq!(data.rows, vec![vec!["Ann (admin)"]]);
}

#[test]
fn test_ragged_rows_pass_through() {
    let table = Element::table()
        .child(
            Element::thead().child(
                Element::tr()
                    .child(Element::th("A"))
                    .child(Element::th("B")),
            ),
        )
        .child(
            Element::tbody()
                .child(Element::tr().child(Element::td("1")))
                .child(
                    Element::tr()
                        .child(Element::td("2"))
                        .child(Element::td("3"))
                        .child(Element::td("4")),
                ),
        );

    let data = extract(&table);
    assert_eq!(data.rows[0].len(), 1, "short row kept as-is");
    assert_eq!(data.rows[1].len(), 3, "long row kept as-is");
}

#[test]
fn test_non_row_children_ignored() {
    let table = Element::table().child(
        Element::tbody()
            .child(Element::text("stray"))
            .child(Element::tr().child(Element::td("kept"))),
    );
    let data = extract(&table);
    assert_eq!(data.rows, vec![vec!["kept"]]);
}

#[test]
fn test_headers_directly_under_thead() {
    // Sloppy markup without a header row element
    let table = Element::table().child(
        Element::thead()
            .child(Element::th("A"))
            .child(Element::th("B")),
    );
    let data = extract(&table);
    assert_eq!(data.headers, vec!["A", "B"]);
}

#[test]
fn test_column_count() {
    let with_headers = extract(
        &Element::table().child(
            Element::thead().child(
                Element::tr()
                    .child(Element::th("A"))
                    .child(Element::th("B")),
            ),
        ),
    );
    assert_eq!(with_headers.column_count(), 2);

    let headerless = extract(
        &Element::table().child(
            Element::tbody()
                .child(Element::tr().child(Element::td("1")))
                .child(
                    Element::tr()
                        .child(Element::td("2"))
                        .child(Element::td("3")),
                ),
        ),
    );
    assert_eq!(headerless.column_count(), 2, "widest row wins");
}
