//! Theme switching: 't' swaps the palette and re-initializes the table
//! through the registry, the same path a hosting page would use.

use griddom::datatable::{PageEvent, TableConfig, TableRegistry};
use griddom::{
    Color, DefaultTheme, Edges, Element, Event, FocusState, Key, LightTheme, Size, Style,
    Terminal, TextInputState, Theme,
};

fn main() -> std::io::Result<()> {
    let mut registry = TableRegistry::new();
    registry
        .init(cities(), TableConfig::new().page_size(4))
        .expect("valid config");

    let themes: [Box<dyn Theme>; 2] = [Box::new(DefaultTheme::new()), Box::new(LightTheme::new())];
    let mut active = 0;

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut inputs = TextInputState::new();

    loop {
        let table = registry.get("cities").expect("table registered");
        let root = page(table.element(&focus, &inputs));
        term.render(&root, themes[active].as_ref())?;

        let raw = term.poll(None)?;
        let events = focus.process_events(&raw, &root, term.layout());
        let events = inputs.process_events(&events, &root);

        for event in &events {
            match event {
                Event::Key {
                    key: Key::Escape, ..
                } => {
                    registry.on_page_event(PageEvent::Teardown);
                    return Ok(());
                }
                Event::Key {
                    target: None,
                    key: Key::Char('t'),
                    ..
                } => {
                    active = (active + 1) % themes.len();
                    registry.on_page_event(PageEvent::ThemeChanged);
                    inputs.set("cities-search", "");
                }
                _ => {
                    registry.handle_event(event);
                }
            }
        }
    }
}

fn page(table: Element) -> Element {
    Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(1))
        .gap(1)
        .style(
            Style::new()
                .background(Color::var("background"))
                .foreground(Color::var("foreground")),
        )
        .child(table)
        .child(
            Element::text("'t' toggles the theme, Esc quits")
                .style(Style::new().foreground(Color::var("muted"))),
        )
}

fn cities() -> Element {
    let data: &[(&str, &str, &str)] = &[
        ("Oslo", "Norway", "709000"),
        ("Bergen", "Norway", "285000"),
        ("Lisbon", "Portugal", "545000"),
        ("Porto", "Portugal", "231000"),
        ("Prague", "Czechia", "1309000"),
        ("Brno", "Czechia", "382000"),
        ("Vienna", "Austria", "1973000"),
        ("Graz", "Austria", "291000"),
    ];

    let header = Element::tr()
        .child(Element::th("City"))
        .child(Element::th("Country"))
        .child(Element::th("Population"));

    let rows = data.iter().map(|(city, country, population)| {
        Element::tr()
            .child(Element::td(*city))
            .child(Element::td(*country))
            .child(Element::td(*population))
    });

    Element::table()
        .id("cities")
        .child(Element::thead().child(header))
        .child(Element::tbody().children(rows))
}
