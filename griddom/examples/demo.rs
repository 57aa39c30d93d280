use std::fs::File;

use griddom::datatable::{TableConfig, TableRegistry};
use griddom::{
    Color, DefaultTheme, Edges, Element, Event, FocusState, Key, Size, Style, Terminal,
    TextInputState,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const TABLE_ID: &str = "employees";

fn main() -> std::io::Result<()> {
    let log_file = File::create("griddom-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut registry = TableRegistry::new();
    registry
        .init(employees(), TableConfig::new().page_size(5))
        .expect("valid config");

    let theme = DefaultTheme::new();
    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut inputs = TextInputState::new();

    loop {
        let table = registry.get(TABLE_ID).expect("table registered");
        let root = page(table.element(&focus, &inputs));
        term.render(&root, &theme)?;

        let raw = term.poll(None)?;
        let events = focus.process_events(&raw, &root, term.layout());
        let events = inputs.process_events(&events, &root);

        for event in &events {
            match event {
                // Esc blurs first; a second Esc lands here and quits
                Event::Key {
                    key: Key::Escape, ..
                } => return Ok(()),
                Event::Key {
                    target: None,
                    key: Key::Char('q'),
                    ..
                } => return Ok(()),
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
        .child(Element::text("Employees").style(Style::new().bold()))
        .child(table)
        .child(
            Element::text("Tab to move focus, Enter to activate, Esc Esc to quit")
                .style(Style::new().foreground(Color::var("muted"))),
        )
}

fn employees() -> Element {
    let people: &[(&str, &str, &str, &str)] = &[
        ("Ann Berger", "Engineering", "34", "Oslo"),
        ("Bob Chandra", "Sales", "41", "Lisbon"),
        ("Cy Dalton", "Engineering", "29", "Prague"),
        ("Dee Evans", "Support", "36", "Dublin"),
        ("Eli Fromm", "Marketing", "52", "Berlin"),
        ("Fay Garza", "Engineering", "27", "Madrid"),
        ("Gil Hooper", "Sales", "45", "Vienna"),
        ("Ida Jensen", "Support", "31", "Bergen"),
        ("Jon Kowalski", "Marketing", "38", "Krakow"),
        ("Kim Larsen", "Engineering", "26", "Aarhus"),
        ("Lou Madsen", "Sales", "49", "Ghent"),
        ("Mia Novak", "Engineering", "33", "Ljubljana"),
    ];

    let header = Element::tr()
        .child(Element::th("Name"))
        .child(Element::th("Department"))
        .child(Element::th("Age"))
        .child(Element::th("City"));

    let rows = people.iter().map(|(name, dept, age, city)| {
        Element::tr()
            .child(Element::td(*name))
            .child(Element::td(*dept))
            .child(Element::td(*age))
            .child(Element::td(*city))
    });

    Element::table()
        .id(TABLE_ID)
        .child(Element::thead().child(header))
        .child(Element::tbody().children(rows))
}
