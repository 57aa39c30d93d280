use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};

use griddom::{
    collect_focusable, hit_test, hit_test_any, hit_test_focusable, Element, Event, FocusState,
    Key, LayoutResult, Rect, TextInputState,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn key(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click_at(x: u16, y: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtMouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_overlapping_elements() {
    // Later children are on top
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom").clickable(true))
        .child(Element::box_().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

#[test]
fn test_hit_test_skips_non_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
    assert_eq!(
        hit_test_any(&layout, &root, 15, 11),
        Some("text".to_string())
    );
}

#[test]
fn test_hit_test_skips_disabled() {
    let root = Element::box_()
        .id("root")
        .child(Element::button("Prev").id("btn").disabled(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(0, 0, 10, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 2, 0), None);
    assert_eq!(hit_test_focusable(&layout, &root, 2, 0), None);
}

#[test]
fn test_hit_test_focusable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("input").id("input").focusable(true))
        .child(Element::text("label").id("label"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("input", Rect::new(10, 10, 30, 3)),
        ("label", Rect::new(10, 20, 30, 3)),
    ]);

    assert_eq!(
        hit_test_focusable(&layout, &root, 15, 11),
        Some("input".to_string())
    );
    assert_eq!(hit_test_focusable(&layout, &root, 15, 21), None);
}

// ============================================================================
// Focus state
// ============================================================================

fn three_buttons() -> Element {
    Element::col()
        .id("root")
        .child(Element::button("a").id("a"))
        .child(Element::button("b").id("b"))
        .child(Element::button("c").id("c"))
}

#[test]
fn test_collect_focusable_tree_order() {
    assert_eq!(collect_focusable(&three_buttons()), vec!["a", "b", "c"]);
}

#[test]
fn test_collect_focusable_excludes_disabled() {
    let root = Element::col()
        .child(Element::button("a").id("a"))
        .child(Element::button("b").id("b").disabled(true));
    assert_eq!(collect_focusable(&root), vec!["a"]);
}

#[test]
fn test_focus_next_cycles() {
    let root = three_buttons();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_next(&root), Some("b".to_string()));
    assert_eq!(focus.focus_next(&root), Some("c".to_string()));
    assert_eq!(focus.focus_next(&root), Some("a".to_string()), "wraps");
}

#[test]
fn test_focus_prev_cycles_backwards() {
    let root = three_buttons();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_prev(&root), Some("c".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("b".to_string()));
}

#[test]
fn test_tab_emits_blur_and_focus() {
    let root = three_buttons();
    let layout = create_layout(&[("root", Rect::new(0, 0, 10, 3))]);
    let mut focus = FocusState::new();

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Focus {
            target: "a".to_string()
        }]
    );

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "a".to_string()
            },
            Event::Focus {
                target: "b".to_string()
            },
        ]
    );
}

#[test]
fn test_escape_blurs_then_passes_through() {
    let root = three_buttons();
    let layout = create_layout(&[("root", Rect::new(0, 0, 10, 3))]);
    let mut focus = FocusState::new();
    focus.focus("b");

    let events = focus.process_events(&[key(KeyCode::Esc)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Blur {
            target: "b".to_string()
        }]
    );
    assert_eq!(focus.focused(), None);

    let events = focus.process_events(&[key(KeyCode::Esc)], &root, &layout);
    assert!(matches!(
        events[0],
        Event::Key {
            key: Key::Escape,
            ..
        }
    ));
}

#[test]
fn test_keys_target_focused_element() {
    let root = three_buttons();
    let layout = create_layout(&[("root", Rect::new(0, 0, 10, 3))]);
    let mut focus = FocusState::new();
    focus.focus("b");

    let events = focus.process_events(&[key(KeyCode::Enter)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("b".to_string()),
            key: Key::Enter,
            modifiers: griddom::Modifiers::new(),
        }]
    );
}

#[test]
fn test_click_focuses_and_dispatches() {
    let root = Element::col()
        .id("root")
        .child(Element::button("a").id("a"))
        .child(Element::button("b").id("b"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 2)),
        ("a", Rect::new(0, 0, 20, 1)),
        ("b", Rect::new(0, 1, 20, 1)),
    ]);

    let mut focus = FocusState::new();
    let events = focus.process_events(&[click_at(3, 1)], &root, &layout);

    assert_eq!(focus.focused(), Some("b"));
    assert_eq!(
        events,
        vec![
            Event::Focus {
                target: "b".to_string()
            },
            Event::Click {
                target: Some("b".to_string()),
                x: 3,
                y: 1,
                button: griddom::MouseButton::Left,
            },
        ]
    );
}

// ============================================================================
// Text input editing
// ============================================================================

fn input_root() -> Element {
    Element::col()
        .id("root")
        .child(Element::text_input("").id("search"))
}

fn type_key(
    inputs: &mut TextInputState,
    root: &Element,
    code: KeyCode,
) -> Vec<Event> {
    let raw = Event::Key {
        target: Some("search".to_string()),
        key: code.into(),
        modifiers: griddom::Modifiers::new(),
    };
    inputs.process_events(&[raw], root)
}

#[test]
fn test_typing_emits_change_events() {
    let root = input_root();
    let mut inputs = TextInputState::new();

    let events = type_key(&mut inputs, &root, KeyCode::Char('h'));
    assert_eq!(
        events,
        vec![Event::Change {
            target: "search".to_string(),
            text: "h".to_string()
        }]
    );

    type_key(&mut inputs, &root, KeyCode::Char('i'));
    assert_eq!(inputs.get("search"), "hi");
}

#[test]
fn test_backspace_removes_last_char() {
    let root = input_root();
    let mut inputs = TextInputState::new();
    inputs.set("search", "hi");

    let events = type_key(&mut inputs, &root, KeyCode::Backspace);
    assert_eq!(
        events,
        vec![Event::Change {
            target: "search".to_string(),
            text: "h".to_string()
        }]
    );
}

#[test]
fn test_enter_submits() {
    let root = input_root();
    let mut inputs = TextInputState::new();
    inputs.set("search", "query");

    let events = type_key(&mut inputs, &root, KeyCode::Enter);
    assert_eq!(
        events,
        vec![Event::Submit {
            target: "search".to_string()
        }]
    );
}

#[test]
fn test_cursor_movement_inserts_mid_string() {
    let root = input_root();
    let mut inputs = TextInputState::new();
    inputs.set("search", "ac");

    type_key(&mut inputs, &root, KeyCode::Left);
    type_key(&mut inputs, &root, KeyCode::Char('b'));
    assert_eq!(inputs.get("search"), "abc");
}

#[test]
fn test_select_all_then_type_replaces() {
    let root = input_root();
    let mut inputs = TextInputState::new();
    inputs.set("search", "old text");

    let select_all = Event::Key {
        target: Some("search".to_string()),
        key: Key::Char('a'),
        modifiers: griddom::Modifiers::ctrl(),
    };
    inputs.process_events(&[select_all], &root);
    type_key(&mut inputs, &root, KeyCode::Char('n'));

    assert_eq!(inputs.get("search"), "n");
}

#[test]
fn test_events_for_other_targets_pass_through() {
    let root = input_root();
    let mut inputs = TextInputState::new();

    let event = Event::Key {
        target: Some("elsewhere".to_string()),
        key: Key::Char('x'),
        modifiers: griddom::Modifiers::new(),
    };
    let out = inputs.process_events(&[event.clone()], &root);
    assert_eq!(out, vec![event]);
    assert_eq!(inputs.get("search"), "");
}
