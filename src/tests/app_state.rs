use super::AppState;
use crate::content;
use crate::geometry::GeometryProvider;

fn sample_app() -> AppState {
    let mut app = AppState::new(content::Portfolio::sample(), content::registry(), 3, 80);
    app.resize(80, 30);
    app
}

fn settle(app: &mut AppState) {
    for _ in 0..10_000 {
        if !app.on_tick() {
            return;
        }
    }
    panic!("glide did not settle");
}

#[test]
fn landing_section_is_active_at_the_top() {
    let app = sample_app();
    assert_eq!(app.scroll_offset, 0);
    assert_eq!(app.active(), "hero");
}

#[test]
fn layout_covers_every_registered_section_in_order() {
    let app = sample_app();
    let ids: Vec<&str> = app.layout.bands().map(|(id, _)| id).collect();
    let expected: Vec<&str> = app.registry.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, expected);

    let mut expected_top = 0;
    for (_, geo) in app.layout.bands() {
        assert_eq!(geo.top, expected_top, "bands must be contiguous");
        assert!(geo.height > 0);
        expected_top += geo.height;
    }
}

#[test]
fn activate_glides_to_the_section_top() {
    let mut app = sample_app();
    app.activate_index(2);
    settle(&mut app);

    let education = app.layout.geometry_of("education").unwrap();
    assert_eq!(app.scroll_offset, education.top.min(app.max_offset()));
    assert_eq!(app.active(), "education");
}

#[test]
fn activate_selected_follows_the_nav_cursor() {
    let mut app = sample_app();
    app.select_next_nav();
    app.activate_selected();
    settle(&mut app);

    assert_eq!(app.active(), "about");
}

#[test]
fn activating_a_distant_section_clamps_to_max_offset() {
    let mut app = sample_app();
    app.activate("contact");
    settle(&mut app);

    assert_eq!(app.scroll_offset, app.max_offset());
    // The active section is whichever band holds the probe at the clamped
    // offset, never an out-of-range id.
    let active_geo = app.layout.geometry_of(app.active()).unwrap();
    assert!(active_geo.contains(app.scroll_offset + 3));
}

#[test]
fn manual_scroll_cancels_a_glide() {
    let mut app = sample_app();
    app.activate_index(8);
    assert!(app.navigator.is_gliding());

    app.scroll_down(1);
    assert!(!app.navigator.is_gliding());
    assert!(!app.on_tick());
}

#[test]
fn scrolling_clamps_to_the_document() {
    let mut app = sample_app();
    app.scroll_up(10);
    assert_eq!(app.scroll_offset, 0);

    app.end();
    assert_eq!(app.scroll_offset, app.max_offset());

    app.scroll_down(50);
    assert_eq!(app.scroll_offset, app.max_offset());
}

#[test]
fn active_section_never_clears_at_the_bottom() {
    let mut app = sample_app();
    app.end();
    let at_bottom = app.active().to_string();
    assert!(!at_bottom.is_empty());

    // Another recompute past the last band must keep the same id.
    app.scroll_down(10);
    assert_eq!(app.active(), at_bottom);
}

#[test]
fn activation_reports_the_destination_in_the_help_bar() {
    let mut app = sample_app();
    assert_eq!(app.message, None);

    app.activate_index(2);
    assert_eq!(app.message.as_deref(), Some("Aller à Formation"));

    // Manual scrolling takes over and clears the status feedback.
    app.scroll_down(1);
    assert_eq!(app.message, None);

    // Out-of-range jumps stay silent.
    app.activate_index(42);
    assert_eq!(app.message, None);
}

#[test]
fn nav_cursor_wraps_both_ways() {
    let mut app = sample_app();
    app.select_prev_nav();
    assert_eq!(app.selected_nav, app.registry.len() - 1);

    app.select_next_nav();
    assert_eq!(app.selected_nav, 0);
}

#[test]
fn resize_keeps_offset_within_the_new_document() {
    let mut app = sample_app();
    app.end();
    assert!(app.scroll_offset > 0);

    // Narrower text reflows the document; the offset must stay in range and
    // the layout must still know every section.
    app.resize(40, 50);
    assert!(app.scroll_offset <= app.max_offset());
    assert_eq!(app.layout.bands().count(), app.registry.len());
}
