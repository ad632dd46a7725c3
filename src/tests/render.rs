use super::{render, wrap};
use crate::content;

#[test]
fn every_registered_section_gets_a_band() {
    let registry = content::registry();
    let rendered = render(&content::Portfolio::sample(), &registry, 80);

    let ids: Vec<&str> = rendered.layout.bands().map(|(id, _)| id).collect();
    let expected: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn bands_are_contiguous_from_row_zero() {
    let registry = content::registry();
    let rendered = render(&content::Portfolio::sample(), &registry, 80);

    let mut expected_top = 0;
    for (id, geo) in rendered.layout.bands() {
        assert_eq!(geo.top, expected_top, "gap before {id}");
        assert!(geo.height > 0, "empty band for {id}");
        expected_top += geo.height;
    }
    assert_eq!(rendered.layout.total_height(), expected_top);
}

#[test]
fn footer_row_is_outside_all_bands() {
    let registry = content::registry();
    let rendered = render(&content::Portfolio::sample(), &registry, 80);

    // The copyright footer is the only row past the last band, so probes
    // beyond the final section never match anything.
    assert_eq!(rendered.lines.len(), rendered.layout.total_height() + 1);
}

#[test]
fn wrap_keeps_rows_within_width() {
    let rows = wrap(
        "je suis passionné par l'optimisation des processus et l'analyse de données",
        24,
    );
    assert!(rows.len() > 1);
    for row in &rows {
        assert!(row.chars().count() <= 24, "row too wide: {row}");
    }
}

#[test]
fn wrap_breaks_overlong_words_within_width() {
    let text = "voir https://www.linkedin.com/in/youness-abboubi maintenant";
    let rows = wrap(text, 20);

    assert!(rows.len() > 2);
    for row in &rows {
        assert!(row.chars().count() <= 20, "row too wide: {row}");
    }

    // No characters are lost when the URL is broken across rows.
    let squashed: String = rows.concat().split_whitespace().collect();
    let expected: String = text.split_whitespace().collect();
    assert_eq!(squashed, expected);
}

#[test]
fn narrow_render_still_produces_every_section() {
    let registry = content::registry();
    let rendered = render(&content::Portfolio::sample(), &registry, 1);

    // Width is clamped to a sane floor rather than degenerating.
    assert_eq!(rendered.layout.bands().count(), registry.len());
    assert!(rendered.layout.total_height() > 0);
}
