use super::{registry, Portfolio, SECTIONS};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn registry_lists_nine_sections_in_document_order() {
    let registry = registry();
    assert_eq!(registry.len(), SECTIONS.len());
    assert_eq!(registry.first().unwrap().id, "hero");
    assert_eq!(registry.position("contact"), Some(8));

    for (i, (id, label)) in SECTIONS.iter().enumerate() {
        let descriptor = registry.get(i).unwrap();
        assert_eq!(descriptor.id, *id);
        assert_eq!(descriptor.label, *label);
        assert_eq!(descriptor.order, i);
    }
}

#[test]
fn load_reads_a_portfolio_json_file() {
    let sample = Portfolio::sample();
    let json = serde_json::to_string_pretty(&sample).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = Portfolio::load(file.path()).unwrap();
    assert_eq!(loaded, sample);
}

#[test]
fn load_rejects_invalid_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"not a portfolio").unwrap();

    let err = Portfolio::load(file.path()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn sample_fills_every_section() {
    let sample = Portfolio::sample();
    assert!(!sample.profile.headline.is_empty());
    assert!(!sample.education.is_empty());
    assert!(!sample.experience.is_empty());
    assert!(!sample.skills.is_empty());
    assert!(!sample.activities.is_empty());
    assert!(!sample.volunteer.is_empty());
    assert!(!sample.certificates.is_empty());
}
