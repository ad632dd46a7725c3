use super::ScrollNavigator;
use crate::geometry::{GeometryProvider, SectionGeometry};

struct FixedGeometry(Vec<(&'static str, SectionGeometry)>);

impl GeometryProvider for FixedGeometry {
    fn geometry_of(&self, id: &str) -> Option<SectionGeometry> {
        self.0.iter().find(|(band, _)| *band == id).map(|(_, geo)| *geo)
    }
}

fn page_geometry() -> FixedGeometry {
    FixedGeometry(vec![
        ("hero", SectionGeometry { top: 0, height: 800 }),
        ("about", SectionGeometry { top: 800, height: 600 }),
        ("education", SectionGeometry { top: 1400, height: 500 }),
    ])
}

fn settle(navigator: &mut ScrollNavigator, mut offset: usize) -> usize {
    for _ in 0..10_000 {
        match navigator.step(offset) {
            Some(next) => offset = next,
            None => return offset,
        }
    }
    panic!("glide did not settle");
}

#[test]
fn glide_converges_to_section_top() {
    let mut navigator = ScrollNavigator::new();
    navigator.activate("about", &page_geometry(), 5000);

    assert!(navigator.is_gliding());
    let settled = settle(&mut navigator, 0);
    assert_eq!(settled, 800);
    assert!(!navigator.is_gliding());
}

#[test]
fn glide_moves_monotonically_toward_target() {
    let mut navigator = ScrollNavigator::new();
    navigator.activate("education", &page_geometry(), 5000);

    let mut offset = 0;
    while let Some(next) = navigator.step(offset) {
        assert!(next > offset, "glide must not overshoot or stall");
        assert!(next <= 1400);
        offset = next;
    }
    assert_eq!(offset, 1400);
}

#[test]
fn unknown_id_is_a_noop() {
    let mut navigator = ScrollNavigator::new();
    navigator.activate("missing", &page_geometry(), 5000);

    assert!(!navigator.is_gliding());
    assert_eq!(navigator.step(250), None);
}

#[test]
fn activation_is_idempotent_once_settled() {
    let mut navigator = ScrollNavigator::new();
    let geo = page_geometry();

    navigator.activate("about", &geo, 5000);
    let settled = settle(&mut navigator, 0);

    navigator.activate("about", &geo, 5000);
    assert_eq!(navigator.step(settled), None);
    assert!(!navigator.is_gliding());
}

#[test]
fn second_activation_redirects_the_glide() {
    let mut navigator = ScrollNavigator::new();
    let geo = page_geometry();

    navigator.activate("education", &geo, 5000);
    let mut offset = 0;
    for _ in 0..3 {
        offset = navigator.step(offset).unwrap();
    }

    navigator.activate("hero", &geo, 5000);
    let settled = settle(&mut navigator, offset);
    assert_eq!(settled, 0);
}

#[test]
fn target_is_clamped_to_max_offset() {
    let mut navigator = ScrollNavigator::new();
    navigator.activate("education", &page_geometry(), 1000);

    let settled = settle(&mut navigator, 0);
    assert_eq!(settled, 1000);
}

#[test]
fn cancel_stops_a_running_glide() {
    let mut navigator = ScrollNavigator::new();
    navigator.activate("about", &page_geometry(), 5000);

    navigator.cancel();
    assert!(!navigator.is_gliding());
    assert_eq!(navigator.step(0), None);
}
