use super::*;
use crate::foundation::core::PathEl;
use crate::foundation::rng::SpriteRng;
use crate::geometry::fragment::Shape;

const IDS: [&str; 8] = [
    "cultist",
    "jawWorm",
    "louse_red",
    "fungiBeast",
    "automaton",
    "mystic",
    "sphericGuardian",
    "bronzeOrb",
];

#[test]
fn catalog_ids_are_stable_and_valid() {
    let ids: Vec<&str> = catalog().iter().map(|d| d.id).collect();
    assert_eq!(ids, IDS);
    validate(catalog()).unwrap();
}

#[test]
fn every_creature_composes_with_shadow_first() {
    for def in catalog() {
        let parts = def.build_parts(&mut SpriteRng::seeded(42)).unwrap();
        assert!(!parts.is_empty(), "{} emitted nothing", def.id);
        let first = &parts[0];
        assert!(
            matches!(first.shape(), Shape::Ellipse { .. }),
            "{} must start with a ground shadow",
            def.id
        );
        assert_eq!(first.style().fill, Some(Color::BLACK), "{}", def.id);
    }
}

#[test]
fn curved_limbs_use_quadratic_segments() {
    let quads = |id: &str| {
        find(id)
            .unwrap()
            .build_parts(&mut SpriteRng::seeded(9))
            .unwrap()
            .iter()
            .filter_map(|frag| match frag.shape() {
                Shape::Path(path) => Some(
                    path.elements()
                        .iter()
                        .filter(|el| matches!(el, PathEl::QuadTo(..)))
                        .count(),
                ),
                _ => None,
            })
            .sum::<usize>()
    };
    // Two hands of five claws each.
    assert!(quads("cultist") >= 10);
    assert!(quads("mystic") >= 10);
    // Two quadratic segments per leg stroke.
    assert!(quads("louse_red") >= 4);
}

#[test]
fn composition_is_reproducible_per_seed() {
    for def in catalog() {
        let a = def.build_parts(&mut SpriteRng::seeded(5)).unwrap();
        let b = def.build_parts(&mut SpriteRng::seeded(5)).unwrap();
        let c = def.build_parts(&mut SpriteRng::seeded(6)).unwrap();
        assert_eq!(a, b, "{}", def.id);
        // Same structure under a different seed.
        assert_eq!(a.len(), c.len(), "{}", def.id);
    }
}

#[test]
fn find_and_select() {
    assert_eq!(find("mystic").map(|d| d.display_name), Some("Mystic"));
    assert!(find("transient").is_none());

    let picked = select(catalog(), &["bronzeOrb".to_owned(), "cultist".to_owned()]).unwrap();
    let ids: Vec<&str> = picked.iter().map(|d| d.id).collect();
    assert_eq!(ids, ["cultist", "bronzeOrb"]);

    assert_eq!(select(catalog(), &[]).unwrap().len(), IDS.len());
    let err = select(catalog(), &["nope".to_owned()]).unwrap_err();
    assert!(err.to_string().contains("unknown creature 'nope'"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let dup = [catalog()[0], catalog()[0]];
    let err = validate(&dup).unwrap_err();
    assert!(err.to_string().contains("duplicate creature id 'cultist'"));
}
