use super::*;
use crate::foundation::core::PathEl;
use crate::foundation::rng::SpriteRng;
use crate::geometry::fragment::Shape;

const PALETTE: [Color; 3] = [Color::hex(0x4a3a4a), Color::hex(0x3a2a3a), Color::hex(0x5a4a5a)];
const EPS: f64 = 1e-9;

fn path_of(f: &Fragment) -> &BezPath {
    match f.shape() {
        Shape::Path(p) => p,
        other => panic!("expected path, got {other:?}"),
    }
}

#[test]
fn noise_scatter_returns_exact_count_inside_bounds() {
    let mut rng = SpriteRng::seeded(1);
    let req = NoiseScatter::new(400, (-80.0, -30.0, 160.0, 145.0), &PALETTE)
        .opacity(0.05, 0.15)
        .size(1.0, 4.0);
    let out = noise_scatter(&req, &mut rng);
    assert_eq!(out.len(), 400);
    for f in &out {
        let Shape::Circle { center, r } = f.shape() else {
            panic!("noise scatter must emit discs");
        };
        assert!(-80.0 <= center.x && center.x <= 80.0);
        assert!(-30.0 <= center.y && center.y <= 115.0);
        assert!((1.0..=4.0).contains(r));
        assert!(req.opacity.contains(f.style().opacity));
        assert!(PALETTE.contains(&f.style().fill.unwrap()));
    }
}

#[test]
fn noise_scatter_degenerate_inputs() {
    let mut rng = SpriteRng::seeded(2);
    assert!(noise_scatter(&NoiseScatter::new(0, (0.0, 0.0, 10.0, 10.0), &PALETTE), &mut rng).is_empty());

    // Negative extents are normalized, not rejected.
    let out = noise_scatter(&NoiseScatter::new(25, (10.0, 10.0, -10.0, -10.0), &PALETTE), &mut rng);
    assert_eq!(out.len(), 25);
    for f in &out {
        let Shape::Circle { center, .. } = f.shape() else {
            panic!("noise scatter must emit discs");
        };
        assert!((0.0..=10.0).contains(&center.x) && (0.0..=10.0).contains(&center.y));
    }

    // Empty palette keeps the count and falls back to black.
    let out = noise_scatter(&NoiseScatter::new(5, (0.0, 0.0, 1.0, 1.0), &[]), &mut rng);
    assert_eq!(out.len(), 5);
    assert!(out.iter().all(|f| f.style().fill == Some(Color::BLACK)));

    // Zero-area bounds and negative radii collapse but do not panic.
    let out = noise_scatter(
        &NoiseScatter::new(3, (4.0, 4.0, 0.0, 0.0), &PALETTE).size(-2.0, -1.0),
        &mut rng,
    );
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|f| matches!(f.shape(), Shape::Circle { r, .. } if *r == 0.0)));
}

#[test]
fn organic_blob_without_irregularity_lies_on_circle() {
    let mut rng = SpriteRng::seeded(3);
    let req = OrganicBlob::new(5.0, -40.0, 45.0, 10, 0.0).paint(Color::hex(0x2a1a2a), 0.98);
    let out = organic_blob(&req, &mut rng);
    assert_eq!(out.len(), 1);
    let path = path_of(&out[0]);

    let mut controls = 0;
    for el in path.elements() {
        if let PathEl::QuadTo(ctrl, _) = el {
            assert!((ctrl.distance(req.center) - 45.0).abs() < EPS);
            controls += 1;
        }
    }
    assert_eq!(controls, 10);
    assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));

    // Closed: the last curve ends where the path started.
    let PathEl::MoveTo(start) = path.elements()[0] else {
        panic!("path must start with move");
    };
    let Some(PathEl::QuadTo(_, end)) = path.elements().iter().rev().nth(1).copied() else {
        panic!("last segment must be a quad");
    };
    assert!(start.distance(end) < EPS);
}

#[test]
fn organic_blob_irregular_radius_within_bounds() {
    let mut rng = SpriteRng::seeded(4);
    let req = OrganicBlob::new(0.0, 0.0, 100.0, 12, 0.2);
    let path_frag = organic_blob(&req, &mut rng);
    for el in path_of(&path_frag[0]).elements() {
        if let PathEl::QuadTo(ctrl, _) = el {
            let d = ctrl.distance(Point::ORIGIN);
            assert!((90.0..=110.0).contains(&d), "vertex radius {d}");
        }
    }
}

#[test]
fn organic_blob_degenerate_inputs() {
    let mut rng = SpriteRng::seeded(5);
    assert!(organic_blob(&OrganicBlob::new(0.0, 0.0, 10.0, 0, 0.1), &mut rng).is_empty());
    let zero = organic_blob(&OrganicBlob::new(1.0, 1.0, 0.0, 6, 0.5), &mut rng);
    assert_eq!(zero.len(), 1);
    assert_eq!(zero[0].bounds().area(), 0.0);
    let neg = organic_blob(&OrganicBlob::new(0.0, 0.0, 10.0, 6, -3.0), &mut rng);
    assert_eq!(neg.len(), 1);
}

#[test]
fn particle_cloud_stays_within_radius() {
    let mut rng = SpriteRng::seeded(6);
    let req = ParticleCloud::new(-55.0, -90.0, 20, 25.0, Color::hex(0xdd44dd));
    let out = particle_cloud(&req, &mut rng);
    assert_eq!(out.len(), 20);
    for f in &out {
        let Shape::Circle { center, r } = f.shape() else {
            panic!("particles are discs");
        };
        assert!(center.distance(req.center) <= 25.0 + EPS);
        assert!((1.0..4.0).contains(r));
        assert!((0.2..0.7).contains(&f.style().opacity));
    }
    assert!(particle_cloud(&ParticleCloud::new(0.0, 0.0, 0, 10.0, Color::WHITE), &mut rng).is_empty());
    let collapsed = particle_cloud(&ParticleCloud::new(3.0, 3.0, 4, -10.0, Color::WHITE), &mut rng);
    assert!(
        collapsed
            .iter()
            .all(|f| matches!(f.shape(), Shape::Circle { center, .. } if *center == Point::new(3.0, 3.0)))
    );
}

#[test]
fn gear_profile_has_six_segments_per_tooth_and_closes() {
    for teeth in [1usize, 5, 8] {
        let out = gear_profile(&GearProfile::new(-58.0, -25.0, 8.0, 12.0, teeth));
        assert_eq!(out.len(), 1);
        let els = path_of(&out[0]).elements();
        let lines = els.iter().filter(|e| matches!(e, PathEl::LineTo(_))).count();
        assert_eq!(lines, 6 * teeth);

        let PathEl::MoveTo(first) = els[0] else {
            panic!("gear must start with move");
        };
        let Some(PathEl::LineTo(last)) = els.iter().rev().nth(1).copied() else {
            panic!("gear must end with a line before close");
        };
        assert!(first.distance(last) < EPS);
        assert!(matches!(els.last(), Some(PathEl::ClosePath)));
    }
}

#[test]
fn gear_profile_vertices_alternate_radii() {
    let req = GearProfile::new(0.0, 0.0, 6.0, 10.0, 4);
    let out = gear_profile(&req);
    let radii: Vec<f64> = path_of(&out[0])
        .elements()
        .iter()
        .filter_map(|e| match e {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p.distance(Point::ORIGIN)),
            _ => None,
        })
        .take(6)
        .collect();
    let expected = [6.0, 6.0, 10.0, 10.0, 10.0, 6.0];
    for (got, want) in radii.iter().zip(expected) {
        assert!((got - want).abs() < EPS);
    }
}

#[test]
fn gear_profile_without_teeth_is_empty() {
    assert!(gear_profile(&GearProfile::new(0.0, 0.0, 5.0, 8.0, 0)).is_empty());
}

#[test]
fn crystal_facets_tile_the_full_turn() {
    let mut rng = SpriteRng::seeded(7);
    let req = CrystalFacets::new(0.0, 0.0, 65.0, 12, &PALETTE);
    let out = crystal_facets(&req, &mut rng);
    assert_eq!(out.len(), 12);

    let norm = |a: f64| a.rem_euclid(TAU);
    let mut spans = Vec::new();
    for f in &out {
        let els = path_of(f).elements();
        assert_eq!(els.len(), 4, "triangle: move, two lines, close");
        let (PathEl::MoveTo(c), PathEl::LineTo(p1), PathEl::LineTo(p2)) = (els[0], els[1], els[2])
        else {
            panic!("unexpected facet layout");
        };
        assert_eq!(c, req.center);
        let r1 = p1.distance(c);
        assert!((52.0..=78.0).contains(&r1));
        assert!((0.4..0.8).contains(&f.style().opacity));
        spans.push((norm((p1 - c).atan2()), norm((p2 - c).atan2())));
    }

    spans.sort_by(|a, b| a.0.total_cmp(&b.0));
    assert!(spans[0].0.abs() < 1e-9);
    for w in spans.windows(2) {
        assert!((w[0].1 - w[1].0).abs() < 1e-9, "gap between facets");
    }
    let last_end = spans.last().map(|s| s.1).unwrap_or_default();
    assert!(last_end.abs() < 1e-9 || (last_end - TAU).abs() < 1e-9);
}

#[test]
fn crystal_facets_degenerate_inputs() {
    let mut rng = SpriteRng::seeded(8);
    assert!(crystal_facets(&CrystalFacets::new(0.0, 0.0, 10.0, 0, &PALETTE), &mut rng).is_empty());
    let out = crystal_facets(&CrystalFacets::new(0.0, 0.0, 0.0, 3, &[]), &mut rng);
    assert_eq!(out.len(), 3);
}

#[test]
fn ring_segment_is_closed_and_within_radii() {
    let req = RingSegment {
        center: Point::ORIGIN,
        start: 0.0,
        end: TAU / 6.0,
        inner: 25.0,
        outer: 45.0,
        style: Style {
            fill: Some(Color::hex(0x5a4a3a)),
            opacity: 0.7,
            ..Style::default()
        },
    };
    let out = ring_segment(&req);
    assert_eq!(out.len(), 1);
    let path = path_of(&out[0]);
    assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
    let b = out[0].bounds();
    // Cubic arc approximation may bulge by up to the flattening tolerance.
    assert!(b.max_x() <= 45.0 + 0.2);
    assert!(b.min_y() >= -0.2);
    assert!(b.min_x() >= 25.0 * (TAU / 6.0).cos() - 0.2);
    assert_eq!(out[0].style().opacity, 0.7);
}

#[test]
fn seeded_primitives_are_reproducible() {
    let req = NoiseScatter::new(50, (0.0, 0.0, 100.0, 100.0), &PALETTE);
    let a = noise_scatter(&req, &mut SpriteRng::seeded(11));
    let b = noise_scatter(&req, &mut SpriteRng::seeded(11));
    let c = noise_scatter(&req, &mut SpriteRng::seeded(12));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), c.len());
}
