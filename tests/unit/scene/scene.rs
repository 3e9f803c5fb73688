use super::document::*;
use crate::creature::catalog::{catalog, find};
use crate::foundation::color::Color;
use crate::foundation::rng::SpriteRng;
use crate::geometry::fragment::Fragment;

fn scene_for(id: &str, seed: u64) -> SceneDocument {
    let def = find(id).unwrap();
    let parts = def.build_parts(&mut SpriteRng::seeded(seed)).unwrap();
    SceneDocument::assemble(def, parts, &SceneOpts::default()).unwrap()
}

#[test]
fn anchor_matches_classic_layout() {
    let anchor = SceneOpts::default().anchor();
    assert_eq!((anchor.x, anchor.y), (384.0, 400.0));
    let small = SceneOpts { canvas_px: 96 }.anchor();
    assert_eq!((small.x, small.y), (48.0, 50.0));
}

#[test]
fn canvas_bounds_are_validated() {
    assert!(SceneOpts { canvas_px: 0 }.validate().is_err());
    assert!(SceneOpts { canvas_px: MAX_CANVAS_PX + 1 }.validate().is_err());
    assert!(SceneOpts::default().validate().is_ok());
}

#[test]
fn every_creature_serializes_to_parseable_svg() {
    for def in catalog() {
        let parts = def.build_parts(&mut SpriteRng::seeded(3)).unwrap();
        let doc = SceneDocument::assemble(def, parts, &SceneOpts::default()).unwrap();
        let svg = doc.to_svg();
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
            .unwrap_or_else(|e| panic!("{} svg did not parse: {e}", def.id));
        assert_eq!(tree.size().width(), 768.0);
        assert_eq!(tree.size().height(), 768.0);
    }
}

#[test]
fn stacking_order_is_background_glow_group_vignette() {
    let svg = scene_for("cultist", 1).to_svg();
    let bg = svg.find(r#"fill="url(#bg-cultist)""#).unwrap();
    let glow = svg.find(r#"fill="url(#glow-cultist)""#).unwrap();
    let group = svg.find(r#"<g transform="translate(384, 400)">"#).unwrap();
    let vignette = svg.find(r#"fill="url(#vignette)""#).unwrap();
    assert!(bg < glow && glow < group && group < vignette);
    // Nothing is painted after the vignette.
    let tail = &svg[svg.rfind("<rect").unwrap()..];
    assert_eq!(tail.lines().count(), 2);
}

#[test]
fn gradients_carry_creature_colors() {
    let doc = scene_for("mystic", 1);
    assert_eq!(doc.background.stops[0].color, Color::hex(0x1a2a1a));
    assert_eq!(doc.background.stops[1].color, Color::hex(0x050a05));
    assert_eq!((doc.background.cx, doc.background.cy, doc.background.r), (0.5, 0.45, 0.7));
    assert_eq!(doc.glow.stops[0].opacity, 0.12);
    assert_eq!(doc.glow.stops[1].opacity, 0.0);
    let svg = doc.to_svg();
    assert!(svg.contains(r#"<radialGradient id="bg-mystic" cx="50%" cy="45%" r="70%">"#));
    assert!(svg.contains(r##"<stop offset="0%" stop-color="#44ff88" stop-opacity="0.12" />"##));
}

#[test]
fn vignette_is_shared_across_creatures() {
    let a = scene_for("jawWorm", 1);
    let b = scene_for("bronzeOrb", 2);
    assert_eq!(a.vignette, b.vignette);
    assert_eq!(a.vignette, vignette());
    assert!(a.to_svg().contains(
        r##"<stop offset="40%" stop-color="#000000" stop-opacity="0" />"##
    ));
}

#[test]
fn empty_fragment_list_is_rejected() {
    let def = find("cultist").unwrap();
    assert!(SceneDocument::assemble(def, Vec::new(), &SceneOpts::default()).is_err());
}

#[test]
fn fragment_markup_covers_every_shape() {
    let mut out = String::new();
    let frags = [
        Fragment::circle(1.0, 2.0, 3.0).fill(Color::WHITE).opacity(0.5),
        Fragment::ellipse(0.0, 110.0, 60.0, 20.0).fill(Color::BLACK).opacity(0.4),
        Fragment::line(0.0, 0.0, 10.5, -3.25).outline(Color::hex(0x4488ff), 1.0),
        Fragment::rect(-50.0, 50.0, 30.0, 70.0)
            .corner(5.0)
            .fill(Color::hex(0x5a4a3a))
            .rotate(-15.0, -82.0, -17.0),
        Fragment::path_d("M 0 0 Q 5 5 10 0 L 10 10 Z").unwrap(),
    ];
    for f in &frags {
        super::svg::write_fragment(&mut out, f).unwrap();
        out.push('\n');
    }
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines[0],
        r##"<circle cx="1" cy="2" r="3" fill="#ffffff" opacity="0.5" />"##
    );
    assert_eq!(
        lines[1],
        r##"<ellipse cx="0" cy="110" rx="60" ry="20" fill="#000000" opacity="0.4" />"##
    );
    assert_eq!(
        lines[2],
        r##"<line x1="0" y1="0" x2="10.5" y2="-3.25" fill="none" stroke="#4488ff" stroke-width="1" />"##
    );
    assert_eq!(
        lines[3],
        r##"<rect x="-50" y="50" width="30" height="70" rx="5" fill="#5a4a3a" transform="rotate(-15 -82 -17)" />"##
    );
    assert_eq!(
        lines[4],
        r##"<path d="M 0 0 Q 5 5 10 0 L 10 10 Z" fill="#000000" />"##
    );
}
