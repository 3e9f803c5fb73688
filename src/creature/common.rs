//! Act one regulars and the bronze automaton.

use std::f64::consts::PI;

use super::composer::Composer;
use super::{claws, disc, filled, oval, ring, shadow, slab, stroked};
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::SpriteResult;
use crate::geometry::fragment::Fragment;
use crate::geometry::primitives::{GearProfile, NoiseScatter, OrganicBlob, ParticleCloud};

/// Disc count for a creature's main body texture.
pub(crate) const NOISE_DENSITY: usize = 400;

const fn c(v: u32) -> Color {
    Color::hex(v)
}

pub(crate) fn cultist(k: &mut Composer<'_>) -> SpriteResult<()> {
    let robe = [c(0x4a3a4a), c(0x3a2a3a), c(0x5a4a5a), c(0x2a1a2a)];
    let cloth = [c(0x4a3a4a), c(0x3a2a3a), c(0x5a4a5a)];
    let fold = c(0x1a0a1a);

    k.ground(shadow(0.0, 110.0, 60.0, 20.0, 0.4));

    k.push(filled("M -70 110 Q -80 30 -30 -20 L 30 -20 Q 80 30 70 110 Z", c(0x2a1a2a), 0.98)?);
    k.push(filled("M -65 108 Q -75 35 -28 -15 L 28 -15 Q 75 35 65 108 Z", c(0x3a2a3a), 0.85)?);

    k.push(stroked("M -50 100 Q -55 60 -35 20", fold, 3.0, 0.5)?);
    k.push(stroked("M -30 105 Q -35 50 -20 10", fold, 2.0, 0.4)?);
    k.push(stroked("M 50 100 Q 55 60 35 20", fold, 3.0, 0.5)?);
    k.push(stroked("M 30 105 Q 35 50 20 10", fold, 2.0, 0.4)?);
    k.push(stroked("M 0 108 Q 5 70 0 30", fold, 2.0, 0.35)?);

    k.scatter(&NoiseScatter::new(NOISE_DENSITY, (-80.0, -30.0, 160.0, 145.0), &robe));

    // Hood with a dark face opening.
    k.blob(&OrganicBlob::new(0.0, -40.0, 45.0, 10, 0.1).paint(c(0x2a1a2a), 0.98));
    k.blob(&OrganicBlob::new(0.0, -42.0, 40.0, 8, 0.08).paint(c(0x3a2a3a), 0.85));
    k.push(oval(0.0, -35.0, 32.0, 28.0, c(0x0a0505), 0.95));
    k.scatter(
        &NoiseScatter::new(100, (-45.0, -85.0, 90.0, 70.0), &cloth)
            .opacity(0.06, 0.18)
            .size(1.0, 3.0),
    );

    for x in [-15.0, 15.0] {
        k.push(oval(x, -40.0, 8.0, 5.0, c(0xdd22dd), 0.9));
    }
    for x in [-15.0, 15.0] {
        k.push(oval(x, -40.0, 5.0, 3.0, c(0xff66ff), 0.8));
    }
    for x in [-15.0, 15.0] {
        k.push(oval(x, -40.0, 2.0, 1.0, Color::WHITE, 0.6));
    }
    for x in [-15.0, 15.0] {
        k.push(oval(x, -40.0, 18.0, 12.0, c(0xdd22dd), 0.15));
    }
    k.push(oval(0.0, -40.0, 45.0, 25.0, c(0xaa22aa), 0.08));

    // Arms raised in the ritual pose.
    k.push(filled("M -30 -10 Q -55 -30 -60 -70 L -50 -75 Q -45 -40 -25 -15", c(0x2a1a2a), 0.95)?);
    k.push(filled("M -32 -12 Q -52 -32 -55 -68 L -52 -70 Q -48 -42 -28 -17", c(0x3a2a3a), 0.8)?);
    k.push(oval(-55.0, -80.0, 12.0, 10.0, c(0x5a4a5a), 0.9));
    claws(k, Point::new(-55.0, -80.0), (-PI * 0.7, PI * 0.6), 16.0, (2.0, 0.0), c(0x4a3a4a));

    k.push(filled("M 30 -10 Q 55 -30 60 -70 L 50 -75 Q 45 -40 25 -15", c(0x2a1a2a), 0.95)?);
    k.push(filled("M 32 -12 Q 52 -32 55 -68 L 52 -70 Q 48 -42 28 -17", c(0x3a2a3a), 0.8)?);
    k.push(oval(55.0, -80.0, 12.0, 10.0, c(0x5a4a5a), 0.9));
    claws(k, Point::new(55.0, -80.0), (PI * 0.1, PI * 0.6), 16.0, (-2.0, 0.0), c(0x4a3a4a));

    for x in [-70.0, 35.0] {
        k.scatter(
            &NoiseScatter::new(60, (x, -85.0, 35.0, 80.0), &cloth)
                .opacity(0.08, 0.2)
                .size(1.0, 3.0),
        );
    }

    k.push(stroked("M -25 40 L 0 60 L 25 40 L 0 80 Z", c(0xaa22aa), 2.0, 0.4)?);
    k.push(ring(0.0, 60.0, 8.0, c(0xaa22aa), 1.5, 0.35));
    k.push(ring(0.0, 60.0, 15.0, c(0xdd22dd), 1.0, 0.25));

    k.particles(&ParticleCloud::new(-55.0, -90.0, 20, 25.0, c(0xdd44dd)));
    k.particles(&ParticleCloud::new(55.0, -90.0, 20, 25.0, c(0xdd44dd)));

    k.aura(oval(0.0, 20.0, 90.0, 100.0, c(0xaa22aa), 0.04));
    k.aura(oval(0.0, -10.0, 70.0, 80.0, c(0xdd22dd), 0.03));
    Ok(())
}

pub(crate) fn jaw_worm(k: &mut Composer<'_>) -> SpriteResult<()> {
    let hide = [c(0x8a7a6a), c(0x7a6a5a), c(0x9a8a7a), c(0x6a5a4a)];
    let head_hide = [c(0x8a7a6a), c(0x7a6a5a), c(0x9a8a7a), c(0x6a5a4a), c(0xaa9a8a)];
    let bone = c(0xddddcc);
    let seam = c(0xaaaaaa);

    k.ground(shadow(0.0, 100.0, 100.0, 25.0, 0.4));

    // Tail to head, so nearer segments overlap.
    let segments: [(f64, f64, f64, f64); 5] = [
        (80.0, 50.0, 22.0, 18.0),
        (55.0, 45.0, 28.0, 22.0),
        (25.0, 38.0, 35.0, 28.0),
        (-10.0, 30.0, 42.0, 35.0),
        (-50.0, 20.0, 50.0, 42.0),
    ];
    for (x, y, rx, ry) in segments {
        k.push(oval(x, y, rx, ry, c(0x6a5a4a), 0.95));
        k.push(oval(x - 3.0, y - 5.0, rx * 0.85, ry * 0.8, c(0x7a6a5a), 0.8));
        k.push(oval(x - 5.0, y - 8.0, rx * 0.6, ry * 0.55, c(0x8a7a6a), 0.5));
        k.push(oval(x, y - ry * 0.7, rx * 0.3, 6.0, c(0x5a4a3a), 0.6));
    }
    for (x, y, rx, ry) in segments {
        k.scatter(
            &NoiseScatter::new(60, (x - rx, y - ry, rx * 2.0, ry * 2.0), &hide).opacity(0.08, 0.2),
        );
    }

    k.push(oval(-90.0, 5.0, 60.0, 55.0, c(0x6a5a4a), 0.98));
    k.push(oval(-93.0, 0.0, 55.0, 48.0, c(0x7a6a5a), 0.9));
    k.push(oval(-95.0, -5.0, 45.0, 38.0, c(0x8a7a6a), 0.7));
    k.scatter(
        &NoiseScatter::new(150, (-150.0, -55.0, 120.0, 120.0), &head_hide).opacity(0.06, 0.18),
    );

    // Jaws.
    k.push(filled(
        "M -150 -10 Q -170 -5 -175 15 Q -165 25 -140 20 Q -120 15 -100 5",
        c(0x5a4a3a),
        0.95,
    )?);
    k.push(filled(
        "M -148 -8 Q -165 -3 -170 12 Q -162 20 -142 17 Q -122 12 -105 5",
        c(0x6a5a4a),
        0.8,
    )?);
    k.push(filled(
        "M -150 25 Q -170 30 -175 50 Q -160 60 -130 55 Q -100 45 -85 25",
        c(0x5a4a3a),
        0.95,
    )?);
    k.push(filled(
        "M -145 28 Q -162 32 -168 48 Q -155 55 -132 52 Q -105 43 -90 27",
        c(0x6a5a4a),
        0.8,
    )?);

    let upper = [
        (-165.0, 8.0, 18.0),
        (-155.0, 5.0, 22.0),
        (-145.0, 8.0, 16.0),
        (-135.0, 5.0, 20.0),
        (-125.0, 7.0, 15.0),
        (-115.0, 5.0, 18.0),
    ];
    let lower = [
        (-160.0, 45.0, -16.0),
        (-150.0, 48.0, -20.0),
        (-140.0, 45.0, -18.0),
        (-130.0, 48.0, -15.0),
        (-120.0, 46.0, -17.0),
        (-110.0, 48.0, -14.0),
    ];
    for (teeth, inset) in [(&upper, 2.0), (&lower, -2.0)] {
        for &(x, y, h) in teeth.iter() {
            let mut fang = BezPath::new();
            fang.move_to((x - 4.0, y));
            fang.line_to((x, y + h));
            fang.line_to((x + 4.0, y));
            k.push(Fragment::path(fang).fill(bone).opacity(0.95));
            k.push(
                Fragment::line(x - 2.0, y + inset, x, y + h - inset)
                    .outline(seam, 1.0)
                    .opacity(0.4),
            );
        }
    }
    k.push(oval(-135.0, 28.0, 25.0, 12.0, c(0x4a2a2a), 0.9));

    // Beady eyes.
    k.push(oval(-70.0, -20.0, 12.0, 10.0, c(0x1a1a0a), 0.95));
    k.push(oval(-70.0, -20.0, 8.0, 6.0, c(0xaa6622), 0.9));
    k.push(oval(-70.0, -20.0, 4.0, 3.0, c(0xffaa44), 0.8));
    k.push(oval(-71.0, -21.0, 2.0, 1.5, Color::WHITE, 0.5));
    k.push(oval(-100.0, -30.0, 10.0, 8.0, c(0x1a1a0a), 0.95));
    k.push(oval(-100.0, -30.0, 6.0, 5.0, c(0xaa6622), 0.9));
    k.push(oval(-100.0, -30.0, 3.0, 2.0, c(0xffaa44), 0.8));
    k.push(oval(-70.0, -20.0, 18.0, 14.0, c(0xaa6622), 0.12));
    k.push(oval(-100.0, -30.0, 15.0, 12.0, c(0xaa6622), 0.1));

    k.push(filled("M 95 55 L 120 45 L 95 40", c(0x5a4a3a), 0.9)?);
    k.push(filled("M 98 52 L 115 46 L 98 43", c(0x6a5a4a), 0.7)?);

    k.push(stroked("M -150 60 Q -145 75 -140 90", c(0x8a9a6a), 3.0, 0.4)?);
    k.push(oval(-140.0, 92.0, 5.0, 8.0, c(0x8a9a6a), 0.35));

    k.aura(oval(-40.0, 30.0, 120.0, 80.0, c(0xaa6622), 0.04));
    Ok(())
}

pub(crate) fn louse_red(k: &mut Composer<'_>) -> SpriteResult<()> {
    let shell = [c(0xaa5a5a), c(0x9a4a4a), c(0xba6a6a), c(0x8a3a3a), c(0xca7a7a)];
    let head_shell = [c(0xaa5a5a), c(0x9a4a4a), c(0xba6a6a)];
    let limb = c(0x6a3a3a);

    k.ground(shadow(0.0, 90.0, 80.0, 22.0, 0.4));

    // Six legs: (side, attach y, length).
    let legs = [
        (-1.0, 50.0, 55.0),
        (-1.0, 30.0, 60.0),
        (-1.0, 10.0, 50.0),
        (1.0, 50.0, 55.0),
        (1.0, 30.0, 60.0),
        (1.0, 10.0, 50.0),
    ];
    for (side, y, len) in legs {
        let start = Point::new(side * 45.0, y);
        let knee = Point::new(start.x + side * len * 0.6, y + 15.0);
        let foot = Point::new(start.x + side * len, y + 35.0);
        let mut leg = BezPath::new();
        leg.move_to(start);
        leg.quad_to(Point::new(knee.x, y - 10.0), knee);
        leg.quad_to(Point::new(knee.x + side * 10.0, knee.y + 15.0), foot);
        k.push(Fragment::path(leg.clone()).outline(c(0x4a2a2a), 8.0).opacity(0.95));
        k.push(Fragment::path(leg).outline(limb, 5.0).opacity(0.7));
        k.push(disc(knee.x, knee.y, 6.0, c(0x5a3a3a), 0.9));
        k.push(oval(foot.x, foot.y, 6.0, 4.0, c(0x3a2a2a), 0.9));
    }

    k.push(oval(0.0, 30.0, 55.0, 50.0, c(0x8a3a3a), 0.98));
    k.push(oval(-5.0, 25.0, 48.0, 43.0, c(0x9a4a4a), 0.9));
    k.push(oval(-8.0, 20.0, 38.0, 33.0, c(0xaa5a5a), 0.75));
    for i in 0..5 {
        let i = f64::from(i);
        k.push(oval(0.0, -10.0 + i * 18.0, 48.0 - i * 3.0, 4.0, c(0x7a3a3a), 0.4));
    }
    k.scatter(
        &NoiseScatter::new(NOISE_DENSITY, (-55.0, -25.0, 110.0, 110.0), &shell).opacity(0.06, 0.18),
    );

    k.push(oval(0.0, -40.0, 35.0, 28.0, c(0x8a3a3a), 0.98));
    k.push(oval(-3.0, -43.0, 30.0, 23.0, c(0x9a4a4a), 0.85));
    k.scatter(
        &NoiseScatter::new(80, (-35.0, -70.0, 70.0, 55.0), &head_shell)
            .opacity(0.08, 0.2)
            .size(1.0, 3.0),
    );

    // Compound eyes, 3x3 facets each.
    for ex in [-20.0, 20.0] {
        for row in 0..3 {
            for col in 0..3 {
                let x = ex - 8.0 + f64::from(col) * 8.0;
                let y = -51.0 + f64::from(row) * 6.0;
                k.push(oval(x, y, 4.0, 3.0, c(0x220a0a), 0.95));
                k.push(oval(x - 1.0, y - 1.0, 2.0, 1.5, c(0xcc3322), 0.7));
            }
        }
    }
    k.push(oval(-20.0, -45.0, 18.0, 14.0, c(0xcc3322), 0.12));
    k.push(oval(20.0, -45.0, 18.0, 14.0, c(0xcc3322), 0.12));

    k.push(filled(
        "M -15 -60 Q -25 -75 -20 -85 Q -12 -88 -10 -75 Q -8 -65 -12 -58",
        c(0x5a2a2a),
        0.95,
    )?);
    k.push(filled("M 15 -60 Q 25 -75 20 -85 Q 12 -88 10 -75 Q 8 -65 12 -58", c(0x5a2a2a), 0.95)?);
    k.push(stroked("M -13 -62 Q -22 -73 -18 -82", limb, 2.0, 0.6)?);
    k.push(stroked("M 13 -62 Q 22 -73 18 -82", limb, 2.0, 0.6)?);

    k.push(stroked("M -8 -65 Q -20 -90 -15 -100", limb, 3.0, 0.9)?);
    k.push(stroked("M 8 -65 Q 20 -90 15 -100", limb, 3.0, 0.9)?);
    k.push(disc(-15.0, -100.0, 4.0, c(0x8a4a4a), 0.9));
    k.push(disc(15.0, -100.0, 4.0, c(0x8a4a4a), 0.9));

    // Back spines of random height.
    for i in 0..4 {
        let i = f64::from(i);
        let x = -20.0 + i * 13.0;
        let base = -15.0 + (i - 1.5).abs() * 5.0;
        let height = 20.0 + k.rng().next_f64() * 10.0;
        let mut spine = BezPath::new();
        spine.move_to((x - 4.0, base));
        spine.line_to((x, base - height));
        spine.line_to((x + 4.0, base));
        k.push(Fragment::path(spine).fill(limb).opacity(0.8));
    }

    k.aura(oval(0.0, 20.0, 80.0, 70.0, c(0xcc3322), 0.04));
    Ok(())
}

pub(crate) fn fungi_beast(k: &mut Composer<'_>) -> SpriteResult<()> {
    let moss = [c(0x6a7a5a), c(0x5a6a4a), c(0x7a8a6a)];
    let body = [c(0x6a7a5a), c(0x5a6a4a), c(0x7a8a6a), c(0x4a5a3a), c(0x8a9a7a)];
    let dark = c(0x4a5a3a);
    let mid = c(0x5a6a4a);

    k.ground(shadow(0.0, 105.0, 90.0, 25.0, 0.45));

    // Spore haze behind the body.
    k.particles(&ParticleCloud::new(0.0, 0.0, 80, 120.0, c(0x88aa66)));
    k.particles(&ParticleCloud::new(-30.0, -40.0, 40, 60.0, c(0x99bb77)));
    k.particles(&ParticleCloud::new(40.0, -30.0, 40, 50.0, c(0x77aa55)));

    k.push(filled("M -40 50 L -55 90 L -45 105 L -25 90 L -30 50", dark, 0.95)?);
    k.push(filled("M -38 52 L -50 85 L -43 98 L -30 85 L -32 52", mid, 0.8)?);
    k.push(filled("M 30 50 L 45 90 L 55 105 L 60 90 L 45 50", dark, 0.95)?);
    k.push(filled("M 32 52 L 48 85 L 52 98 L 55 85 L 43 52", mid, 0.8)?);
    for x in [-60.0, 25.0] {
        k.scatter(
            &NoiseScatter::new(60, (x, 50.0, 40.0, 55.0), &moss)
                .opacity(0.1, 0.25)
                .size(1.0, 3.0),
        );
    }

    k.blob(&OrganicBlob::new(0.0, 20.0, 65.0, 12, 0.18).paint(dark, 0.98));
    k.blob(&OrganicBlob::new(-5.0, 15.0, 58.0, 10, 0.15).paint(mid, 0.9));
    k.blob(&OrganicBlob::new(-8.0, 10.0, 48.0, 10, 0.12).paint(c(0x6a7a5a), 0.75));
    k.scatter(
        &NoiseScatter::new(NOISE_DENSITY, (-70.0, -55.0, 140.0, 130.0), &body).opacity(0.06, 0.18),
    );

    let mushrooms = [
        (-45.0, -20.0, 1.2),
        (-30.0, -40.0, 1.5),
        (-10.0, -55.0, 1.8),
        (20.0, -45.0, 1.4),
        (40.0, -25.0, 1.3),
        (35.0, 5.0, 1.0),
        (-50.0, 10.0, 0.9),
        (0.0, -35.0, 1.6),
    ];
    for (x, y, size) in mushrooms {
        let cap = 12.0 * size;
        let stem_h = 15.0 * size;
        let stem_w = 5.0 * size;
        k.push(slab(x - stem_w, y, stem_w * 2.0, stem_h, stem_w * 0.3, c(0x7a8a6a), 0.9));
        k.push(slab(x - stem_w * 0.6, y + 2.0, stem_w * 1.2, stem_h - 4.0, 0.0, c(0x8a9a7a), 0.6));
        k.push(oval(x, y - cap * 0.3, cap, cap * 0.6, c(0xaa6644), 0.95));
        k.push(oval(x - cap * 0.15, y - cap * 0.4, cap * 0.75, cap * 0.45, c(0xbb7755), 0.7));
        for _ in 0..3 {
            let rng = k.rng();
            let sx = x - cap * 0.5 + rng.next_f64() * cap;
            let sy = y - cap * 0.5 + rng.next_f64() * cap * 0.4;
            let sr = 2.0 + rng.next_f64() * 3.0;
            k.push(oval(sx, sy, sr, sr * 0.7, c(0xddddcc), 0.6));
        }
    }

    k.push(filled("M -55 -5 L -85 -20 L -95 0 L -80 15 L -55 10", dark, 0.95)?);
    k.push(filled("M -57 -2 L -80 -15 L -88 2 L -77 12 L -57 8", mid, 0.8)?);
    k.push(filled("M 50 -5 L 80 -25 L 95 -5 L 85 15 L 55 10", dark, 0.95)?);
    k.push(filled("M 52 -2 L 77 -20 L 88 -3 L 80 12 L 55 8", mid, 0.8)?);
    for (x, y) in [(-100.0, -30.0), (50.0, -35.0)] {
        k.scatter(
            &NoiseScatter::new(50, (x, y, 55.0, 55.0), &moss)
                .opacity(0.1, 0.25)
                .size(1.0, 3.0),
        );
    }
    k.push(oval(-92.0, 5.0, 14.0, 12.0, mid, 0.95));
    k.push(oval(90.0, 0.0, 14.0, 12.0, mid, 0.95));

    k.blob(&OrganicBlob::new(-5.0, -70.0, 28.0, 8, 0.12).paint(dark, 0.98));
    k.blob(&OrganicBlob::new(-7.0, -72.0, 24.0, 7, 0.1).paint(mid, 0.85));
    k.scatter(
        &NoiseScatter::new(50, (-35.0, -100.0, 60.0, 55.0), &moss)
            .opacity(0.08, 0.22)
            .size(1.0, 3.0),
    );

    for (rx, ry, color, opacity) in [
        (8.0, 6.0, c(0x1a2a0a), 0.95),
        (5.0, 4.0, c(0x88cc44), 0.9),
        (2.0, 1.5, c(0xccff88), 0.8),
        (14.0, 10.0, c(0x88cc44), 0.15),
    ] {
        k.push(oval(-15.0, -75.0, rx, ry, color, opacity));
        k.push(oval(10.0, -75.0, rx, ry, color, opacity));
    }

    k.push(stroked("M -8 -60 Q -5 -52 8 -60", c(0x2a3a1a), 3.0, 0.7)?);
    k.push(stroked("M 0 -55 Q 3 -45 0 -35", c(0x88aa66), 2.0, 0.4)?);
    k.particles(&ParticleCloud::new(0.0, -50.0, 30, 80.0, c(0xaacc88)));

    k.aura(oval(0.0, 0.0, 100.0, 90.0, c(0x66aa44), 0.05));
    k.aura(oval(0.0, -20.0, 80.0, 70.0, c(0x88cc66), 0.04));
    Ok(())
}

pub(crate) fn automaton(k: &mut Composer<'_>) -> SpriteResult<()> {
    let bronze = c(0x5a4a3a);
    let plate = c(0x6a5a4a);
    let joint = c(0x4a3a2a);
    let rivet = c(0x3a2a1a);
    let metal = [c(0x8a7a6a), c(0x7a6a5a), c(0x9a8a7a), c(0x6a5a4a)];
    let arm_metal = [c(0x7a6a5a), c(0x6a5a4a), c(0x8a7a6a)];
    let head_metal = [c(0x8a7a6a), c(0x7a6a5a), c(0x9a8a7a)];

    k.ground(shadow(0.0, 120.0, 100.0, 30.0, 0.5));

    for x in [-50.0, 20.0] {
        let jx = x + 15.0;
        k.push(slab(x, 50.0, 30.0, 70.0, 5.0, bronze, 0.95));
        k.push(slab(x + 3.0, 55.0, 24.0, 30.0, 0.0, plate, 0.7));
        k.push(slab(x + 3.0, 90.0, 24.0, 25.0, 0.0, plate, 0.7));
        k.push(oval(jx, 52.0, 18.0, 10.0, joint, 0.9));
        k.push(oval(jx, 88.0, 16.0, 8.0, joint, 0.9));
        k.push(slab(x - 5.0, 115.0, 40.0, 12.0, 4.0, bronze, 0.95));
    }
    for y in (60..115).step_by(15) {
        let y = f64::from(y);
        for x in [-48.0, -22.0, 22.0, 48.0] {
            k.push(disc(x, y, 3.0, rivet, 1.0));
        }
    }

    k.push(oval(0.0, 15.0, 70.0, 55.0, plate, 0.98));
    k.push(oval(-5.0, 10.0, 62.0, 48.0, c(0x7a6a5a), 0.9));
    k.push(oval(-8.0, 5.0, 50.0, 38.0, c(0x8a7a6a), 0.7));
    for y in [-25.0, -5.0, 15.0, 35.0] {
        k.push(slab(-55.0, y, 110.0, 12.0, 3.0, bronze, 0.8));
    }
    k.scatter(
        &NoiseScatter::new(NOISE_DENSITY, (-70.0, -45.0, 140.0, 115.0), &metal)
            .opacity(0.05, 0.14)
            .size(1.0, 3.0),
    );

    // Power core.
    k.push(oval(0.0, 10.0, 25.0, 22.0, c(0x1a1a1a), 0.95));
    k.push(oval(0.0, 10.0, 20.0, 18.0, c(0xff6622), 0.9));
    k.push(oval(0.0, 10.0, 15.0, 13.0, c(0xff8844), 0.85));
    k.push(oval(0.0, 10.0, 10.0, 8.0, c(0xffaa66), 0.8));
    k.push(oval(0.0, 8.0, 5.0, 4.0, c(0xffcc88), 0.7));
    k.push(oval(0.0, 10.0, 40.0, 35.0, c(0xff6622), 0.2));
    k.push(oval(0.0, 10.0, 55.0, 48.0, c(0xff8844), 0.1));

    // Arms, mirrored across x = 0.
    for s in [-1.0, 1.0] {
        let upper_x = if s < 0.0 { -105.0 } else { 60.0 };
        let fore_x = if s < 0.0 { -130.0 } else { 90.0 };
        k.push(
            slab(upper_x, -30.0, 45.0, 25.0, 8.0, bronze, 0.95)
                .rotate(15.0 * s, 82.0 * s, -17.0),
        );
        k.push(
            slab(upper_x + 5.0, -27.0, 35.0, 19.0, 0.0, plate, 0.7)
                .rotate(15.0 * s, 82.0 * s, -17.0),
        );
        k.push(slab(fore_x, 0.0, 40.0, 22.0, 6.0, bronze, 0.95).rotate(-20.0 * s, 110.0 * s, 11.0));
        k.push(oval(135.0 * s, 25.0, 20.0, 18.0, bronze, 0.95));
        k.push(oval(135.0 * s, 25.0, 15.0, 13.0, plate, 0.8));
        for (x1, y1, x2, y2) in [
            (150.0, 15.0, 165.0, 5.0),
            (145.0, 10.0, 160.0, -5.0),
            (140.0, 35.0, 155.0, 50.0),
        ] {
            k.push(Fragment::line(x1 * s, y1, x2 * s, y2).outline(joint, 6.0).opacity(0.95));
        }
    }
    for (x, y, r) in [
        (-65.0, -15.0, 12.0),
        (-105.0, 5.0, 10.0),
        (65.0, -15.0, 12.0),
        (105.0, 5.0, 10.0),
    ] {
        k.push(disc(x, y, r, joint, 0.9));
    }
    for x in [-170.0, 90.0] {
        k.scatter(
            &NoiseScatter::new(80, (x, -40.0, 80.0, 100.0), &arm_metal)
                .opacity(0.08, 0.2)
                .size(1.0, 3.0),
        );
    }

    // Dome head.
    k.push(oval(0.0, -55.0, 40.0, 35.0, bronze, 0.98));
    k.push(oval(-3.0, -58.0, 35.0, 30.0, plate, 0.9));
    k.push(oval(-5.0, -60.0, 28.0, 24.0, c(0x7a6a5a), 0.75));
    k.scatter(
        &NoiseScatter::new(80, (-40.0, -95.0, 80.0, 70.0), &head_metal)
            .opacity(0.06, 0.18)
            .size(1.0, 3.0),
    );
    k.push(slab(-28.0, -70.0, 56.0, 35.0, 5.0, joint, 0.9));
    k.push(slab(-24.0, -66.0, 48.0, 27.0, 0.0, bronze, 0.7));

    for x in [-22.0, 6.0] {
        k.push(slab(x, -62.0, 16.0, 10.0, 2.0, c(0x1a1a0a), 0.95));
    }
    for x in [-20.0, 8.0] {
        k.push(slab(x, -60.0, 12.0, 6.0, 0.0, c(0xff6622), 0.9));
    }
    for x in [-18.0, 10.0] {
        k.push(slab(x, -59.0, 8.0, 4.0, 0.0, c(0xff8844), 0.8));
    }
    k.push(oval(-14.0, -57.0, 14.0, 10.0, c(0xff6622), 0.15));
    k.push(oval(14.0, -57.0, 14.0, 10.0, c(0xff6622), 0.15));

    for i in 0..5 {
        k.push(slab(-18.0 + f64::from(i) * 9.0, -48.0, 6.0, 10.0, 1.0, c(0x2a2a2a), 0.9));
    }

    k.push(filled("M 0 -90 L 0 -100 L 5 -95 L 0 -90 L -5 -95 Z", bronze, 0.95)?);
    k.push(disc(0.0, -100.0, 5.0, c(0xff6622), 0.8));
    k.push(disc(0.0, -100.0, 3.0, c(0xff8844), 0.6));

    // Pauldrons with shoulder gears.
    for x in [-58.0, 58.0] {
        k.push(oval(x, -25.0, 20.0, 15.0, bronze, 0.95));
    }
    for x in [-58.0, 58.0] {
        k.push(oval(x, -27.0, 16.0, 11.0, plate, 0.7));
    }
    for x in [-58.0, 58.0] {
        k.gear(&GearProfile::new(x, -25.0, 8.0, 12.0, 8).paint(joint, 0.9));
    }

    for (x, y) in [
        (-50.0, -35.0),
        (50.0, -35.0),
        (-60.0, 0.0),
        (60.0, 0.0),
        (-55.0, 35.0),
        (55.0, 35.0),
        (-30.0, -70.0),
        (30.0, -70.0),
    ] {
        k.push(disc(x, y, 4.0, rivet, 1.0));
        k.push(disc(x - 1.0, y - 1.0, 1.5, plate, 0.6));
    }

    // Exhaust vents venting steam.
    k.push(oval(-45.0, 45.0, 8.0, 5.0, c(0x3a3a3a), 0.8));
    k.push(oval(45.0, 45.0, 8.0, 5.0, c(0x3a3a3a), 0.8));
    k.particles(&ParticleCloud::new(-45.0, 35.0, 10, 20.0, c(0xaaaaaa)));
    k.particles(&ParticleCloud::new(45.0, 35.0, 10, 20.0, c(0xaaaaaa)));

    k.aura(oval(0.0, 10.0, 110.0, 95.0, c(0xff8844), 0.04));
    k.aura(oval(0.0, 0.0, 90.0, 75.0, c(0xff6622), 0.03));
    Ok(())
}
