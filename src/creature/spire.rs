//! Upper-floor regulars: the mystic and the crystalline and bronze sentries.

use std::f64::consts::{PI, TAU};

use super::common::NOISE_DENSITY;
use super::composer::Composer;
use super::{claws, disc, filled, oval, ring, shadow, stroked};
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::error::SpriteResult;
use crate::geometry::fragment::{Fragment, Style};
use crate::geometry::primitives::{
    CrystalFacets, GearProfile, NoiseScatter, OrganicBlob, ParticleCloud, RingSegment,
};

const fn c(v: u32) -> Color {
    Color::hex(v)
}

pub(crate) fn mystic(k: &mut Composer<'_>) -> SpriteResult<()> {
    let robe = [c(0x4a6a5a), c(0x3a5a4a), c(0x5a7a6a), c(0x2a4a3a)];
    let cloth = [c(0x4a6a5a), c(0x3a5a4a), c(0x5a7a6a)];
    let fold = c(0x1a3a2a);
    let heal = c(0x44ff88);
    let mist = c(0x88ffcc);

    k.ground(shadow(0.0, 110.0, 55.0, 18.0, 0.4));

    k.push(filled("M -60 108 Q -65 40 -25 -15 L 25 -15 Q 65 40 60 108 Z", c(0x2a4a3a), 0.98)?);
    k.push(filled("M -55 105 Q -60 45 -22 -10 L 22 -10 Q 60 45 55 105 Z", c(0x3a5a4a), 0.85)?);
    k.push(stroked("M -45 100 Q -50 55 -30 15", fold, 3.0, 0.5)?);
    k.push(stroked("M -25 102 Q -30 50 -15 5", fold, 2.0, 0.4)?);
    k.push(stroked("M 45 100 Q 50 55 30 15", fold, 3.0, 0.5)?);
    k.push(stroked("M 25 102 Q 30 50 15 5", fold, 2.0, 0.4)?);
    k.scatter(&NoiseScatter::new(NOISE_DENSITY, (-65.0, -20.0, 130.0, 130.0), &robe));

    k.blob(&OrganicBlob::new(0.0, -38.0, 42.0, 10, 0.1).paint(c(0x2a4a3a), 0.98));
    k.blob(&OrganicBlob::new(0.0, -40.0, 37.0, 8, 0.08).paint(c(0x3a5a4a), 0.85));
    k.push(oval(0.0, -33.0, 30.0, 26.0, c(0x0a1a0a), 0.95));
    k.scatter(
        &NoiseScatter::new(80, (-42.0, -80.0, 84.0, 65.0), &cloth)
            .opacity(0.06, 0.18)
            .size(1.0, 3.0),
    );

    for (rx, ry, color, opacity) in [
        (7.0, 4.0, heal, 0.9),
        (4.0, 2.5, c(0x88ffbb), 0.8),
        (1.5, 1.0, Color::WHITE, 0.6),
    ] {
        k.push(oval(-12.0, -38.0, rx, ry, color, opacity));
        k.push(oval(12.0, -38.0, rx, ry, color, opacity));
    }
    k.push(oval(0.0, -38.0, 40.0, 22.0, heal, 0.1));

    // Arms reaching forward, palms open.
    k.push(filled("M -28 5 Q -55 -10 -70 -30 L -60 -38 Q -48 -18 -24 0", c(0x2a4a3a), 0.95)?);
    k.push(stroked("M -30 3 Q -52 -12 -65 -32", c(0x3a5a4a), 8.0, 0.8)?);
    k.push(oval(-65.0, -35.0, 12.0, 10.0, c(0x5a7a6a), 0.9));
    claws(k, Point::new(-65.0, -35.0), (-PI * 0.75, PI * 0.65), 15.0, (0.0, -3.0), c(0x5a7a6a));

    k.push(filled("M 28 5 Q 55 -10 70 -30 L 60 -38 Q 48 -18 24 0", c(0x2a4a3a), 0.95)?);
    k.push(stroked("M 30 3 Q 52 -12 65 -32", c(0x3a5a4a), 8.0, 0.8)?);
    k.push(oval(65.0, -35.0, 12.0, 10.0, c(0x5a7a6a), 0.9));
    claws(k, Point::new(65.0, -35.0), (PI * 0.1, PI * 0.65), 15.0, (0.0, -3.0), c(0x5a7a6a));

    // Healing stream bridging the hands.
    k.push(stroked("M -55 -40 Q 0 -60 55 -40", heal, 4.0, 0.6)?);
    k.push(stroked("M -50 -35 Q 0 -50 50 -35", mist, 2.0, 0.4)?);
    k.particles(&ParticleCloud::new(0.0, -45.0, 30, 40.0, heal));
    k.particles(&ParticleCloud::new(-55.0, -40.0, 15, 20.0, mist));
    k.particles(&ParticleCloud::new(55.0, -40.0, 15, 20.0, mist));

    k.push(ring(0.0, 50.0, 15.0, heal, 2.0, 0.5));
    k.push(ring(0.0, 50.0, 10.0, mist, 1.5, 0.4));
    k.push(stroked("M 0 35 L 0 65 M -15 50 L 15 50", heal, 1.5, 0.4)?);

    k.aura(oval(0.0, 10.0, 85.0, 95.0, heal, 0.05));
    k.aura(oval(0.0, -20.0, 65.0, 75.0, mist, 0.04));
    Ok(())
}

pub(crate) fn spheric_guardian(k: &mut Composer<'_>) -> SpriteResult<()> {
    let crystal = [c(0x3a5a8a), c(0x4a6a9a), c(0x5a7aaa), c(0x2a4a7a)];
    let frost = [c(0x6a8aba), c(0x5a7aaa), c(0x7a9aca), c(0x4a6a9a)];
    let shield = c(0x4488ff);
    let pale = c(0x66aaff);

    k.ground(shadow(0.0, 100.0, 65.0, 20.0, 0.4));

    // Shield rings, outermost first.
    for i in (0..4).rev() {
        let i = f64::from(i);
        k.push(ring(0.0, 0.0, 75.0 + i * 15.0, shield, 2.0, 0.08 + i * 0.02));
    }

    k.facets(&CrystalFacets::new(0.0, 0.0, 65.0, 12, &crystal));

    k.push(disc(0.0, 0.0, 55.0, c(0x3a5a8a), 0.95));
    k.push(disc(-8.0, -10.0, 48.0, c(0x4a6a9a), 0.85));
    k.push(disc(-12.0, -15.0, 38.0, c(0x5a7aaa), 0.7));

    // Flat surface facets.
    for i in 0..8 {
        let a0 = f64::from(i) / 8.0 * TAU;
        let a1 = f64::from(i + 1) / 8.0 * TAU;
        let mut facet = BezPath::new();
        facet.move_to(Point::ORIGIN);
        facet.line_to(Point::ORIGIN + Vec2::from_angle(a0) * 45.0);
        facet.line_to(Point::ORIGIN + Vec2::from_angle(a1) * 45.0);
        facet.close_path();
        k.push(Fragment::path(facet).fill(c(0x2a4a7a)).opacity(0.3));
    }

    k.scatter(
        &NoiseScatter::new(NOISE_DENSITY * 4 / 5, (-55.0, -55.0, 110.0, 110.0), &frost)
            .opacity(0.04, 0.12)
            .size(1.0, 3.0),
    );

    k.push(disc(0.0, 0.0, 25.0, c(0x1a2a4a), 0.95));
    k.push(disc(0.0, 0.0, 20.0, shield, 0.9));
    k.push(disc(0.0, 0.0, 15.0, pale, 0.85));
    k.push(disc(0.0, 0.0, 10.0, c(0x88ccff), 0.8));
    k.push(disc(-3.0, -3.0, 5.0, Color::WHITE, 0.6));
    k.push(disc(0.0, 0.0, 35.0, shield, 0.2));
    k.push(disc(0.0, 0.0, 45.0, pale, 0.1));

    // Orbiting shards: (x, y, rotation in degrees).
    let shards = [
        (-70.0, -30.0, -20.0),
        (65.0, -40.0, 25.0),
        (-60.0, 45.0, -35.0),
        (70.0, 35.0, 40.0),
        (0.0, -80.0, 0.0),
        (0.0, 85.0, 180.0),
    ];
    for (x, y, rot) in shards {
        let mut shard = BezPath::new();
        shard.move_to((x, y - 12.0));
        shard.line_to((x + 6.0, y));
        shard.line_to((x, y + 12.0));
        shard.line_to((x - 6.0, y));
        shard.close_path();
        k.push(
            Fragment::path(shard)
                .fill(c(0x5a7aaa))
                .opacity(0.8)
                .rotate(rot, x, y),
        );
        k.push(
            Fragment::line(x, y - 8.0, x + 3.0, y)
                .outline(c(0x8abaff), 1.0)
                .opacity(0.6)
                .rotate(rot, x, y),
        );
    }
    for (x, y, _) in shards {
        k.push(
            Fragment::line(0.0, 0.0, x * 0.7, y * 0.7)
                .outline(shield, 1.0)
                .opacity(0.3),
        );
    }

    k.particles(&ParticleCloud::new(0.0, 0.0, 30, 80.0, pale));

    k.aura(disc(0.0, 0.0, 90.0, shield, 0.05));
    k.aura(disc(0.0, 0.0, 70.0, pale, 0.04));
    Ok(())
}

pub(crate) fn bronze_orb(k: &mut Composer<'_>) -> SpriteResult<()> {
    let metal = [c(0x8a7a6a), c(0x7a6a5a), c(0x9a8a7a), c(0x6a5a4a)];
    let lens = c(0xff4422);
    let ember = c(0xff6644);
    let joint = c(0x4a3a2a);

    // Hovering, so the shadow is small and faint.
    k.ground(shadow(0.0, 70.0, 35.0, 12.0, 0.3));
    k.push(oval(0.0, 55.0, 25.0, 8.0, lens, 0.15));
    k.push(oval(0.0, 50.0, 18.0, 5.0, ember, 0.1));

    k.push(disc(0.0, 0.0, 50.0, c(0x6a5a4a), 0.98));
    k.push(disc(-6.0, -8.0, 44.0, c(0x7a6a5a), 0.9));
    k.push(disc(-10.0, -12.0, 36.0, c(0x8a7a6a), 0.75));

    // Alternating hull panels.
    for i in 0..6 {
        let fill = if i % 2 == 0 { c(0x5a4a3a) } else { c(0x6a5a4a) };
        k.ring_segment(&RingSegment {
            center: Point::ORIGIN,
            start: f64::from(i) / 6.0 * TAU,
            end: f64::from(i + 1) / 6.0 * TAU,
            inner: 25.0,
            outer: 45.0,
            style: Style {
                fill: Some(fill),
                opacity: 0.7,
                ..Style::default()
            },
        });
    }

    k.scatter(
        &NoiseScatter::new(250, (-50.0, -50.0, 100.0, 100.0), &metal)
            .opacity(0.05, 0.15)
            .size(1.0, 3.0),
    );

    for i in 0..8 {
        let p = Point::ORIGIN + Vec2::from_angle(f64::from(i) / 8.0 * TAU) * 42.0;
        k.push(disc(p.x, p.y, 4.0, joint, 1.0));
        k.push(disc(p.x - 1.0, p.y - 1.0, 1.5, c(0x7a6a5a), 0.6));
    }

    k.push(disc(0.0, 0.0, 20.0, c(0x2a1a1a), 0.95));
    k.push(disc(0.0, 0.0, 16.0, lens, 0.9));
    k.push(disc(0.0, 0.0, 12.0, ember, 0.85));
    k.push(disc(0.0, 0.0, 8.0, c(0xff8866), 0.8));
    k.push(disc(-2.0, -2.0, 4.0, c(0xffaa88), 0.6));
    k.push(disc(0.0, 0.0, 28.0, lens, 0.2));
    k.push(disc(0.0, 0.0, 38.0, ember, 0.1));

    // Scanning beam.
    k.push(filled("M 0 18 L -25 60 L 25 60 Z", lens, 0.15)?);
    k.push(filled("M 0 18 L -18 55 L 18 55 Z", ember, 0.1)?);

    k.gear(&GearProfile::new(-30.0, -25.0, 6.0, 10.0, 6).paint(joint, 0.8));
    k.gear(&GearProfile::new(28.0, -28.0, 5.0, 8.0, 5).paint(joint, 0.8));
    k.gear(&GearProfile::new(25.0, 30.0, 7.0, 11.0, 7).paint(joint, 0.8));

    k.particles(&ParticleCloud::new(0.0, 0.0, 15, 35.0, c(0xff8866)));

    k.aura(disc(0.0, 0.0, 60.0, lens, 0.05));
    Ok(())
}
