use super::*;
use crate::foundation::color::Color;
use crate::foundation::rng::SpriteRng;
use crate::geometry::fragment::Shape;

fn sample(rng: &mut SpriteRng) -> Composer<'_> {
    let mut k = Composer::new(rng);
    k.aura(Fragment::circle(1.0, 1.0, 1.0));
    k.particles(&ParticleCloud::new(0.0, 0.0, 5, 10.0, Color::WHITE));
    k.ground(Fragment::ellipse(0.0, 0.0, 2.0, 1.0));
    k
}

#[test]
fn layers_are_flattened_ground_body_aura() {
    let mut rng = SpriteRng::seeded(1);
    let mut k = Composer::new(&mut rng);
    k.aura(Fragment::circle(0.0, 0.0, 90.0).opacity(0.05));
    k.push(Fragment::circle(0.0, 0.0, 50.0));
    k.ground(Fragment::ellipse(0.0, 100.0, 60.0, 20.0).opacity(0.4));
    k.push(Fragment::circle(0.0, 0.0, 20.0));

    let layered = k.finish_layered();
    let order: Vec<Layer> = layered.iter().map(|(l, _)| *l).collect();
    assert_eq!(
        order,
        vec![Layer::Ground, Layer::Body, Layer::Body, Layer::Aura]
    );
    // Emission order within a layer is kept.
    assert!(matches!(layered[1].1.shape(), Shape::Circle { r, .. } if *r == 50.0));
    assert!(matches!(layered[2].1.shape(), Shape::Circle { r, .. } if *r == 20.0));
}

#[test]
fn finish_matches_layered_order() {
    let mut a = SpriteRng::seeded(9);
    let mut b = SpriteRng::seeded(9);
    let flat = sample(&mut a).finish().unwrap();
    let layered: Vec<Fragment> = sample(&mut b)
        .finish_layered()
        .into_iter()
        .map(|(_, f)| f)
        .collect();
    assert_eq!(flat, layered);
    assert_eq!(flat.len(), 7);
}

#[test]
fn empty_composition_is_rejected() {
    let mut rng = SpriteRng::seeded(2);
    let err = Composer::new(&mut rng).finish().unwrap_err();
    assert!(err.to_string().contains("no fragments"));
}

#[test]
fn primitive_wrappers_land_in_body() {
    let mut rng = SpriteRng::seeded(3);
    let mut k = Composer::new(&mut rng);
    k.gear(&GearProfile::new(0.0, 0.0, 8.0, 12.0, 8));
    k.scatter(&NoiseScatter::new(10, (0.0, 0.0, 5.0, 5.0), &[Color::WHITE]));
    k.blob(&OrganicBlob::new(0.0, 0.0, 10.0, 6, 0.1));
    assert_eq!(k.len(Layer::Body), 12);
    assert_eq!(k.len(Layer::Ground), 0);
    assert_eq!(k.len(Layer::Aura), 0);
}

