use super::*;
use crate::foundation::rng::SpriteRng;

fn noop(_: &mut Composer<'_>) -> SpriteResult<()> {
    Ok(())
}

fn bad_path(k: &mut Composer<'_>) -> SpriteResult<()> {
    k.push(Fragment::path_d("M 0 0 L oops")?);
    Ok(())
}

fn def(id: &'static str, compose: ComposeFn) -> CreatureDef {
    CreatureDef {
        id,
        display_name: "Test",
        background: (Color::BLACK, Color::BLACK),
        glow: Color::WHITE,
        compose,
    }
}

#[test]
fn empty_compose_is_attributed_to_creature() {
    let err = def("ghost", noop)
        .build_parts(&mut SpriteRng::seeded(0))
        .unwrap_err();
    assert!(err.to_string().starts_with("creature 'ghost':"));
}

#[test]
fn compose_errors_propagate_with_id() {
    let err = def("glitch", bad_path)
        .build_parts(&mut SpriteRng::seeded(0))
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("creature 'glitch':"), "{msg}");
    assert!(msg.contains("bad path data"));
}

#[test]
fn ids_must_be_filename_safe() {
    assert!(def("jawWorm", noop).validate().is_ok());
    assert!(def("louse_red-2", noop).validate().is_ok());
    assert!(def("", noop).validate().is_err());
    assert!(def("../escape", noop).validate().is_err());
    assert!(def("two words", noop).validate().is_err());
}

#[test]
fn claws_emit_five_stroked_curves() {
    let mut rng = SpriteRng::seeded(0);
    let mut k = Composer::new(&mut rng);
    claws(
        &mut k,
        Point::new(0.0, 0.0),
        (0.0, std::f64::consts::PI),
        16.0,
        (2.0, 0.0),
        Color::WHITE,
    );
    let parts = k.finish().unwrap();
    assert_eq!(parts.len(), 5);
    for p in &parts {
        assert_eq!(p.style().fill, None);
        assert_eq!(p.style().stroke.map(|s| s.width), Some(3.0));
    }
}
