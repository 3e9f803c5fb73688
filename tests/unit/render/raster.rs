use super::*;

const SQUARE: &str = r##"<svg width="64" height="64" xmlns="http://www.w3.org/2000/svg">
  <rect width="64" height="64" fill="#ff0000" />
  <circle cx="32" cy="32" r="8" fill="#0000ff" />
</svg>"##;

#[test]
fn default_opts_downsample_768_to_512() {
    let opts = RasterOpts::default();
    assert_eq!((opts.supersample_px, opts.target_px), (768, 512));
    opts.validate().unwrap();
}

#[test]
fn supersample_must_exceed_target() {
    let equal = RasterOpts {
        supersample_px: 512,
        target_px: 512,
    };
    assert!(equal.validate().is_err());
    let zero = RasterOpts {
        supersample_px: 512,
        target_px: 0,
    };
    assert!(zero.validate().is_err());
}

#[test]
fn rasterize_produces_target_dimensions() {
    let opts = RasterOpts {
        supersample_px: 96,
        target_px: 48,
    };
    let img = rasterize(SQUARE, &opts).unwrap();
    assert_eq!(img.dimensions(), (48, 48));

    let corner = img.get_pixel(2, 2).0;
    assert!(corner[0] > 240 && corner[1] < 16 && corner[2] < 16, "{corner:?}");
    assert!(corner[3] > 250);
    let center = img.get_pixel(24, 24).0;
    assert!(center[2] > 200 && center[0] < 60, "{center:?}");
}

#[test]
fn render_tree_scales_to_requested_size() {
    let tree = usvg::Tree::from_str(SQUARE, &usvg::Options::default()).unwrap();
    let img = render_tree(&tree, 128).unwrap();
    assert_eq!(img.dimensions(), (128, 128));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
}

#[test]
fn malformed_svg_is_an_encoding_error() {
    let err = rasterize("<svg", &RasterOpts::default()).unwrap_err();
    assert!(err.to_string().starts_with("encoding error:"), "{err}");
}
