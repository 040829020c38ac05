extern crate svgpix;

use svgpix::{load_file, render_str, write_file, Error, OutputFormat, Pixel, Source};

const DOC : &str = r#"<svg width="14" height="9">
  <rect x="1" y="1" width="8" height="6" fill="red" stroke="navy"/>
  <line x1="0" y1="8" x2="13" y2="0" stroke="lime"/>
</svg>"#;

#[test]
fn t11_convert_raster() {
    let dir = std::env::temp_dir();
    let svg = dir.join("svgpix_t11.svg");
    std::fs::write(&svg, DOC).unwrap();
    let img = load_file(&svg).unwrap();
    assert_eq!(img, render_str(DOC).unwrap());

    let png = dir.join("svgpix_t11.png");
    img.to_file(&png).unwrap();
    let from_png = load_file(&png).unwrap();
    assert_eq!(from_png, img);

    // png -> bmp / ppm / p3 keeps every pixel
    for name in &["svgpix_t11.bmp", "svgpix_t11.ppm", "svgpix_t11.p3"] {
        let out = dir.join(name);
        from_png.to_file(&out).unwrap();
        assert_eq!(load_file(&out).unwrap(), img, "{}", name);
    }
}

#[test]
fn t11_convert_gif() {
    let img = render_str(DOC).unwrap();
    let gif = std::env::temp_dir().join("svgpix_t11.gif");
    assert_eq!(OutputFormat::from_path(&gif).unwrap(), OutputFormat::Gif);
    write_file(&img, &gif, OutputFormat::Gif).unwrap();
    let back = load_file(&gif).unwrap();
    assert_eq!((back.width(), back.height()), (14, 9));
    assert!(back.get((0,0)).a > 0);
}

#[test]
fn t11_unreadable_input() {
    let dir = std::env::temp_dir();
    let txt = dir.join("svgpix_t11_not_an_image.txt");
    std::fs::write(&txt, "plain text").unwrap();
    assert!(matches!(load_file(&txt), Err(Error::Image(_))));
    let missing = dir.join("svgpix_t11_missing.png");
    assert!(matches!(load_file(&missing), Err(Error::Io(_))));
}
