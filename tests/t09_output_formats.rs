extern crate svgpix;

use svgpix::{img_diff, read_file, render_str, write_file, Error, OutputFormat};

const DOC : &str = r#"<svg width="16" height="12">
  <rect x="1" y="1" width="10" height="8" fill="red" stroke="blue"/>
  <circle cx="12" cy="6" r="3" fill="lime"/>
</svg>"#;

#[test]
fn t09_output_formats() {
    let img = render_str(DOC).unwrap();
    let dir = std::env::temp_dir();
    let png = dir.join("svgpix_t09.png");
    img.to_file(&png).unwrap();
    let (data, w, h) = read_file(&png).unwrap();
    assert_eq!((w, h), (16, 12));
    assert_eq!(data, img.to_rgb().rbuf().data);

    // lossless formats agree with the png
    for name in &["svgpix_t09.ppm", "svgpix_t09.p3", "svgpix_t09.bmp"] {
        let path = dir.join(name);
        img.to_file(&path).unwrap();
        assert!(img_diff(&png, &path).unwrap(), "{}", name);
    }

    let jpg = dir.join("svgpix_t09_forced.out");
    write_file(&img, &jpg, OutputFormat::Jpeg).unwrap();
    let (_, w, h) = read_file(&jpg).unwrap();
    assert_eq!((w, h), (16, 12));
}

#[test]
fn t09_unsupported() {
    let img = render_str(DOC).unwrap();
    let out = std::env::temp_dir().join("svgpix_t09.svg");
    assert!(matches!(img.to_file(&out), Err(Error::UnsupportedFormat(_))));
}
