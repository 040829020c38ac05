extern crate svgpix;

use svgpix::{resolve, Rgba8};

#[test]
fn t01_colors() {
    assert_eq!(resolve("#ff8000"), Rgba8::new(255,128,0,255));
    assert_eq!(resolve("#f80"), Rgba8::new(255,136,0,255));
    assert_eq!(resolve("rgba(10,20,30,0.5)"), Rgba8::new(10,20,30,128));
    assert_eq!(resolve("").a, 0);
    assert_eq!(resolve("none").a, 0);
    assert_eq!(resolve("not-a-color"), Rgba8::new(0,0,0,255));
    assert_eq!(resolve("navy"), Rgba8::new(0,0,128,255));
    assert_eq!(resolve("#11223344"), Rgba8::new(0x11,0x22,0x33,0x44));
}
