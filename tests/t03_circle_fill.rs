extern crate svgpix;

use svgpix::{render_str, Rgba8, Source};

#[test]
fn t03_circle_fill() {
    let (cx, cy, r) = (12i64, 11i64, 8i64);
    let img = render_str(&format!(r#"<svg width="25" height="25">
        <circle cx="{}" cy="{}" r="{}" fill="black"/>
    </svg>"#, cx, cy, r)).unwrap();
    for y in 0 .. 25 {
        for x in 0 .. 25 {
            let (i, j) = (x as i64 - cx, y as i64 - cy);
            let set = img.get((x,y)) == Rgba8::black();
            assert_eq!(set, i*i + j*j <= r*r, "({},{})", x, y);
        }
    }
}

#[test]
fn t03_circle_stroke_bounded() {
    let (cx, cy, r) = (12i64, 12i64, 9i64);
    let img = render_str(&format!(r#"<svg width="25" height="25">
        <circle cx="{}" cy="{}" r="{}" stroke="black"/>
    </svg>"#, cx, cy, r)).unwrap();
    let mut n = 0;
    for y in 0 .. 25 {
        for x in 0 .. 25 {
            if img.get((x,y)) == Rgba8::black() {
                let (i, j) = (x as i64 - cx, y as i64 - cy);
                assert!(i*i + j*j <= (r+1)*(r+1), "({},{})", x, y);
                n += 1;
            }
        }
    }
    assert!(n > 0);
    // outline only, center untouched
    assert_eq!(img.get((12,12)), Rgba8::white());
}
