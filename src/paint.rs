//! Color tokens
//!
//! Converts the value of a `fill` or `stroke` attribute into a color.
//! Resolution never fails; anything not understood becomes black.

use log::debug;

use crate::color::Rgba8;
use crate::named;

/// Resolve a color token
///
/// - `""` and `"none"` are transparent
/// - named colors, `aliceblue` ... `yellowgreen`
/// - `#RGB`, `#RRGGBB`, `#RRGGBBAA`
/// - `rgb(r,g,b)` and `rgba(r,g,b,a)` with `a` in [0,1]
///
/// Everything else is black
///
///     use svgpix::{resolve,Rgba8};
///
///     assert_eq!(resolve("#ff8000"), Rgba8::new(255,128,0,255));
///     assert_eq!(resolve("#f80"), Rgba8::new(255,136,0,255));
///     assert_eq!(resolve("none").a, 0);
///     assert_eq!(resolve("not-a-color"), Rgba8::black());
///
pub fn resolve(token: &str) -> Rgba8 {
    let token = token.trim();
    if token.is_empty() || token == "none" {
        return Rgba8::transparent();
    }
    if let Some(c) = named::lookup(token) {
        return c;
    }
    let c = if let Some(hex) = token.strip_prefix('#') {
        hex_color(hex)
    } else if let Some(args) = function_args(token, "rgba") {
        rgba_color(args)
    } else if let Some(args) = function_args(token, "rgb") {
        rgb_color(args)
    } else {
        None
    };
    c.unwrap_or_else(|| {
        debug!("unrecognized color {:?}, using black", token);
        Rgba8::black()
    })
}

/// Arguments inside `name( ... )`, split on commas
fn function_args<'a>(token: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = token.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn hex_color(hex: &str) -> Option<Rgba8> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i+2], 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| u8::from_str_radix(&hex[i..i+1], 16).ok().map(|v| v * 0x11);
            Some(Rgba8::rgb(nib(0)?, nib(1)?, nib(2)?))
        },
        6 => Some(Rgba8::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba8::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn channel(v: &str) -> Option<u8> {
    let v : f64 = v.parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    Some(v.round().max(0.0).min(255.0) as u8)
}

fn rgb_color(args: Vec<&str>) -> Option<Rgba8> {
    if args.len() != 3 {
        return None;
    }
    Some(Rgba8::rgb(channel(args[0])?, channel(args[1])?, channel(args[2])?))
}

fn rgba_color(args: Vec<&str>) -> Option<Rgba8> {
    if args.len() != 4 {
        return None;
    }
    let a : f64 = args[3].parse().ok()?;
    if !a.is_finite() {
        return None;
    }
    let a = (a.max(0.0).min(1.0) * 255.0).round() as u8;
    Some(Rgba8::new(channel(args[0])?, channel(args[1])?, channel(args[2])?, a))
}
