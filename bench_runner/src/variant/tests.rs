//!
//! The variant tests.
//!

use std::str::FromStr;

use super::Variant;

#[test]
fn names() {
    assert_eq!(Variant::Vulkan.name(), "vulkan");
    assert_eq!(Variant::Gl.to_string(), "gl");
}

#[test]
fn parse() {
    assert_eq!(Variant::from_str("vulkan").expect("Always valid"), Variant::Vulkan);
    assert_eq!(Variant::from_str("gl").expect("Always valid"), Variant::Gl);
    assert!(Variant::from_str("metal").is_err());
}

#[test]
fn run_order() {
    let mut variants = vec![Variant::Gl, Variant::Vulkan];
    variants.sort();
    assert_eq!(variants, Variant::ALL.to_vec());
}
