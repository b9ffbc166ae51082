//! Ensure that [VertexIndex] behaves for the integer types index buffers are actually built from.

use teapot_common::VertexIndex;

#[test]
fn from_vertex() {
    assert_eq!(u16::from_vertex(3199), 3199u16);
    assert_eq!(u32::from_vertex(5183 * 3), 15549u32);
    assert_eq!(usize::from_vertex(7), 7usize);
}

#[test]
fn fits() {
    assert!(u8::fits(0));
    assert!(u8::fits(256));
    assert!(!u8::fits(257));
    assert!(u16::fits(3200));
    assert!(u16::fits(65536));
    assert!(!u16::fits(65537));
    assert!(u32::fits(65537));
}

teapot_common::item_with! {T: u16, u32 => impl Marker for T {}}

trait Marker {}

#[test]
fn item_with() {
    fn is_marked<T: Marker>() {}
    is_marked::<u16>();
    is_marked::<u32>();
}
