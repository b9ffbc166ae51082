use teapot_common::item_with;

/// Trait for floating-point types, so that the surface math can be generic over {f32, f64}.
///
/// Buffers handed to a [DrawGeometry](crate::DrawGeometry) are always `f32`; `f64` is there for
/// checking the `f32` results against.
///
/// # Safety
///
/// * This is only intended to be implemented on floating-point types.
#[allow(unsafe_code)]
pub unsafe trait Float:
    num_traits::Float
    + nalgebra::RealField
    + simba::scalar::SupersetOf<f32>
    + std::ops::AddAssign
    + std::ops::SubAssign
    + Copy
    + Send
    + Sync
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const THREE: Self;
    const SIX: Self;
}

item_with! {Real: f32, f64 => unsafe impl Float for Real {
    #![allow(unsafe_code)]
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;
    const SIX: Self = 6.0;
}}
