//! Component types
//!
//! A component is one scalar channel value of a pixel. Two numeric
//! domains exist:
//!
//! - **Integer** components (`u8`, `i32`) hold intensities in `0..=255`.
//! - **Float** components (`f32`, `f64`) hold intensities in `0.0..=1.0`.
//!
//! Converting a single value between types follows one rule table:
//!
//! | From → To | Result |
//! |---|---|
//! | integer → integer | identity (saturated to the target range) |
//! | integer → float | `v / 255` |
//! | float → integer | `round(255 * v)` |
//! | float → float | identity |
//!
//! Rounding is to nearest with ties away from zero (`f64::round`), so
//! `127.5` becomes `128` and `2.5` becomes `3`.

use std::fmt::Debug;

/// Numeric domain of a component type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Integer intensities, full scale at 255
    Integer,
    /// Floating intensities, full scale at 1.0
    Float,
}

impl ComponentKind {
    /// The value representing full intensity in this domain.
    pub fn full_scale(self) -> f64 {
        match self {
            ComponentKind::Integer => 255.0,
            ComponentKind::Float => 1.0,
        }
    }
}

/// A scalar type usable as a pixel component.
pub trait Component: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    /// Numeric domain of this type
    const KIND: ComponentKind;
    /// Zero intensity / zero alpha
    const ZERO: Self;
    /// Full intensity / opaque alpha (255 or 1.0)
    const ONE: Self;

    /// Widen to `f64` without changing the domain.
    fn to_f64(self) -> f64;

    /// Narrow from `f64` without changing the domain.
    ///
    /// Integer types round half away from zero and saturate to their range.
    fn from_f64(value: f64) -> Self;
}

impl Component for u8 {
    const KIND: ComponentKind = ComponentKind::Integer;
    const ZERO: Self = 0;
    const ONE: Self = 255;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value.round() as u8
    }
}

impl Component for i32 {
    const KIND: ComponentKind = ComponentKind::Integer;
    const ZERO: Self = 0;
    const ONE: Self = 255;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value.round() as i32
    }
}

impl Component for f32 {
    const KIND: ComponentKind = ComponentKind::Float;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Component for f64 {
    const KIND: ComponentKind = ComponentKind::Float;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Rescale a raw value expressed in `Ts`'s domain into a `Td`.
///
/// `value` need not be a representable `Ts`; the caster passes channel
/// averages through here so that averaging happens before the cast.
#[inline]
pub fn rescale<Ts: Component, Td: Component>(value: f64) -> Td {
    match (Ts::KIND, Td::KIND) {
        (ComponentKind::Integer, ComponentKind::Float) => Td::from_f64(value / 255.0),
        (ComponentKind::Float, ComponentKind::Integer) => Td::from_f64(value * 255.0),
        _ => Td::from_f64(value),
    }
}

/// Cast a single component value to another component type.
///
/// # Examples
///
/// ```
/// use pixkit_core::cast_component;
///
/// assert_eq!(cast_component::<f32, u8>(0.2), 51);
/// assert_eq!(cast_component::<u8, f64>(255), 1.0);
/// assert_eq!(cast_component::<i32, u8>(17), 17);
/// ```
#[inline]
pub fn cast_component<Ts: Component, Td: Component>(value: Ts) -> Td {
    rescale::<Ts, Td>(value.to_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_values() {
        assert_eq!(u8::ONE, 255);
        assert_eq!(i32::ONE, 255);
        assert_eq!(f32::ONE, 1.0);
        assert_eq!(f64::ONE, 1.0);
    }

    #[test]
    fn test_integer_rounding_ties_away_from_zero() {
        assert_eq!(i32::from_f64(2.5), 3);
        assert_eq!(i32::from_f64(-2.5), -3);
        assert_eq!(i32::from_f64(2.4999), 2);
        assert_eq!(u8::from_f64(0.5), 1);
        assert_eq!(u8::from_f64(127.5), 128);
    }

    #[test]
    fn test_integer_saturation() {
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(u8::from_f64(-4.0), 0);
        assert_eq!(cast_component::<i32, u8>(1000), 255);
    }

    #[test]
    fn test_float_to_integer() {
        assert_eq!(cast_component::<f32, i32>(0.2), 51);
        assert_eq!(cast_component::<f32, i32>(0.8), 204);
        assert_eq!(cast_component::<f64, u8>(0.5), 128);
        assert_eq!(cast_component::<f64, u8>(1.0), 255);
        assert_eq!(cast_component::<f64, u8>(0.0), 0);
    }

    #[test]
    fn test_integer_to_float() {
        assert_eq!(cast_component::<u8, f32>(0), 0.0);
        assert_eq!(cast_component::<u8, f32>(255), 1.0);
        assert!((cast_component::<i32, f64>(51) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_identity_within_domain() {
        for v in [0i32, 1, 127, 128, 254, 255] {
            assert_eq!(cast_component::<i32, i32>(v), v);
            assert_eq!(cast_component::<i32, u8>(v) as i32, v);
        }
        assert_eq!(cast_component::<f32, f64>(0.25), 0.25);
        assert_eq!(cast_component::<f64, f32>(0.75), 0.75);
    }

    #[test]
    fn test_integer_float_roundtrip_is_lossless() {
        for v in 0..=255u8 {
            let f: f32 = cast_component(v);
            assert_eq!(cast_component::<f32, u8>(f), v);
        }
    }
}
