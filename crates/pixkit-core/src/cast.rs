//! Channel and type casting
//!
//! [`cast_pixel`] is the default rule for turning a pixel of
//! `(Ts, CS)` into a pixel of `(Td, CD)`. It combines a channel-count
//! mapping with the per-component rule of [`cast_component`]:
//!
//! | From → To | Rule |
//! |---|---|
//! | 4→1, 3→1 | unweighted average of R, G, B; alpha dropped |
//! | 2→1 | gray channel; alpha dropped |
//! | 4→2, 3→2 | average of R, G, B; alpha kept, or "one" if absent |
//! | 1→2 | gray, "one" |
//! | 4→3 | R, G, B; alpha dropped |
//! | 2→3, 1→3 | gray replicated into R, G, B |
//! | 3→4 | R, G, B, "one" |
//! | 2→4 | gray replicated into R, G, B; alpha kept |
//! | 1→4 | gray replicated into R, G, B, "one" |
//! | same count | per-channel cast |
//!
//! "One" is [`Component::ONE`] of the destination type (255 or 1.0).
//!
//! Averages are computed in the source domain and cast once, so an
//! integer-to-integer gray conversion rounds the exact mean rather than
//! accumulating three separate roundings.
//!
//! Channel counts outside 1 to 4 are rejected when the caster is
//! instantiated, not at run time.

use crate::component::{Component, cast_component, rescale};
use crate::image::Image;

/// Default conversion of one pixel.
///
/// # Examples
///
/// ```
/// use pixkit_core::cast_pixel;
///
/// let gray: [u8; 2] = cast_pixel(&[0.0f32, 0.5, 1.0, 0.25]);
/// assert_eq!(gray, [128, 64]);
///
/// let rgba: [f64; 4] = cast_pixel(&[51i32]);
/// assert_eq!(rgba[3], 1.0);
/// ```
pub fn cast_pixel<Ts, const CS: usize, Td, const CD: usize>(src: &[Ts; CS]) -> [Td; CD]
where
    Ts: Component,
    Td: Component,
{
    const {
        assert!(CS >= 1 && CS <= 4, "source channel count must be 1 to 4");
        assert!(CD >= 1 && CD <= 4, "destination channel count must be 1 to 4");
    };

    let s: &[Ts] = src;
    let cast = |v: Ts| cast_component::<Ts, Td>(v);
    let mut out = [Td::ZERO; CD];

    match (CS, CD) {
        (3 | 4, 1) => {
            out[0] = average_rgb::<Ts, Td>(s);
        }
        (2, 1) => {
            out[0] = cast(s[0]);
        }
        (4, 2) => {
            out[0] = average_rgb::<Ts, Td>(s);
            out[1] = cast(s[3]);
        }
        (3, 2) => {
            out[0] = average_rgb::<Ts, Td>(s);
            out[1] = Td::ONE;
        }
        (1, 2) => {
            out[0] = cast(s[0]);
            out[1] = Td::ONE;
        }
        (4, 3) => {
            for (o, &v) in out.iter_mut().zip(s) {
                *o = cast(v);
            }
        }
        (1 | 2, 3) => {
            out.fill(cast(s[0]));
        }
        (3, 4) => {
            for (o, &v) in out.iter_mut().zip(s) {
                *o = cast(v);
            }
            out[3] = Td::ONE;
        }
        (2, 4) => {
            let g = cast(s[0]);
            out[..3].fill(g);
            out[3] = cast(s[1]);
        }
        (1, 4) => {
            out[..3].fill(cast(s[0]));
            out[3] = Td::ONE;
        }
        _ => {
            // CS == CD
            for (o, &v) in out.iter_mut().zip(s) {
                *o = cast(v);
            }
        }
    }
    out
}

#[inline]
fn average_rgb<Ts: Component, Td: Component>(s: &[Ts]) -> Td {
    let mean = (s[0].to_f64() + s[1].to_f64() + s[2].to_f64()) / 3.0;
    rescale::<Ts, Td>(mean)
}

/// Convert `from` into `to` with the default rule.
///
/// `to` is resized to the shape of `from` first; its previous contents are
/// discarded.
pub fn cast<Ts, const CS: usize, Td, const CD: usize>(from: &Image<Ts, CS>, to: &mut Image<Td, CD>)
where
    Ts: Component,
    Td: Component,
{
    cast_with(from, to, cast_pixel::<Ts, CS, Td, CD>);
}

/// Convert `from` into `to` with a caller-supplied per-pixel rule.
///
/// The rule replaces the default table entirely, which makes it the hook
/// for thresholding, palette lookup, label colouring and similar
/// derived representations.
///
/// # Examples
///
/// ```
/// use pixkit_core::{ImageGf, ImageGi, cast_with};
///
/// let labels = ImageGi::from_vec(1, 3, vec![0, 1, 2]).unwrap();
/// let mut parity = ImageGf::default();
/// cast_with(&labels, &mut parity, |l| [(l[0] % 2) as f32]);
/// assert_eq!(parity.components(), &[0.0, 1.0, 0.0]);
/// ```
pub fn cast_with<Ts, const CS: usize, Td, const CD: usize, F>(
    from: &Image<Ts, CS>,
    to: &mut Image<Td, CD>,
    mut caster: F,
) where
    Ts: Component,
    Td: Component,
    F: FnMut(&[Ts; CS]) -> [Td; CD],
{
    to.resize(from.height(), from.width());
    for (dst, src) in to.pixels_mut().iter_mut().zip(from.pixels()) {
        *dst = caster(src);
    }
}
