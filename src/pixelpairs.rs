// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given the two pixels flanking a point along one axis, the energy
//! between them is the squared distance between their colors, summed
//! over the channels.

use itertools::zip;

/// (Pixel, Pixel) -> squared gradient
///
/// Takes the channels (R,G,B) from two pixels, maps the difference
/// between each channel, squares it, and sums them all up:
///
/// ```text
///   |Δ|² = (Δr)²+(Δg)²+(Δb)²
/// ```
///
/// The difference is signed; the square never is.
#[inline]
pub fn squared_gradient(p1: &[u8], p2: &[u8]) -> i32 {
    zip(p1, p2)
        .map(|(c1, c2)| {
            let d = i32::from(*c1) - i32::from(*c2);
            d * d
        })
        .fold(0, |a, c| a + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_pixels_have_no_gradient() {
        assert_eq!(squared_gradient(&[12, 200, 7], &[12, 200, 7]), 0);
    }

    #[test]
    fn gradient_is_channel_summed_and_sign_free() {
        assert_eq!(squared_gradient(&[0, 10, 255], &[3, 6, 0]), 9 + 16 + 65025);
        assert_eq!(
            squared_gradient(&[3, 6, 0], &[0, 10, 255]),
            squared_gradient(&[0, 10, 255], &[3, 6, 0])
        );
    }
}
