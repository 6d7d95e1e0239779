//! # Precise Color
//!
//! [`PreciseColor`] is the intermediate representation every native pixel is decoded into
//! before compositing. Channels are `f64` in a nominal `[0, 1]` range and are never clamped
//! while in this form; clamping only happens when quantising back to 8 bits.

use crate::{color_8888::Color8888, float16_color::Float16Color};
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use likely_stable::unlikely;

/// Alphas whose magnitude is at or below this are treated as fully transparent by [`PreciseColor::over`].
pub const ALPHA_EPSILON: f64 = 1.0e-8;

/// An RGBA colour with double precision channels.
///
/// The default value is transparent black.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreciseColor {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
    /// Alpha channel
    pub a: f64,
}

impl PreciseColor {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a colour from its four channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque colour.
    #[inline]
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Returns this colour with its alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Mean of the given colours, channel by channel.
    ///
    /// An empty slice yields [`PreciseColor::TRANSPARENT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_overlay_common::precise_color::PreciseColor;
    ///
    /// let black = PreciseColor::opaque(0.0, 0.0, 0.0);
    /// let white = PreciseColor::opaque(1.0, 1.0, 1.0);
    /// assert_eq!(PreciseColor::average(&[black, white]), PreciseColor::opaque(0.5, 0.5, 0.5));
    /// ```
    pub fn average(colors: &[PreciseColor]) -> Self {
        if colors.is_empty() {
            return Self::TRANSPARENT;
        }

        let sum = colors
            .iter()
            .fold(Self::TRANSPARENT, |acc, &color| acc + color);
        sum / colors.len() as f64
    }

    /// Composites `top` above `bot` (source-over).
    ///
    /// Each colour is weighted by its effective opacity: `top.a` for the top colour and
    /// `bot.a * (1 - top.a)` for the bottom one. The weighted sum is then divided by the total
    /// weight, so the result is not premultiplied. When the total weight is (nearly) zero the
    /// result is [`PreciseColor::TRANSPARENT`].
    ///
    /// A fully opaque `top` yields exactly `top`, and a fully transparent `top` yields exactly
    /// `bot`, whatever `bot` holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_overlay_common::precise_color::PreciseColor;
    ///
    /// let bot = PreciseColor::opaque(1.0, 0.0, 0.0);
    /// let top = PreciseColor::new(0.0, 0.0, 1.0, 1.0);
    /// assert_eq!(PreciseColor::over(bot, top), top);
    ///
    /// let clear = PreciseColor::new(0.0, 1.0, 0.0, 0.0);
    /// assert_eq!(PreciseColor::over(bot, clear), bot);
    /// ```
    #[inline]
    pub fn over(bot: PreciseColor, top: PreciseColor) -> Self {
        // Weighting then dividing is not exact in floating point.
        if top.a == 1.0 {
            return top;
        }
        if top.a == 0.0 {
            return bot;
        }

        let top_coef = top.a;
        let bot_coef = bot.a * (1.0 - top.a);
        let alpha = top_coef + bot_coef;

        if unlikely(is_nearly_zero(alpha)) {
            return Self::TRANSPARENT;
        }
        (top * top_coef + bot * bot_coef) / alpha
    }

    /// Quantises to 8 bits per channel without any sRGB conversion.
    ///
    /// Channels are clamped to `[0, 1]` and scaled by `255.999` before truncation, so any value
    /// that came from an 8-bit channel maps back to the same byte.
    #[inline]
    pub fn to_color_8888(&self) -> Color8888 {
        Color8888::new(
            quantize_unorm8(self.r),
            quantize_unorm8(self.g),
            quantize_unorm8(self.b),
            quantize_unorm8(self.a),
        )
    }
}

#[inline]
fn is_nearly_zero(value: f64) -> bool {
    (-ALPHA_EPSILON..=ALPHA_EPSILON).contains(&value)
}

#[inline]
fn quantize_unorm8(channel: f64) -> u8 {
    // Truncation of a non-negative value is a floor; NaN saturates to 0.
    (channel.clamp(0.0, 1.0) * 255.999) as u8
}

impl From<Color8888> for PreciseColor {
    #[inline]
    fn from(color: Color8888) -> Self {
        Self::new(
            color.r as f64 / 255.0,
            color.g as f64 / 255.0,
            color.b as f64 / 255.0,
            color.a as f64 / 255.0,
        )
    }
}

impl From<Float16Color> for PreciseColor {
    #[inline]
    fn from(color: Float16Color) -> Self {
        Self::new(
            color.r.to_f64(),
            color.g.to_f64(),
            color.b.to_f64(),
            color.a.to_f64(),
        )
    }
}

impl fmt::Display for PreciseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(R={:.6}, G={:.6}, B={:.6}, A={:.6})",
            self.r, self.g, self.b, self.a
        )
    }
}

macro_rules! componentwise_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $assign_trait for PreciseColor {
            #[inline]
            fn $assign_method(&mut self, other: Self) {
                self.r $op other.r;
                self.g $op other.g;
                self.b $op other.b;
                self.a $op other.a;
            }
        }

        impl $trait for PreciseColor {
            type Output = Self;

            #[inline]
            fn $method(mut self, other: Self) -> Self {
                self.$assign_method(other);
                self
            }
        }
    };
}

componentwise_op!(Add, add, AddAssign, add_assign, +=);
componentwise_op!(Sub, sub, SubAssign, sub_assign, -=);
componentwise_op!(Mul, mul, MulAssign, mul_assign, *=);
componentwise_op!(Div, div, DivAssign, div_assign, /=);

impl MulAssign<f64> for PreciseColor {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.r *= scalar;
        self.g *= scalar;
        self.b *= scalar;
        self.a *= scalar;
    }
}

impl Mul<f64> for PreciseColor {
    type Output = Self;

    #[inline]
    fn mul(mut self, scalar: f64) -> Self {
        self *= scalar;
        self
    }
}

impl DivAssign<f64> for PreciseColor {
    #[inline]
    fn div_assign(&mut self, scalar: f64) {
        self.r /= scalar;
        self.g /= scalar;
        self.b /= scalar;
        self.a /= scalar;
    }
}

impl Div<f64> for PreciseColor {
    type Output = Self;

    #[inline]
    fn div(mut self, scalar: f64) -> Self {
        self /= scalar;
        self
    }
}
