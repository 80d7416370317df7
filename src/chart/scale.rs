//! Linear horizontal scale.

use crate::error::DepthError;
use crate::traits::XScale;

/// Affine map from a coordinate domain `[d0, d1]` onto a pixel range
/// `[r0, r1]`.
///
/// Either interval may be reversed; a reversed pair yields a decreasing
/// scale.  Zooming and panning are expressed by building a new scale over
/// the visible domain.
///
/// # Examples
///
/// ```
/// use muffin_depth::chart::LinearScale;
/// use muffin_depth::traits::XScale;
///
/// let scale = LinearScale::new((100.0, 200.0), (0.0, 400.0)).expect("valid scale");
/// assert!((scale.to_pixel(150.0) - 200.0).abs() < 1e-9);
/// assert!((scale.from_pixel(400.0) - 200.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a new `LinearScale`.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidDomain`] if any bound is not finite or
    /// either interval is empty.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> crate::error::Result<Self> {
        let bounds = [domain.0, domain.1, range.0, range.1];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(DepthError::InvalidDomain("scale bounds must be finite"));
        }
        if domain.0 == domain.1 || range.0 == range.1 {
            return Err(DepthError::InvalidDomain("scale intervals must not be empty"));
        }
        Ok(Self { domain, range })
    }

    /// Coordinate interval.
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Pixel interval.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Same scale with its pixel range reversed.
    #[must_use]
    pub const fn invert(&self) -> Self {
        Self {
            domain: self.domain,
            range: (self.range.1, self.range.0),
        }
    }

    fn slope(&self) -> f64 {
        (self.range.1 - self.range.0) / (self.domain.1 - self.domain.0)
    }
}

impl XScale for LinearScale {
    fn to_pixel(&self, x: f64) -> f64 {
        self.range.0 + (x - self.domain.0) * self.slope()
    }

    fn from_pixel(&self, px: f64) -> f64 {
        self.domain.0 + (px - self.range.0) / self.slope()
    }
}
