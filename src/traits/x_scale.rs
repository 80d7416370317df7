//! Horizontal pixel-scale seam used by the viewport filter.

/// A monotonic mapping between series coordinates and horizontal pixels.
///
/// The viewport filter only needs to place points on screen and, for the
/// two bounding points it emits, to find the coordinate sitting exactly at
/// a viewport edge.  Any zoomable scale owned by the rendering layer can
/// implement this trait.
///
/// # Contract
///
/// - `to_pixel` is strictly monotonic (increasing or decreasing).
/// - `from_pixel` is its inverse.
pub trait XScale {
    /// Maps a series coordinate to a pixel position.
    fn to_pixel(&self, x: f64) -> f64;

    /// Maps a pixel position back to a series coordinate.
    fn from_pixel(&self, px: f64) -> f64;
}

impl<S: XScale + ?Sized> XScale for &S {
    fn to_pixel(&self, x: f64) -> f64 {
        (**self).to_pixel(x)
    }

    fn from_pixel(&self, px: f64) -> f64 {
        (**self).from_pixel(px)
    }
}
