#![warn(missing_docs)]
//! Spherical (or flat) refracting surfaces.
//!
//! # Sign convention
//! A positive radius of curvature describes a surface bulging towards `-x`: its vertex is the leftmost
//! point of the surface and its center of curvature lies on the `+x` side. A negative radius is the
//! mirrored case. This convention is used by the outline construction as well as by the refraction
//! engine, so a front surface with positive radius is convex (focusing) for light travelling along `+x`
//! while a rear surface with positive radius is concave.
use crate::{
    error::{BenchError, BenchResult},
    meter,
    utils::saturating_div,
};
use num::Zero;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum::EnumIter;
use uom::si::{
    f64::Length,
    length::{meter, millimeter},
};

/// The two refracting surfaces of a lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, strum::Display)]
pub enum SurfaceSide {
    /// first (left) surface, hit first by a ray travelling along `+x`
    #[strum(serialize = "front surface")]
    Front,
    /// second (right) surface
    #[strum(serialize = "rear surface")]
    Rear,
}

/// Signed radius of curvature of a surface.
///
/// Radius and curvature are two views of the same value. The conversion between both uses
/// [`saturating_div`], so a zero radius corresponds to a huge (but finite) curvature and vice versa.
/// A radius with infinite magnitude (or saturated at `f64::MAX` meters) denotes a flat surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRadius {
    radius: Length,
}
impl SurfaceRadius {
    /// Creates a new [`SurfaceRadius`] from a signed radius of curvature.
    ///
    /// A radius of +/- infinity describes a flat surface.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given radius is NaN.
    pub fn new(radius: Length) -> BenchResult<Self> {
        if radius.is_nan() {
            return Err(BenchError::Lens(
                "radius of curvature must not be NaN".into(),
            ));
        }
        Ok(Self { radius })
    }
    /// Creates a flat surface (infinite radius of curvature).
    #[must_use]
    pub fn flat() -> Self {
        Self {
            radius: meter!(f64::INFINITY),
        }
    }
    /// Creates a [`SurfaceRadius`] from a curvature given in 1/m.
    ///
    /// A zero curvature results in a flat surface.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given curvature is NaN.
    pub fn from_curvature(curvature: f64) -> BenchResult<Self> {
        if curvature.is_nan() {
            return Err(BenchError::Lens("curvature must not be NaN".into()));
        }
        Ok(Self {
            radius: meter!(saturating_div(1.0, curvature)),
        })
    }
    /// Returns the signed radius of curvature.
    #[must_use]
    pub const fn radius(&self) -> Length {
        self.radius
    }
    /// Returns the curvature (reciprocal radius) in 1/m.
    ///
    /// Flat surfaces have a curvature of exactly zero.
    #[must_use]
    pub fn curvature(&self) -> f64 {
        if self.is_flat() {
            0.0
        } else {
            saturating_div(1.0, self.radius.get::<meter>())
        }
    }
    /// Returns `true` if the radius of curvature is effectively infinite.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.radius.abs().get::<meter>() >= f64::MAX
    }
    /// Paraxial optical power (in 1/m) of this surface between two media.
    ///
    /// The power is `(n_after - n_before) / radius`, where `n_before` is the refractive index on the
    /// `-x` side of the surface and `n_after` the index on the `+x` side. Flat surfaces have a power of
    /// exactly zero. A zero radius results in a very large but finite power.
    #[must_use]
    pub fn power(&self, n_before: f64, n_after: f64) -> f64 {
        if self.is_flat() {
            return 0.0;
        }
        saturating_div(n_after - n_before, self.radius.get::<meter>())
    }
}
impl Default for SurfaceRadius {
    fn default() -> Self {
        Self::flat()
    }
}
impl Display for SurfaceRadius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_flat() {
            write!(f, "flat")
        } else {
            let mm = Length::format_args(millimeter, uom::fmt::DisplayStyle::Abbreviation);
            write!(f, "{:.3}", mm.with(self.radius))
        }
    }
}

/// Axial position of a surface's aperture edge relative to its vertex, together with the arc
/// direction needed to draw the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeOffset {
    /// signed axial offset of the aperture edge from the vertex (positive: towards `+x`)
    pub offset: Length,
    /// sweep flag of the arc drawn over this surface
    pub sweep: bool,
}
impl EdgeOffset {
    /// Edge offset of a flat surface.
    #[must_use]
    pub fn flat() -> Self {
        Self {
            offset: Length::zero(),
            sweep: false,
        }
    }
}

/// Compute the aperture edge offset and the arc sweep flag of a surface.
///
/// The offset is the sagitta `|r| - sqrt(r^2 - h^2)` of the surface at the half aperture `h`. It points
/// towards `+x` for a positive radius and towards `-x` for a negative radius. On the front surface a
/// positive radius therefore pulls the edge inward (towards the rear surface), on the rear surface it
/// pushes the edge outward.
///
/// The front surface is drawn from top to bottom, the rear surface from bottom to top. This gives the
/// sweep flags
///
/// | side  | r >= 0 | r < 0 |
/// |-------|--------|-------|
/// | front | false  | true  |
/// | rear  | true   | false |
///
/// A flat surface returns [`EdgeOffset::flat`].
///
/// # Errors
///
/// This function will return an error if the half aperture is not smaller than the absolute radius of
/// a curved surface (the aperture edge would lie outside the sphere).
pub fn arc_edge_offset(
    radius: &SurfaceRadius,
    half_aperture: Length,
    side: SurfaceSide,
) -> BenchResult<EdgeOffset> {
    if radius.is_flat() {
        return Ok(EdgeOffset::flat());
    }
    let rad = radius.radius().abs();
    if half_aperture >= rad || half_aperture.is_nan() {
        return Err(BenchError::Lens(format!(
            "half aperture must be smaller than the radius of curvature of the {side}"
        )));
    }
    Ok(edge_offset_unchecked(radius, half_aperture, side))
}
/// Same as [`arc_edge_offset`] without the aperture check. The half aperture must be smaller than the
/// absolute radius for curved surfaces, otherwise the offset is NaN.
pub(crate) fn edge_offset_unchecked(
    radius: &SurfaceRadius,
    half_aperture: Length,
    side: SurfaceSide,
) -> EdgeOffset {
    if radius.is_flat() {
        return EdgeOffset::flat();
    }
    let rad = radius.radius().abs();
    let rcos = (rad * rad - half_aperture * half_aperture).sqrt();
    let sag = rad - rcos;
    let negative = radius.radius().is_sign_negative();
    let sweep = match side {
        SurfaceSide::Front => negative,
        SurfaceSide::Rear => !negative,
    };
    EdgeOffset {
        offset: if negative { -sag } else { sag },
        sweep,
    }
}
