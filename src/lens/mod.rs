#![warn(missing_docs)]
//! Lens with spherical or flat surfaces

use crate::{
    error::{BenchError, BenchResult},
    meter, millimeter,
    surface::{arc_edge_offset, edge_offset_unchecked, EdgeOffset, SurfaceRadius, SurfaceSide},
    utils::saturating_div,
};
use serde::Serialize;
use std::fmt::Display;
use uom::si::{f64::Length, length::millimeter};

mod boundary;
mod refraction;

pub use refraction::LensPassage;

/// A real lens with spherical (or flat) surfaces.
///
/// # Curvature convention
/// A positive radius bulges towards `-x` (see [`crate::surface`]):
/// - positive curvature on the front surface will be a convex (focusing) surface
/// - negative curvature on the front surface will be a concave (defocusing) surface
/// - negative curvature on the rear surface will be a convex (focusing) surface
/// - positive curvature on the rear surface will be a concave (defocusing) surface
///
/// The front vertex is located at [`Lens::position`], the rear vertex at `position + thickness`. Both surfaces
/// share the same clear aperture ([`Lens::diameter`]). A [`Lens`] is immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lens {
    front: SurfaceRadius,
    rear: SurfaceRadius,
    thickness: Length,
    diameter: Length,
    position: Length,
    refractive_index: f64,
    #[serde(skip)]
    front_edge: EdgeOffset,
    #[serde(skip)]
    rear_edge: EdgeOffset,
}
impl Default for Lens {
    /// Create a plano-convex lens with a focal length of about 100 mm (N-BK7 around 1 µm).
    ///
    /// Diameter 25 mm, front radius of curvature 51.5 mm, flat rear surface, center thickness 3.6 mm, refractive
    /// index 1.5068, located at the origin.
    fn default() -> Self {
        let front = SurfaceRadius::new(millimeter!(51.5)).unwrap_or_default();
        let rear = SurfaceRadius::flat();
        let diameter = millimeter!(25.0);
        Self {
            front,
            rear,
            thickness: millimeter!(3.6),
            diameter,
            position: millimeter!(0.0),
            refractive_index: 1.5068,
            front_edge: edge_offset_unchecked(&front, diameter / 2.0, SurfaceSide::Front),
            rear_edge: edge_offset_unchecked(&rear, diameter / 2.0, SurfaceSide::Rear),
        }
    }
}
impl Lens {
    /// Creates a new [`Lens`].
    ///
    /// This function creates a lens with spherical front and rear surfaces, a given center thickness, diameter,
    /// axial position and refractive index. A radius of curvature of +/- infinity corresponds to a flat surface.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///  - a radius of curvature is NaN.
    ///  - the center thickness is negative or not finite.
    ///  - the diameter is <= 0.0 or not finite.
    ///  - the position is not finite.
    ///  - the refractive index is < 1.0 or not finite.
    ///  - half of the diameter is not smaller than the absolute radius of a curved surface.
    ///  - the two surfaces intersect within the aperture (negative edge thickness).
    pub fn new(
        front_radius: Length,
        rear_radius: Length,
        thickness: Length,
        diameter: Length,
        position: Length,
        refractive_index: f64,
    ) -> BenchResult<Self> {
        Self::from_surfaces(
            SurfaceRadius::new(front_radius)?,
            SurfaceRadius::new(rear_radius)?,
            thickness,
            diameter,
            position,
            refractive_index,
        )
    }
    /// Creates a new [`Lens`] from the surface curvatures (in 1/m).
    ///
    /// A curvature of zero corresponds to a flat surface.
    ///
    /// # Errors
    ///
    /// This function returns an error if the parameters are invalid. See [`Lens::new`] for details.
    pub fn from_curvatures(
        front_curvature: f64,
        rear_curvature: f64,
        thickness: Length,
        diameter: Length,
        position: Length,
        refractive_index: f64,
    ) -> BenchResult<Self> {
        Self::from_surfaces(
            SurfaceRadius::from_curvature(front_curvature)?,
            SurfaceRadius::from_curvature(rear_curvature)?,
            thickness,
            diameter,
            position,
            refractive_index,
        )
    }
    /// Creates a new [`Lens`] from two [`SurfaceRadius`] values.
    ///
    /// # Errors
    ///
    /// This function returns an error if the parameters are invalid. See [`Lens::new`] for details.
    pub fn from_surfaces(
        front: SurfaceRadius,
        rear: SurfaceRadius,
        thickness: Length,
        diameter: Length,
        position: Length,
        refractive_index: f64,
    ) -> BenchResult<Self> {
        if thickness.is_sign_negative() || !thickness.is_finite() {
            return Err(BenchError::Lens(
                "center thickness must be >= 0.0 and finite".into(),
            ));
        }
        if diameter.is_nan() || diameter <= meter!(0.0) || !diameter.is_finite() {
            return Err(BenchError::Lens(
                "diameter must be > 0.0 and finite".into(),
            ));
        }
        if !position.is_finite() {
            return Err(BenchError::Lens("position must be finite".into()));
        }
        if refractive_index < 1.0 || !refractive_index.is_finite() {
            return Err(BenchError::Lens(
                "refractive index must be >=1.0 and finite".into(),
            ));
        }
        let half_aperture = diameter / 2.0;
        let front_edge = arc_edge_offset(&front, half_aperture, SurfaceSide::Front)?;
        let rear_edge = arc_edge_offset(&rear, half_aperture, SurfaceSide::Rear)?;
        if (thickness + rear_edge.offset - front_edge.offset).is_sign_negative() {
            return Err(BenchError::Lens(
                "lens surfaces intersect within the aperture".into(),
            ));
        }
        Ok(Self {
            front,
            rear,
            thickness,
            diameter,
            position,
            refractive_index,
            front_edge,
            rear_edge,
        })
    }
    /// Returns the front surface of this [`Lens`].
    #[must_use]
    pub const fn front_surface(&self) -> &SurfaceRadius {
        &self.front
    }
    /// Returns the rear surface of this [`Lens`].
    #[must_use]
    pub const fn rear_surface(&self) -> &SurfaceRadius {
        &self.rear
    }
    /// Returns the given surface of this [`Lens`].
    #[must_use]
    pub const fn surface(&self, side: SurfaceSide) -> &SurfaceRadius {
        match side {
            SurfaceSide::Front => &self.front,
            SurfaceSide::Rear => &self.rear,
        }
    }
    /// Returns the curvature (in 1/m) of the front surface.
    #[must_use]
    pub fn front_curvature(&self) -> f64 {
        self.front.curvature()
    }
    /// Returns the curvature (in 1/m) of the rear surface.
    #[must_use]
    pub fn rear_curvature(&self) -> f64 {
        self.rear.curvature()
    }
    /// Returns the center thickness of this [`Lens`].
    #[must_use]
    pub const fn thickness(&self) -> Length {
        self.thickness
    }
    /// Returns the diameter (clear aperture) of this [`Lens`].
    #[must_use]
    pub const fn diameter(&self) -> Length {
        self.diameter
    }
    /// Returns half of the diameter of this [`Lens`].
    #[must_use]
    pub fn half_aperture(&self) -> Length {
        self.diameter / 2.0
    }
    /// Returns the axial position of the front vertex of this [`Lens`].
    #[must_use]
    pub const fn position(&self) -> Length {
        self.position
    }
    /// Returns the axial position of the vertex of the given surface.
    #[must_use]
    pub fn vertex(&self, side: SurfaceSide) -> Length {
        match side {
            SurfaceSide::Front => self.position,
            SurfaceSide::Rear => self.position + self.thickness,
        }
    }
    /// Returns the refractive index of the lens material.
    #[must_use]
    pub const fn refractive_index(&self) -> f64 {
        self.refractive_index
    }
    /// Returns the aperture edge offset of the given surface.
    #[must_use]
    pub const fn edge_offset(&self, side: SurfaceSide) -> EdgeOffset {
        match side {
            SurfaceSide::Front => self.front_edge,
            SurfaceSide::Rear => self.rear_edge,
        }
    }
    /// Returns the axial thickness of this [`Lens`] at the rim of the aperture.
    #[must_use]
    pub fn edge_thickness(&self) -> Length {
        self.thickness + self.rear_edge.offset - self.front_edge.offset
    }
    /// Returns the axial range occupied by this [`Lens`] including the aperture edges of both surfaces.
    #[must_use]
    pub fn axial_extent(&self) -> (Length, Length) {
        let front = self.vertex(SurfaceSide::Front);
        let rear = self.vertex(SurfaceSide::Rear);
        (
            front.min(front + self.front_edge.offset),
            rear.max(rear + self.rear_edge.offset),
        )
    }
    /// Returns the paraxial effective focal length of this [`Lens`] in vacuum.
    ///
    /// The total power is `P = P1 + P2 - P1 * P2 * t / n` with the surface powers `P1` and `P2`. This function
    /// returns `None` for an afocal lens (`P = 0`).
    #[must_use]
    pub fn focal_length(&self) -> Option<Length> {
        let n = self.refractive_index;
        let front_power = self.front.power(1.0, n);
        let rear_power = self.rear.power(n, 1.0);
        let thickness = self.thickness.get::<uom::si::length::meter>();
        let power = (front_power * rear_power * thickness / n).mul_add(-1.0, front_power + rear_power);
        if power == 0.0 {
            None
        } else {
            Some(meter!(saturating_div(1.0, power)))
        }
    }
}
impl Display for Lens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mm = Length::format_args(millimeter, uom::fmt::DisplayStyle::Abbreviation);
        write!(
            f,
            "lens @ {:.3}: front {}, rear {}, thickness {:.3}, diameter {:.3}, n = {}",
            mm.with(self.position),
            self.front,
            self.rear,
            mm.with(self.thickness),
            mm.with(self.diameter),
            self.refractive_index
        )
    }
}
