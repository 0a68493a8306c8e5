#![warn(missing_docs)]
//! Module for straight stretches of a ray path
use crate::error::{BenchError, BenchResult};
use num::Zero;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::millimeter,
};

/// Refractive index of vacuum (and, for the purpose of this crate, air).
pub const REFRACTIVE_INDEX_VACUUM: f64 = 1.0;

/// A straight stretch of a ray between two axial positions.
///
/// The segment starts at `start_x` with a given height above the optical axis and travels with a constant
/// angle through a medium with a constant refractive index. Its end position may be `+inf` as long as the
/// segment has not been cut by a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SegmentFields")]
pub struct RaySegment {
    start_x: Length,
    end_x: Length,
    /// height of the ray (relative to the optical axis) at `start_x`
    start_height: Length,
    /// angle of the ray relative to the optical axis
    angle: Angle,
    /// refractive index of the medium this segment is propagating in
    refractive_index: f64,
}
/// Unchecked field set of a deserialized [`RaySegment`].
#[derive(Deserialize)]
struct SegmentFields {
    start_x: Length,
    end_x: Length,
    start_height: Length,
    angle: Angle,
    refractive_index: f64,
}
impl TryFrom<SegmentFields> for RaySegment {
    type Error = BenchError;

    fn try_from(fields: SegmentFields) -> BenchResult<Self> {
        Self::new(
            fields.start_x,
            fields.end_x,
            fields.start_height,
            fields.angle,
            fields.refractive_index,
        )
    }
}
impl RaySegment {
    /// Creates a new [`RaySegment`].
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///  - `start_x` or `start_height` is not finite.
    ///  - `end_x` is NaN or smaller than `start_x` (`+inf` is allowed).
    ///  - the angle is not within the open interval (-90°, 90°), i.e. the ray does not propagate along `+x`.
    ///  - the refractive index is < 1.0 or not finite.
    pub fn new(
        start_x: Length,
        end_x: Length,
        start_height: Length,
        angle: Angle,
        refractive_index: f64,
    ) -> BenchResult<Self> {
        if !start_x.is_finite() {
            return Err(BenchError::Ray("start position must be finite".into()));
        }
        if end_x.is_nan() || end_x < start_x {
            return Err(BenchError::Ray(
                "end position must be >= start position".into(),
            ));
        }
        if !start_height.is_finite() {
            return Err(BenchError::Ray("start height must be finite".into()));
        }
        if !angle.is_finite() || angle.get::<radian>().abs() >= std::f64::consts::FRAC_PI_2 {
            return Err(BenchError::Ray(
                "angle must be within (-90°, 90°)".into(),
            ));
        }
        if refractive_index < 1.0 || !refractive_index.is_finite() {
            return Err(BenchError::Ray(
                "refractive index must be >=1.0 and finite".into(),
            ));
        }
        Ok(Self {
            start_x,
            end_x,
            start_height,
            angle,
            refractive_index,
        })
    }
    /// Creates a new [`RaySegment`] travelling through vacuum.
    ///
    /// # Errors
    ///
    /// This function returns an error if the positions, the height or the angle are invalid. See
    /// [`RaySegment::new`] for details.
    pub fn new_in_vacuum(
        start_x: Length,
        end_x: Length,
        start_height: Length,
        angle: Angle,
    ) -> BenchResult<Self> {
        Self::new(start_x, end_x, start_height, angle, REFRACTIVE_INDEX_VACUUM)
    }
    /// Returns the axial start position of this [`RaySegment`].
    #[must_use]
    pub const fn start_x(&self) -> Length {
        self.start_x
    }
    /// Returns the axial end position of this [`RaySegment`].
    #[must_use]
    pub const fn end_x(&self) -> Length {
        self.end_x
    }
    /// Returns the height of this [`RaySegment`] at its start position.
    #[must_use]
    pub const fn start_height(&self) -> Length {
        self.start_height
    }
    /// Returns the propagation angle of this [`RaySegment`].
    #[must_use]
    pub const fn angle(&self) -> Angle {
        self.angle
    }
    /// Returns the refractive index of the medium of this [`RaySegment`].
    #[must_use]
    pub const fn refractive_index(&self) -> f64 {
        self.refractive_index
    }
    /// Returns the slope (`tan(angle)`) of this [`RaySegment`].
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.angle.get::<radian>().tan()
    }
    /// Returns the height of the ray at the given axial position.
    ///
    /// The height is extrapolated along the segment's line (`start_height + tan(angle) * (x - start_x)`)
    /// even if `x` lies outside the segment. A segment parallel to the axis has the same height everywhere,
    /// also at infinity.
    #[must_use]
    pub fn height_at(&self, x: Length) -> Length {
        let slope = self.slope();
        if slope.is_zero() {
            return self.start_height;
        }
        self.start_height + (x - self.start_x) * slope
    }
    /// Returns the height of the ray at the end position of this [`RaySegment`].
    #[must_use]
    pub fn end_height(&self) -> Length {
        self.height_at(self.end_x)
    }
    /// Returns `true` if the segment covers the axial range `[from, to]`.
    #[must_use]
    pub fn spans(&self, from: Length, to: Length) -> bool {
        self.start_x <= from && self.end_x >= to
    }
    /// Cut this [`RaySegment`] at the given axial position.
    pub(crate) fn truncate(&mut self, x: Length) {
        self.end_x = x;
    }
}
impl Display for RaySegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mm = Length::format_args(millimeter, uom::fmt::DisplayStyle::Abbreviation);
        let rad = Angle::format_args(radian, uom::fmt::DisplayStyle::Abbreviation);
        write!(
            f,
            "x: {:.3} -> {:.3}, height: {:.3} -> {:.3}, angle: {:.6}, n: {}",
            mm.with(self.start_x),
            mm.with(self.end_x),
            mm.with(self.start_height),
            mm.with(self.end_height()),
            rad.with(self.angle),
            self.refractive_index
        )
    }
}
