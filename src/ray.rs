#![warn(missing_docs)]
//! Module for handling optical rays
use crate::{
    error::BenchResult,
    path::PathCommand,
    ray_segment::{RaySegment, REFRACTIVE_INDEX_VACUUM},
};
use nalgebra::Point2;
use num::Zero;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uom::si::f64::{Angle, Length};

/// The path of a single ray as a polyline of [`RaySegment`]s.
///
/// Adjacent segments are continuous: the end position and end height of a segment equal the start position
/// and start height of the following one. A [`Ray`] is traced by [`Lens::trace`](crate::lens::Lens::trace),
/// which cuts its last segment at the lens surfaces and appends the refracted segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    segments: Vec<RaySegment>,
}
impl Ray {
    /// Creates a new [`Ray`] parallel to the optical axis.
    ///
    /// The ray consists of a single segment from `start_x` to `end_x` at the given height, travelling
    /// through vacuum. `end_x` may be `+inf`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the segment parameters are invalid (see [`RaySegment::new`]).
    pub fn new(start_x: Length, end_x: Length, start_height: Length) -> BenchResult<Self> {
        let segment = RaySegment::new(
            start_x,
            end_x,
            start_height,
            Angle::zero(),
            REFRACTIVE_INDEX_VACUUM,
        )?;
        Ok(Self::from_segment(segment))
    }
    /// Creates a new [`Ray`] starting with the given [`RaySegment`].
    #[must_use]
    pub fn from_segment(segment: RaySegment) -> Self {
        let mut segments = Vec::with_capacity(5);
        segments.push(segment);
        Self { segments }
    }
    /// Returns the segments of this [`Ray`] in axial order.
    #[must_use]
    pub fn segments(&self) -> &[RaySegment] {
        &self.segments
    }
    /// Returns the number of segments of this [`Ray`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }
    /// Returns `true` if this [`Ray`] contains no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
    /// Returns the last segment of this [`Ray`].
    #[must_use]
    pub fn last_segment(&self) -> Option<&RaySegment> {
        self.segments.last()
    }
    pub(crate) fn last_segment_mut(&mut self) -> Option<&mut RaySegment> {
        self.segments.last_mut()
    }
    pub(crate) fn add_segment(&mut self, segment: RaySegment) {
        self.segments.push(segment);
    }
    /// Returns the angle of the last segment of this [`Ray`].
    #[must_use]
    pub fn exit_angle(&self) -> Option<Angle> {
        self.last_segment().map(RaySegment::angle)
    }
    /// Returns the height at which the ray leaves the last surface it crossed.
    ///
    /// This is the start height of the last segment. Its end height is not used since the last segment is
    /// usually unbounded, which puts any inclined ray at an infinite height.
    #[must_use]
    pub fn exit_height(&self) -> Option<Length> {
        self.last_segment().map(RaySegment::start_height)
    }
    /// Check if adjacent segments of this [`Ray`] are connected.
    ///
    /// Returns `true` if the end position and end height of every segment match the start position and start
    /// height of the next segment within the given tolerance.
    #[must_use]
    pub fn is_continuous(&self, tolerance: Length) -> bool {
        self.segments.windows(2).all(|pair| {
            (pair[0].end_x() - pair[1].start_x()).abs() <= tolerance
                && (pair[0].end_height() - pair[1].start_height()).abs() <= tolerance
        })
    }
    /// Returns the ray path as [`PathCommand`]s.
    ///
    /// The path starts with a [`PathCommand::MoveTo`] to the start of the first segment followed by a
    /// [`PathCommand::LineTo`] to the end of each segment. An unbounded last segment results in a point at
    /// infinity which has to be clipped by the renderer.
    #[must_use]
    pub fn to_path(&self) -> Vec<PathCommand> {
        let Some(first) = self.segments.first() else {
            return Vec::new();
        };
        let mut path = Vec::with_capacity(self.segments.len() + 1);
        path.push(PathCommand::MoveTo(Point2::new(
            first.start_x(),
            first.start_height(),
        )));
        for segment in &self.segments {
            path.push(PathCommand::LineTo(Point2::new(
                segment.end_x(),
                segment.end_height(),
            )));
        }
        path
    }
}
impl Display for Ray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            writeln!(f, "  #{idx}: {segment}")?;
        }
        Ok(())
    }
}
