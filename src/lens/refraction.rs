//! Paraxial refraction at the lens surfaces
use super::Lens;
use crate::{
    error::{BenchError, BenchResult},
    radian,
    ray::Ray,
    ray_segment::RaySegment,
    surface::SurfaceSide,
    utils::saturating_div,
};
use log::{debug, warn};
use serde::Serialize;
use uom::si::{
    angle::radian,
    f64::Length,
    length::{meter, millimeter},
};

/// Outcome of tracing a [`Ray`] through a single [`Lens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum LensPassage {
    /// The ray passed outside the aperture of the front surface. The ray was not modified.
    #[strum(serialize = "missed")]
    Missed,
    /// The ray entered the lens but reached the rear surface outside its aperture. The ray ends at the
    /// axial position of the rear vertex.
    #[strum(serialize = "vignetted")]
    Vignetted,
    /// The ray was refracted by both surfaces.
    #[strum(serialize = "transmitted")]
    Transmitted,
}

impl Lens {
    /// Refract a ray segment at one surface of this [`Lens`].
    ///
    /// The height of the incoming segment is evaluated at the vertex of the given surface. If its absolute
    /// value exceeds half the diameter the ray misses the surface and `None` is returned. A miss at the front
    /// surface leaves the segment untouched, a miss at the rear surface (the ray is already inside the lens)
    /// still cuts the segment at the rear vertex.
    ///
    /// On a hit the incoming segment is cut at the surface and the refracted segment is returned. Its angle
    /// follows the paraxial relation `n_out * a_out = n_in * a_in - h * P` with the surface power
    /// `P = (n_out - n_in) / r`. The new segment propagates in the medium `n_out` up to the original end of
    /// the incoming segment.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the incoming segment does not cover the axial position of the surface.
    ///  - the refracted segment is invalid (e.g. the refracted angle exceeds 90° or `n_out` < 1.0).
    ///
    /// The incoming segment is left untouched if an error is returned.
    pub fn refract_at_surface(
        &self,
        segment: &mut RaySegment,
        side: SurfaceSide,
        n_out: f64,
    ) -> BenchResult<Option<RaySegment>> {
        let surface_x = self.vertex(side);
        if !segment.spans(surface_x, surface_x) {
            return Err(BenchError::Trace(format!(
                "ray segment does not reach the {side}"
            )));
        }
        let height = segment.height_at(surface_x);
        if height.abs() > self.half_aperture() {
            debug!("ray at height {} misses the {side}", format_mm(height));
            if side == SurfaceSide::Rear {
                segment.truncate(surface_x);
            }
            return Ok(None);
        }
        let n_in = segment.refractive_index();
        let power = self.surface(side).power(n_in, n_out);
        let new_angle = saturating_div(
            n_in * segment.angle().get::<radian>() - height.get::<meter>() * power,
            n_out,
        );
        debug!(
            "{side} hit at x = {}, height = {}, new angle = {new_angle:.6} rad",
            format_mm(surface_x),
            format_mm(height)
        );
        let refracted =
            RaySegment::new(surface_x, segment.end_x(), height, radian!(new_angle), n_out)?;
        segment.truncate(surface_x);
        Ok(Some(refracted))
    }
    /// Trace a [`Ray`] through this [`Lens`].
    ///
    /// The last segment of the ray is refracted at the front surface and the resulting segment at the rear
    /// surface. Behind the lens the ray continues in the medium it travelled through before entering the lens.
    /// Every refraction cuts the preceding segment at the surface and appends a new one. The returned
    /// [`LensPassage`] states how far the ray got.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the ray has no segments.
    ///  - the last segment of the ray does not span the lens (it starts behind the front vertex or ends
    ///    before the rear vertex).
    ///  - a refracted segment is invalid (see [`Lens::refract_at_surface`]).
    ///
    /// The ray is not modified if an error is returned.
    pub fn trace(&self, ray: &mut Ray) -> BenchResult<LensPassage> {
        let Some(mut incoming) = ray.last_segment().cloned() else {
            return Err(BenchError::Trace("cannot trace an empty ray".into()));
        };
        let front_x = self.vertex(SurfaceSide::Front);
        let rear_x = self.vertex(SurfaceSide::Rear);
        if !incoming.spans(front_x, rear_x) {
            return Err(BenchError::Trace("ray does not reach lens".into()));
        }
        let n_before = incoming.refractive_index();
        let Some(mut inner) =
            self.refract_at_surface(&mut incoming, SurfaceSide::Front, self.refractive_index)?
        else {
            return Ok(LensPassage::Missed);
        };
        let exit = self.refract_at_surface(&mut inner, SurfaceSide::Rear, n_before)?;
        // commit only once both surfaces were handled
        if let Some(last) = ray.last_segment_mut() {
            *last = incoming;
        }
        ray.add_segment(inner);
        if let Some(exit) = exit {
            ray.add_segment(exit);
            Ok(LensPassage::Transmitted)
        } else {
            warn!(
                "ray leaves the lens through its rim at x = {}",
                format_mm(rear_x)
            );
            Ok(LensPassage::Vignetted)
        }
    }
}

fn format_mm(length: Length) -> String {
    let mm = Length::format_args(millimeter, uom::fmt::DisplayStyle::Abbreviation);
    format!("{:.3}", mm.with(length))
}
