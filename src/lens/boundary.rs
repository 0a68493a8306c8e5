//! Outline of a lens cross-section
use super::Lens;
use crate::{
    path::PathCommand,
    surface::{EdgeOffset, SurfaceRadius, SurfaceSide},
};
use nalgebra::Point2;
use uom::si::f64::Length;

impl Lens {
    /// Returns the closed outline of the lens cross-section in the meridional plane.
    ///
    /// The outline starts at the upper aperture edge of the front surface, follows the front surface down
    /// to the lower edge, runs along the lower rim to the rear surface, follows the rear surface up and
    /// is closed along the upper rim. Curved surfaces are drawn as [`PathCommand::ArcTo`], flat surfaces as
    /// [`PathCommand::LineTo`].
    #[must_use]
    pub fn boundary(&self) -> Vec<PathCommand> {
        let half_aperture = self.half_aperture();
        let front_edge = self.edge_offset(SurfaceSide::Front);
        let rear_edge = self.edge_offset(SurfaceSide::Rear);
        let x1 = self.vertex(SurfaceSide::Front) + front_edge.offset;
        let x2 = self.vertex(SurfaceSide::Rear) + rear_edge.offset;
        vec![
            PathCommand::MoveTo(Point2::new(x1, half_aperture)),
            surface_command(
                &self.front,
                front_edge,
                Point2::new(x1, -half_aperture),
            ),
            PathCommand::LineTo(Point2::new(x2, -half_aperture)),
            surface_command(&self.rear, rear_edge, Point2::new(x2, half_aperture)),
            PathCommand::Close,
        ]
    }
}

fn surface_command(
    surface: &SurfaceRadius,
    edge: EdgeOffset,
    end: Point2<Length>,
) -> PathCommand {
    if surface.is_flat() {
        PathCommand::LineTo(end)
    } else {
        PathCommand::ArcTo {
            radius: surface.radius().abs(),
            large_arc: false,
            sweep: edge.sweep,
            end,
        }
    }
}
