#![warn(missing_docs)]
//! Drawing commands handed to a renderer.
//!
//! The coordinate system is the meridional plane of the bench: x is the optical axis, y the height
//! above the axis. Lens outlines ([`Lens::boundary`](crate::lens::Lens::boundary)) and ray paths
//! ([`Ray::to_path`](crate::ray::Ray::to_path)) are both expressed as a sequence of
//! [`PathCommand`]s. Turning them into pixels, SVG or any other format is left to the caller.
use nalgebra::Point2;
use std::fmt::Display;
use uom::si::{f64::Length, length::millimeter};

/// A single path command of a 2-D outline.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    /// Start a new sub path at the given point.
    MoveTo(Point2<Length>),
    /// Straight line from the current point to the given point.
    LineTo(Point2<Length>),
    /// Circular arc from the current point to `end`.
    ///
    /// The flags follow the SVG elliptical arc conventions for a renderer which maps positive heights
    /// to the upper half of the screen.
    ArcTo {
        /// radius of the (circular) arc
        radius: Length,
        /// SVG `large-arc-flag`
        large_arc: bool,
        /// SVG `sweep-flag`
        sweep: bool,
        /// end point of the arc
        end: Point2<Length>,
    },
    /// Close the current sub path with a straight line to its start point.
    Close,
}
impl PathCommand {
    /// Returns the end point of this [`PathCommand`].
    ///
    /// [`PathCommand::Close`] has no explicit end point and returns `None`.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2<Length>> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::ArcTo { end: p, .. } => Some(*p),
            Self::Close => None,
        }
    }
}
impl Display for PathCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mm = Length::format_args(millimeter, uom::fmt::DisplayStyle::Abbreviation);
        match self {
            Self::MoveTo(p) => write!(f, "M ({:.3}, {:.3})", mm.with(p.x), mm.with(p.y)),
            Self::LineTo(p) => write!(f, "L ({:.3}, {:.3})", mm.with(p.x), mm.with(p.y)),
            Self::ArcTo {
                radius,
                large_arc,
                sweep,
                end,
            } => write!(
                f,
                "A r={:.3} large_arc={} sweep={} ({:.3}, {:.3})",
                mm.with(*radius),
                u8::from(*large_arc),
                u8::from(*sweep),
                mm.with(end.x),
                mm.with(end.y)
            ),
            Self::Close => write!(f, "Z"),
        }
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::millimeter;
    #[test]
    fn end_point() {
        assert_eq!(
            PathCommand::MoveTo(millimeter!(1.0, 2.0)).end_point(),
            Some(millimeter!(1.0, 2.0))
        );
        assert_eq!(
            PathCommand::LineTo(millimeter!(3.0, 4.0)).end_point(),
            Some(millimeter!(3.0, 4.0))
        );
        let arc = PathCommand::ArcTo {
            radius: millimeter!(10.0),
            large_arc: false,
            sweep: true,
            end: millimeter!(0.0, -5.0),
        };
        assert_eq!(arc.end_point(), Some(millimeter!(0.0, -5.0)));
        assert_eq!(PathCommand::Close.end_point(), None);
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", PathCommand::MoveTo(millimeter!(1.0, -2.0))),
            "M (1.000 mm, -2.000 mm)"
        );
        assert_eq!(
            format!(
                "{}",
                PathCommand::ArcTo {
                    radius: millimeter!(50.0),
                    large_arc: false,
                    sweep: true,
                    end: millimeter!(1.0, -10.0),
                }
            ),
            "A r=50.000 mm large_arc=0 sweep=1 (1.000 mm, -10.000 mm)"
        );
        assert_eq!(format!("{}", PathCommand::Close), "Z");
    }
}
