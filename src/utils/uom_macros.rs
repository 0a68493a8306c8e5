#![warn(missing_docs)]
//! Shorthand macros for lengths, angles and 2-D points.
//!
//! Each macro takes either a single value (returning a quantity) or two values (returning a
//! [`nalgebra::Point2`] of quantities, e.g. an `(x, height)` point of a path).

/// Create a quantity or a `Point2` of quantities in the given unit.
#[macro_export]
macro_rules! uom_unit_creator {
    ($unit:ident, $quantity:ident, $value:expr) => {
        $quantity::new::<$unit>($value)
    };
    ($unit:ident, $quantity:ident, $x:expr, $y:expr) => {
        nalgebra::Point2::new($quantity::new::<$unit>($x), $quantity::new::<$unit>($y))
    };
}

/// Create a `Length` (or a `Point2<Length>`) in meters.
#[macro_export]
macro_rules! meter {
    ($( $v:expr ),+) => {{
        use uom::si::{f64::Length, length::meter};
        $crate::uom_unit_creator![meter, Length, $( $v ),+]
    }};
}
/// Create a `Length` (or a `Point2<Length>`) in millimeters.
#[macro_export]
macro_rules! millimeter {
    ($( $v:expr ),+) => {{
        use uom::si::{f64::Length, length::millimeter};
        $crate::uom_unit_creator![millimeter, Length, $( $v ),+]
    }};
}
/// Create an `Angle` in radians.
#[macro_export]
macro_rules! radian {
    ($v:expr) => {{
        use uom::si::{angle::radian, f64::Angle};
        $crate::uom_unit_creator![radian, Angle, $v]
    }};
}
/// Create an `Angle` in degrees.
#[macro_export]
macro_rules! degree {
    ($v:expr) => {{
        use uom::si::{angle::degree, f64::Angle};
        $crate::uom_unit_creator![degree, Angle, $v]
    }};
}
