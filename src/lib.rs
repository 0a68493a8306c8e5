//! This is the documentation for the **lensbench** package, a paraxial optical bench.
//!
//! Lenses are described by two spherical (or flat) surfaces, a center thickness, a clear aperture, an
//! axial position and a refractive index. Rays travel along the optical axis (`+x`) as a polyline of
//! [`RaySegment`](ray_segment::RaySegment)s and are bent at each surface by the paraxial refraction law.
//!
//! The same lens parameters also define the 2-D outline of the lens cross-section, which is handed to a
//! renderer as a list of [`PathCommand`](path::PathCommand)s.
//!
//! ```
//! use lensbench::{lens::{Lens, LensPassage}, millimeter, ray::Ray};
//!
//! let lens = Lens::new(
//!     millimeter!(50.0),
//!     millimeter!(f64::INFINITY),
//!     millimeter!(5.0),
//!     millimeter!(20.0),
//!     millimeter!(0.0),
//!     1.5,
//! )
//! .unwrap();
//! let mut ray = Ray::new(millimeter!(-10.0), millimeter!(f64::INFINITY), millimeter!(5.0)).unwrap();
//! assert_eq!(lens.trace(&mut ray).unwrap(), LensPassage::Transmitted);
//! assert_eq!(ray.len(), 3);
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod bench;
pub mod config;
pub mod console;
pub mod error;
pub mod lens;
pub mod path;
pub mod ray;
pub mod ray_segment;
pub mod surface;
pub mod utils;

pub use bench::OpticalBench;
