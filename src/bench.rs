#![warn(missing_docs)]
//! A stack of lenses along the optical axis.
//!
//! An [`OpticalBench`] keeps its lenses sorted by position and traces rays through all of them in
//! axial order. Independent rays can be traced in parallel (see [`OpticalBench::trace_rays`]).
use crate::{
    error::{BenchError, BenchResult},
    lens::{Lens, LensPassage},
    path::PathCommand,
    ray::Ray,
};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::Display;

/// An ordered, non-overlapping stack of [`Lens`]es.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpticalBench {
    lenses: Vec<Lens>,
}
impl OpticalBench {
    /// Creates a new, empty [`OpticalBench`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Add a [`Lens`] to this [`OpticalBench`].
    ///
    /// The lens is inserted according to its axial position. Returns the index of the lens in the stack.
    ///
    /// # Errors
    ///
    /// This function will return an error if the axial extent of the lens (including its aperture edges)
    /// overlaps with a lens already on the bench.
    pub fn add_lens(&mut self, lens: Lens) -> BenchResult<usize> {
        let (start, end) = lens.axial_extent();
        for (idx, other) in self.lenses.iter().enumerate() {
            let (other_start, other_end) = other.axial_extent();
            if start < other_end && other_start < end {
                return Err(BenchError::Bench(format!(
                    "lens overlaps with lens #{idx} ({other})"
                )));
            }
        }
        let idx = self
            .lenses
            .partition_point(|other| other.position() < lens.position());
        self.lenses.insert(idx, lens);
        Ok(idx)
    }
    /// Returns the lenses of this [`OpticalBench`] in axial order.
    #[must_use]
    pub fn lenses(&self) -> &[Lens] {
        &self.lenses
    }
    /// Returns the number of lenses on this [`OpticalBench`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.lenses.len()
    }
    /// Returns `true` if there are no lenses on this [`OpticalBench`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lenses.is_empty()
    }
    /// Trace a [`Ray`] through all lenses of this [`OpticalBench`].
    ///
    /// The lenses are traced in axial order. A lens missed by the ray leaves it untouched and tracing
    /// continues with the next lens. Tracing stops after a [`LensPassage::Vignetted`] passage since the
    /// ray ends at the rim of that lens. Returns one [`LensPassage`] for each lens the ray reached.
    ///
    /// # Errors
    ///
    /// This function will return an error if the ray cannot be traced through one of the lenses (see
    /// [`Lens::trace`]). The ray then keeps the segments added by the lenses in front of the failing one.
    pub fn trace(&self, ray: &mut Ray) -> BenchResult<Vec<LensPassage>> {
        let mut passages = Vec::with_capacity(self.lenses.len());
        for (idx, lens) in self.lenses.iter().enumerate() {
            let passage = lens.trace(ray)?;
            info!("lens #{idx}: ray {passage}");
            passages.push(passage);
            if passage == LensPassage::Vignetted {
                let remaining = self.lenses.len() - idx - 1;
                if remaining > 0 {
                    warn!("ray stopped at lens #{idx}, {remaining} lens(es) not reached");
                }
                break;
            }
        }
        Ok(passages)
    }
    /// Trace a set of independent rays through this [`OpticalBench`] in parallel.
    ///
    /// Every ray is traced by exactly one worker while the lenses are shared read-only. The results are
    /// returned in the order of the given rays.
    pub fn trace_rays(&self, rays: &mut [Ray]) -> Vec<BenchResult<Vec<LensPassage>>> {
        rays.par_iter_mut().map(|ray| self.trace(ray)).collect()
    }
    /// Returns the outlines of all lenses in axial order.
    #[must_use]
    pub fn outlines(&self) -> Vec<Vec<PathCommand>> {
        self.lenses.iter().map(Lens::boundary).collect()
    }
}
impl Display for OpticalBench {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, lens) in self.lenses.iter().enumerate() {
            writeln!(f, "#{idx}: {lens}")?;
        }
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{millimeter, utils::test_helper::test_helper::check_logs};
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use uom::si::{angle::radian, length::millimeter};

    fn plano_convex(position: f64) -> Lens {
        Lens::new(
            millimeter!(50.0),
            millimeter!(f64::INFINITY),
            millimeter!(5.0),
            millimeter!(20.0),
            millimeter!(position),
            1.5,
        )
        .unwrap()
    }
    fn ray_at(height: f64) -> Ray {
        Ray::new(
            millimeter!(-10.0),
            millimeter!(f64::INFINITY),
            millimeter!(height),
        )
        .unwrap()
    }
    #[test]
    fn new() {
        let bench = OpticalBench::new();
        assert!(bench.is_empty());
        assert_eq!(bench.len(), 0);
        assert!(bench.outlines().is_empty());
    }
    #[test]
    fn add_lens_sorted() {
        let mut bench = OpticalBench::new();
        assert_eq!(bench.add_lens(plano_convex(100.0)).unwrap(), 0);
        assert_eq!(bench.add_lens(plano_convex(0.0)).unwrap(), 0);
        assert_eq!(bench.add_lens(plano_convex(50.0)).unwrap(), 1);
        let positions: Vec<_> = bench.lenses().iter().map(Lens::position).collect();
        assert_eq!(
            positions,
            vec![millimeter!(0.0), millimeter!(50.0), millimeter!(100.0)]
        );
    }
    #[test]
    fn add_lens_overlapping() {
        let mut bench = OpticalBench::new();
        bench.add_lens(plano_convex(0.0)).unwrap();
        assert_matches!(
            bench.add_lens(plano_convex(3.0)),
            Err(BenchError::Bench(_))
        );
        assert_matches!(
            bench.add_lens(plano_convex(-2.0)),
            Err(BenchError::Bench(_))
        );
        assert_eq!(bench.len(), 1);
        assert!(bench.add_lens(plano_convex(5.0)).is_ok());
    }
    #[test]
    fn trace_on_axis() {
        let mut bench = OpticalBench::new();
        bench.add_lens(plano_convex(0.0)).unwrap();
        bench.add_lens(plano_convex(50.0)).unwrap();
        let mut ray = ray_at(0.0);
        let passages = bench.trace(&mut ray).unwrap();
        assert_eq!(
            passages,
            vec![LensPassage::Transmitted, LensPassage::Transmitted]
        );
        assert_eq!(ray.len(), 5);
        assert_eq!(ray.exit_height(), Some(millimeter!(0.0)));
        assert!(ray.is_continuous(millimeter!(1e-12)));
    }
    #[test]
    fn trace_missed_lens_continues() {
        let mut bench = OpticalBench::new();
        bench.add_lens(plano_convex(0.0)).unwrap();
        bench
            .add_lens(
                Lens::new(
                    millimeter!(f64::INFINITY),
                    millimeter!(f64::INFINITY),
                    millimeter!(5.0),
                    millimeter!(60.0),
                    millimeter!(50.0),
                    1.5,
                )
                .unwrap(),
            )
            .unwrap();
        let mut ray = ray_at(15.0);
        let passages = bench.trace(&mut ray).unwrap();
        assert_eq!(
            passages,
            vec![LensPassage::Missed, LensPassage::Transmitted]
        );
        assert_eq!(ray.len(), 3);
        assert_relative_eq!(ray.exit_angle().unwrap().get::<radian>(), 0.0);
    }
    #[test]
    fn trace_stops_after_vignetting() {
        let mut bench = OpticalBench::new();
        bench.add_lens(plano_convex(0.0)).unwrap();
        bench.add_lens(plano_convex(50.0)).unwrap();
        let segment = crate::ray_segment::RaySegment::new_in_vacuum(
            millimeter!(0.0),
            millimeter!(f64::INFINITY),
            millimeter!(9.0),
            crate::radian!(0.5),
        )
        .unwrap();
        let mut ray = Ray::from_segment(segment);
        testing_logger::setup();
        let passages = bench.trace(&mut ray).unwrap();
        check_logs(
            log::Level::Warn,
            vec![
                "ray leaves the lens through its rim at x = 5.000 mm",
                "ray stopped at lens #0, 1 lens(es) not reached",
            ],
        );
        assert_eq!(passages, vec![LensPassage::Vignetted]);
        assert_eq!(ray.len(), 2);
    }
    #[test]
    fn trace_error() {
        let mut bench = OpticalBench::new();
        bench.add_lens(plano_convex(0.0)).unwrap();
        let mut ray = Ray::new(millimeter!(1.0), millimeter!(10.0), millimeter!(0.0)).unwrap();
        assert_matches!(bench.trace(&mut ray), Err(BenchError::Trace(_)));
    }
    #[test]
    fn trace_rays() {
        let mut bench = OpticalBench::new();
        bench.add_lens(plano_convex(0.0)).unwrap();
        let mut rays: Vec<Ray> = (-4..=4).map(|h| ray_at(f64::from(h))).collect();
        rays.push(Ray::new(millimeter!(1.0), millimeter!(10.0), millimeter!(0.0)).unwrap());
        let results = bench.trace_rays(&mut rays);
        assert_eq!(results.len(), 10);
        for (result, ray) in results.iter().zip(rays.iter()).take(9) {
            assert_eq!(result.as_ref().unwrap(), &vec![LensPassage::Transmitted]);
            assert_eq!(ray.len(), 3);
            let start_height = ray.segments()[0].start_height();
            let exit_angle = ray.exit_angle().unwrap().get::<radian>();
            // converging: the exit angle has the opposite sign of the input height
            assert!(start_height.get::<millimeter>() * exit_angle <= 0.0);
        }
        assert!(results[9].is_err());
        let mut sequential = ray_at(3.0);
        bench.trace(&mut sequential).unwrap();
        assert_eq!(rays[7], sequential);
    }
    #[test]
    fn outlines() {
        let mut bench = OpticalBench::new();
        bench.add_lens(plano_convex(50.0)).unwrap();
        bench.add_lens(plano_convex(0.0)).unwrap();
        let outlines = bench.outlines();
        assert_eq!(outlines.len(), 2);
        assert_eq!(outlines[0], bench.lenses()[0].boundary());
        assert_eq!(outlines[1], bench.lenses()[1].boundary());
    }
    #[test]
    fn display() {
        let mut bench = OpticalBench::new();
        bench.add_lens(plano_convex(0.0)).unwrap();
        assert_eq!(
            format!("{bench}"),
            "#0: lens @ 0.000 mm: front 50.000 mm, rear flat, thickness 5.000 mm, diameter 20.000 mm, n = 1.5\n"
        );
    }
}
