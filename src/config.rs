#![warn(missing_docs)]
//! Bench description files.
//!
//! A bench is described by a YAML document containing a list of lenses and a list of input rays.
//! Lengths are given in millimeters, angles in radians. A missing radius of curvature denotes a
//! flat surface, a missing ray end reaches to infinity.
//!
//! ```yaml
//! lenses:
//!   - front_radius_mm: 50.0
//!     thickness_mm: 5.0
//!     diameter_mm: 20.0
//!     position_mm: 0.0
//!     refractive_index: 1.5
//! rays:
//!   - start_x_mm: -10.0
//!     height_mm: 5.0
//! ```
use crate::{
    bench::OpticalBench,
    error::{BenchError, BenchResult},
    lens::Lens,
    millimeter, radian,
    ray::Ray,
    ray_segment::{RaySegment, REFRACTIVE_INDEX_VACUUM},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

const fn flat_radius() -> f64 {
    f64::INFINITY
}
const fn unbounded() -> f64 {
    f64::INFINITY
}
const fn vacuum() -> f64 {
    REFRACTIVE_INDEX_VACUUM
}

/// Description of a single lens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LensConfig {
    /// signed radius of curvature of the front surface (flat if omitted)
    #[serde(default = "flat_radius")]
    pub front_radius_mm: f64,
    /// signed radius of curvature of the rear surface (flat if omitted)
    #[serde(default = "flat_radius")]
    pub rear_radius_mm: f64,
    /// center thickness
    pub thickness_mm: f64,
    /// clear aperture
    pub diameter_mm: f64,
    /// axial position of the front vertex
    pub position_mm: f64,
    /// refractive index of the lens material
    pub refractive_index: f64,
}
impl TryFrom<&LensConfig> for Lens {
    type Error = BenchError;

    fn try_from(config: &LensConfig) -> BenchResult<Self> {
        Self::new(
            millimeter!(config.front_radius_mm),
            millimeter!(config.rear_radius_mm),
            millimeter!(config.thickness_mm),
            millimeter!(config.diameter_mm),
            millimeter!(config.position_mm),
            config.refractive_index,
        )
    }
}

/// Description of an input ray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RayConfig {
    /// axial start position
    pub start_x_mm: f64,
    /// axial end position (infinite if omitted)
    #[serde(default = "unbounded")]
    pub end_x_mm: f64,
    /// height at the start position
    pub height_mm: f64,
    /// angle relative to the optical axis
    #[serde(default)]
    pub angle_rad: f64,
    /// refractive index of the medium the ray starts in
    #[serde(default = "vacuum")]
    pub refractive_index: f64,
}
impl TryFrom<&RayConfig> for Ray {
    type Error = BenchError;

    fn try_from(config: &RayConfig) -> BenchResult<Self> {
        let segment = RaySegment::new(
            millimeter!(config.start_x_mm),
            millimeter!(config.end_x_mm),
            millimeter!(config.height_mm),
            radian!(config.angle_rad),
            config.refractive_index,
        )?;
        Ok(Self::from_segment(segment))
    }
}

/// Description of a complete bench: the lenses and the rays to be traced through them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    /// lenses in arbitrary order
    #[serde(default)]
    pub lenses: Vec<LensConfig>,
    /// input rays
    #[serde(default)]
    pub rays: Vec<RayConfig>,
}
impl BenchConfig {
    /// Read a [`BenchConfig`] from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing of the file failed.
    pub fn from_file(path: &Path) -> BenchResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            BenchError::Config(format!("cannot read file {} : {}", path.display(), e))
        })?;
        Self::from_yaml(&contents)
    }
    /// Parse a [`BenchConfig`] from the given YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the string is not a valid bench description.
    pub fn from_yaml(yaml: &str) -> BenchResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| BenchError::Config(format!("parsing of bench description failed: {e}")))
    }
    /// Serialize this [`BenchConfig`] into a YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization failed.
    pub fn to_yaml(&self) -> BenchResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| BenchError::Config(format!("serialization of bench description failed: {e}")))
    }
    /// Create the [`OpticalBench`] and the input rays described by this [`BenchConfig`].
    ///
    /// # Errors
    ///
    /// This function will return an error if a lens or a ray has invalid parameters or if lenses overlap.
    pub fn build(&self) -> BenchResult<(OpticalBench, Vec<Ray>)> {
        let mut bench = OpticalBench::new();
        for (idx, lens_config) in self.lenses.iter().enumerate() {
            let slot = Lens::try_from(lens_config)
                .and_then(|lens| bench.add_lens(lens))
                .map_err(|e| BenchError::Config(format!("lens #{idx}: {e}")))?;
            debug!("lens #{idx} placed at slot {slot}");
        }
        let rays = self
            .rays
            .iter()
            .enumerate()
            .map(|(idx, ray_config)| {
                Ray::try_from(ray_config).map_err(|e| BenchError::Config(format!("ray #{idx}: {e}")))
            })
            .collect::<BenchResult<Vec<_>>>()?;
        Ok((bench, rays))
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use uom::si::{angle::radian, length::millimeter};

    const BENCH: &str = "
lenses:
  - front_radius_mm: 50.0
    thickness_mm: 5.0
    diameter_mm: 20.0
    position_mm: 40.0
    refractive_index: 1.5
  - front_radius_mm: 100.0
    rear_radius_mm: -100.0
    thickness_mm: 4.0
    diameter_mm: 25.0
    position_mm: 0.0
    refractive_index: 1.5168
rays:
  - start_x_mm: -10.0
    height_mm: 5.0
  - start_x_mm: -20.0
    end_x_mm: 200.0
    height_mm: 0.0
    angle_rad: 0.01
    refractive_index: 1.33
";

    #[test]
    fn from_yaml() {
        let config = BenchConfig::from_yaml(BENCH).unwrap();
        assert_eq!(config.lenses.len(), 2);
        assert_eq!(config.rays.len(), 2);
        assert_eq!(config.lenses[0].rear_radius_mm, f64::INFINITY);
        assert_eq!(config.rays[0].end_x_mm, f64::INFINITY);
        assert_eq!(config.rays[0].angle_rad, 0.0);
        assert_eq!(config.rays[0].refractive_index, 1.0);
        assert_eq!(config.rays[1].refractive_index, 1.33);
    }
    #[test]
    fn from_yaml_invalid() {
        assert_matches!(
            BenchConfig::from_yaml("lenses: 3"),
            Err(BenchError::Config(_))
        );
        assert_matches!(
            BenchConfig::from_yaml("rays:\n  - start_x_mm: 0.0\n    height_mm: 1.0\n    hight_mm: 2.0\n"),
            Err(BenchError::Config(_))
        );
        assert_matches!(
            BenchConfig::from_yaml("lenses:\n  - thickness_mm: 1.0\n"),
            Err(BenchError::Config(_))
        );
    }
    #[test]
    fn empty() {
        let config = BenchConfig::from_yaml("{}").unwrap();
        assert_eq!(config, BenchConfig::default());
        let (bench, rays) = config.build().unwrap();
        assert!(bench.is_empty());
        assert!(rays.is_empty());
    }
    #[test]
    fn explicit_infinity() {
        let config = BenchConfig::from_yaml(
            "lenses:\n  - front_radius_mm: .inf\n    rear_radius_mm: -.inf\n    thickness_mm: 1.0\n    diameter_mm: 10.0\n    position_mm: 0.0\n    refractive_index: 1.5\n",
        )
        .unwrap();
        let (bench, _) = config.build().unwrap();
        assert!(bench.lenses()[0].front_surface().is_flat());
        assert!(bench.lenses()[0].rear_surface().is_flat());
    }
    #[test]
    fn build() {
        let (bench, rays) = BenchConfig::from_yaml(BENCH).unwrap().build().unwrap();
        assert_eq!(bench.len(), 2);
        assert_eq!(bench.lenses()[0].position(), millimeter!(0.0));
        assert_eq!(bench.lenses()[1].position(), millimeter!(40.0));
        assert_eq!(rays.len(), 2);
        let segment = &rays[1].segments()[0];
        assert_eq!(segment.start_x(), millimeter!(-20.0));
        assert_eq!(segment.end_x(), millimeter!(200.0));
        assert_relative_eq!(segment.angle().get::<radian>(), 0.01);
        assert_eq!(segment.refractive_index(), 1.33);
    }
    #[test]
    fn build_invalid() {
        let mut config = BenchConfig::from_yaml(BENCH).unwrap();
        config.lenses[1].diameter_mm = 250.0;
        assert_matches!(config.build(), Err(BenchError::Config(msg)) if msg.starts_with("lens #1:"));
        let mut config = BenchConfig::from_yaml(BENCH).unwrap();
        config.lenses[1].position_mm = 38.0;
        assert_matches!(config.build(), Err(BenchError::Config(msg)) if msg.starts_with("lens #1:"));
        let mut config = BenchConfig::from_yaml(BENCH).unwrap();
        config.rays[0].refractive_index = 0.5;
        assert_matches!(config.build(), Err(BenchError::Config(msg)) if msg.starts_with("ray #0:"));
    }
    #[test]
    fn from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{BENCH}").unwrap();
        let config = BenchConfig::from_file(file.path()).unwrap();
        assert_eq!(config, BenchConfig::from_yaml(BENCH).unwrap());
        assert_matches!(
            BenchConfig::from_file(Path::new("./invalid_file_path/bench.yaml")),
            Err(BenchError::Config(_))
        );
    }
    #[test]
    fn to_yaml() {
        let config = BenchConfig::from_yaml(BENCH).unwrap();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(BenchConfig::from_yaml(&yaml).unwrap(), config);
    }
}
