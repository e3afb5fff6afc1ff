use crate::error::{ConversionError, Result};
use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use tracing::debug;

/// RD New (EPSG:28992): oblique stereographic on the Bessel 1841 ellipsoid
/// with the standard seven-parameter shift to WGS84.
const RD_NEW: &str = "+proj=sterea +lat_0=52.15616055555555 +lon_0=5.38763888888889 \
     +k=0.9999079 +x_0=155000 +y_0=463000 +ellps=bessel \
     +towgs84=565.417,50.3319,465.552,-0.398957,0.343988,-1.8774,4.0725 \
     +units=m +no_defs";

/// WGS84 (EPSG:4326) as a geographic CRS.
const WGS84: &str = "+proj=longlat +ellps=WGS84 +datum=WGS84 +no_defs";

/// Fixed EPSG:28992 → EPSG:4326 transformation context.
///
/// Axis order is explicitly (x, y) in and (longitude, latitude) out — the
/// proj pipeline convention — never the EPSG-native (latitude, longitude)
/// order of 4326.
pub struct Reprojector {
    source: Proj,
    target: Proj,
}

impl Reprojector {
    pub fn rd_to_wgs84() -> Result<Self> {
        let source = Proj::from_proj_string(RD_NEW)
            .map_err(|e| ConversionError::ProjectionSetup(e.to_string()))?;
        let target = Proj::from_proj_string(WGS84)
            .map_err(|e| ConversionError::ProjectionSetup(e.to_string()))?;
        Ok(Self { source, target })
    }

    /// Transform full coordinate column vectors in one call.
    ///
    /// Returns `(longitude, latitude)` vectors in decimal degrees, aligned
    /// by position with the input vectors.
    pub fn transform_points(&self, x_rd: &[f64], y_rd: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        assert_eq!(x_rd.len(), y_rd.len());

        let mut longitudes = Vec::with_capacity(x_rd.len());
        let mut latitudes = Vec::with_capacity(y_rd.len());
        for (&x, &y) in x_rd.iter().zip(y_rd) {
            let (lon, lat) = self.transform_point(x, y)?;
            longitudes.push(lon);
            latitudes.push(lat);
        }
        debug!("Reprojected {} coordinate pairs", longitudes.len());
        Ok((longitudes, latitudes))
    }

    /// Transform a single RD New coordinate to WGS84 degrees.
    pub fn transform_point(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let mut point = (x, y, 0.0);
        transform(&self.source, &self.target, &mut point)
            .map_err(|e| ConversionError::Transform(e.to_string()))?;
        // Geographic output from proj4rs is in radians.
        Ok((point.0.to_degrees(), point.1.to_degrees()))
    }
}
