//! UTM projection between geodetic coordinates and a planar meter frame
//!
//! City-scale datasets need metric distances for density queries, so all
//! points are projected into a single UTM zone before clustering. The zone
//! is chosen from the mean longitude; when a dataset straddles a zone
//! boundary the dominant zone is used for every point and the distortion
//! is reported through [`ZoneReport`] rather than raised as an error.

use crate::error::PipelineError;
use crate::point::GeodeticPoint;

/// WGS84 semi-major axis in meters
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// UTM central meridian scale factor
const K0: f64 = 0.9996;
/// UTM false easting in meters
const FALSE_EASTING: f64 = 500_000.0;
/// UTM false northing for the southern hemisphere in meters
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// A UTM zone identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    /// Zone number, 1..=60
    pub number: u8,
    /// True for the southern hemisphere
    pub south: bool,
}

impl Zone {
    /// Longitude of the zone's central meridian in degrees
    pub fn central_meridian_deg(&self) -> f64 {
        (self.number as f64 - 1.0) * 6.0 - 180.0 + 3.0
    }
}

/// A point in the planar meter frame of one UTM zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    /// Easting in meters
    pub x: f64,
    /// Northing in meters
    pub y: f64,
    /// Zone the point was projected into
    pub zone: Zone,
}

impl PlanarPoint {
    /// Returns squared Euclidean distance to another planar point
    pub fn sq_dist(&self, b: &PlanarPoint) -> f64 {
        let dx = self.x - b.x;
        let dy = self.y - b.y;
        dx * dx + dy * dy
    }
}

/// Projection metadata for one dataset
///
/// `spans_zones` flags the multi-zone tradeoff explicitly: computation
/// proceeds in the dominant zone, and `max_meridian_offset_deg` lets the
/// caller judge the resulting distortion (UTM stays accurate to roughly
/// half a zone width, 3 degrees, from the central meridian).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneReport {
    /// Zone every point was projected into
    pub zone: Zone,
    /// True if any point's natural zone differs from the chosen one
    pub spans_zones: bool,
    /// Maximum absolute longitude offset from the central meridian, degrees
    pub max_meridian_offset_deg: f64,
}

/// Returns the UTM zone number for a longitude
///
/// `zone = floor((lon + 180) / 6) + 1`, with the lon = 180 edge folded
/// into zone 60.
pub fn utm_zone(lon: f64) -> u8 {
    let zone = ((lon + 180.0) / 6.0).floor() as i32 + 1;
    zone.clamp(1, 60) as u8
}

/// Bidirectional transform between geodetic degrees and UTM meters
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    zone: Zone,
}

impl Projector {
    /// Creates a projector for a fixed zone
    pub fn new(zone: Zone) -> Self {
        Projector { zone }
    }

    /// The zone this projector transforms into
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Selects the projection zone for a dataset
    ///
    /// The zone comes from the mean longitude and the hemisphere from the
    /// sign of the mean latitude, so every point of one run resolves to a
    /// single zone.
    ///
    /// # Returns
    ///
    /// The projector plus a [`ZoneReport`] describing zone spanning and
    /// the worst central-meridian offset.
    pub fn for_points(points: &[GeodeticPoint]) -> Result<(Projector, ZoneReport), PipelineError> {
        if points.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let n = points.len() as f64;
        let mean_lon = points.iter().map(|p| p.lon).sum::<f64>() / n;
        let mean_lat = points.iter().map(|p| p.lat).sum::<f64>() / n;

        let zone = Zone {
            number: utm_zone(mean_lon),
            south: mean_lat < 0.0,
        };
        let meridian = zone.central_meridian_deg();

        let mut spans_zones = false;
        let mut max_offset = 0.0_f64;
        for p in points {
            if utm_zone(p.lon) != zone.number {
                spans_zones = true;
            }
            max_offset = max_offset.max((p.lon - meridian).abs());
        }

        let report = ZoneReport {
            zone,
            spans_zones,
            max_meridian_offset_deg: max_offset,
        };
        Ok((Projector::new(zone), report))
    }

    /// Projects a geodetic point into this projector's zone
    ///
    /// Standard UTM transverse Mercator series on the WGS84 ellipsoid;
    /// the round trip with [`Projector::to_geodetic`] is accurate to well
    /// under a meter for in-zone points.
    pub fn to_planar(&self, p: &GeodeticPoint) -> PlanarPoint {
        let e2 = WGS84_F * (2.0 - WGS84_F);
        let ep2 = e2 / (1.0 - e2);

        let phi = p.lat.to_radians();
        let lam = p.lon.to_radians();
        let lam0 = self.zone.central_meridian_deg().to_radians();

        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let tan_phi = phi.tan();

        let n = WGS84_A / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let a = (lam - lam0) * cos_phi;

        // Meridian arc length from the equator
        let m = WGS84_A
            * ((1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e2 * e2 / 32.0 + 45.0 * e2 * e2 * e2 / 1024.0)
                    * (2.0 * phi).sin()
                + (15.0 * e2 * e2 / 256.0 + 45.0 * e2 * e2 * e2 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e2 * e2 * e2 / 3072.0) * (6.0 * phi).sin());

        let x = K0
            * n
            * (a + (1.0 - t + c) * a.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0)
            + FALSE_EASTING;

        let mut y = K0
            * (m + n
                * tan_phi
                * (a * a / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a.powi(6) / 720.0));
        if self.zone.south {
            y += FALSE_NORTHING_SOUTH;
        }

        PlanarPoint {
            x,
            y,
            zone: self.zone,
        }
    }

    /// Projects a planar point back to geodetic degrees
    pub fn to_geodetic(&self, p: &PlanarPoint) -> GeodeticPoint {
        let e2 = WGS84_F * (2.0 - WGS84_F);
        let ep2 = e2 / (1.0 - e2);
        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());

        let x = p.x - FALSE_EASTING;
        let y = if p.zone.south {
            p.y - FALSE_NORTHING_SOUTH
        } else {
            p.y
        };
        let lam0 = p.zone.central_meridian_deg().to_radians();

        let m = y / K0;
        let mu = m
            / (WGS84_A * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0));

        // Footpoint latitude
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let sin_phi1 = phi1.sin();
        let cos_phi1 = phi1.cos();
        let tan_phi1 = phi1.tan();

        let c1 = ep2 * cos_phi1 * cos_phi1;
        let t1 = tan_phi1 * tan_phi1;
        let n1 = WGS84_A / (1.0 - e2 * sin_phi1 * sin_phi1).sqrt();
        let r1 = WGS84_A * (1.0 - e2) / (1.0 - e2 * sin_phi1 * sin_phi1).powf(1.5);
        let d = x / (n1 * K0);

        let phi = phi1
            - (n1 * tan_phi1 / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);

        let lam = lam0
            + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
                + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                    * d.powi(5)
                    / 120.0)
                / cos_phi1;

        GeodeticPoint {
            lon: lam.to_degrees(),
            lat: phi.to_degrees(),
        }
    }
}
