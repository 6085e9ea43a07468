use nalgebra::Vector3;

use crate::ellipsoid::Ellipsoid;
use crate::error::ConvertError;

/// Convergence tolerance for successive latitude estimates (radians)
const LAT_TOLERANCE_RAD: f64 = 1e-6;

/// Safety cap on latitude refinement; terrestrial inputs converge well before it
const MAX_ITERATIONS: u32 = 5;

/// Geodetic coordinates for an ECEF position, with iteration diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub height_km: f64,
    /// Latitude refinement iterations executed (at most MAX_ITERATIONS)
    pub iterations: u32,
    /// Absolute difference of the last two latitude estimates (radians)
    pub residual_rad: f64,
}

/// Result of the latitude refinement loop. The prime-vertical radius from the
/// final iteration is carried out explicitly because the height calculation
/// depends on it.
struct RefinedLatitude {
    lat_rad: f64,
    c_e_km: f64,
    iterations: u32,
    residual_rad: f64,
}

/// Convert an ECEF position vector (km) to geodetic longitude (deg),
/// latitude (deg), and height above the ellipsoid (km).
///
/// Follows Vallado, "Fundamentals of Astrodynamics and Applications",
/// pp. 172-173: closed-form longitude, then fixed-point iteration on
/// latitude to account for ellipsoidal flattening.
///
/// The zero vector is rejected; a position on the polar axis is allowed
/// and resolves to latitude +/-90 deg with longitude 0.
pub fn ecef_to_geodetic(
    r_ecef_km: &Vector3<f64>,
    ellipsoid: &Ellipsoid,
) -> Result<Geodetic, ConvertError> {
    if r_ecef_km.x == 0.0 && r_ecef_km.y == 0.0 && r_ecef_km.z == 0.0 {
        return Err(ConvertError::ZeroVector);
    }

    // Longitude is closed form and independent of the ellipsoid
    let lon_rad = r_ecef_km.y.atan2(r_ecef_km.x);

    // Distance from the polar axis
    let r_lon_km = (r_ecef_km.x * r_ecef_km.x + r_ecef_km.y * r_ecef_km.y).sqrt();

    // Spherical approximation as the starting latitude estimate
    let lat_guess_rad = (r_ecef_km.z / r_ecef_km.norm()).asin();

    let refined = refine_latitude(lat_guess_rad, r_ecef_km.z, r_lon_km, ellipsoid);

    // Height above the ellipsoid from the converged latitude and the
    // prime-vertical radius of the final iteration
    let height_km = r_lon_km / refined.lat_rad.cos() - refined.c_e_km;

    Ok(Geodetic {
        longitude_deg: lon_rad.to_degrees(),
        latitude_deg: refined.lat_rad.to_degrees(),
        height_km,
        iterations: refined.iterations,
        residual_rad: refined.residual_rad,
    })
}

// Fixed-point iteration on geodetic latitude:
//   lat <- atan((z + c_E * e^2 * sin(lat)) / r_lon)
// Terminates on convergence (successive estimates within LAT_TOLERANCE_RAD)
// or at MAX_ITERATIONS, whichever comes first. The cap terminates silently;
// the caller can inspect the residual.
fn refine_latitude(
    initial_lat_rad: f64,
    r_z_km: f64,
    r_lon_km: f64,
    ellipsoid: &Ellipsoid,
) -> RefinedLatitude {
    let e2 = ellipsoid.eccentricity * ellipsoid.eccentricity;

    let mut lat_rad = initial_lat_rad;
    let mut prev_lat_rad: Option<f64> = None;
    let mut c_e_km = ellipsoid.prime_vertical_radius_km(lat_rad);
    let mut iterations = 0;

    while iterations < MAX_ITERATIONS {
        if let Some(prev) = prev_lat_rad {
            if (lat_rad - prev).abs() <= LAT_TOLERANCE_RAD {
                break;
            }
        }
        c_e_km = ellipsoid.prime_vertical_radius_km(lat_rad);
        prev_lat_rad = Some(lat_rad);
        lat_rad = ((r_z_km + c_e_km * e2 * lat_rad.sin()) / r_lon_km).atan();
        iterations += 1;
    }

    let residual_rad = prev_lat_rad.map_or(0.0, |prev| (lat_rad - prev).abs());

    RefinedLatitude {
        lat_rad,
        c_e_km,
        iterations,
        residual_rad,
    }
}
