/// Reference ellipsoid model: equatorial radius and first eccentricity.
#[derive(Debug, Clone, Copy)]
pub struct Ellipsoid {
    pub equatorial_radius_km: f64,
    pub eccentricity: f64,
}

/// WGS84 reference ellipsoid
pub const WGS84: Ellipsoid = Ellipsoid {
    equatorial_radius_km: 6378.137,
    eccentricity: 0.081819221456,
};

impl Ellipsoid {
    /// Radius of curvature in the prime vertical at the given geodetic
    /// latitude: R / sqrt(1 - e^2 * sin^2(lat))
    pub fn prime_vertical_radius_km(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        let denom = (1.0 - self.eccentricity * self.eccentricity * sin_lat * sin_lat).sqrt();
        self.equatorial_radius_km / denom
    }
}
