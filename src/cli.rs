use clap::Parser;

/// Convert an ECEF position vector to geodetic longitude, latitude, and
/// height above the WGS84 reference ellipsoid.
#[derive(Parser, Debug)]
#[command(name = "ecef2llh", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// ECEF x-component in km
    pub r_x_km: f64,

    /// ECEF y-component in km
    pub r_y_km: f64,

    /// ECEF z-component in km
    pub r_z_km: f64,

    /// Report the iteration count and convergence residual on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
