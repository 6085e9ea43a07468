mod cli;
mod ellipsoid;
mod error;
mod geodetic;

use anyhow::Result;
use clap::Parser;
use nalgebra::Vector3;

use cli::Cli;
use geodetic::ecef_to_geodetic;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let r_ecef_km = Vector3::new(cli.r_x_km, cli.r_y_km, cli.r_z_km);
    let result = ecef_to_geodetic(&r_ecef_km, &ellipsoid::WGS84)?;

    if cli.verbose {
        eprintln!(
            "latitude refined in {} iteration(s), residual {:e} rad",
            result.iterations, result.residual_rad
        );
    }

    // Longitude (deg), latitude (deg), and height above the ellipsoid (km)
    println!("{}", result.longitude_deg);
    println!("{}", result.latitude_deg);
    println!("{}", result.height_km);

    Ok(())
}
