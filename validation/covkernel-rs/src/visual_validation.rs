//! Combined Visualization Examples for Covariance Kernels
//!
//! This script runs multiple scenarios to generate CSV data for visualization.
//! It covers:
//! 1. Covariance Profiles (value vs distance per variant and length scale)
//! 2. Derivative Profiles (spatial and hyperparameter gradients vs distance)
//! 3. Anisotropic Surface (2D covariance against the origin)

use covkernel_rs::prelude::*;
use std::fs::File;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running All Visualization Examples...");
    println!("=====================================");
    println!();

    // Ensure output directory exists
    let output_dir = "../output/visual/";
    std::fs::create_dir_all(output_dir)?;
    println!("Output directory: {}", output_dir);
    println!();

    run_covariance_profiles(output_dir)?;
    println!();

    run_derivative_profiles(output_dir)?;
    println!();

    run_anisotropic_surface(output_dir)?;
    println!();

    println!("Done. Load the CSVs with any plotting tool.");
    Ok(())
}

/// Covariance vs distance for both variants at three length scales.
fn run_covariance_profiles(output_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Covariance Profiles");

    let scales = [0.5, 1.0, 2.0];
    let mut kernels: Vec<(String, Box<dyn CovarianceKernel<f64>>)> = Vec::new();
    let registry = KernelRegistry::<f64>::with_defaults();
    for tag in ["square_exponential", "matern_5_2"] {
        for scale in scales {
            let kernel = registry.create(tag, &[1.0, scale])?;
            kernels.push((format!("{}_l{}", tag, scale), kernel));
        }
    }

    let mut file = File::create(format!("{}covariance_profiles.csv", output_dir))?;
    let header: Vec<&str> = kernels.iter().map(|(name, _)| name.as_str()).collect();
    writeln!(file, "distance,{}", header.join(","))?;

    for step in 0..=200 {
        let distance = step as f64 * 0.02;
        let mut row = vec![format!("{}", distance)];
        for (_, kernel) in &kernels {
            row.push(format!("{}", kernel.evaluate(&[0.0], &[distance])?));
        }
        writeln!(file, "{}", row.join(","))?;
    }

    println!("   -> covariance_profiles.csv");
    Ok(())
}

/// Spatial and hyperparameter gradients vs distance for unit kernels.
fn run_derivative_profiles(output_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("2. Derivative Profiles");

    let registry = KernelRegistry::<f64>::with_defaults();
    let se = registry.create("square_exponential", &[1.0, 1.0])?;
    let matern = registry.create("matern_5_2", &[1.0, 1.0])?;

    let mut file = File::create(format!("{}derivative_profiles.csv", output_dir))?;
    writeln!(
        file,
        "distance,se_spatial,se_d_alpha,se_d_length,matern_spatial,matern_d_alpha,matern_d_length"
    )?;

    for step in 0..=200 {
        let distance = step as f64 * 0.02;
        let x1 = [0.0];
        let x2 = [distance];

        let se_spatial = se.spatial_gradient(&x1, &x2)?;
        let se_hyper = se.hyperparameter_gradient(&x1, &x2)?;
        let matern_spatial = matern.spatial_gradient(&x1, &x2)?;
        let matern_hyper = matern.hyperparameter_gradient(&x1, &x2)?;

        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            distance,
            se_spatial[0],
            se_hyper[0],
            se_hyper[1],
            matern_spatial[0],
            matern_hyper[0],
            matern_hyper[1]
        )?;
    }

    println!("   -> derivative_profiles.csv");
    Ok(())
}

/// 2D covariance surface against the origin with unequal length scales.
fn run_anisotropic_surface(output_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("3. Anisotropic Surface");

    let registry = KernelRegistry::<f64>::with_defaults();
    let se = registry.create("square_exponential", &[1.0, 1.0, 0.4])?;
    let matern = registry.create("matern_5_2", &[1.0, 1.0, 0.4])?;
    let origin = [0.0, 0.0];

    let mut file = File::create(format!("{}anisotropic_surface.csv", output_dir))?;
    writeln!(file, "x,y,square_exponential,matern_5_2")?;

    for i in 0..=40 {
        for j in 0..=40 {
            let u = i as f64 * 0.1 - 2.0;
            let v = j as f64 * 0.1 - 2.0;
            let point = [u, v];

            writeln!(
                file,
                "{},{},{},{}",
                u,
                v,
                se.evaluate(&origin, &point)?,
                matern.evaluate(&origin, &point)?
            )?;
        }
    }

    println!("   -> anisotropic_surface.csv");
    Ok(())
}
