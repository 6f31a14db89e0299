//! Derivative validation against central finite differences.
//!
//! Sweeps random hyperparameter vectors and point pairs across dimensions
//! 1 through 5 for every registered kernel variant, compares each analytic
//! derivative the variant declares support for against a central-difference
//! approximation, and writes a JSON report with the worst observed
//! deviations. Exits nonzero if any deviation exceeds the tolerance.

use covkernel_rs::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Accepted relative deviation between analytic and numeric derivatives.
const TOLERANCE: f64 = 1e-5;

/// Central-difference step.
const STEP: f64 = 1e-5;

/// Random trials per dimension per variant.
const TRIALS_PER_DIM: usize = 20;

#[derive(Debug, Serialize)]
struct ValidationReport {
    tolerance: f64,
    step: f64,
    kernels: Vec<KernelReport>,
}

#[derive(Debug, Serialize)]
struct KernelReport {
    tag: String,
    trials: usize,
    checks: Vec<OperationReport>,
}

#[derive(Debug, Serialize)]
struct OperationReport {
    operation: String,
    comparisons: usize,
    max_relative_deviation: f64,
    passed: bool,
}

/// Running worst-case deviation for one operation.
struct DeviationTracker {
    operation: &'static str,
    comparisons: usize,
    max_relative_deviation: f64,
}

impl DeviationTracker {
    fn new(operation: &'static str) -> Self {
        Self {
            operation,
            comparisons: 0,
            max_relative_deviation: 0.0,
        }
    }

    fn record(&mut self, analytic: f64, numeric: f64) {
        // Relative against the larger magnitude, absolute below 1.
        let scale = analytic.abs().max(numeric.abs()).max(1.0);
        let deviation = (analytic - numeric).abs() / scale;

        self.comparisons += 1;
        if deviation > self.max_relative_deviation {
            self.max_relative_deviation = deviation;
        }
    }

    fn into_report(self) -> OperationReport {
        OperationReport {
            operation: self.operation.to_string(),
            comparisons: self.comparisons,
            max_relative_deviation: self.max_relative_deviation,
            passed: self.max_relative_deviation <= TOLERANCE,
        }
    }
}

/// Central difference (f(x + h) - f(x - h)) / 2h along one coordinate.
fn central_difference<F>(f: F, at: &[f64], index: usize, step: f64) -> f64
where
    F: Fn(&[f64]) -> f64,
{
    let mut forward = at.to_vec();
    let mut backward = at.to_vec();
    forward[index] += step;
    backward[index] -= step;
    (f(&forward) - f(&backward)) / (2.0 * step)
}

fn validate_kernel(
    registry: &KernelRegistry<f64>,
    tag: &str,
) -> Result<KernelReport, Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(2026);
    let coord_dist = Normal::new(0.0, 1.0).unwrap();
    let scale_dist = Uniform::new(0.2, 2.5).unwrap();

    let mut evaluate = DeviationTracker::new("evaluate");
    let mut spatial = DeviationTracker::new("spatial_gradient");
    let mut hyper = DeviationTracker::new("hyperparameter_gradient");
    let mut hessian = DeviationTracker::new("hyperparameter_hessian");
    let mut trials = 0;

    for dim in 1..=5 {
        for _ in 0..TRIALS_PER_DIM {
            trials += 1;

            let hp: Vec<f64> = (0..=dim).map(|_| scale_dist.sample(&mut rng)).collect();
            let x1: Vec<f64> = (0..dim).map(|_| coord_dist.sample(&mut rng)).collect();
            let x2: Vec<f64> = (0..dim).map(|_| coord_dist.sample(&mut rng)).collect();
            let kernel = registry.create(tag, &hp)?;

            // Structural identities of the covariance itself.
            evaluate.record(kernel.evaluate(&x1, &x2)?, kernel.evaluate(&x2, &x1)?);
            evaluate.record(kernel.evaluate(&x1, &x1)?, hp[0]);

            if kernel.supports(KernelOperation::SpatialGradient) {
                let analytic = kernel.spatial_gradient(&x1, &x2)?;
                for i in 0..dim {
                    let numeric = central_difference(
                        |point| kernel.evaluate(point, &x2).unwrap(),
                        &x1,
                        i,
                        STEP,
                    );
                    spatial.record(analytic[i], numeric);
                }
            }

            if kernel.supports(KernelOperation::HyperparameterGradient) {
                let analytic = kernel.hyperparameter_gradient(&x1, &x2)?;
                for k in 0..=dim {
                    let numeric = central_difference(
                        |values| {
                            registry
                                .create(tag, values)
                                .unwrap()
                                .evaluate(&x1, &x2)
                                .unwrap()
                        },
                        &hp,
                        k,
                        STEP,
                    );
                    hyper.record(analytic[k], numeric);
                }
            }

            if kernel.supports(KernelOperation::HyperparameterHessian) {
                let analytic = kernel.hyperparameter_hessian(&x1, &x2)?;
                for k in 0..=dim {
                    for j in 0..=dim {
                        let numeric = central_difference(
                            |values| {
                                registry
                                    .create(tag, values)
                                    .unwrap()
                                    .hyperparameter_gradient(&x1, &x2)
                                    .unwrap()[k]
                            },
                            &hp,
                            j,
                            STEP,
                        );
                        hessian.record(analytic.at(k, j), numeric);
                    }
                }
            }
        }
    }

    Ok(KernelReport {
        tag: tag.to_string(),
        trials,
        checks: [evaluate, spatial, hyper, hessian]
            .into_iter()
            .filter(|tracker| tracker.comparisons > 0)
            .map(DeviationTracker::into_report)
            .collect(),
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let output_dir = Path::new("../output/covkernel_rs");
    fs::create_dir_all(output_dir)?;

    let registry = KernelRegistry::<f64>::with_defaults();
    let tags: Vec<String> = registry.tags().map(String::from).collect();

    let mut report = ValidationReport {
        tolerance: TOLERANCE,
        step: STEP,
        kernels: Vec::new(),
    };
    for tag in &tags {
        println!("Validating {}...", tag);
        report.kernels.push(validate_kernel(&registry, tag)?);
    }

    let output_path = output_dir.join("derivative_checks.json");
    fs::write(&output_path, serde_json::to_string_pretty(&report)?)?;
    println!("Wrote {:?}", output_path);
    println!();

    let mut all_passed = true;
    for kernel in &report.kernels {
        for check in &kernel.checks {
            println!(
                "{:>20} / {:<24} max deviation {:.3e} over {:>5} comparisons [{}]",
                kernel.tag,
                check.operation,
                check.max_relative_deviation,
                check.comparisons,
                if check.passed { "ok" } else { "FAIL" }
            );
            all_passed &= check.passed;
        }
    }

    if !all_passed {
        return Err("analytic derivatives deviate from finite differences beyond tolerance".into());
    }
    Ok(())
}
