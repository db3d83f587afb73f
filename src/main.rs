use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use kurtosis_image::{GeneratorConfig, KurtosisImageGenerator};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate a grayscale image whose pixel distribution has a target excess kurtosis"
)]
struct Args {
    /// Target excess kurtosis
    #[arg(allow_negative_numbers = true)]
    target_kurtosis: f64,

    /// TOML file with generator settings; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<usize>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<usize>,

    /// First Box-Cox lambda tried
    #[arg(long, allow_negative_numbers = true)]
    lambda_start: Option<f64>,

    /// Lambda increment per iteration
    #[arg(long, allow_negative_numbers = true)]
    lambda_step: Option<f64>,

    /// Accepted distance from the target kurtosis
    #[arg(long)]
    tolerance: Option<f64>,

    /// Give up after this many lambda increments
    #[arg(long, conflicts_with = "unbounded")]
    max_iterations: Option<usize>,

    /// Search until convergence with no iteration cap
    #[arg(long)]
    unbounded: bool,

    /// RNG seed for reproducible images
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<(f64, GeneratorConfig)> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(start) = self.lambda_start {
            config.lambda_start = start;
        }
        if let Some(step) = self.lambda_step {
            config.lambda_step = step;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if self.unbounded {
            config.max_iterations = None;
        } else if let Some(max) = self.max_iterations {
            config.max_iterations = Some(max);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok((self.target_kurtosis, config))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let (target, config) = Args::parse().into_config()?;
    info!("Generator settings: {:?}", config);

    let generator = KurtosisImageGenerator::new(config).context("Invalid generator settings")?;
    let image = generator
        .generate(target)
        .with_context(|| format!("Failed to generate image for kurtosis {}", target))?;

    println!("Kurtosis of generated image: {}", image.quantized_kurtosis);

    let path = image
        .save()
        .with_context(|| format!("Failed to save output image: {}", image.file_name()))?;
    info!(
        "Wrote {} (lambda = {}, iterations = {}, skewness = {:.4})",
        path.display(),
        image.lambda,
        image.iterations,
        image.quantized_skewness
    );
    Ok(())
}
