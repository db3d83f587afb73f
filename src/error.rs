use thiserror::Error;

#[derive(Error, Debug)]
pub enum KurtosisError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Box-Cox transform overflowed at lambda = {lambda}")]
    NumericOverflow { lambda: f64 },
    #[error("Input contains NaN or infinite values")]
    NonFiniteInput,
    #[error("Distribution is degenerate (zero variance), kurtosis is undefined")]
    DegenerateDistribution,
    #[error(
        "Search did not converge after {iterations} iterations (lambda = {lambda}, kurtosis = {kurtosis})"
    )]
    NotConverged {
        iterations: usize,
        lambda: f64,
        kurtosis: f64,
    },
    #[error("Config parsing error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KurtosisError>;
