//! Grid filters used by the generator pipeline.
//!
//! All filters work on 2D single-channel grids, shape (height, width):
//!
//! | Stage | Type | Description |
//! |-------|------|-------------|
//! | Sample grid | f64 | Standard normal draws |
//! | Shifted grid | f64 | Minimum moved to 1e-6 |
//! | Transformed grid | f64 | Box-Cox of the shifted grid |
//! | Output grid | u8 | Stretched to 0..=44 and rounded |
//!
//! ## Filter Categories
//!
//! - **Noise**: standard normal sample grids
//! - **Power transform**: positivity shift, Box-Cox
//! - **Quantize**: min/max stretch to gray levels

pub mod noise;
pub mod power_transform;
pub mod quantize;
