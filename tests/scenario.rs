use kurtosis_image::filters::noise::seeded_standard_normal_grid;
use kurtosis_image::io::gray_image_to_array2;
use kurtosis_image::{GeneratorConfig, KurtosisImageGenerator};

fn scenario_config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        seed: Some(seed),
        max_iterations: Some(10_000),
        ..GeneratorConfig::with_search((50, 50), 0.0, 0.01)
    }
}

#[test]
fn scenario_target_0_8_on_50x50() {
    let dir = tempfile::tempdir().unwrap();
    let generator = KurtosisImageGenerator::new(scenario_config(2024)).unwrap();

    let image = generator.generate(0.8).unwrap();
    assert!((image.continuous_kurtosis - 0.8).abs() <= 0.01);
    assert!(image.iterations < 10_000);
    assert_eq!(image.pixels.dim(), (50, 50));
    assert!(image.pixels.iter().all(|&v| v <= 44));

    let path = image.save_in(dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "custom_kurtosis_image_0_8.png");

    let saved = image::open(&path).unwrap().to_luma8();
    assert_eq!(saved.dimensions(), (50, 50));
    assert_eq!(gray_image_to_array2(&saved), image.pixels);
}

#[test]
fn scenario_quantized_kurtosis_is_measured_after_rounding() {
    let generator = KurtosisImageGenerator::new(scenario_config(77)).unwrap();
    let image = generator.generate(0.8).unwrap();

    let levels = image.pixels.mapv(|v| v as f64);
    let expected = kurtosis_image::stats::excess_kurtosis(&levels).unwrap();
    assert_eq!(image.quantized_kurtosis, expected);
}

#[test]
fn scenario_same_samples_same_image() {
    let samples = seeded_standard_normal_grid(Some(99), 50, 50);
    let generator = KurtosisImageGenerator::new(scenario_config(0)).unwrap();

    let first = generator.generate_from_samples(0.8, samples.view()).unwrap();
    let second = generator.generate_from_samples(0.8, samples.view()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scenario_rectangular_image() {
    let config = GeneratorConfig {
        height: 30,
        width: 70,
        ..scenario_config(5)
    };
    let image = KurtosisImageGenerator::new(config).unwrap().generate(0.8).unwrap();
    assert_eq!(image.pixels.dim(), (30, 70));
}
