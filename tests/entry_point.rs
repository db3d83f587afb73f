//! Runs the top-level entry point, which writes into the working directory.
//! Kept alone in its own test binary because it changes the process cwd.

use kurtosis_image::generate_image_with_kurtosis;

#[test]
fn writes_named_file_into_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let path = generate_image_with_kurtosis(0.8, (50, 50), 0.0, 0.01).unwrap();
    assert_eq!(path.file_name().unwrap(), "custom_kurtosis_image_0_8.png");

    let written = dir.path().join("custom_kurtosis_image_0_8.png");
    let img = image::open(&written).unwrap();
    assert_eq!(img.color(), image::ColorType::L8);
    assert_eq!((img.width(), img.height()), (50, 50));
    assert!(img.to_luma8().pixels().all(|p| p[0] <= 44));
}
