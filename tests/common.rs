use image::DynamicImage;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a small but real PNG so the decoder accepts it.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    DynamicImage::new_rgb8(width, height).save(path).unwrap();
}

/// Write a file with an image extension but unreadable contents.
pub fn create_corrupt_image(path: &Path) {
    std::fs::write(path, b"this is not image data").unwrap();
}

/// Build a two-level photo tree with images at both levels plus one
/// non-image file. Returns the subdirectory path.
pub fn create_photo_tree(root: &Path) -> PathBuf {
    let subdir = root.join("trip");
    std::fs::create_dir(&subdir).unwrap();

    create_test_png(&root.join("top.png"), 48, 32);
    create_test_png(&subdir.join("nested.png"), 48, 32);
    std::fs::write(root.join("notes.txt"), b"not a photo").unwrap();

    subdir
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}
