//! Image classification by file extension

use std::path::Path;

/// Recognized image extensions, lowercase.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "svg", "ico",
];

/// Check whether a path names an image file.
///
/// Matches the filesystem-reported extension against
/// [`IMAGE_EXTENSIONS`], case-insensitively: `photo.JPG` and `photo.jpg`
/// classify the same. A file with no extension is never an image.
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
}
