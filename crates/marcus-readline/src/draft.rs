//! The situation being written on the dashboard.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use marcus_core::analysis::{DEFAULT_IMAGE_MIME, ImageAttachment, SituationInput};

/// Text lines and an optional image, collected until the user submits.
#[derive(Debug, Default)]
pub struct Draft {
    lines: Vec<String>,
    image: Option<(PathBuf, ImageAttachment)>,
}

impl Draft {
    pub fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn attach(&mut self, path: PathBuf, image: ImageAttachment) {
        self.image = Some((path, image));
    }

    /// Removes the image, returning its path if there was one.
    pub fn drop_image(&mut self) -> Option<PathBuf> {
        self.image.take().map(|(path, _)| path)
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image.as_ref().map(|(path, _)| path.as_path())
    }

    pub fn to_input(&self, worst_case: bool) -> SituationInput {
        SituationInput {
            text: self.text(),
            image: self.image.as_ref().map(|(_, image)| image.clone()),
            worst_case,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.image = None;
    }
}

/// Expands a leading `~/` to the home directory.
pub fn expand_path(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

/// Reads an image file. The MIME type comes from the extension when it names
/// an image type; anything else is sent as JPEG.
pub fn load_image(path: &Path) -> Result<ImageAttachment> {
    let data =
        std::fs::read(path).with_context(|| format!("Cannot read image {}", path.display()))?;
    if data.is_empty() {
        bail!("Image {} is empty", path.display());
    }

    let mime_type = mime_guess::from_path(path)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());

    tracing::debug!(bytes = data.len(), mime_type = %mime_type, "Loaded image");
    Ok(ImageAttachment::new(mime_type, data))
}
