//! Analysis request types.

use crate::i18n::Language;

/// MIME type assumed for attachments whose type cannot be determined.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// An image attached to a situation, kept as raw bytes until the wire layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn jpeg(data: Vec<u8>) -> Self {
        Self::new(DEFAULT_IMAGE_MIME, data)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// What the user submitted from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SituationInput {
    pub text: String,
    pub image: Option<ImageAttachment>,
    /// Ask the model to reason through the worst plausible outcome.
    pub worst_case: bool,
}

impl SituationInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    pub fn worst_case(mut self, worst_case: bool) -> Self {
        self.worst_case = worst_case;
        self
    }

    /// True when neither text nor a non-empty image was provided.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.image.as_ref().is_none_or(|image| image.is_empty())
    }
}

/// Everything the analysis client needs for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub user_name: String,
    pub language: Language,
    pub input: SituationInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_without_image_is_empty() {
        assert!(SituationInput::text("   ").is_empty());
        assert!(SituationInput::default().is_empty());
    }

    #[test]
    fn test_image_only_is_not_empty() {
        let input = SituationInput::default().with_image(ImageAttachment::jpeg(vec![0xFF, 0xD8]));
        assert!(!input.is_empty());
    }

    #[test]
    fn test_zero_byte_image_counts_as_missing() {
        let input = SituationInput::default().with_image(ImageAttachment::jpeg(Vec::new()));
        assert!(input.is_empty());
    }
}
