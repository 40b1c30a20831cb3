//! Analysis domain module.
//!
//! - `model`: The five-field result (`StoicAnalysis`)
//! - `request`: Submission types (`SituationInput`, `ImageAttachment`, `AnalysisRequest`)

mod model;
mod request;

pub use model::StoicAnalysis;
pub use request::{AnalysisRequest, DEFAULT_IMAGE_MIME, ImageAttachment, SituationInput};
