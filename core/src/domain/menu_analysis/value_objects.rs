use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AnalyzeMenuInput {
    /// Dereferenceable URL of the menu photo.
    pub image_url: String,
}

/// A fully built request for the vision model: one user-role message made of
/// an instruction part and an image part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionPrompt {
    pub instructions: String,
    pub image_url: String,
}
