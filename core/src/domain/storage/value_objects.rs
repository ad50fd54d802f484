use bytes::Bytes;

/// Largest accepted menu photo.
pub const MAX_MENU_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Clone)]
pub struct UploadMenuImageInput {
    pub filename: String,
    pub mime_type: String,
    pub payload: Bytes,
}
