use sha2::{Digest, Sha256};
use std::future::Future;
use tracing::instrument;

use crate::domain::{
    common::{
        entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7, services::Service,
    },
    menu_analysis::ports::VisionClient,
    storage::{
        entities::StoredObject,
        ports::ObjectStoragePort,
        value_objects::{MAX_MENU_IMAGE_SIZE, UploadMenuImageInput},
    },
};

/// Service trait for menu image storage
#[cfg_attr(test, mockall::automock)]
pub trait FileService: Send + Sync {
    /// Upload a menu photo and return its public URL alongside the metadata
    fn upload_menu_image(
        &self,
        input: UploadMenuImageInput,
    ) -> impl Future<Output = Result<StoredObject, CoreError>> + Send;
}

impl<LLM, OS> FileService for Service<LLM, OS>
where
    LLM: VisionClient,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, input), fields(filename = %input.filename, mime_type = %input.mime_type))]
    async fn upload_menu_image(
        &self,
        input: UploadMenuImageInput,
    ) -> Result<StoredObject, CoreError> {
        // Validate payload
        if input.payload.is_empty() {
            return Err(CoreError::Invalid);
        }

        if input.payload.len() > MAX_MENU_IMAGE_SIZE {
            return Err(CoreError::FileTooLarge);
        }

        if !input.mime_type.starts_with("image/") {
            return Err(CoreError::UnsupportedMediaType(input.mime_type));
        }

        let size_bytes = input.payload.len() as i64;

        // Calculate SHA256 checksum
        let mut hasher = Sha256::new();
        hasher.update(&input.payload);
        let checksum_sha256 = format!("{:x}", hasher.finalize());

        let object_key = menu_object_key(&input.filename);

        tracing::info!(
            object_key = %object_key,
            size = size_bytes,
            "Uploading menu image to storage"
        );

        self.object_storage
            .put_object(&object_key, input.payload, &input.mime_type)
            .await?;

        let url = self.object_storage.public_url(&object_key)?;
        let (created_at, _) = generate_timestamp();

        Ok(StoredObject {
            object_key,
            original_name: input.filename,
            mime_type: input.mime_type,
            size_bytes,
            checksum_sha256,
            url,
            created_at,
        })
    }
}

/// `menus/<uuid-v7>-<filename>`, with anything outside `[A-Za-z0-9._-]`
/// in the filename replaced by `_`.
fn menu_object_key(filename: &str) -> String {
    let sanitized: String = filename
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let sanitized = if sanitized.is_empty() {
        "menu".to_string()
    } else {
        sanitized
    };

    format!("menus/{}-{}", generate_uuid_v7(), sanitized)
}
