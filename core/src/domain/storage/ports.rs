use std::future::Future;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for object storage operations (MinIO/S3)
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    /// Upload an object directly to storage
    fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Stable public URL under which the object can be fetched
    fn public_url(&self, object_key: &str) -> Result<String, CoreError>;
}
