use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    error::SdkError,
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;
use url::Url;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::ports::ObjectStoragePort,
};

#[derive(Clone)]
pub struct MinioObjectStorage {
    client: Client,
    bucket: String,
    public_url: Url,
}

impl MinioObjectStorage {
    pub fn new(config: ObjectStorageConfig) -> Result<Self, CoreError> {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "menulens",
        );

        // Ensure endpoint URL is properly formatted (remove trailing slash)
        let endpoint = config.endpoint.trim_end_matches('/');

        // A trailing slash makes `Url::join` append instead of replace
        let public_url = Url::parse(&format!("{}/", config.public_url.trim_end_matches('/')))
            .map_err(|e| {
                CoreError::ConfigurationError(format!("invalid object storage public URL: {}", e))
            })?;

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing MinIO client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket,
            public_url,
        })
    }
}

impl ObjectStoragePort for MinioObjectStorage {
    #[instrument(skip(self, payload))]
    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        let payload_size = payload.len();

        tracing::info!(
            bucket = %self.bucket,
            object_key = %object_key,
            size = payload_size,
            content_type = %content_type,
            "Uploading object to storage"
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .content_type(content_type)
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                let error_kind = upload_error_kind(&e);
                tracing::error!(
                    error = %e,
                    error_kind = error_kind,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    payload_size = payload_size,
                    "Failed to upload object"
                );
                CoreError::ObjectStorageError(format!("{}: {}", error_kind, e))
            })?;

        tracing::info!(
            bucket = %self.bucket,
            object_key = %object_key,
            "Object uploaded successfully"
        );

        Ok(())
    }

    fn public_url(&self, object_key: &str) -> Result<String, CoreError> {
        let encoded_key = object_key
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        self.public_url
            .join(&format!("{}/{}", self.bucket, encoded_key))
            .map(String::from)
            .map_err(|e| CoreError::ObjectStorageError(format!("Invalid object URL: {}", e)))
    }
}

fn upload_error_kind<E, R>(error: &SdkError<E, R>) -> &'static str {
    match error {
        SdkError::TimeoutError(_) => "storage request timed out",
        SdkError::DispatchFailure(failure) if failure.is_timeout() => "storage request timed out",
        SdkError::DispatchFailure(_) => "storage endpoint unreachable",
        SdkError::ConstructionFailure(_) => "invalid storage request",
        SdkError::ResponseError(_) => "unreadable storage response",
        SdkError::ServiceError(_) => "storage service rejected the upload",
        _ => "storage upload failed",
    }
}
