pub mod minio;

pub use minio::MinioObjectStorage;
