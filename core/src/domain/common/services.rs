use crate::domain::{menu_analysis::ports::VisionClient, storage::ports::ObjectStoragePort};

/// Application service holding the outbound ports. Domain service traits are
/// implemented on it in each domain's `services` module.
#[derive(Clone)]
pub struct Service<LLM, OS>
where
    LLM: VisionClient,
    OS: ObjectStoragePort,
{
    pub(crate) vision_client: LLM,
    pub(crate) object_storage: OS,
}

impl<LLM, OS> Service<LLM, OS>
where
    LLM: VisionClient,
    OS: ObjectStoragePort,
{
    pub fn new(vision_client: LLM, object_storage: OS) -> Self {
        Self {
            vision_client,
            object_storage,
        }
    }
}
