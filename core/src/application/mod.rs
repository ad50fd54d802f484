use crate::{
    domain::common::{MenulensConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{llm::OpenAiVisionClient, object_storage::MinioObjectStorage},
};

pub type MenulensService = Service<OpenAiVisionClient, MinioObjectStorage>;

pub fn create_service(config: MenulensConfig) -> Result<MenulensService, CoreError> {
    let vision_client = OpenAiVisionClient::new(config.llm)?;
    let object_storage = MinioObjectStorage::new(config.object_storage)?;

    Ok(Service::new(vision_client, object_storage))
}
