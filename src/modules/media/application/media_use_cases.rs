use std::sync::Arc;

use crate::media::application::{
    domain::policies::UploadPolicy, ports::incoming::use_cases::CreateUploadUrlUseCase,
};

#[derive(Clone)]
pub struct MediaUseCases {
    pub create_upload_url: Arc<dyn CreateUploadUrlUseCase + Send + Sync>,
    pub policy: Arc<UploadPolicy>,
}
