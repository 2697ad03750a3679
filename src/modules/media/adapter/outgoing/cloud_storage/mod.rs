mod upload_signer_gcs;

pub use upload_signer_gcs::GcsUploadSigner;
