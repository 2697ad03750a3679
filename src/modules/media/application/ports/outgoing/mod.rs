pub mod upload_signer;

pub use upload_signer::{ObjectLocation, ObjectLocationError, SignUrlError, UploadSigner};
