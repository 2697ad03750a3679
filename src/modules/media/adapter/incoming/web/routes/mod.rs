mod create_upload;

pub use create_upload::*;
