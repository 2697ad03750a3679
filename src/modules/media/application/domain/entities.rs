use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Video,
    Thumbnail,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Video => "video",
            UploadKind::Thumbnail => "thumbnail",
        }
    }
}

/// What the client needs to PUT the file and later reference it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadTicket {
    pub upload_url: String,
    pub public_url: String,
    pub object_key: String,
    pub expires_in_secs: u64,
}
