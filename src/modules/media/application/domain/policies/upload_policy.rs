use crate::media::application::domain::entities::UploadKind;

/// Size cap and accepted `(mime type, extensions)` pairs for one upload kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindLimits {
    pub max_file_size_bytes: u64,
    pub allowed: &'static [(&'static str, &'static [&'static str])],
}

impl KindLimits {
    pub fn accepts_mime(&self, mime_type: &str) -> bool {
        self.allowed.iter().any(|(mime, _)| *mime == mime_type)
    }

    pub fn extension_matches(&self, mime_type: &str, ext: &str) -> bool {
        self.allowed
            .iter()
            .any(|(mime, exts)| *mime == mime_type && exts.contains(&ext))
    }
}

const VIDEO_LIMITS: KindLimits = KindLimits {
    max_file_size_bytes: 100 * 1024 * 1024,
    allowed: &[
        ("video/mp4", &["mp4"]),
        ("video/webm", &["webm"]),
        ("video/quicktime", &["mov"]),
    ],
};

const THUMBNAIL_LIMITS: KindLimits = KindLimits {
    max_file_size_bytes: 5 * 1024 * 1024,
    allowed: &[
        ("image/jpeg", &["jpg", "jpeg"]),
        ("image/png", &["png"]),
        ("image/webp", &["webp"]),
    ],
};

#[derive(Debug, Clone, PartialEq)]
pub struct UploadPolicy {
    pub bucket_name: String,
    pub public_base_url: String,
    pub max_file_name_len: usize,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "course-marketplace-media";
    pub const DEFAULT_PUBLIC_BASE_URL: &'static str = "https://storage.googleapis.com";

    /// Reads `MEDIA_UPLOAD_BUCKET` and `MEDIA_PUBLIC_BASE_URL`, falling back to the defaults.
    pub fn from_env() -> Self {
        let read = |key: &str, fallback: &str| {
            std::env::var(key)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self::new(
            read("MEDIA_UPLOAD_BUCKET", Self::DEFAULT_BUCKET_NAME),
            read("MEDIA_PUBLIC_BASE_URL", Self::DEFAULT_PUBLIC_BASE_URL),
        )
    }

    pub fn new(bucket_name: String, public_base_url: String) -> Self {
        Self {
            bucket_name,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            max_file_name_len: 255,
        }
    }

    pub fn limits(&self, kind: UploadKind) -> KindLimits {
        match kind {
            UploadKind::Video => VIDEO_LIMITS,
            UploadKind::Thumbnail => THUMBNAIL_LIMITS,
        }
    }

    pub fn public_url(&self, object_key: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket_name, object_key)
    }
}
