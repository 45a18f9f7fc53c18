use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Media folder holding the payment method icons.
pub const ICON_FOLDER: &str = "Trxps Payments - Icons";
pub const ICON_EXTENSION: &str = "svg";
pub const ICON_MIME_TYPE: &str = "image/svg+xml";

/// Placeholder uploaded until a real icon replaces it in the media library.
pub const PLACEHOLDER_ICON: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="24" viewBox="0 0 32 24"><rect width="32" height="24" rx="4" fill="#e5e7eb"/></svg>"##;

/// File name of the icon for a payment method name.
pub fn icon_file_name(method_name: &str) -> String {
    format!("{}-icon", method_name)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: Uuid,
    pub file_name: String,
    pub file_extension: String,
    pub mime_type: String,
    pub folder: Option<String>,
    pub private: bool,
    pub file_size: usize,
    pub uploaded_at: DateTime<Utc>,
}

/// A file handed to `MediaService::save_file`.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub blob: Vec<u8>,
    pub extension: String,
    pub mime_type: String,
    pub file_name: String,
    pub folder: Option<String>,
    /// Reuse this id instead of generating one.
    pub media_id: Option<Uuid>,
    pub private: bool,
}

impl MediaFile {
    /// The placeholder icon for `method_name`, stored in the icon folder.
    pub fn placeholder_icon(method_name: &str, folder: &str) -> Self {
        Self {
            blob: PLACEHOLDER_ICON.to_vec(),
            extension: ICON_EXTENSION.to_string(),
            mime_type: ICON_MIME_TYPE.to_string(),
            file_name: icon_file_name(method_name),
            folder: Some(folder.to_string()),
            media_id: None,
            private: false,
        }
    }
}
