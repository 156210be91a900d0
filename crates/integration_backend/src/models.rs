//! Wire models for the backend endpoints

use serde::{Deserialize, Serialize};

/// Form body of a chat request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatQuery<'a> {
    /// Trimmed user text
    pub query: &'a str,
}

/// JSON body of a chat reply
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    /// Assistant reply text
    pub response: String,
}

/// Guess the MIME type of an uploaded image from its file name
pub(crate) fn image_mime_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
