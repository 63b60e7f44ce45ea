use std::path::Path;

/// MIME type for a served path, from the fixed extension table.
///
/// The table is part of the wire contract: exactly these extensions map to a
/// specific type, everything else is `application/octet-stream`. Extensions
/// match case-insensitively.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.to_str().unwrap_or("") {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
