use std::path::Path;

use reqwest::blocking::multipart::{Form, Part};

use crate::model::ContentId;

use super::{GatewayError, RemoteCatalogGateway};

const UPLOAD_FIELD: &str = "arquivo";

/// Transport content type for an upload, picked from the file extension.
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("mp4") => "video/mp4",
        Some("mp3") => "audio/mp3",
        Some("avi") => "video/avi",
        Some("mov") => "video/mov",
        Some("wav") => "audio/wav",
        _ => "application/octet-stream",
    }
}

impl RemoteCatalogGateway {
    pub(super) fn post_file(&self, id: ContentId, path: &Path) -> Result<(), GatewayError> {
        if !path.is_file() {
            return Err(GatewayError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let file = std::fs::File::open(path).map_err(|source| GatewayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let part = Part::reader(file)
            .file_name(file_name)
            .mime_str(media_type_for(path))
            .map_err(|source| GatewayError::Transport {
                label: "upload file",
                source,
            })?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let req = self
            .client
            .post(self.url(&format!("api/arquivos/upload/{}", id)))
            .multipart(form);
        let resp = match self.send(req, "upload file") {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(content = %id, error = %err, "upload request failed");
                return Err(err);
            }
        };

        self.ensure_ok(resp, "upload file")
            .map(|_| ())
            .map_err(|err| {
                if let GatewayError::Status { status, body, .. } = &err {
                    tracing::warn!(content = %id, %status, body = %body, "upload rejected");
                }
                err
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_types_by_extension() {
        assert_eq!(media_type_for(Path::new("a/clip.mp4")), "video/mp4");
        assert_eq!(media_type_for(Path::new("song.MP3")), "audio/mp3");
        assert_eq!(media_type_for(Path::new("x.avi")), "video/avi");
        assert_eq!(media_type_for(Path::new("x.Mov")), "video/mov");
        assert_eq!(media_type_for(Path::new("x.wav")), "audio/wav");
        assert_eq!(
            media_type_for(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(
            media_type_for(Path::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn missing_file_fails_before_any_request() {
        // Port 9 (discard) is never contacted: the local check comes first.
        let gw = RemoteCatalogGateway::new("http://127.0.0.1:9/", super::super::DEFAULT_TIMEOUT)
            .unwrap();
        let err = gw
            .post_file(ContentId(1), Path::new("/definitely/not/here.mp4"))
            .unwrap_err();
        assert!(matches!(err, GatewayError::MissingFile { .. }));
    }
}
