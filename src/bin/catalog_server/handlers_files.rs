use anyhow::Context;

use catalog::gateway::media_type_for;

use super::*;

const UPLOAD_FIELD: &str = "arquivo";

/// Accepts a multipart `arquivo` field and attaches it to the content item.
pub(super) async fn upload_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<ContentItem>, Response> {
    let id = ContentId(id);
    if !state.catalog.read().await.content.contains_key(&id) {
        return Err(not_found());
    }

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(anyhow::anyhow!("read multipart: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| bad_request(anyhow::anyhow!("read upload: {}", e)))?;
        upload = Some((file_name, content_type, bytes));
        break;
    }
    let Some((file_name, content_type, bytes)) = upload else {
        return Err(bad_request(anyhow::anyhow!(
            "missing multipart field `{}`",
            UPLOAD_FIELD
        )));
    };

    let base_name = file_name
        .as_deref()
        .and_then(|n| std::path::Path::new(n).file_name())
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| bad_request(anyhow::anyhow!("upload has no file name")))?;
    let stored = format!("{}_{}", id, base_name);
    let guessed = media_type_for(std::path::Path::new(base_name));
    let media_type = content_type
        .filter(|t| t != "application/octet-stream")
        .unwrap_or_else(|| guessed.to_string());

    let path = state.data_dir.join(&stored);
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("write {}", path.display()))
        .map_err(internal_error)?;

    let mut catalog = state.catalog.write().await;
    let Some(item) = catalog.content.get_mut(&id) else {
        // Deleted while the body was streaming.
        drop(catalog);
        remove_stored_file(&state, &stored).await;
        return Err(not_found());
    };
    let previous = item.file_path.replace(stored.clone());
    item.media_type = Some(media_type);
    let updated = item.clone();
    drop(catalog);

    if let Some(old) = previous.filter(|old| *old != stored) {
        remove_stored_file(&state, &old).await;
    }
    tracing::info!(content = %id, file = %stored, bytes = bytes.len(), "file stored");
    Ok(Json(updated))
}

pub(super) async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Response, Response> {
    validate_stored_name(&name).map_err(bad_request)?;

    let stored_type = {
        let catalog = state.catalog.read().await;
        catalog
            .content
            .values()
            .find(|c| c.file_path.as_deref() == Some(name.as_str()))
            .and_then(|c| c.media_type.clone())
    };
    let guessed = media_type_for(std::path::Path::new(&name));
    let media_type = stored_type.unwrap_or_else(|| guessed.to_string());

    let bytes = match tokio::fs::read(state.data_dir.join(&name)).await {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => {
            let err = anyhow::Error::new(e).context("read stored file");
            return Err(internal_error(err));
        }
    };
    let headers = [(header::CONTENT_TYPE, media_type)];
    Ok((headers, bytes).into_response())
}

/// Stored names are flat: no separators, no parent references.
fn validate_stored_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name.contains("..") {
        anyhow::bail!("invalid file path");
    }
    Ok(())
}

pub(super) async fn remove_stored_file(state: &AppState, name: &str) {
    if validate_stored_name(name).is_err() {
        return;
    }
    if let Err(err) = tokio::fs::remove_file(state.data_dir.join(name)).await {
        if err.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(file = %name, error = %err, "remove stored file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_stored_name;

    #[test]
    fn stored_names_must_be_flat() {
        assert!(validate_stored_name("3_clip.mp4").is_ok());
        assert!(validate_stored_name("../secret").is_err());
        assert!(validate_stored_name("a/b.mp3").is_err());
        assert!(validate_stored_name("a\\b.mp3").is_err());
        assert!(validate_stored_name("").is_err());
    }
}
