use super::*;

pub(super) async fn create_content(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewContent>,
) -> Result<(StatusCode, Json<ContentItem>), Response> {
    let title = body.titulo.trim();
    if title.is_empty() {
        return Err(bad_request(anyhow::anyhow!("titulo must not be blank")));
    }

    let mut catalog = state.catalog.write().await;
    if !catalog.creators.contains_key(&body.criador_id) {
        return Err(not_found());
    }
    let id = catalog.alloc_content_id();
    let item = ContentItem {
        id,
        title: title.to_string(),
        kind: body.varchar.trim().to_string(),
        file_path: None,
        media_type: None,
        owner: body.criador_id,
        edit: None,
    };
    catalog.content.insert(id, item.clone());
    tracing::info!(content = %id, creator = %body.criador_id, "content created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Fields absent from the body keep their stored values.
pub(super) async fn update_content(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<ContentPatch>,
) -> Result<Json<ContentItem>, Response> {
    let mut catalog = state.catalog.write().await;
    let item = catalog
        .content
        .get_mut(&ContentId(id))
        .ok_or_else(not_found)?;

    if let Some(title) = patch.titulo.as_deref().map(str::trim) {
        if title.is_empty() {
            return Err(bad_request(anyhow::anyhow!("titulo must not be blank")));
        }
        item.title = title.to_string();
    }
    if let Some(kind) = patch.varchar {
        item.kind = kind.trim().to_string();
    }
    Ok(Json(item.clone()))
}

pub(super) async fn delete_content(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    let removed = {
        let mut catalog = state.catalog.write().await;
        let removed = catalog.content.remove(&ContentId(id));
        removed.ok_or_else(not_found)?
    };
    if let Some(name) = removed.file_path {
        remove_stored_file(&state, &name).await;
    }
    Ok(StatusCode::NO_CONTENT)
}
