use super::*;

pub(super) async fn list_creators(State(state): State<Arc<AppState>>) -> Json<Vec<Creator>> {
    let catalog = state.catalog.read().await;
    let rows = catalog
        .creators
        .values()
        .map(|c| {
            let n = catalog.content_of(c.id).count();
            c.with_content_count(n as u32)
        })
        .collect();
    Json(rows)
}

pub(super) async fn create_creator(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewCreator>,
) -> Result<(StatusCode, Json<Creator>), Response> {
    let name = body.nome.trim();
    if name.is_empty() {
        return Err(bad_request(anyhow::anyhow!("nome must not be blank")));
    }

    let mut catalog = state.catalog.write().await;
    let id = catalog.alloc_creator_id();
    let creator = Creator {
        id,
        name: name.to_string(),
        content_count: 0,
    };
    catalog.creators.insert(id, creator.clone());
    tracing::info!(creator = %id, "creator created");
    Ok((StatusCode::CREATED, Json(creator)))
}

/// Removes the creator and every item it owns, including stored files.
pub(super) async fn delete_creator(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    let id = CreatorId(id);
    let orphaned: Vec<String> = {
        let mut catalog = state.catalog.write().await;
        if catalog.creators.remove(&id).is_none() {
            return Err(not_found());
        }
        let mut files = Vec::new();
        catalog.content.retain(|_, item| {
            if item.owner != id {
                return true;
            }
            files.extend(item.file_path.clone());
            false
        });
        files
    };

    for name in orphaned {
        remove_stored_file(&state, &name).await;
    }
    tracing::info!(creator = %id, "creator deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn list_creator_content(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ContentItem>>, Response> {
    let id = CreatorId(id);
    let catalog = state.catalog.read().await;
    if !catalog.creators.contains_key(&id) {
        return Err(not_found());
    }
    Ok(Json(catalog.content_of(id).cloned().collect()))
}
