//! Movie Endpoints
//!
//! `/peliculas` resource: list, fetch, create, update, delete.

use crate::config::CatalogConfig;
use crate::error::ClientError;
use crate::models::{Movie, MoviePayload};
use super::{read_json, send};

const COLLECTION: &str = "/peliculas";

pub(crate) fn movie_path(id: u32) -> String {
    format!("{}/{}", COLLECTION, id)
}

fn encode(payload: &MoviePayload) -> Result<String, ClientError> {
    serde_json::to_string(payload).map_err(ClientError::decode)
}

pub async fn list_movies(config: &CatalogConfig) -> Result<Vec<Movie>, ClientError> {
    let response = send(config, "GET", COLLECTION, None).await?;
    read_json(&response).await
}

pub async fn get_movie(config: &CatalogConfig, id: u32) -> Result<Movie, ClientError> {
    let response = send(config, "GET", &movie_path(id), None).await?;
    read_json(&response).await
}

/// Create a record; the response body is ignored since the list is reloaded afterwards
pub async fn create_movie(config: &CatalogConfig, payload: &MoviePayload) -> Result<(), ClientError> {
    send(config, "POST", COLLECTION, Some(encode(payload)?)).await?;
    Ok(())
}

pub async fn update_movie(config: &CatalogConfig, id: u32, payload: &MoviePayload) -> Result<(), ClientError> {
    send(config, "PUT", &movie_path(id), Some(encode(payload)?)).await?;
    Ok(())
}

pub async fn delete_movie(config: &CatalogConfig, id: u32) -> Result<(), ClientError> {
    send(config, "DELETE", &movie_path(id), None).await?;
    Ok(())
}
