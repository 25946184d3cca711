//! HTTP route handlers
//!
//! Decoding and extraction are CPU-bound, so handlers hand them to the
//! blocking thread pool once the upload has been read.

use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::{ExportRequest, ExportResponse, PixelExtraction, PixelMapper, RegionExtraction, RegionStatsReport};
use crate::decoder::{registry, FormatEntry, ImageMetadata};
use crate::errors::{PixelError, PixelResult};
use crate::extractor::{Coordinate, Region};

use super::upload::UploadForm;

/// Multipart field holding the JSON list of `{x, y}` coordinates
pub const COORDINATES_FIELD: &str = "coordinates";
/// Multipart field holding the JSON region `{start_x, start_y, end_x, end_y}`
pub const REGION_FIELD: &str = "region";

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub mapper: Arc<PixelMapper>,
}

#[derive(Debug, Serialize)]
pub struct FormatList {
    pub formats: Vec<FormatEntry>,
}

/// Run `job` on the blocking pool with the shared mapper
async fn run_blocking<T, F>(state: &AppState, job: F) -> PixelResult<T>
where
    T: Send + 'static,
    F: FnOnce(&PixelMapper) -> PixelResult<T> + Send + 'static,
{
    let mapper = Arc::clone(&state.mapper);
    tokio::task::spawn_blocking(move || job(&mapper))
        .await
        .map_err(|e| PixelError::GenericError(format!("Worker task failed: {}", e)))?
}

/// `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Pixel Mapper Pro API" }))
}

/// `GET /formats`
pub async fn formats() -> Json<FormatList> {
    Json(FormatList { formats: registry().formats().to_vec() })
}

/// `POST /upload`
pub async fn upload(State(state): State<AppState>, multipart: Result<Multipart, MultipartRejection>) -> PixelResult<Json<ImageMetadata>> {
    let form = UploadForm::read(multipart?).await?;
    let metadata = run_blocking(&state, move |mapper| {
        mapper.upload(&form.file, form.filename.as_deref())
    }).await?;
    Ok(Json(metadata))
}

/// `POST /extract-pixels`
pub async fn extract_pixels(State(state): State<AppState>, multipart: Result<Multipart, MultipartRejection>) -> PixelResult<Json<PixelExtraction>> {
    let form = UploadForm::read(multipart?).await?;
    let coordinates: Vec<Coordinate> = form.json_field(COORDINATES_FIELD)?;
    let extraction = run_blocking(&state, move |mapper| {
        mapper.extract_pixels(&form.file, &coordinates)
    }).await?;
    Ok(Json(extraction))
}

/// `POST /extract-region`
pub async fn extract_region(State(state): State<AppState>, multipart: Result<Multipart, MultipartRejection>) -> PixelResult<Json<RegionExtraction>> {
    let form = UploadForm::read(multipart?).await?;
    let region: Region = form.json_field(REGION_FIELD)?;
    let extraction = run_blocking(&state, move |mapper| {
        mapper.extract_region(&form.file, region)
    }).await?;
    Ok(Json(extraction))
}

/// `POST /region-stats`
pub async fn region_stats(State(state): State<AppState>, multipart: Result<Multipart, MultipartRejection>) -> PixelResult<Json<RegionStatsReport>> {
    let form = UploadForm::read(multipart?).await?;
    let region: Region = form.json_field(REGION_FIELD)?;
    let report = run_blocking(&state, move |mapper| {
        mapper.region_stats(&form.file, region)
    }).await?;
    Ok(Json(report))
}

/// `POST /export-pixels`
pub async fn export_pixels(State(state): State<AppState>,
                           request: Result<Json<ExportRequest>, JsonRejection>) -> PixelResult<Json<ExportResponse>> {
    let Json(request) = request?;
    Ok(Json(state.mapper.export(request)))
}
