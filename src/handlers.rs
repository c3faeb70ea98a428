use crate::classifier::Classifier;
use crate::config::UploadSettings;
use crate::errors::AnalyzeError;
use crate::models::{ErrorBody, LiveMessage};
use crate::scoring;
use actix_multipart::{Field, Multipart};
use actix_web::http::Method;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, TempDir};
use uuid::Uuid;

pub const LIVE_MESSAGE: &str = "API live! Use POST with file.";

/// Name of the multipart field carrying the image.
const FILE_FIELD: &str = "file";

/// Form encodings that can only carry plain fields, never a file.
const FIELDS_ONLY_TYPES: &[&str] = &["application/x-www-form-urlencoded", "application/json"];

/// Every path answers the same way; only the method matters.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tail:.*}")
            .route(web::get().to(live))
            .route(web::post().to(analyze))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}

pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn live() -> HttpResponse {
    HttpResponse::Ok().json(LiveMessage {
        message: LIVE_MESSAGE.to_string(),
    })
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorBody {
        error: "Method not allowed".to_string(),
    })
}

pub async fn analyze(
    req: HttpRequest,
    classifier: web::Data<Classifier>,
    upload: web::Data<UploadSettings>,
    payload: Multipart,
) -> Result<HttpResponse, AnalyzeError> {
    let content_type = req.content_type();
    if FIELDS_ONLY_TYPES
        .iter()
        .any(|t| content_type.eq_ignore_ascii_case(t))
    {
        return Err(AnalyzeError::MissingFile);
    }

    // removed together with its contents when dropped
    let upload_dir = Builder::new()
        .prefix("fit_uploads")
        .tempdir_in(&upload.root)
        .map_err(upload_error)?;

    let filepath = receive_file(payload, &upload_dir, upload.max_file_size)
        .await?
        .ok_or(AnalyzeError::MissingFile)?;

    let image = web::block(move || std::fs::read(filepath))
        .await
        .map_err(upload_error)?
        .map_err(upload_error)?;
    drop(upload_dir);

    tracing::debug!(bytes = image.len(), "upload received");

    let labels = classifier.classify(image).await?;
    let assessment = scoring::assess(labels);

    tracing::info!(
        score = assessment.fit_score,
        style = %assessment.style_description,
        labels = ?assessment.detected_labels,
        "fit assessed"
    );

    Ok(HttpResponse::Ok().json(assessment))
}

/// Walks the whole form and spools the first `file` part that carries a
/// non-empty filename into `dir`. Everything else, including a plain `file`
/// text field, is drained and ignored.
async fn receive_file(
    mut payload: Multipart,
    dir: &TempDir,
    max_file_size: u64,
) -> Result<Option<PathBuf>, AnalyzeError> {
    let mut stored = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(form_error)?;

        let disposition = field.content_disposition();
        let wanted = disposition.get_name() == Some(FILE_FIELD)
            && disposition.get_filename().is_some_and(|name| !name.is_empty());
        if !wanted || stored.is_some() {
            while let Some(chunk) = field.next().await {
                chunk.map_err(form_error)?;
            }
            continue;
        }

        let filepath = dir.path().join(Uuid::new_v4().to_string());
        spool(&mut field, filepath.clone(), max_file_size).await?;
        stored = Some(filepath);
    }

    Ok(stored)
}

async fn spool(
    field: &mut Field,
    filepath: PathBuf,
    max_file_size: u64,
) -> Result<(), AnalyzeError> {
    let mut f = web::block(move || File::create(filepath))
        .await
        .map_err(upload_error)?
        .map_err(upload_error)?;

    let mut written: u64 = 0;
    while let Some(chunk) = field.next().await {
        let data = chunk.map_err(form_error)?;
        written += data.len() as u64;
        if written > max_file_size {
            return Err(AnalyzeError::FormParse(format!(
                "file part exceeds {max_file_size} bytes"
            )));
        }
        f = web::block(move || f.write_all(&data).map(|_| f))
            .await
            .map_err(upload_error)?
            .map_err(upload_error)?;
    }

    Ok(())
}

fn form_error(e: impl Display) -> AnalyzeError {
    AnalyzeError::FormParse(e.to_string())
}

fn upload_error(e: impl Display) -> AnalyzeError {
    AnalyzeError::Upload(e.to_string())
}
