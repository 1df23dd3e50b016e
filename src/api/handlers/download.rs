//! Handler for book file downloads.

use axum::{
    extract::{Path, Query, State, rejection::PathRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::download::DownloadQuery;
use crate::domain::entities::BookId;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::content_type::{attachment_disposition, content_type_for};

/// Streams the file behind a purchased book.
///
/// # Endpoint
///
/// `GET /api/books/{id}/download?receipt=CODE`
///
/// # Response
///
/// Raw file bytes with `Content-Type` derived from the file extension and
/// `Content-Disposition: attachment`.
///
/// # Errors
///
/// - 400 Bad Request: the book id is not a number
/// - 404 Not Found: unknown book id, or the file is missing from storage
/// - 403 Forbidden: receipt missing or not covering this book (when receipts
///   are required)
/// - 500 Internal Server Error: storage read failure
pub async fn download_handler(
    State(state): State<AppState>,
    book_id: Result<Path<BookId>, PathRejection>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, AppError> {
    let Path(book_id) = book_id.map_err(|e| {
        AppError::bad_request(
            "Invalid book id",
            json!({ "field": "id", "reason": e.body_text() }),
        )
    })?;

    let file = state
        .download_service
        .download(book_id, query.receipt.as_deref())
        .await?;

    let headers = [
        (header::CONTENT_TYPE, content_type_for(&file.file_name).to_string()),
        (header::CONTENT_DISPOSITION, attachment_disposition(&file.file_name)),
    ];

    Ok((headers, file.bytes).into_response())
}
