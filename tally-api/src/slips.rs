use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tally_slip::SlipOrder;
use tally_store::StoreError;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/download-POS/{order_id}", get(download_pos))
}

/// Serve the POS slip for an order as a plain-text download.
async fn download_pos(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Response, AppError> {
    let order: SlipOrder = tally_store::read_json(&state.slip_order_path).map_err(|e| {
        tracing::error!("Failed to read slip order file: {}", e);
        let msg = match e {
            StoreError::Malformed(_) => "Failed to parse orders data",
            _ => "Failed to read orders data",
        };
        AppError::InternalServerError(msg.to_string())
    })?;

    if order.id != order_id {
        return Err(AppError::NotFoundError("Order not found".to_string()));
    }

    let slip = state.renderer.render(&order);
    let filename = format!("attachment; filename=\"pos-{}.txt\"", order.order_code);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, filename),
        ],
        slip,
    )
        .into_response())
}
