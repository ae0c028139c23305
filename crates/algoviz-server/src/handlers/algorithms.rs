//! Algorithm catalog handler.

use axum::Json;

use algoviz_core::Algorithm;

use crate::schema::algorithms::AlgorithmInfo;

/// Lists every algorithm with a trace generator.
///
/// `GET /algorithms`
pub async fn list_algorithms() -> Json<Vec<AlgorithmInfo>> {
    Json(Algorithm::all().iter().copied().map(AlgorithmInfo::from).collect())
}
