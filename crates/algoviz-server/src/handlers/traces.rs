//! Trace generation and replay handlers.

use axum::extract::{Path, State};
use axum::Json;

use algoviz_core::input::random_array;
use algoviz_core::{generate, Algorithm, Graph, TraceRequest, VertexId};

use crate::error::ApiError;
use crate::schema::traces::{CreateTraceRequest, TraceResponse};
use crate::state::{AppState, StoredTrace};

/// Generates a trace and retains it for replay.
///
/// `POST /traces`
pub async fn create_trace(
    State(state): State<AppState>,
    Json(req): Json<CreateTraceRequest>,
) -> Result<Json<TraceResponse>, ApiError> {
    let algorithm: Algorithm = req.algorithm.parse()?;
    let request = build_request(&state, req)?;

    let projected = request.projected_cells(algorithm);
    if projected > state.config.max_trace_cells {
        return Err(ApiError::TooLarge(format!(
            "{} on this input could hold up to {} snapshot cells, limit is {}",
            algorithm, projected, state.config.max_trace_cells
        )));
    }
    let trace = generate(algorithm, &request)?;

    let fingerprint = trace.fingerprint(algorithm);
    tracing::info!(%algorithm, steps = trace.len(), %fingerprint, "trace generated");
    state.remember(
        &fingerprint,
        StoredTrace {
            algorithm,
            trace: trace.clone(),
        },
    );

    Ok(Json(TraceResponse {
        algorithm,
        family: algorithm.family(),
        fingerprint,
        len: trace.len(),
        steps: trace,
    }))
}

/// Returns a previously generated trace.
///
/// `GET /traces/{fingerprint}`
pub async fn get_trace(
    State(state): State<AppState>,
    Path(fingerprint): Path<String>,
) -> Result<Json<TraceResponse>, ApiError> {
    let stored = state
        .recall(&fingerprint)
        .ok_or_else(|| ApiError::NotFound(format!("trace {} not found", fingerprint)))?;

    Ok(Json(TraceResponse {
        algorithm: stored.algorithm,
        family: stored.algorithm.family(),
        len: stored.trace.len(),
        fingerprint,
        steps: stored.trace,
    }))
}

/// Resolves the array (given or random) and graph, enforcing input size
/// limits. The projected trace size is checked separately by the caller.
fn build_request(state: &AppState, req: CreateTraceRequest) -> Result<TraceRequest, ApiError> {
    let limit = state.config.max_input_len;

    let array = match (req.array, req.random) {
        (Some(_), Some(_)) => {
            return Err(ApiError::BadRequest(
                "supply either 'array' or 'random', not both".into(),
            ))
        }
        (Some(array), None) => array,
        (None, Some(random)) => {
            if random.len > limit {
                return Err(ApiError::TooLarge(format!(
                    "random length {} exceeds limit {}",
                    random.len, limit
                )));
            }
            random_array(random.len, random.seed)
        }
        (None, None) => Vec::new(),
    };
    if array.len() > limit {
        return Err(ApiError::TooLarge(format!(
            "array length {} exceeds limit {}",
            array.len(),
            limit
        )));
    }

    let graph = match req.graph {
        Some(value) => {
            let graph = Graph::from_json(&value)?;
            if graph.vertex_count() > limit {
                return Err(ApiError::TooLarge(format!(
                    "graph has {} vertices, limit is {}",
                    graph.vertex_count(),
                    limit
                )));
            }
            if graph.edge_count() > state.config.max_edges {
                return Err(ApiError::TooLarge(format!(
                    "graph has {} edges, limit is {}",
                    graph.edge_count(),
                    state.config.max_edges
                )));
            }
            Some(graph)
        }
        None => None,
    };

    Ok(TraceRequest {
        array,
        target: req.target,
        graph,
        start: req.start.map(VertexId::from),
    })
}
