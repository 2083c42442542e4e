//! API handlers: validate the query, run the engine off the async workers,
//! and serialize the result as a decimal string.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use seqcalc_core::{Computation, EngineKind, Options, Timed};

use crate::error::ApiError;

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub options: Arc<Options>,
}

impl AppState {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options: Arc::new(options),
        }
    }
}

/// Successful computation body.
///
/// `value` is a decimal string so clients with bounded-width numbers do not
/// lose precision.
#[derive(Debug, Clone, Serialize)]
pub struct ValueBody {
    pub value: String,
    #[serde(rename = "processingTime")]
    pub processing_time: String,
}

type Params = Query<HashMap<String, String>>;

/// `GET /api/factorial?n=`
pub async fn factorial(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<ValueBody>, ApiError> {
    compute(EngineKind::Factorial, &state, &params).await
}

/// `GET /api/fibonacci?n=`
pub async fn fibonacci(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<ValueBody>, ApiError> {
    compute(EngineKind::Fibonacci, &state, &params).await
}

/// `GET /api/ackermann?m=&n=`
pub async fn ackermann(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<ValueBody>, ApiError> {
    compute(EngineKind::Ackermann, &state, &params).await
}

async fn compute(
    kind: EngineKind,
    state: &AppState,
    params: &HashMap<String, String>,
) -> Result<Json<ValueBody>, ApiError> {
    let computation = Computation::from_query(kind, |p| params.get(p).map(String::as_str))?;
    let options = Arc::clone(&state.options);

    // Decimal conversion happens outside the timed section but still on the
    // blocking pool; it is quadratic in the digit count.
    let outcome = tokio::task::spawn_blocking(move || {
        let Timed { value, elapsed } = computation.run_timed(&options);
        Timed {
            value: value.map(|v| v.to_string()),
            elapsed,
        }
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    let processing_time = outcome.seconds();
    let value = outcome.value?;
    Ok(Json(ValueBody {
        value,
        processing_time,
    }))
}
