use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": state.clock.now().timestamp(),
        "today": state.clock.today(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "carryover"
    }))
}
