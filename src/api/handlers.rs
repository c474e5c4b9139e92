use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregation::build_result;
use crate::api::{ApiError, AppState};
use crate::error::Error;
use crate::models::{AggregationResult, AggregationSummary, NormalizedProblem};

/// `{status, timestamp, ...body}` wrapper shared by every response.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Envelope<T> {
    pub fn success(body: T) -> Self {
        Self {
            status: "success",
            timestamp: Utc::now(),
            body,
        }
    }

    pub fn error(body: T) -> Self {
        Self {
            status: "error",
            timestamp: Utc::now(),
            body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompaniesBody {
    pub companies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryBody {
    pub company: String,
    pub summary: AggregationSummary,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub difficulty: Option<String>,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/companies
pub async fn get_companies(State(state): State<AppState>) -> Json<Envelope<CompaniesBody>> {
    let companies = state
        .aggregator
        .catalog()
        .company_ids()
        .into_iter()
        .map(String::from)
        .collect();

    Json(Envelope::success(CompaniesBody { companies }))
}

/// GET /api/questions/:company?difficulty=
pub async fn get_questions(
    State(state): State<AppState>,
    Path(company): Path<String>,
    Query(query): Query<QuestionsQuery>,
) -> Result<Json<Envelope<AggregationResult>>, ApiError> {
    let problems = run_aggregation(&state, company.clone(), query.difficulty).await?;
    Ok(Json(Envelope::success(build_result(&company, problems, true))))
}

/// GET /api/summary/:company
pub async fn get_summary(
    State(state): State<AppState>,
    Path(company): Path<String>,
) -> Result<Json<Envelope<SummaryBody>>, ApiError> {
    let problems = run_aggregation(&state, company.clone(), None).await?;
    let result = build_result(&company, problems, false);

    Ok(Json(Envelope::success(SummaryBody {
        company: result.company,
        summary: result.summary,
    })))
}

/// Runs the aggregation on its own task so a panic while processing becomes an error response.
async fn run_aggregation(
    state: &AppState,
    company: String,
    difficulty: Option<String>,
) -> Result<Vec<NormalizedProblem>, Error> {
    let aggregator = state.aggregator.clone();
    tokio::spawn(async move { aggregator.aggregate(&company, difficulty.as_deref()).await })
        .await
        .map_err(|e| Error::Internal(format!("aggregation task failed: {}", e)))
}
