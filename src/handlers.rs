use crate::errors::AppError;
use crate::export::{csv_file_name, to_csv, DEFAULT_HEADERS};
use crate::mapper::map_clicks;
use crate::models::{ClicksQuery, ClicksResponse, DisplayClick, SummaryResponse};
use crate::source::{clamp_limit, FetchOutcome};
use crate::state::AppState;
use crate::summary::summarize;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::{debug, error, warn};

pub async fn health() -> &'static str {
    "ok"
}

pub async fn get_clicks(
    State(state): State<AppState>,
    query: Result<Query<ClicksQuery>, QueryRejection>,
) -> Result<Json<ClicksResponse>, AppError> {
    let query = parse_query(query)?;
    let (rows, outcome) = refresh(&state, &query).await?;
    Ok(Json(ClicksResponse {
        success: true,
        count: rows.len(),
        data: rows,
        timezone: query.tz,
        status: outcome.status_message(),
        fallback: outcome.is_fallback(),
    }))
}

pub async fn get_clicks_csv(
    State(state): State<AppState>,
    query: Result<Query<ClicksQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = parse_query(query)?;
    let (rows, _) = refresh(&state, &query).await?;
    let disposition = format!("attachment; filename=\"{}\"", csv_file_name(query.tz));
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        to_csv(&rows, DEFAULT_HEADERS),
    ))
}

pub async fn get_summary(
    State(state): State<AppState>,
    query: Result<Query<ClicksQuery>, QueryRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let query = parse_query(query)?;
    let (rows, outcome) = refresh(&state, &query).await?;
    Ok(Json(SummaryResponse {
        summary: summarize(&rows),
        timezone: query.tz,
        status: outcome.status_message(),
    }))
}

fn parse_query(query: Result<Query<ClicksQuery>, QueryRejection>) -> Result<ClicksQuery, AppError> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected clicks query");
            Err(AppError::bad_request(rejection.body_text()))
        }
    }
}

async fn refresh(
    state: &AppState,
    query: &ClicksQuery,
) -> Result<(Vec<DisplayClick>, FetchOutcome), AppError> {
    let config = &state.config;
    let use_api = query.use_api.unwrap_or_else(|| config.has_api_key());
    let limit = clamp_limit(query.limit);

    let outcome = state
        .client
        .get_clicks_data(
            use_api,
            config.api_key.as_deref(),
            config.domain_id.as_deref(),
            limit,
        )
        .await;

    let rows = map_clicks(outcome.records(), query.tz).map_err(|err| {
        error!(error = %err, "failed to map click records");
        AppError::from(err)
    })?;
    debug!(rows = rows.len(), tz = %query.tz, "mapped clicks");
    Ok((rows, outcome))
}
