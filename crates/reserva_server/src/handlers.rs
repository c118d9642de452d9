//! HTTP handlers for the reservation API.
//!
//! Each handler locks the shared connection, builds the core repository
//! or service it needs, and maps core errors onto HTTP responses. All
//! booking correctness lives in `reserva_core`; nothing here touches SQL.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use log::info;

use crate::dto::{
    AvailableDatesQuery, AvailableDatesResponse, CreateReservationRequest, HealthResponse,
    ReservationListResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use reserva_core::{
    core_version, BookingService, CalendarRepository, DateRange, Reservation, ReservationService,
    SqliteCalendarRepository, SqliteReservationRepository,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: core_version(),
    })
}

/// GET /api/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
) -> HandlerResult<ReservationListResponse> {
    let conn = state.db.lock().await;
    let service = ReservationService::new(SqliteReservationRepository::try_new(&conn)?);
    let reservations = service.find_all()?;

    Ok(Json(ReservationListResponse { reservations }))
}

/// GET /api/reservations/{id}
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Reservation> {
    let conn = state.db.lock().await;
    let service = ReservationService::new(SqliteReservationRepository::try_new(&conn)?);
    let reservation = service.find_by_id(&id)?;

    Ok(Json(reservation))
}

/// POST /api/reservations
///
/// The JSON rejection is taken by hand so every malformed body maps to
/// 400, keeping the surface contract independent of axum's rejection
/// split between syntax and type errors.
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    let Json(request) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    info!(
        "event=request module=http status=start method=POST path=/api/reservations email={}",
        request.email
    );

    let reservation = Reservation::new(request.into());
    let mut conn = state.db.lock().await;
    let created = BookingService::try_new(&mut conn)?.book(&reservation)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/calendar/available-dates
pub async fn available_dates(
    State(state): State<AppState>,
    Query(query): Query<AvailableDatesQuery>,
) -> HandlerResult<AvailableDatesResponse> {
    let range = DateRange::new(query.start_date, query.end_date)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let conn = state.db.lock().await;
    let calendar = SqliteCalendarRepository::try_new(&conn)?;
    let dates = calendar.find_available_dates(&range)?;

    Ok(Json(AvailableDatesResponse { dates }))
}
