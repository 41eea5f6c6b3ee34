//! Game HTTP routes, mounted under `/api/game`.

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::hand_entry::HandEntry;
use crate::domain::setup::{GameSetup, SettingsUpdate};
use crate::domain::state::ScoreDeltas;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::http::etag::{game_etag, if_none_match_hits};
use crate::services::session::{SessionService, SessionView};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    #[serde(default)]
    pub confirm: bool,
    #[serde(default = "keep_names_default")]
    pub keep_names: bool,
}

fn keep_names_default() -> bool {
    true
}

#[derive(Debug, Serialize)]
struct PreviewResponse {
    deltas: ScoreDeltas,
}

/// JSON view with the current ETag attached.
fn view_response(status: StatusCode, session: &SessionService, view: SessionView) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((ETAG, game_etag(session.key(), &view.game_id, view.revision)))
        .json(view)
}

/// GET /api/game
///
/// Current game snapshot with an ETag. `If-None-Match` with the current
/// ETag yields `304 Not Modified` and no body.
async fn get_game(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = app_state.session();
    let view = session.view()?;
    let etag = game_etag(session.key(), &view.game_id, view.revision);

    let not_modified = http_req
        .headers()
        .get(IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| if_none_match_hits(v, &etag));
    if not_modified {
        return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
            .insert_header((ETAG, etag))
            .finish());
    }

    Ok(HttpResponse::Ok().insert_header((ETAG, etag)).json(view))
}

/// POST /api/game/setup
async fn setup(
    app_state: web::Data<AppState>,
    body: ValidatedJson<GameSetup>,
) -> Result<HttpResponse, AppError> {
    let mut session = app_state.session();
    let view = session.setup(&body)?;
    Ok(view_response(StatusCode::CREATED, &session, view))
}

/// POST /api/game/preview
async fn preview(
    app_state: web::Data<AppState>,
    body: ValidatedJson<HandEntry>,
) -> Result<web::Json<PreviewResponse>, AppError> {
    let deltas = app_state.session().preview(&body)?;
    Ok(web::Json(PreviewResponse { deltas }))
}

/// POST /api/game/hands
async fn submit_hand(
    app_state: web::Data<AppState>,
    body: ValidatedJson<HandEntry>,
) -> Result<HttpResponse, AppError> {
    let mut session = app_state.session();
    let view = session.submit_hand(&body)?;
    Ok(view_response(StatusCode::OK, &session, view))
}

/// POST /api/game/undo
async fn undo(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ConfirmRequest>,
) -> Result<HttpResponse, AppError> {
    let mut session = app_state.session();
    let view = session.undo(body.confirm)?;
    Ok(view_response(StatusCode::OK, &session, view))
}

/// POST /api/game/new
async fn new_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewGameRequest>,
) -> Result<HttpResponse, AppError> {
    let mut session = app_state.session();
    let view = session.new_game(body.confirm, body.keep_names)?;
    Ok(view_response(StatusCode::OK, &session, view))
}

/// POST /api/game/reset
async fn reset(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ConfirmRequest>,
) -> Result<HttpResponse, AppError> {
    app_state.session().reset_all(body.confirm)?;
    Ok(HttpResponse::NoContent().finish())
}

/// PATCH /api/game/settings
async fn update_settings(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SettingsUpdate>,
) -> Result<HttpResponse, AppError> {
    let mut session = app_state.session();
    let view = session.update_settings(&body)?;
    Ok(view_response(StatusCode::OK, &session, view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(get_game)))
        .service(web::resource("/setup").route(web::post().to(setup)))
        .service(web::resource("/preview").route(web::post().to(preview)))
        .service(web::resource("/hands").route(web::post().to(submit_hand)))
        .service(web::resource("/undo").route(web::post().to(undo)))
        .service(web::resource("/new").route(web::post().to(new_game)))
        .service(web::resource("/reset").route(web::post().to(reset)))
        .service(web::resource("/settings").route(web::patch().to(update_settings)));
}
