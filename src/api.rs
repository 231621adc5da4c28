//! REST API over a single matchmaker: the six operations plus the tracker view.
//! Every call returns the refreshed view so the client can redraw without a second request.

use crate::logic::{
    new_game, remove_contestant, rename_all, reset_cooldowns, select_opponent, undo_last,
};
use crate::models::{ContestantId, ContestantView, Matchmaker, MatchmakerError, Outcome};
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Shared state: the one tournament this server tracks.
pub type AppState = Data<RwLock<Matchmaker>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Tracker state after an operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackerResponse {
    pub outcome: Outcome,
    /// Names of contestants that can be fought next ("Opponents").
    pub eligible: Vec<String>,
    /// Names of contestants cooling down ("History").
    pub cooldown: Vec<String>,
    pub contestants: Vec<ContestantView>,
    pub last_opponent: Option<ContestantId>,
    pub num_alive: usize,
    pub history_len: usize,
}

impl TrackerResponse {
    pub fn new(matchmaker: &Matchmaker, outcome: Outcome) -> Self {
        let (eligible, cooldown) = matchmaker.names_view();
        Self {
            outcome,
            eligible,
            cooldown,
            contestants: matchmaker.contestants(),
            last_opponent: matchmaker.last_opponent(),
            num_alive: matchmaker.num_alive(),
            history_len: matchmaker.history_len(),
        }
    }
}

#[derive(Deserialize)]
struct RenameBody {
    name: String,
}

#[derive(Deserialize)]
struct RenameAllBody {
    text: String,
}

/// Path segment: contestant id (e.g. /api/contestants/{id}/select)
#[derive(Deserialize)]
struct ContestantPath {
    id: ContestantId,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn error_response(e: MatchmakerError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        MatchmakerError::UnknownContestant(_) => HttpResponse::NotFound().json(body),
        MatchmakerError::IneligibleSelection(_) | MatchmakerError::WrongNameCount { .. } => {
            HttpResponse::BadRequest().json(body)
        }
    }
}

fn respond(matchmaker: &Matchmaker, result: Result<Outcome, MatchmakerError>) -> HttpResponse {
    match result {
        Ok(outcome) => HttpResponse::Ok().json(TrackerResponse::new(matchmaker, outcome)),
        Err(e) => error_response(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "matchup-tracker",
    })
}

/// Current tracker view (no change).
#[get("/api/tracker")]
async fn api_get_tracker(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(TrackerResponse::new(&g, Outcome::Unchanged))
}

/// Start a new game: fresh roster with default names.
#[post("/api/tracker/new-game")]
async fn api_new_game(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let outcome = new_game(&mut g);
    HttpResponse::Ok().json(TrackerResponse::new(&g, outcome))
}

/// Make every cooling-down contestant eligible again.
#[post("/api/tracker/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let outcome = reset_cooldowns(&mut g);
    HttpResponse::Ok().json(TrackerResponse::new(&g, outcome))
}

/// Undo the last selection or reset (outcome "unchanged" when nothing is left to undo).
#[post("/api/tracker/undo")]
async fn api_undo(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let outcome = undo_last(&mut g);
    HttpResponse::Ok().json(TrackerResponse::new(&g, outcome))
}

/// Record a match against a contestant.
#[post("/api/contestants/{id}/select")]
async fn api_select(state: AppState, path: Path<ContestantPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let result = select_opponent(&mut g, path.id);
    respond(&g, result)
}

/// Rename one contestant.
#[put("/api/contestants/{id}/name")]
async fn api_rename(state: AppState, path: Path<ContestantPath>, body: Json<RenameBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let result = g.rename(path.id, body.into_inner().name).map(|()| Outcome::Applied);
    respond(&g, result)
}

/// Rename the whole roster from a newline-separated list.
#[put("/api/contestants/names")]
async fn api_rename_all(state: AppState, body: Json<RenameAllBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let result = rename_all(&mut g, &body.text);
    respond(&g, result)
}

/// Remove a contestant from the tournament for good.
#[delete("/api/contestants/{id}")]
async fn api_remove(state: AppState, path: Path<ContestantPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let result = remove_contestant(&mut g, path.id);
    respond(&g, result)
}

/// Register every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_get_tracker)
        .service(api_new_game)
        .service(api_reset)
        .service(api_undo)
        .service(api_select)
        .service(api_rename_all)
        .service(api_rename)
        .service(api_remove);
}
