use actix_web::{delete, get, patch, post, put, web, HttpResponse};

use crate::db::MatchStore;
use crate::handlers::match_handler;
use crate::models::match_record::{CreateMatchRequest, ExtraTimeRequest, ScoreUpdateRequest};

/// List every match
#[get("/matches")]
async fn list_matches(store: web::Data<MatchStore>) -> HttpResponse {
    match_handler::list_matches(store).await
}

/// Fetch a single match by id
#[get("/matches/{match_id}")]
async fn get_match(path: web::Path<i32>, store: web::Data<MatchStore>) -> HttpResponse {
    let match_id = path.into_inner();
    match_handler::get_match(match_id, store).await
}

/// Create a new match
#[post("/matches")]
async fn create_match(
    request: web::Json<CreateMatchRequest>,
    store: web::Data<MatchStore>,
) -> HttpResponse {
    match_handler::create_match(request, store).await
}

/// Overwrite the scores of an existing match
#[put("/matches/{match_id}")]
async fn update_match(
    path: web::Path<i32>,
    request: web::Json<ScoreUpdateRequest>,
    store: web::Data<MatchStore>,
) -> HttpResponse {
    let match_id = path.into_inner();
    match_handler::update_scores(match_id, request, store, "Match updated").await
}

/// Remove a match
#[delete("/matches/{match_id}")]
async fn delete_match(path: web::Path<i32>, store: web::Data<MatchStore>) -> HttpResponse {
    let match_id = path.into_inner();
    match_handler::delete_match(match_id, store).await
}

/// Overwrite the goal tally
#[patch("/matches/{match_id}/goals")]
async fn update_goals(
    path: web::Path<i32>,
    request: web::Json<ScoreUpdateRequest>,
    store: web::Data<MatchStore>,
) -> HttpResponse {
    let match_id = path.into_inner();
    match_handler::update_scores(match_id, request, store, "Goals updated").await
}

/// Record one yellow card
#[patch("/matches/{match_id}/yellowcards")]
async fn add_yellow_card(path: web::Path<i32>, store: web::Data<MatchStore>) -> HttpResponse {
    let match_id = path.into_inner();
    match_handler::add_yellow_card(match_id, store).await
}

/// Record one red card
#[patch("/matches/{match_id}/redcards")]
async fn add_red_card(path: web::Path<i32>, store: web::Data<MatchStore>) -> HttpResponse {
    let match_id = path.into_inner();
    match_handler::add_red_card(match_id, store).await
}

/// Add minutes of extra time
#[patch("/matches/{match_id}/extratime")]
async fn add_extra_time(
    path: web::Path<i32>,
    request: web::Json<ExtraTimeRequest>,
    store: web::Data<MatchStore>,
) -> HttpResponse {
    let match_id = path.into_inner();
    match_handler::add_extra_time(match_id, request, store).await
}
