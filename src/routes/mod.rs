use actix_web::web;

pub mod backend_health;
pub mod matches;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/api")
            .service(matches::list_matches)
            .service(matches::get_match)
            .service(matches::create_match)
            .service(matches::update_match)
            .service(matches::delete_match)
            .service(matches::update_goals)
            .service(matches::add_yellow_card)
            .service(matches::add_red_card)
            .service(matches::add_extra_time),
    );
}
