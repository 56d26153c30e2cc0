use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::{hero, hero_power, index, power};
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(index::index))
        .merge(hero_routes())
        .merge(power_routes())
        .merge(hero_power_routes())
}

fn hero_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(hero::list_heroes, hero::create_hero))
        .routes(routes!(
            hero::get_hero,
            hero::update_hero,
            hero::delete_hero
        ))
        .routes(routes!(hero::list_hero_powers))
}

fn power_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(power::list_powers, power::create_power))
        .routes(routes!(
            power::get_power,
            power::update_power,
            power::delete_power
        ))
}

fn hero_power_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            hero_power::list_hero_powers,
            hero_power::create_hero_power
        ))
        .routes(routes!(
            hero_power::get_hero_power,
            hero_power::update_hero_power,
            hero_power::delete_hero_power
        ))
}
