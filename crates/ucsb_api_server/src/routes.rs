//! Router assembly.
//!
//! Every record type gets the same five routes under its base path. Guards
//! are attached per method so that the GET and PUT/DELETE handlers sharing a
//! path can require different capabilities.

use crate::handlers::{
    create_record, current_user, delete_record, get_record, list_records, system_info,
    update_record,
};
use crate::middleware::{request_tracing, require_capability, CapabilityGuard};
use crate::state::AppState;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post, put};
use axum::Router;
use ucsb_api_core::{
    Article, Capability, MenuItemReview, RecommendationRequest, SqlRecord,
    UcsbDiningCommonsMenuItem, UcsbOrganization,
};

pub const RECOMMENDATION_REQUESTS_PATH: &str = "/api/recommendationrequests";
pub const MENU_ITEM_REVIEWS_PATH: &str = "/api/menuitemreview";
pub const ORGANIZATIONS_PATH: &str = "/api/UCSBOrganization";
pub const DINING_COMMONS_MENU_ITEMS_PATH: &str = "/api/ucsbdiningcommonsmenuitem";
pub const ARTICLES_PATH: &str = "/api/articles";

#[derive(Clone)]
struct Guards {
    read: CapabilityGuard,
    write: CapabilityGuard,
}

/// Builds the full application router over `state`.
pub fn build_router(state: AppState) -> Router {
    let guards = Guards {
        read: CapabilityGuard::new(&state, Capability::Read),
        write: CapabilityGuard::new(&state, Capability::Write),
    };

    Router::new()
        .merge(record_routes::<RecommendationRequest>(RECOMMENDATION_REQUESTS_PATH, &guards))
        .merge(record_routes::<MenuItemReview>(MENU_ITEM_REVIEWS_PATH, &guards))
        .merge(record_routes::<UcsbOrganization>(ORGANIZATIONS_PATH, &guards))
        .merge(record_routes::<UcsbDiningCommonsMenuItem>(
            DINING_COMMONS_MENU_ITEMS_PATH,
            &guards,
        ))
        .merge(record_routes::<Article>(ARTICLES_PATH, &guards))
        .route("/api/systemInfo", get(system_info))
        .route(
            "/api/currentUser",
            get(current_user).route_layer(from_fn_with_state(guards.read.clone(), require_capability)),
        )
        .layer(from_fn(request_tracing))
        .with_state(state)
}

fn record_routes<E: SqlRecord>(base: &str, guards: &Guards) -> Router<AppState> {
    let read = || from_fn_with_state(guards.read.clone(), require_capability);
    let write = || from_fn_with_state(guards.write.clone(), require_capability);

    Router::new()
        .route(&format!("{base}/all"), get(list_records::<E>).route_layer(read()))
        .route(&format!("{base}/post"), post(create_record::<E>).route_layer(write()))
        .route(
            base,
            get(get_record::<E>).route_layer(read()).merge(
                put(update_record::<E>)
                    .delete(delete_record::<E>)
                    .route_layer(write()),
            ),
        )
}
