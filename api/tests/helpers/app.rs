use axum::Router;
use db::test_utils::setup_test_db;
use util::state::AppState;

/// Full application over a fresh, migrated in-memory database.
///
/// Each call gets its own database, so tests only share the global config
/// (storage root), which storage tests guard with `#[serial]`.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db);
    (api::app(app_state.clone()), app_state)
}
