//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, MessageBody, endpoints,
    transaction::{
        TransactionStore, create_transaction_endpoint, delete_transaction_endpoint,
        get_transactions_endpoint,
    },
};

/// The text served from the root path so that people (and uptime checks) can
/// see the server is up.
pub const BANNER: &str = "Expense tracker API is running";

/// Return a router with all the app's routes.
///
/// Cross-origin requests are allowed from anywhere so that browser clients
/// hosted elsewhere can use the API.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_banner))
        .route(
            endpoints::TRANSACTIONS_API,
            get(get_transactions_endpoint::<S>).post(create_transaction_endpoint::<S>),
        )
        .route(
            endpoints::TRANSACTION,
            delete(delete_transaction_endpoint::<S>),
        )
        .fallback(get_404_not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn get_banner() -> &'static str {
    BANNER
}

async fn get_404_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(MessageBody::new("Not found."))).into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::{
        AppState, MessageBody, TRANSACTION_DELETED_MESSAGE, TRANSACTION_NOT_FOUND_MESSAGE,
        build_router, create_sqlite_app_state,
        endpoints::{self, format_endpoint},
        routing::BANNER,
        transaction::{Category, MemoryTransactionStore, Transaction},
    };

    fn get_test_server() -> TestServer {
        let app = build_router(AppState::new(MemoryTransactionStore::new()));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn root_serves_banner() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        response.assert_text(BANNER);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let server = get_test_server();

        let response = server.get("/api/nope").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn create_then_list_contains_new_transaction() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "description": "Coffee",
                "amount": 4.5,
                "category": "expense",
                "date": "2024-01-05",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created = response.json::<Transaction>();
        assert_eq!(created.description, "Coffee");
        assert_eq!(created.amount, dec!(4.50));
        assert_eq!(created.category, Category::Expense);
        assert_eq!(created.date.map(|date| date.to_string()), Some("2024-01-05".to_owned()));

        let listed = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn create_response_matches_wire_shape() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "description": "Coffee",
                "amount": 4.5,
                "category": "expense",
                "date": "2024-01-05",
            }))
            .await;

        let body = response.json::<serde_json::Value>();
        assert!(body["id"].is_i64());
        assert_eq!(body["description"], "Coffee");
        assert_eq!(body["amount"], 4.5);
        assert_eq!(body["category"], "expense");
        assert_eq!(body["date"], "2024-01-05");
    }

    #[tokio::test]
    async fn create_rejects_invalid_json() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .text("{not json")
            .content_type("application/json")
            .await;

        response.assert_status_bad_request();
        assert!(!response.json::<MessageBody>().message.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_unknown_category() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "description": "Birthday",
                "amount": 20,
                "category": "gift",
            }))
            .await;

        response.assert_status_bad_request();
        let listed = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn delete_missing_transaction_is_404() {
        let server = get_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 1234))
            .await;

        response.assert_status_not_found();
        response.assert_json(&json!({"message": TRANSACTION_NOT_FOUND_MESSAGE}));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_transaction() {
        let server = get_test_server();
        let mut created = Vec::new();
        for description in ["Salary", "Rent", "Coffee"] {
            created.push(
                server
                    .post(endpoints::TRANSACTIONS_API)
                    .json(&json!({
                        "description": description,
                        "amount": 10,
                        "category": "income",
                    }))
                    .await
                    .json::<Transaction>(),
            );
        }

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, created[1].id))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"message": TRANSACTION_DELETED_MESSAGE}));
        let listed = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();
        assert_eq!(listed, vec![created[0].clone(), created[2].clone()]);
    }

    #[tokio::test]
    async fn works_with_sqlite_store() {
        let connection = rusqlite::Connection::open_in_memory().unwrap();
        let state = create_sqlite_app_state(connection).unwrap();
        let server = TestServer::try_new(build_router(state)).expect("Could not create test server.");

        let created = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"description": "Pay", "amount": 1000, "category": "income"}))
            .await
            .json::<Transaction>();
        server
            .delete(&format_endpoint(endpoints::TRANSACTION, created.id))
            .await
            .assert_status_ok();

        server
            .delete(&format_endpoint(endpoints::TRANSACTION, created.id))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn cent_amounts_survive_the_sqlite_store() {
        let connection = rusqlite::Connection::open_in_memory().unwrap();
        let state = create_sqlite_app_state(connection).unwrap();
        let server = TestServer::try_new(build_router(state)).expect("Could not create test server.");

        server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"description": "Book", "amount": 19.99, "category": "expense"}))
            .await
            .assert_status(StatusCode::CREATED);

        let listed = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<serde_json::Value>();
        assert_eq!(listed[0]["amount"], 19.99);
    }

    #[tokio::test]
    async fn create_rejects_fractions_of_a_cent() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"description": "Interest", "amount": 0.001, "category": "income"}))
            .await;

        response.assert_status_bad_request();
    }
}
