//! Mock Server Tests
//!
//! Drive the server through `HttpTodoApi`, the same way the app does.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::api::{ApiError, HttpTodoApi, Method, Request, Response, TodoApi, Transport};
    use crate::domain::{NewTodo, Todo, TodoId};
    use crate::server::{MockServer, MockServerConfig};

    fn setup() -> (Rc<MockServer>, HttpTodoApi<Rc<MockServer>>) {
        let server = Rc::new(MockServer::new(MockServerConfig::test()));
        let api = HttpTodoApi::new(server.clone());
        (server, api)
    }

    #[tokio::test]
    async fn test_test_environment_starts_empty() {
        let (_server, api) = setup();
        assert!(api.list().await.unwrap().is_empty());
    }

    #[test]
    fn test_development_environment_is_seeded() {
        let server = MockServer::new(MockServerConfig::development());
        let texts: Vec<_> = server.db().all().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["Buy groceries", "Walk the dog", "Do laundry"]);
        assert!(server.db().all().iter().all(|t| !t.is_done));
    }

    #[test]
    fn test_factory_numbering_continues() {
        let server = MockServer::new(MockServerConfig::test());
        server.create_list(2);
        let more = server.create_list(1);
        assert_eq!(more[0].text, "Todo 3");
        assert_eq!(server.db().len(), 3);
    }

    #[tokio::test]
    async fn test_create_assigns_server_id() {
        let (server, api) = setup();

        let created = api.create(&NewTodo::new("Walk the dog")).await.unwrap();

        assert_eq!(created.id, TodoId::new("1"));
        assert!(!created.is_done);
        assert_eq!(server.db().all(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_stores_full_item() {
        let (server, api) = setup();
        let todo = server.create(NewTodo::new("Todo 1"));

        let updated = api.update(&todo.id, &todo.clone().done()).await.unwrap();

        assert!(updated.is_done);
        assert_eq!(server.db().get(&todo.id), Some(updated));
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let (server, _api) = setup();
        let todo = server.create(NewTodo::new("Todo 1"));
        let body = serde_json::to_string(&Todo::new("999", "Renamed")).unwrap();

        let response = server
            .send(Request::new(Method::Patch, "/api/todos/1").with_body(body))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(server.db().get(&todo.id).map(|t| t.text), Some("Renamed".to_string()));
        assert!(server.db().get(&TodoId::new("999")).is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_no_content() {
        let (server, api) = setup();
        let todo = server.create(NewTodo::new("Todo 1"));

        api.delete(&todo.id).await.unwrap();

        assert!(server.db().is_empty());
        let again = server.send(Request::delete("/api/todos/1")).await.unwrap();
        assert_eq!(again.status, 404);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (_server, api) = setup();

        let err = api.update(&TodoId::new("5"), &Todo::new("5", "x")).await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 404, message: Some(_) }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (server, _api) = setup();

        let response = server
            .send(Request::new(Method::Post, "/api/todos").with_body("{not json".into()))
            .await
            .unwrap();

        assert_eq!(response.status, 400);
        assert!(server.db().is_empty());
    }

    #[tokio::test]
    async fn test_unmatched_routes() {
        let (server, _api) = setup();

        assert_eq!(server.send(Request::get("/api/users")).await.unwrap().status, 404);
        assert_eq!(server.send(Request::get("/todos")).await.unwrap().status, 404);
        assert_eq!(server.send(Request::delete("/api/todos")).await.unwrap().status, 405);
    }

    #[tokio::test]
    async fn test_override_replaces_route() {
        let (server, api) = setup();
        server.override_route(Method::Get, "/todos", |_, _| async {
            Response::error(500, "The database is on vacation")
        });

        let err = api.list().await.unwrap_err();

        assert_eq!(err.user_message(), "The database is on vacation");
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let (server, api) = setup();
        server.override_route(Method::Get, "/todos", |_, _| async { Response::text(200, "Bad gateway") });

        assert!(matches!(api.list().await, Err(ApiError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_shutdown_fails_at_transport() {
        let (server, api) = setup();
        server.shutdown();

        assert!(matches!(api.list().await, Err(ApiError::Transport(_))));
        assert!(server.handled_requests().is_empty());
    }

    #[tokio::test]
    async fn test_handled_requests_are_logged() {
        let (server, api) = setup();
        let todo = api.create(&NewTodo::new("a")).await.unwrap();
        api.delete(&todo.id).await.unwrap();

        let paths: Vec<_> = server.handled_requests().into_iter().map(|r| (r.method, r.path)).collect();
        assert_eq!(
            paths,
            vec![(Method::Post, "/api/todos".to_string()), (Method::Delete, "/api/todos/1".to_string())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_development_latency_is_simulated() {
        let server = Rc::new(MockServer::new(MockServerConfig::development()));
        let api = HttpTodoApi::new(server.clone());
        let started = tokio::time::Instant::now();

        api.create(&NewTodo::new("slow")).await.unwrap();

        assert!(started.elapsed() >= std::time::Duration::from_millis(5000));
        assert_eq!(server.db().len(), 4);
    }
}
