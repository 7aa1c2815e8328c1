//! Full CRUD lifecycle test against a live server.
//!
//! Starts the service on a random port, then exercises every route over real
//! HTTP using ureq, including the Location header on create and the id
//! counter reset after a bulk delete.

use std::sync::Arc;

use todo_core::{TodoItem, TodoStore};

/// Build a ureq agent that returns 4xx/5xx responses as data rather than
/// `Err`, so status interpretation stays in the assertions.
fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Start the server on a random port and return its base URL.
fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, Arc::new(TodoStore::new())).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn crud_lifecycle_over_http() {
    let base = spawn_server();
    let agent = agent();

    // Step 1: list — should be empty.
    let mut resp = agent.get(format!("{base}/items")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let items: Vec<TodoItem> =
        serde_json::from_str(&resp.body_mut().read_to_string().unwrap()).unwrap();
    assert!(items.is_empty(), "expected empty list");

    // Step 2: create two items — ids 1 and 2, surfaced via Location.
    for (content, expected_location) in [("item1", "/items/1"), ("item2", "/items/2")] {
        let resp = agent
            .post(format!("{base}/items"))
            .content_type("application/json")
            .send(format!(r#"{{"content":"{content}"}}"#).as_bytes())
            .unwrap();
        assert_eq!(resp.status().as_u16(), 201);
        let location = resp.headers().get("location").unwrap().to_str().unwrap();
        assert_eq!(location, expected_location);
    }

    // Step 3: a duplicate create is rejected.
    let resp = agent
        .post(format!("{base}/items"))
        .content_type("application/json")
        .send(br#"{"content":"item1"}"#)
        .unwrap();
    assert_eq!(resp.status().as_u16(), 409);

    // Step 4: update item 1 and read it back.
    let mut resp = agent
        .put(format!("{base}/items/1"))
        .content_type("application/json")
        .send(br#"{"content":"item1 updated"}"#)
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let updated: TodoItem =
        serde_json::from_str(&resp.body_mut().read_to_string().unwrap()).unwrap();
    assert_eq!(updated.id(), 1);
    assert_eq!(updated.content(), "item1 updated");

    // Step 5: delete item 1, then it is gone while item 2 survives.
    let resp = agent.delete(format!("{base}/items/1")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 204);

    let resp = agent.get(format!("{base}/items/1")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let mut resp = agent.get(format!("{base}/items/2")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let remaining: TodoItem =
        serde_json::from_str(&resp.body_mut().read_to_string().unwrap()).unwrap();
    assert_eq!(remaining.content(), "item2");

    // Step 6: delete everything — the id counter starts over.
    let resp = agent.delete(format!("{base}/items")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 204);

    let resp = agent
        .post(format!("{base}/items"))
        .content_type("application/json")
        .send(br#"{"content":"new todo item"}"#)
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
    let location = resp.headers().get("location").unwrap().to_str().unwrap();
    assert_eq!(location, "/items/1");
}
