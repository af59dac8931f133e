//! Shared test fixture.

use serde_json::{json, Map, Value};

/// A small application config document with nested maps, an array and a
/// few falsy scalars.
pub(crate) fn fixture() -> Map<String, Value> {
    let doc = json!({
        "app": "My App",
        "port": 3000,
        "env": "dev",
        "name": "",
        "master": false,
        "database": {
            "mongodb": {
                "host": "localhost",
                "database": "myapp",
                "user": "root",
                "pass": "secret"
            }
        },
        "users": [
            {"name": "john", "email": "john@example.com"},
            {"name": "jane", "email": "jane@example.com"}
        ]
    });
    match doc {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {:?}", other),
    }
}
