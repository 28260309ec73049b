use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

pub type Db = Arc<HashMap<u64, Todo>>;

/// Fixed dataset: the canonical pending record plus one completed record.
/// The dataset never changes while the server runs, so repeated fetches of
/// the same id always return the identical body.
fn seed() -> HashMap<u64, Todo> {
    let todos = [
        Todo {
            id: 1,
            user_id: 1,
            title: "delectus aut autem".to_string(),
            completed: false,
        },
        Todo {
            id: 4,
            user_id: 1,
            title: "et porro tempora".to_string(),
            completed: true,
        },
    ];
    todos.into_iter().map(|t| (t.id, t)).collect()
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed());
    Router::new()
        .route("/todos/{id}", get(get_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    db.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_user_id() {
        let todo = Todo {
            id: 1,
            user_id: 7,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["userId"], 7);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 42,
            user_id: 3,
            title: "Roundtrip".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn todo_rejects_missing_title() {
        let result: Result<Todo, _> =
            serde_json::from_str(r#"{"id":1,"userId":1,"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn seed_contains_the_canonical_record() {
        let db = seed();
        let todo = db.get(&1).unwrap();
        assert_eq!(todo.user_id, 1);
        assert_eq!(todo.title, "delectus aut autem");
        assert!(!todo.completed);
    }

    #[test]
    fn seed_contains_a_completed_record() {
        let db = seed();
        assert!(db.values().any(|t| t.completed));
    }
}
