//! In-memory task store.
//!
//! All task records live in one map keyed by task ID. Handlers go through
//! `get` / `list` / `put` / `delete` — the lock is an implementation detail,
//! so concurrent requests against the same store stay serialized without the
//! handlers knowing about it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

// ── Types ───────────────────────────────────────────────────────────────────

/// A single to-do item: what to do, a free-form note, and the applications
/// involved in doing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store key. Duplicated inside the record on purpose — the key under
    /// which a task is stored always equals this field at insertion time.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub applications: Vec<String>,
}

// ── Store ───────────────────────────────────────────────────────────────────

pub struct TaskStore {
    /// task id -> task
    tasks: RwLock<HashMap<String, Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// Store pre-populated with the two fixed demo records.
    pub fn seeded() -> Self {
        let map = seed_tasks()
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect();
        Self {
            tasks: RwLock::new(map),
        }
    }

    /// Look up a single task by ID.
    pub async fn get(&self, id: &str) -> Option<Task> {
        self.tasks.read().await.get(id).cloned()
    }

    /// Snapshot of the whole store, keyed by ID.
    pub async fn list(&self) -> HashMap<String, Task> {
        self.tasks.read().await.clone()
    }

    /// Insert or overwrite a task under the key taken from its own `id`
    /// field. No validation — an empty ID is a valid (if odd) key.
    pub async fn put(&self, task: Task) {
        debug!(id = %task.id, "task stored");
        self.tasks.write().await.insert(task.id.clone(), task);
    }

    /// Remove a task. Returns the removed record, or None if the ID was
    /// not present.
    pub async fn delete(&self, id: &str) -> Option<Task> {
        let removed = self.tasks.write().await.remove(id);
        if removed.is_some() {
            debug!(id, "task deleted");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The two fixed records every process starts with (IDs "1" and "2").
fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            description: "Сделать финальное задание темы REST API".to_string(),
            note: "Если сегодня сделаю, то завтра будет свободный день. Ура!".to_string(),
            applications: vec![
                "VS Code".to_string(),
                "Terminal".to_string(),
                "git".to_string(),
            ],
        },
        Task {
            id: "2".to_string(),
            description: "Протестировать финальное задание с помощью Postmen".to_string(),
            note: "Лучше это делать в процессе разработки, каждый раз, когда запускаешь сервер и проверяешь хендлер"
                .to_string(),
            applications: vec![
                "VS Code".to_string(),
                "Terminal".to_string(),
                "git".to_string(),
                "Postman".to_string(),
            ],
        },
    ]
}
