mod schema;

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use switchboard_core::{TaskStep, Tool};

use crate::events::TrackEvent;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub notes: String,
    pub created: i64,
}

/// A logged entry in a project's history. Distinct from the planned
/// `TaskStep`s a workflow suggestion writes.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub project_id: String,
    #[serde(rename = "type")]
    pub step_type: String,
    pub payload: Value,
    pub order: u32,
    pub created: i64,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Path from SWITCHBOARD_DB, falling back to ./switchboard.db.
    pub fn open_default() -> Result<Self> {
        let path =
            std::env::var("SWITCHBOARD_DB").unwrap_or_else(|_| "switchboard.db".to_string());
        Self::open(&path)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        schema::create_tables(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))
    }

    fn now() -> Result<i64> {
        Ok(std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs() as i64)
    }
}

// Project operations
impl Store {
    pub fn create_project(&self, title: &str) -> Result<Project> {
        let project = Project {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            notes: String::new(),
            created: Self::now()?,
        };
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO projects (id, title, notes, created) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![project.id, project.title, project.notes, project.created],
        )?;
        Ok(project)
    }

    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT id, title, notes, created FROM projects ORDER BY created DESC")?;
        let projects = stmt
            .query_map([], |row| {
                Ok(Project {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    notes: row.get(2)?,
                    created: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(projects)
    }

    pub fn get_project(&self, id: &str) -> Result<Option<Project>> {
        let conn = self.lock()?;
        match conn.query_row(
            "SELECT id, title, notes, created FROM projects WHERE id = ?1",
            rusqlite::params![id],
            |row| {
                Ok(Project {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    notes: row.get(2)?,
                    created: row.get(3)?,
                })
            },
        ) {
            Ok(project) => Ok(Some(project)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn rename_project(&self, id: &str, title: &str) -> Result<bool> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE projects SET title = ?1 WHERE id = ?2",
            rusqlite::params![title, id],
        )?;
        Ok(changed > 0)
    }

    pub fn update_notes(&self, id: &str, notes: &str) -> Result<bool> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE projects SET notes = ?1 WHERE id = ?2",
            rusqlite::params![notes, id],
        )?;
        Ok(changed > 0)
    }

    /// Steps and planned steps go with the project (foreign key cascade).
    pub fn delete_project(&self, id: &str) -> Result<bool> {
        let conn = self.lock()?;
        let changed = conn.execute("DELETE FROM projects WHERE id = ?1", rusqlite::params![id])?;
        Ok(changed > 0)
    }
}

// Step operations
impl Store {
    /// Append a step at the end of the project's history. Returns None when
    /// the project does not exist.
    pub fn add_step(&self, project_id: &str, step_type: &str, payload: &Value) -> Result<Option<Step>> {
        let created = Self::now()?;
        let conn = self.lock()?;

        let exists: i64 = conn.query_row(
            "SELECT COUNT(*) FROM projects WHERE id = ?1",
            rusqlite::params![project_id],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Ok(None);
        }

        let order: u32 = conn.query_row(
            "SELECT COALESCE(MAX(s_order), 0) + 1 FROM steps WHERE project_id = ?1",
            rusqlite::params![project_id],
            |row| row.get(0),
        )?;

        let step = Step {
            id: uuid::Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            step_type: step_type.to_string(),
            payload: payload.clone(),
            order,
            created,
        };
        conn.execute(
            "INSERT INTO steps (id, project_id, step_type, payload, s_order, created)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                step.id,
                step.project_id,
                step.step_type,
                step.payload.to_string(),
                step.order,
                step.created
            ],
        )?;
        Ok(Some(step))
    }

    pub fn list_steps(&self, project_id: &str) -> Result<Vec<Step>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, step_type, payload, s_order, created FROM steps
             WHERE project_id = ?1
             ORDER BY s_order ASC",
        )?;
        let steps = stmt
            .query_map(rusqlite::params![project_id], |row| {
                let payload: String = row.get(2)?;
                Ok(Step {
                    id: row.get(0)?,
                    project_id: project_id.to_string(),
                    step_type: row.get(1)?,
                    payload: serde_json::from_str(&payload).unwrap_or(Value::Null),
                    order: row.get(3)?,
                    created: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(steps)
    }

    /// Delete a step and close the gap so orders stay contiguous.
    pub fn delete_step(&self, project_id: &str, step_id: &str) -> Result<bool> {
        let conn = self.lock()?;
        let order: u32 = match conn.query_row(
            "SELECT s_order FROM steps WHERE project_id = ?1 AND id = ?2",
            rusqlite::params![project_id, step_id],
            |row| row.get(0),
        ) {
            Ok(order) => order,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        conn.execute("DELETE FROM steps WHERE id = ?1", rusqlite::params![step_id])?;
        conn.execute(
            "UPDATE steps SET s_order = s_order - 1 WHERE project_id = ?1 AND s_order > ?2",
            rusqlite::params![project_id, order],
        )?;
        Ok(true)
    }

    /// Move a step one slot up or down. Moving past either end is a no-op,
    /// matching the UI behavior. Returns false only when the step is unknown.
    pub fn reorder_step(&self, project_id: &str, step_id: &str, dir: Direction) -> Result<bool> {
        let conn = self.lock()?;
        let order: i64 = match conn.query_row(
            "SELECT s_order FROM steps WHERE project_id = ?1 AND id = ?2",
            rusqlite::params![project_id, step_id],
            |row| row.get(0),
        ) {
            Ok(order) => order,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM steps WHERE project_id = ?1",
            rusqlite::params![project_id],
            |row| row.get(0),
        )?;

        let target = match dir {
            Direction::Up => order - 1,
            Direction::Down => order + 1,
        };
        if target < 1 || target > count {
            return Ok(true);
        }

        // Three-phase swap; the connection mutex keeps it atomic enough.
        conn.execute(
            "UPDATE steps SET s_order = -1 WHERE project_id = ?1 AND s_order = ?2",
            rusqlite::params![project_id, target],
        )?;
        conn.execute(
            "UPDATE steps SET s_order = ?1 WHERE id = ?2",
            rusqlite::params![target, step_id],
        )?;
        conn.execute(
            "UPDATE steps SET s_order = ?1 WHERE project_id = ?2 AND s_order = -1",
            rusqlite::params![order, project_id],
        )?;
        Ok(true)
    }
}

// Planned step operations
impl Store {
    /// Replace the project's planned steps wholesale. Returns false when the
    /// project does not exist.
    pub fn set_planned_steps(&self, project_id: &str, steps: &[TaskStep]) -> Result<bool> {
        let conn = self.lock()?;
        let exists: i64 = conn.query_row(
            "SELECT COUNT(*) FROM projects WHERE id = ?1",
            rusqlite::params![project_id],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Ok(false);
        }

        conn.execute(
            "DELETE FROM planned_steps WHERE project_id = ?1",
            rusqlite::params![project_id],
        )?;
        for step in steps {
            conn.execute(
                "INSERT INTO planned_steps
                     (project_id, p_order, step_id, title, description, tool, prompt)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    project_id,
                    step.order,
                    step.id,
                    step.title,
                    step.description,
                    step.tool.map(|t| t.tag()),
                    step.prompt
                ],
            )?;
        }
        Ok(true)
    }

    pub fn planned_steps(&self, project_id: &str) -> Result<Vec<TaskStep>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT step_id, title, description, tool, prompt, p_order FROM planned_steps
             WHERE project_id = ?1
             ORDER BY p_order ASC",
        )?;
        let steps = stmt
            .query_map(rusqlite::params![project_id], |row| {
                let tool: Option<String> = row.get(3)?;
                Ok(TaskStep {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    tool: tool.as_deref().and_then(Tool::from_tag),
                    prompt: row.get(4)?,
                    order: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(steps)
    }
}

// Analytics
impl Store {
    pub fn record_event(&self, event: &TrackEvent) -> Result<()> {
        let created = Self::now()?;
        let properties = serde_json::to_string(event)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO events (name, properties, created) VALUES (?1, ?2, ?3)",
            rusqlite::params![event.name(), properties, created],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> Store {
        Store::open_in_memory().unwrap()
    }

    #[test]
    fn project_lifecycle() {
        let store = store();
        let project = store.create_project("Space video").unwrap();
        assert_eq!(store.get_project(&project.id).unwrap().unwrap().title, "Space video");

        assert!(store.rename_project(&project.id, "Mars video").unwrap());
        assert!(store.update_notes(&project.id, "use real footage").unwrap());
        let fetched = store.get_project(&project.id).unwrap().unwrap();
        assert_eq!(fetched.title, "Mars video");
        assert_eq!(fetched.notes, "use real footage");

        assert!(store.delete_project(&project.id).unwrap());
        assert!(store.get_project(&project.id).unwrap().is_none());
        assert!(!store.rename_project(&project.id, "gone").unwrap());
    }

    #[test]
    fn steps_append_with_contiguous_orders() {
        let store = store();
        let project = store.create_project("p").unwrap();
        for i in 1u32..=3 {
            let step = store
                .add_step(&project.id, "note", &json!({ "i": i }))
                .unwrap()
                .unwrap();
            assert_eq!(step.order, i);
        }
        let steps = store.list_steps(&project.id).unwrap();
        assert_eq!(steps.len(), 3);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.order, (i + 1) as u32);
        }
    }

    #[test]
    fn add_step_to_unknown_project_is_none() {
        let store = store();
        assert!(store.add_step("nope", "note", &json!({})).unwrap().is_none());
    }

    #[test]
    fn delete_step_closes_the_gap() {
        let store = store();
        let project = store.create_project("p").unwrap();
        let ids: Vec<String> = (0..3)
            .map(|i| {
                store
                    .add_step(&project.id, "prompt", &json!({ "text": i }))
                    .unwrap()
                    .unwrap()
                    .id
            })
            .collect();

        assert!(store.delete_step(&project.id, &ids[1]).unwrap());
        let steps = store.list_steps(&project.id).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].id, ids[0]);
        assert_eq!(steps[0].order, 1);
        assert_eq!(steps[1].id, ids[2]);
        assert_eq!(steps[1].order, 2);

        assert!(!store.delete_step(&project.id, "missing").unwrap());
    }

    #[test]
    fn reorder_swaps_neighbors_and_ignores_boundaries() {
        let store = store();
        let project = store.create_project("p").unwrap();
        let ids: Vec<String> = (0..3)
            .map(|i| {
                store
                    .add_step(&project.id, "note", &json!({ "i": i }))
                    .unwrap()
                    .unwrap()
                    .id
            })
            .collect();

        assert!(store.reorder_step(&project.id, &ids[2], Direction::Up).unwrap());
        let steps = store.list_steps(&project.id).unwrap();
        let order: Vec<&str> = steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec![ids[0].as_str(), ids[2].as_str(), ids[1].as_str()]);

        // Boundary moves are accepted but change nothing
        assert!(store.reorder_step(&project.id, &ids[0], Direction::Up).unwrap());
        let steps = store.list_steps(&project.id).unwrap();
        assert_eq!(steps[0].id, ids[0]);

        assert!(!store.reorder_step(&project.id, "missing", Direction::Down).unwrap());
    }

    #[test]
    fn planned_steps_round_trip() {
        let store = store();
        let project = store.create_project("p").unwrap();
        let planned = switchboard_core::suggest_workflows("make a music video about space")
            .into_iter()
            .find(|w| w.id == "thorough-video")
            .unwrap()
            .steps;

        assert!(store.set_planned_steps(&project.id, &planned).unwrap());
        assert_eq!(store.planned_steps(&project.id).unwrap(), planned);

        // Replacement is wholesale
        assert!(store.set_planned_steps(&project.id, &planned[..1]).unwrap());
        assert_eq!(store.planned_steps(&project.id).unwrap().len(), 1);

        assert!(!store.set_planned_steps("nope", &planned).unwrap());
    }

    #[test]
    fn deleting_a_project_cascades() {
        let store = store();
        let project = store.create_project("p").unwrap();
        store.add_step(&project.id, "note", &json!({})).unwrap().unwrap();
        store
            .set_planned_steps(
                &project.id,
                &switchboard_core::suggest_workflows("x")[0].steps,
            )
            .unwrap();

        assert!(store.delete_project(&project.id).unwrap());
        assert!(store.list_steps(&project.id).unwrap().is_empty());
        assert!(store.planned_steps(&project.id).unwrap().is_empty());
    }

    #[test]
    fn events_are_appended() {
        let store = store();
        store
            .record_event(&TrackEvent::ToolRouting {
                tool: "chatgpt".to_string(),
                confidence: 75,
                prompt_length: 8,
            })
            .unwrap();
        store
            .record_event(&TrackEvent::DeepLinkClick {
                tool: "dalle".to_string(),
                destination_url: "https://labs.openai.com/?prompt=x".to_string(),
            })
            .unwrap();

        let conn = store.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);
        let name: String = conn
            .query_row("SELECT name FROM events ORDER BY id LIMIT 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(name, "tool_routing");
    }
}
