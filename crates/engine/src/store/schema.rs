use anyhow::Result;
use rusqlite::Connection;

pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Projects
        CREATE TABLE IF NOT EXISTS projects (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            notes TEXT NOT NULL DEFAULT '',
            created INTEGER NOT NULL
        );

        -- Logged steps (prompt/decision/output/link/note entries)
        CREATE TABLE IF NOT EXISTS steps (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL,
            step_type TEXT NOT NULL
                CHECK(step_type IN ('prompt', 'decision', 'output', 'link', 'note')),
            payload TEXT NOT NULL,
            s_order INTEGER NOT NULL,
            created INTEGER NOT NULL,
            FOREIGN KEY (project_id) REFERENCES projects(id)
                ON DELETE CASCADE
                ON UPDATE CASCADE
        );
        CREATE INDEX IF NOT EXISTS idx_steps_project ON steps(project_id, s_order);

        -- Planned workflow steps saved onto a project
        CREATE TABLE IF NOT EXISTS planned_steps (
            project_id TEXT NOT NULL,
            p_order INTEGER NOT NULL,
            step_id TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            tool TEXT,
            prompt TEXT,
            PRIMARY KEY (project_id, p_order),
            FOREIGN KEY (project_id) REFERENCES projects(id)
                ON DELETE CASCADE
                ON UPDATE CASCADE
        );

        -- Analytics events
        CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            properties TEXT NOT NULL,
            created INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_events_name ON events(name);
    ",
    )?;
    Ok(())
}
