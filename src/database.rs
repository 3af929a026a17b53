use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::Connection;

use crate::errors::StorageError;
use crate::types::{Draw, DrawNumbers};

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn create_draws_table(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS draws (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            numbers TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    Ok(())
}

/// Appends a draw; the row only exists once the transaction commits.
pub fn insert_draw(conn: &mut Connection, numbers: &DrawNumbers) -> Result<Draw, StorageError> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO draws (numbers) VALUES (?1)",
        [numbers.to_column()],
    )?;
    let id = tx.last_insert_rowid();
    let created_at: String =
        tx.query_row("SELECT created_at FROM draws WHERE id = ?1", [id], |row| {
            row.get(0)
        })?;

    let created_at = parse_created_at(id, &created_at)?;

    tx.commit()?;

    Ok(Draw {
        id,
        numbers: *numbers,
        created_at,
    })
}

pub fn get_all_draws(conn: &Connection) -> Result<Vec<Draw>, StorageError> {
    let mut stmt = conn.prepare("SELECT id, numbers, created_at FROM draws")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut draws = Vec::new();
    for row in rows {
        draws.push(draw_from_row(row?)?);
    }
    Ok(draws)
}

pub fn get_latest_draws(conn: &Connection, limit: u32) -> Result<Vec<Draw>, StorageError> {
    let mut stmt = conn.prepare(
        "SELECT id, numbers, created_at
         FROM draws
         ORDER BY id DESC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map([limit], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut draws = Vec::new();
    for row in rows {
        draws.push(draw_from_row(row?)?);
    }
    Ok(draws)
}

pub fn count_draws(conn: &Connection) -> Result<u64, StorageError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM draws", [], |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

fn draw_from_row((id, numbers, created_at): (i64, String, String)) -> Result<Draw, StorageError> {
    let numbers =
        DrawNumbers::from_column(&numbers).map_err(|e| StorageError::corrupt_numbers(id, e))?;
    Ok(Draw {
        id,
        numbers,
        created_at: parse_created_at(id, &created_at)?,
    })
}

fn parse_created_at(id: i64, value: &str) -> Result<DateTime<Utc>, StorageError> {
    NaiveDateTime::parse_from_str(value, CREATED_AT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| StorageError::Corrupt {
            id,
            reason: format!("bad created_at {value:?}: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_draws_table(&conn).unwrap();
        conn
    }

    fn numbers(values: &[u8]) -> DrawNumbers {
        DrawNumbers::new(values).unwrap()
    }

    #[test]
    fn insert_assigns_increasing_ids_and_timestamp() {
        let mut conn = memory_db();
        let first = insert_draw(&mut conn, &numbers(&[4, 11, 19, 23, 30, 45])).unwrap();
        let second = insert_draw(&mut conn, &numbers(&[1, 2, 3, 4, 5, 6])).unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.numbers, numbers(&[4, 11, 19, 23, 30, 45]));
        let age = Utc::now() - first.created_at;
        assert!(age.num_seconds().abs() < 60, "created_at too far off: {age}");
    }

    #[test]
    fn all_draws_round_trip_through_the_table() {
        let mut conn = memory_db();
        let inserted = insert_draw(&mut conn, &numbers(&[7, 8, 9, 10, 11, 12])).unwrap();

        let draws = get_all_draws(&conn).unwrap();
        assert_eq!(draws, vec![inserted]);
    }

    #[test]
    fn latest_draws_are_newest_first_and_limited() {
        let mut conn = memory_db();
        for start in 1..=5u8 {
            let values: Vec<u8> = (start..start + 6).collect();
            insert_draw(&mut conn, &numbers(&values)).unwrap();
        }

        let latest = get_latest_draws(&conn, 2).unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].numbers, numbers(&[5, 6, 7, 8, 9, 10]));
        assert_eq!(latest[1].numbers, numbers(&[4, 5, 6, 7, 8, 9]));
        assert_eq!(count_draws(&conn).unwrap(), 5);
    }

    #[test]
    fn empty_table_has_no_draws() {
        let conn = memory_db();
        assert!(get_all_draws(&conn).unwrap().is_empty());
        assert_eq!(count_draws(&conn).unwrap(), 0);
    }

    #[test]
    fn corrupt_rows_are_reported() {
        let conn = memory_db();
        conn.execute("INSERT INTO draws (numbers) VALUES ('1,2,3')", [])
            .unwrap();

        match get_all_draws(&conn) {
            Err(StorageError::Corrupt { id, .. }) => assert_eq!(id, 1),
            other => panic!("expected corrupt row, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_timestamp_rolls_back_the_insert() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute(
            "CREATE TABLE draws (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                numbers TEXT NOT NULL,
                created_at DATETIME DEFAULT 'yesterday-ish'
            )",
            [],
        )
        .unwrap();

        let result = insert_draw(&mut conn, &numbers(&[4, 11, 19, 23, 30, 45]));
        assert!(matches!(result, Err(StorageError::Corrupt { .. })), "{result:?}");
        assert_eq!(count_draws(&conn).unwrap(), 0);
    }

    #[test]
    fn missing_table_is_a_database_error() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(matches!(
            get_all_draws(&conn),
            Err(StorageError::Database(_))
        ));
    }
}
