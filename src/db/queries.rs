// Database queries: CRUD operations for all tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::Result;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use super::models::User;

const USER_COLUMNS: &str = "id, email, password_hash, provider, created_at, last_login_at";

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
        provider: row.get(3)?,
        created_at: row.get(4)?,
        last_login_at: row.get(5)?,
    })
}

/// Insert a new local account. Returns `None` if the email is already taken.
pub fn create_user(conn: &Connection, email: &str, password_hash: &str) -> Result<Option<i64>> {
    let inserted = conn.execute(
        "INSERT INTO users (email, password_hash, provider) VALUES (?1, ?2, 'local')",
        params![email, password_hash],
    );
    match inserted {
        Ok(_) => Ok(Some(conn.last_insert_rowid())),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Look up an account by exact email.
pub fn get_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1");
    let user = conn
        .query_row(&sql, params![email], user_from_row)
        .optional()?;
    Ok(user)
}

/// Look up an account by id.
pub fn get_user(conn: &Connection, id: i64) -> Result<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1");
    let user = conn.query_row(&sql, params![id], user_from_row).optional()?;
    Ok(user)
}

pub fn user_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    Ok(count)
}

/// Stamp the account's last successful login.
pub fn record_login(conn: &Connection, id: i64) -> Result<()> {
    conn.execute(
        "UPDATE users SET last_login_at = datetime('now') WHERE id = ?1",
        params![id],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn test_create_and_fetch_user() {
        let conn = test_db();
        let id = create_user(&conn, "a@example.com", "hash").unwrap().unwrap();

        let by_email = get_user_by_email(&conn, "a@example.com").unwrap().unwrap();
        assert_eq!(by_email.id, id);
        assert_eq!(by_email.provider, "local");
        assert!(by_email.last_login_at.is_none());

        let by_id = get_user(&conn, id).unwrap().unwrap();
        assert_eq!(by_id.email, "a@example.com");
        assert_eq!(by_id.password_hash, "hash");
    }

    #[test]
    fn test_duplicate_email_returns_none() {
        let conn = test_db();
        assert!(create_user(&conn, "a@example.com", "h1").unwrap().is_some());
        assert!(create_user(&conn, "a@example.com", "h2").unwrap().is_none());
        assert_eq!(user_count(&conn).unwrap(), 1);
    }

    #[test]
    fn test_unknown_user_is_none() {
        let conn = test_db();
        assert!(get_user_by_email(&conn, "nobody@example.com").unwrap().is_none());
        assert!(get_user(&conn, 42).unwrap().is_none());
    }

    #[test]
    fn test_record_login_sets_timestamp() {
        let conn = test_db();
        let id = create_user(&conn, "a@example.com", "hash").unwrap().unwrap();
        record_login(&conn, id).unwrap();
        let user = get_user(&conn, id).unwrap().unwrap();
        assert!(user.last_login_at.is_some());
    }
}
