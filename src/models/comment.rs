use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: i64,
    pub timesheet_id: i64,
    pub user_id: i64,
    pub commenter_role: String, // role string recorded at comment time
    pub comment: String,
    pub created_at: String, // ISO 8601 timestamp

    /// Resolved via LEFT JOIN on users.
    pub username: Option<String>,
}
