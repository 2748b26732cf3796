use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub id: i64,
    pub company_name: String, // ⇔ companies.company_name (TEXT UNIQUE)
}
