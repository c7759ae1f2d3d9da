//! Fixed prompt templates sent to `/api/generate`.
//!
//! Caller text is interpolated verbatim, without escaping.

use serde_json::{json, Value};

/// Field the generation prompt asks the model to fill
pub const GEN_SQL_FIELD: &str = "gen_sql";

/// Field the comparison prompt asks the model to fill
pub const RESOLVE_YN_FIELD: &str = "resolve_yn";

/// Prompt asking the model to turn `question` into SQL over `db_schema`
pub fn generation_prompt(question: &str, db_schema: &str) -> String {
    format!(
        r#"You are a SQL generator. Convert natural language to SQL.
INPUT:
- Question: {question}
- Schema: {db_schema}

RULES:
- Return ONLY valid JSON with the SQL query
- Use only tables and columns from the schema
- No explanations or comments

EXAMPLE:
Question: "Find employees in Sales department"
Schema:
CREATE TABLE employees (id INTEGER PRIMARY KEY, name VARCHAR(100), department_id INTEGER);
CREATE TABLE departments (id INTEGER PRIMARY KEY, name VARCHAR(50));

Output:
{{
  "gen_sql": "SELECT e.* FROM employees e JOIN departments d ON e.department_id = d.id WHERE d.name = 'Sales'"
}}

OUTPUT FORMAT:
{{
  "gen_sql": "<SQL query>"
}}"#
    )
}

/// Prompt asking the model whether `gen_sql` answers `question` the same way
/// `gt_sql` does
pub fn comparison_prompt(question: &str, db_schema: &str, gt_sql: &str, gen_sql: &str) -> String {
    format!(
        r#"You are a SQL reviewer. Decide whether two SQL queries are functionally equivalent.
INPUT:
- Question: {question}
- Schema: {db_schema}
- Ground truth SQL: {gt_sql}
- Generated SQL: {gen_sql}

RULES:
- Answer "yes" if both queries return the same result for any data in the schema
- Answer "no" otherwise, including when the generated SQL is invalid or empty
- Ignore differences in formatting, aliases, keyword case and column order only when the result set is the same
- Return ONLY valid JSON, no explanations or comments

EXAMPLE:
Ground truth SQL: SELECT name FROM users WHERE age > 30
Generated SQL: SELECT u.name FROM users u WHERE u.age > 30

Output:
{{
  "resolve_yn": "yes"
}}

OUTPUT FORMAT:
{{
  "resolve_yn": "<yes or no>"
}}"#
    )
}

/// JSON-schema `format` fragment requiring a single string property
pub fn single_field_schema(field: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            field: { "type": "string" }
        },
        "required": [field]
    })
}
