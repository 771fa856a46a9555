/// Fixed instructional framing for the translate-to-SQL task, sent as the
/// system message on every completion request.
pub const BASE_PROMPT: &str = "You are a translator from natural language to SQL. \
Given a question, respond with a single SQL query that answers it. \
Respond only with the SQL statement, no markdown and no explanations.";

/// Build the user message for a completion request. The table schema is
/// appended when the caller supplied one.
pub fn build_user_prompt(question: &str, table_schema: Option<&str>) -> String {
    match table_schema {
        Some(schema) => format!("Question: {}\nSchema: {}\nSQL:", question, schema),
        None => format!("Question: {}\nSQL:", question),
    }
}
