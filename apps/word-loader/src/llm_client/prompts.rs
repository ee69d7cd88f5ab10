// Shared prompt fragments.
// The dictionary prompt itself lives in generation/prompts.rs.

/// Output rules that force a bare JSON array reply.
pub const JSON_ARRAY_ONLY: &str = "\
Output Rules:
Return only a valid JSON array (even for one word).

No extra text, notes, or explanation outside the JSON.

Do not add or omit fields; follow the schema exactly.";

/// Closing reminder appended after the schema and requirements.
pub const SCHEMA_STRICTNESS: &str = "\
Important Notes:
1. Follow the JSON schema exactly. Do not include extra fields.
2. Output must be a JSON array, even if only one word.";
