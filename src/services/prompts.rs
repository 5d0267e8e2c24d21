//! Instruction prompts sent to the chat backend.
//!
//! Each builder embeds the user's raw text and the JSON schema the reply
//! must follow. The schemas here are the single source of truth for the
//! typed parameter structs in `domain::models::params`.

/// Prompt asking the model to classify a request as QUERY, CREATE or UPDATE.
pub fn intent_classification(user_input: &str) -> String {
    format!(
        r#"Analyze this user input and determine if they want to QUERY existing Jira tickets, CREATE a new ticket, or UPDATE an existing ticket.

User Input: "{user_input}"

Classification Rules:
- QUERY: User wants to search, find, list, show, or get information about existing tickets
  Examples: "Show me open tickets", "Find bugs assigned to me", "List tickets in project X"

- CREATE: User wants to create, add, make, or generate a new ticket
  Examples: "Create a bug ticket", "New task for documentation", "Add a story about user login"

- UPDATE: User wants to modify, edit, assign, or change status of an existing ticket
  Examples: "Update ABC-123 summary", "Assign XYZ-456 to john@company.com", "Move DEF-789 to In Progress", "Change ticket ABC-123 description"

Respond with exactly one word: either "QUERY", "CREATE", or "UPDATE"

If unclear, prefer QUERY as it's safer."#
    )
}

/// Prompt asking the model to turn a ticket question into search parameters.
pub fn query_interpretation(question: &str) -> String {
    format!(
        r#"Analyze this Jira query and extract the key parameters needed to search for tickets:

Question: "{question}"

Please respond in JSON format with these fields:
{{
  "action": "search_issues|get_issue|get_projects|get_user_profile",
  "jql": "JQL query string if action is search_issues",
  "issue_key": "issue key if action is get_issue",
  "project_key": "project key if filtering by project",
  "assignee": "assignee filter (currentUser() for 'me')",
  "status": "status filter",
  "issue_type": "issue type filter",
  "limit": 50
}}

For "open tickets assigned to me", use:
- action: "search_issues"
- jql: "assignee = currentUser() AND status != Done"
- assignee: "currentUser()"
- status: "Open""#
    )
}

/// Prompt asking the model to extract ticket-creation parameters.
pub fn creation_interpretation(creation_request: &str) -> String {
    format!(
        r#"Analyze this Jira ticket creation request and extract the required parameters:

Request: "{creation_request}"

Please respond in JSON format with these fields:
{{
  "project_key": "The JIRA project key (required)",
  "summary": "Issue title/summary (required)",
  "issue_type": "Bug|Task|Story|Epic|Subtask (required)",
  "description": "Detailed description (optional)",
  "assignee": "Assignee email or username (optional)",
  "priority": "Priority level (optional)",
  "components": "Comma-separated component names (optional)"
}}

Common issue types:
- Bug: For software defects
- Task: For general work items
- Story: For user stories
- Epic: For large features
- Subtask: For sub-items of other issues

Examples:
- "Create bug ticket 'Login fails' in PROJECT" → {{"project_key": "PROJECT", "summary": "Login fails", "issue_type": "Bug"}}
- "New task 'Update docs' assigned to john@company.com" → {{"summary": "Update docs", "issue_type": "Task", "assignee": "john@company.com"}}"#
    )
}

/// Prompt asking the model to extract ticket-update parameters.
pub fn update_interpretation(update_request: &str) -> String {
    format!(
        r#"Analyze this Jira ticket update request and extract the required parameters:

Request: "{update_request}"

Please respond in JSON format with these fields:
{{
  "issue_key": "The JIRA issue key to update (required, e.g., ABC-123)",
  "update_type": "field_update|status_change|assign",
  "summary": "New summary/title (optional)",
  "description": "New description (optional)",
  "assignee": "New assignee email or username (optional)",
  "status": "New status name for transitions (optional)",
  "comment": "Comment to add during update (optional)",
  "additional_fields": "Any other fields to update (optional)"
}}

Update types:
- field_update: Change summary, description, or other fields
- status_change: Transition issue to new status (In Progress, Done, etc.)
- assign: Change assignee

Examples:
- "Update ABC-123 summary to 'New title'" → {{"issue_key": "ABC-123", "update_type": "field_update", "summary": "New title"}}
- "Move XYZ-456 to In Progress" → {{"issue_key": "XYZ-456", "update_type": "status_change", "status": "In Progress"}}
- "Assign DEF-789 to john@company.com" → {{"issue_key": "DEF-789", "update_type": "assign", "assignee": "john@company.com"}}
- "Update ABC-123 description to 'New description' and assign to jane@company.com" → {{"issue_key": "ABC-123", "update_type": "field_update", "description": "New description", "assignee": "jane@company.com"}}"#
    )
}
