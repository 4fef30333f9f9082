//! Task aggregate root and draft input type.

use super::{TaskDomainError, TaskId};
use chrono::NaiveDate;
use serde::Serialize;

/// Expected textual format for submitted due dates.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated input for creating or replacing a task record.
///
/// A draft carries everything a task holds except its identifier, which is
/// allocated by the backing store on insert. Titles and descriptions are
/// accepted verbatim; only the due date is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    due_date: NaiveDate,
}

impl TaskDraft {
    /// Creates a draft from an already-parsed due date.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
        }
    }

    /// Creates a draft from submitted form values, parsing the due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueDate`] when the due date does not
    /// follow the `YYYY-MM-DD` format.
    pub fn parse(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: &str,
    ) -> Result<Self, TaskDomainError> {
        let parsed = NaiveDate::parse_from_str(due_date, DUE_DATE_FORMAT)
            .map_err(|_| TaskDomainError::InvalidDueDate(due_date.to_owned()))?;
        Ok(Self::new(title, description, parsed))
    }

    /// Returns the draft title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parsed due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// Task aggregate root.
///
/// Serialises with field names matching the template context, so instances
/// can be handed straight to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    due_date: NaiveDate,
}

impl Task {
    /// Combines a store-allocated identifier with draft content.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: &TaskDraft) -> Self {
        Self::from_parts(id, draft.title(), draft.description(), draft.due_date())
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_parts(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}
