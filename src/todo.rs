use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Completion state of a todo item
///
/// Exactly two states exist. Serialized forms use the variant names
/// verbatim, so `"Pending"` and `"Completed"` are the only legal values
/// in any format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TodoStatus {
    /// Task has not been finished yet
    Pending,
    /// Task has been finished
    Completed,
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TodoStatus::Pending),
            "Completed" => Ok(TodoStatus::Completed),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: Pending, Completed",
                s
            )),
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TodoStatus::Pending => "Pending",
            TodoStatus::Completed => "Completed",
        };
        f.write_str(s)
    }
}

/// A single task item
///
/// Pure shape contract: the struct owns no lifecycle rules, and every
/// field is public so callers may mutate freely, including flipping
/// `status` in either direction. `id` is intended to be unique within
/// whatever collection holds the todos; enforcing that uniqueness is
/// the caller's job.
///
/// Field declaration order is part of the contract: serialized output
/// lists `id`, `text`, `dueDate`, `status` in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier within the owning collection
    pub id: u64,
    /// Free-form description of the task
    pub text: String,
    /// Day the task is due (date-only, no time-of-day)
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,
    /// Current completion state
    pub status: TodoStatus,
}

impl Todo {
    /// Create a new todo in the `Pending` state
    ///
    /// # Arguments
    /// * `id` - Identifier chosen by the caller
    /// * `text` - Task description
    /// * `due_date` - Day the task is due
    pub fn new(id: u64, text: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id,
            text: text.into(),
            due_date,
            status: TodoStatus::Pending,
        }
    }

    /// Check if this todo is still pending
    pub fn is_pending(&self) -> bool {
        self.status == TodoStatus::Pending
    }

    /// Check if this todo has been completed
    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }
}
