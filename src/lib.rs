//! Todo Data Model
//!
//! This library defines the shared `Todo` record shape consumed by the
//! surrounding application layers (UI, persistence, API). It carries no
//! storage, rendering, or transport logic of its own: callers own the
//! lifecycle of `Todo` values, and the crate only guarantees the shape
//! contract, namely the four fields (`id`, `text`, `dueDate`, `status`)
//! and the two-value status domain.
//!
//! # Example
//!
//! ```
//! use todo_model::{Todo, TodoStatus};
//! use chrono::NaiveDate;
//!
//! let mut todo = Todo::new(1, "Buy milk", NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
//! assert!(todo.is_pending());
//!
//! todo.status = TodoStatus::Completed;
//! assert!(todo.is_completed());
//! ```

mod todo;

pub use todo::{Todo, TodoStatus};
