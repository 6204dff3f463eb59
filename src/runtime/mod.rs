//! Runtime primitives for asynchronous GitHub operations.

mod async_task;

pub use async_task::AsyncTask;
