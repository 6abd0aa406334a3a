//! Dashboard UI components
//!
//! Individual rendering components for different parts of the dashboard

pub mod footer;
pub mod forms;
pub mod header;
pub mod logs;
pub mod notifications;
pub mod summary;
