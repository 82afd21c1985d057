//! App Orchestration Methods
//!
//! `impl App` methods grouped by domain. Each one updates the model through
//! its reducers, then carries out the side effects the reducer asked for:
//! sending API requests, spawning external commands, raising toasts.

pub(crate) mod file_ops;
pub(crate) mod navigation;
