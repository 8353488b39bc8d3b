//! Unit tests for the chat module.
//!
//! Parsing is tested on its own; the router and the task command service
//! are driven through their ports with a recording sender.
