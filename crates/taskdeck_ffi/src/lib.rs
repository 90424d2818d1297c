//! Flutter bridge for TaskDeck core.

pub mod api;
