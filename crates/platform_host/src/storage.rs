//! Storage contracts for lightweight host preferences.

pub mod prefs;
