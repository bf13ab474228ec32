//! Core business logic for the LogAi dashboard (no UI concerns).

pub mod filtering;
