/// Application layer - Use cases, factories and DTOs
///
/// This layer wires the console core to concrete outputs and reporters
/// through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
