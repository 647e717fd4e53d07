/// Inbound adapters - Built-in commands driven by the batch runner
pub mod commands;
