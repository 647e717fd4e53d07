/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (commands driven by the batch)
/// and outbound ports (output, storage and progress interfaces).
pub mod inbound;
pub mod outbound;
