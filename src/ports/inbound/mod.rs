/// Inbound ports (Driving ports) - Command interfaces
pub mod command;

pub use command::Command;
