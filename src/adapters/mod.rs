/// Adapters layer - Infrastructure implementations
///
/// Inbound adapters are the built-in commands; outbound adapters are the
/// concrete outputs, filesystems and progress reporters.
pub mod inbound;
pub mod outbound;
