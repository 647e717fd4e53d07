/// Data Transfer Objects for application layer
///
/// DTOs carry a batch run's parameters from the CLI (or any other caller)
/// into the use case, and its outcome back out.
mod batch_request;
mod batch_response;
mod output_target;

pub use batch_request::BatchRequest;
pub use batch_response::BatchResponse;
pub use output_target::OutputTarget;
