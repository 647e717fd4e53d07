/// Use cases module containing application orchestration
mod run_batch;

pub use run_batch::RunBatchUseCase;
