/// BatchResponse - Outcome of a completed batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchResponse {
    /// Bitwise AND of every command's return code (0 for an empty batch)
    pub return_code: i32,
    /// Number of commands executed
    pub commands_run: usize,
}

impl BatchResponse {
    pub fn new(return_code: i32, commands_run: usize) -> Self {
        Self {
            return_code,
            commands_run,
        }
    }
}
