use thiserror::Error;

/// Result alias for schedule construction.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Distribution parameters or schedule sizes that cannot be generated.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ScheduleError {
    /// The exponential base was zero, negative, or not finite.
    #[error("invalid exponent argument {0}: must be a positive number")]
    InvalidBase(f64),
    /// The Gaussian standard deviation was zero, negative, or not finite.
    #[error("invalid standard deviation argument {0}: must be a positive number")]
    InvalidDeviation(f64),
    /// Storage for the requested number of buckets could not be reserved.
    #[error("out of memory: cannot hold a schedule of {0} buckets")]
    OutOfMemory(usize),
}
