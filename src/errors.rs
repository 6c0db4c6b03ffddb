//! Error types for thread lifecycle operations.
//!
//! Contract violations (joining an empty handle, starting an owning handle)
//! are programmer errors and stay on the assertion path; everything the OS
//! can legitimately refuse at runtime is surfaced through these types.

use core::fmt;

/// Result type for thread operations.
pub type ThreadResult<T> = Result<T, ThreadError>;

/// Top-level error type for all thread operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadError {
    /// Thread creation errors
    Spawn(SpawnError),
    /// Thread joining errors
    Join(JoinError),
    /// Thread naming errors
    Name(NameError),
}

/// Errors that can occur while creating an OS thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// The OS is out of thread resources (`EAGAIN` or equivalent)
    ResourceExhausted,
    /// The caller lacks permission to create a thread with these attributes
    PermissionDenied,
    /// Any other OS error, with the raw error code
    Os(i32),
}

/// Errors that can occur while joining an owned thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinError {
    /// Joining would deadlock (e.g. a thread joining itself)
    Deadlock,
    /// The underlying thread is not joinable
    NotJoinable,
    /// Any other OS error, with the raw error code
    Os(i32),
}

/// Errors that can occur while setting or querying a thread name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// The handle does not currently own a thread
    NoThread,
    /// The name exceeds [`MAX_NAME_LEN`](crate::MAX_NAME_LEN) bytes
    TooLong(usize),
    /// The name contains an interior NUL byte
    ContainsNul,
    /// The platform cannot name or query another thread
    Unsupported,
    /// Any other OS error, with the raw error code
    Os(i32),
}

impl fmt::Display for ThreadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadError::Spawn(e) => write!(f, "thread spawn error: {}", e),
            ThreadError::Join(e) => write!(f, "thread join error: {}", e),
            ThreadError::Name(e) => write!(f, "thread name error: {}", e),
        }
    }
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::ResourceExhausted => write!(f, "insufficient resources to create a thread"),
            SpawnError::PermissionDenied => write!(f, "no permission to create a thread"),
            SpawnError::Os(code) => write!(f, "thread creation failed (OS error {})", code),
        }
    }
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::Deadlock => write!(f, "joining this thread would deadlock"),
            JoinError::NotJoinable => write!(f, "thread is not joinable"),
            JoinError::Os(code) => write!(f, "thread join failed (OS error {})", code),
        }
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::NoThread => write!(f, "handle does not own a thread"),
            NameError::TooLong(len) => {
                write!(f, "thread name is {} bytes, limit is {}", len, crate::MAX_NAME_LEN)
            }
            NameError::ContainsNul => write!(f, "thread name contains an interior NUL byte"),
            NameError::Unsupported => write!(f, "thread naming is not supported on this platform"),
            NameError::Os(code) => write!(f, "thread naming failed (OS error {})", code),
        }
    }
}

impl std::error::Error for ThreadError {}
impl std::error::Error for SpawnError {}
impl std::error::Error for JoinError {}
impl std::error::Error for NameError {}

impl From<SpawnError> for ThreadError {
    fn from(error: SpawnError) -> Self {
        ThreadError::Spawn(error)
    }
}

impl From<JoinError> for ThreadError {
    fn from(error: JoinError) -> Self {
        ThreadError::Join(error)
    }
}

impl From<NameError> for ThreadError {
    fn from(error: NameError) -> Self {
        ThreadError::Name(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_specific() {
        let e = ThreadError::from(SpawnError::ResourceExhausted);
        assert_eq!(
            e.to_string(),
            "thread spawn error: insufficient resources to create a thread"
        );

        let e = ThreadError::from(NameError::TooLong(20));
        assert_eq!(e.to_string(), "thread name error: thread name is 20 bytes, limit is 15");

        let e = ThreadError::from(JoinError::Os(22));
        assert_eq!(e.to_string(), "thread join error: thread join failed (OS error 22)");
    }

    #[test]
    fn conversions_preserve_variant() {
        assert_eq!(ThreadError::from(JoinError::Deadlock), ThreadError::Join(JoinError::Deadlock));
        assert_eq!(
            ThreadError::from(NameError::ContainsNul),
            ThreadError::Name(NameError::ContainsNul)
        );
    }
}
