//! Build-time platform selection for the native thread binding.
//!
//! Each backend exposes the same items: `OsThread` (the owned native thread
//! resource, constructed only on successful creation and detached on drop),
//! `ReturnType`/`StartRoutine`/`THREAD_OK` (the platform-typed routine
//! contract), and `sleep_millis`. The choice is static; there is no runtime
//! dispatch.

#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub use unix::{ReturnType, StartRoutine, THREAD_OK};
#[cfg(unix)]
pub(crate) use unix::{sleep_millis, OsThread};

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::{ReturnType, StartRoutine, THREAD_OK};
#[cfg(windows)]
pub(crate) use windows::{sleep_millis, OsThread};
