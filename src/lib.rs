#![deny(unsafe_op_in_unsafe_fn)]
#![forbid(unreachable_pub)]

//! Minimal cross-platform OS thread handle.
//!
//! This library wraps one native operating-system thread behind a uniform
//! move-only value type, [`ThreadHandle`]. A handle is created empty, started
//! with a C-style routine and an opaque argument pointer, joined, and named
//! for diagnostics. It is deliberately not a thread pool, scheduler, or task
//! system: one handle owns at most one OS thread, and the only lifecycle
//! controls are the ones the OS join primitive provides.
//!
//! # Platform Support
//!
//! - **Unix**: pthreads via `libc` (`pthread_create`/`pthread_join`)
//! - **Windows**: Win32 via the `windows` crate (`CreateThread`/
//!   `WaitForSingleObject`)
//!
//! The platform is selected at build time; both backends expose the exact
//! same surface.
//!
//! # Quick Start
//!
//! ```no_run
//! use osthread::{thread_routine, ThreadHandle, THREAD_OK};
//!
//! thread_routine! {
//!     fn worker(_arg) {
//!         // thread work
//!         THREAD_OK
//!     }
//! }
//!
//! let mut handle = unsafe { ThreadHandle::spawn(worker, core::ptr::null_mut()) }
//!     .expect("failed to spawn thread");
//! handle.set_name("worker-1").ok();
//! handle.join().expect("failed to join thread");
//! assert!(!handle.is_valid());
//! ```
//!
//! # Ownership Model
//!
//! A `ThreadHandle` is either *invalid* (owns nothing) or *owning* (refers to
//! exactly one live OS thread). It is move-only: copying a handle would create
//! two owners of one OS resource, so there is no `Clone`. Moving transfers
//! ownership and leaves the source inaccessible. Dropping an owning handle
//! detaches the thread; see [`ThreadHandle::detach`] for the documented
//! policy.

mod os;

pub mod errors;
pub mod thread;

// Platform-typed start routine surface
pub use os::{ReturnType, StartRoutine, THREAD_OK};

// Handle and free functions
pub use thread::{sleep_millis, ThreadHandle, MAX_NAME_LEN};

// Errors
pub use errors::{JoinError, NameError, SpawnError, ThreadError, ThreadResult};

#[cfg(test)]
mod tests;

/// Define a thread start routine with the correct ABI for the target platform.
///
/// Start routines are plain function pointers with an OS-defined calling
/// convention and return type (`extern "C" fn(*mut c_void) -> *mut c_void` on
/// unix, `extern "system" fn(*mut c_void) -> u32` on windows). This macro
/// expands to the right signature per target so routine definitions stay
/// portable. The body receives the opaque argument pointer and must evaluate
/// to a [`ReturnType`]; return [`THREAD_OK`] when there is nothing to report.
///
/// ```no_run
/// use osthread::{thread_routine, THREAD_OK};
///
/// thread_routine! {
///     pub fn noop(_arg) {
///         THREAD_OK
///     }
/// }
/// ```
#[macro_export]
macro_rules! thread_routine {
    ($(#[$attr:meta])* $vis:vis fn $name:ident($arg:ident) $body:block) => {
        #[cfg(unix)]
        $(#[$attr])*
        $vis extern "C" fn $name($arg: *mut ::core::ffi::c_void) -> $crate::ReturnType $body

        #[cfg(windows)]
        $(#[$attr])*
        $vis extern "system" fn $name($arg: *mut ::core::ffi::c_void) -> $crate::ReturnType $body
    };
}
