//! The thread handle and the process-wide sleep utility.

pub mod handle;

pub use handle::ThreadHandle;

/// Maximum length in bytes of a thread name.
///
/// 15 is the Linux cap (`TASK_COMM_LEN` minus the NUL terminator) and is
/// enforced uniformly on every platform so names that work in development
/// keep working in production.
pub const MAX_NAME_LEN: usize = 15;

/// Suspend the *calling* thread for at least `millis` milliseconds.
///
/// This is a process-wide utility tied to no handle: it never affects a
/// spawned thread. The suspension may exceed `millis` due to scheduler
/// granularity, but never undercuts it.
pub fn sleep_millis(millis: u64) {
    crate::os::sleep_millis(millis);
}
