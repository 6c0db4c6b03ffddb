//! pthread backend.
//!
//! Thread creation and joining go through `pthread_create`/`pthread_join`.
//! Naming uses `pthread_setname_np`, which on Linux and Android can target
//! any thread; Apple platforms only allow naming the calling thread, so
//! `set_name` reports `Unsupported` there.

use core::ffi::c_void;
use core::mem;

use crate::errors::{JoinError, NameError, SpawnError};

/// Status code a start routine returns to the OS.
pub type ReturnType = *mut c_void;

/// Start routine signature expected by `pthread_create`.
pub type StartRoutine = extern "C" fn(*mut c_void) -> ReturnType;

/// Neutral success value for a start routine.
pub const THREAD_OK: ReturnType = core::ptr::null_mut();

/// An owned, joinable pthread. Detached on drop.
pub(crate) struct OsThread {
    id: libc::pthread_t,
}

// pthread_t is an opaque integer or pointer; the resource it names is only
// manipulated through &self / by-value methods here.
unsafe impl Send for OsThread {}
unsafe impl Sync for OsThread {}

impl OsThread {
    pub(crate) fn spawn(start: StartRoutine, arg: *mut c_void) -> Result<Self, SpawnError> {
        let mut id: libc::pthread_t = unsafe { mem::zeroed() };
        let rc = unsafe { libc::pthread_create(&mut id, core::ptr::null(), start, arg) };
        match rc {
            0 => Ok(Self { id }),
            libc::EAGAIN => Err(SpawnError::ResourceExhausted),
            libc::EPERM => Err(SpawnError::PermissionDenied),
            code => Err(SpawnError::Os(code)),
        }
    }

    /// Block until the thread's routine returns, then release it.
    ///
    /// Consumes the handle either way; after a failed join the pthread is in
    /// an unspecified state and is not detached.
    pub(crate) fn join(self) -> Result<(), JoinError> {
        let id = self.id;
        mem::forget(self);
        let rc = unsafe { libc::pthread_join(id, core::ptr::null_mut()) };
        match rc {
            0 => Ok(()),
            libc::EDEADLK => Err(JoinError::Deadlock),
            libc::EINVAL => Err(JoinError::NotJoinable),
            code => Err(JoinError::Os(code)),
        }
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    pub(crate) fn set_name(&self, name: &str) -> Result<(), NameError> {
        let cname = std::ffi::CString::new(name).map_err(|_| NameError::ContainsNul)?;
        let rc = unsafe { libc::pthread_setname_np(self.id, cname.as_ptr()) };
        match rc {
            0 => Ok(()),
            libc::ERANGE => Err(NameError::TooLong(name.len())),
            code => Err(NameError::Os(code)),
        }
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    pub(crate) fn set_name(&self, _name: &str) -> Result<(), NameError> {
        // pthread_setname_np on Apple platforms only names the calling thread.
        Err(NameError::Unsupported)
    }

    #[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))]
    pub(crate) fn get_name(&self) -> Result<String, NameError> {
        use std::ffi::CStr;

        // 64 bytes covers every platform cap (Linux 15, macOS 63) plus NUL.
        let mut buf = [0 as libc::c_char; 64];
        let rc = unsafe { libc::pthread_getname_np(self.id, buf.as_mut_ptr(), buf.len()) };
        if rc != 0 {
            return Err(NameError::Os(rc));
        }
        let cstr = unsafe { CStr::from_ptr(buf.as_ptr()) };
        Ok(String::from_utf8_lossy(cstr.to_bytes()).into_owned())
    }

    #[cfg(not(any(target_os = "linux", target_os = "android", target_vendor = "apple")))]
    pub(crate) fn get_name(&self) -> Result<String, NameError> {
        Err(NameError::Unsupported)
    }
}

impl Drop for OsThread {
    fn drop(&mut self) {
        // Release our bookkeeping; the thread keeps running and the OS
        // reclaims it when its routine returns.
        let _ = unsafe { libc::pthread_detach(self.id) };
    }
}

/// Suspend the calling thread for at least `millis` milliseconds.
///
/// Restarts `nanosleep` with the remaining time when interrupted by a signal.
pub(crate) fn sleep_millis(millis: u64) {
    let mut ts: libc::timespec = unsafe { mem::zeroed() };
    ts.tv_sec = (millis / 1_000) as libc::time_t;
    ts.tv_nsec = ((millis % 1_000) * 1_000_000) as libc::c_long;

    loop {
        let mut rem: libc::timespec = unsafe { mem::zeroed() };
        if unsafe { libc::nanosleep(&ts, &mut rem) } == 0 {
            break;
        }
        if std::io::Error::last_os_error().raw_os_error() != Some(libc::EINTR) {
            break;
        }
        ts = rem;
    }
}
