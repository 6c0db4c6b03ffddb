//! Win32 backend.
//!
//! Thread creation and joining go through `CreateThread` and
//! `WaitForSingleObject`. Naming uses `SetThreadDescription` /
//! `GetThreadDescription` (Windows 10 1607+), with UTF-8 names converted to
//! UTF-16 on the way in and back on the way out.

use core::ffi::c_void;
use core::mem;

use windows::core::PCWSTR;
use windows::Win32::Foundation::{
    CloseHandle, LocalFree, ERROR_ACCESS_DENIED, ERROR_NOT_ENOUGH_MEMORY, HANDLE, HLOCAL,
    WAIT_OBJECT_0,
};
use windows::Win32::System::Threading::{
    CreateThread, GetThreadDescription, SetThreadDescription, Sleep, WaitForSingleObject,
    INFINITE, THREAD_CREATION_FLAGS,
};

use crate::errors::{JoinError, NameError, SpawnError};

/// Status code a start routine returns to the OS.
pub type ReturnType = u32;

/// Start routine signature expected by `CreateThread`.
pub type StartRoutine = extern "system" fn(*mut c_void) -> ReturnType;

/// Neutral success value for a start routine.
pub const THREAD_OK: ReturnType = 0;

/// An owned, joinable Win32 thread. Its handle is closed on drop.
pub(crate) struct OsThread {
    handle: HANDLE,
}

// HANDLE is an opaque kernel object reference; the thread it names is only
// manipulated through &self / by-value methods here.
unsafe impl Send for OsThread {}
unsafe impl Sync for OsThread {}

impl OsThread {
    pub(crate) fn spawn(start: StartRoutine, arg: *mut c_void) -> Result<Self, SpawnError> {
        // Safe fn pointers coerce to the unsafe signature CreateThread wants.
        let routine: unsafe extern "system" fn(*mut c_void) -> u32 = start;
        let handle = unsafe {
            CreateThread(
                None,
                0,
                Some(routine),
                Some(arg as *const c_void),
                THREAD_CREATION_FLAGS(0),
                None,
            )
        }
        .map_err(|e| {
            if e.code() == ERROR_NOT_ENOUGH_MEMORY.to_hresult() {
                SpawnError::ResourceExhausted
            } else if e.code() == ERROR_ACCESS_DENIED.to_hresult() {
                SpawnError::PermissionDenied
            } else {
                SpawnError::Os(e.code().0)
            }
        })?;
        Ok(Self { handle })
    }

    /// Block until the thread's routine returns, then close its handle.
    pub(crate) fn join(self) -> Result<(), JoinError> {
        let handle = self.handle;
        mem::forget(self);
        let wait = unsafe { WaitForSingleObject(handle, INFINITE) };
        let result = if wait == WAIT_OBJECT_0 {
            Ok(())
        } else {
            Err(JoinError::Os(wait.0 as i32))
        };
        let _ = unsafe { CloseHandle(handle) };
        result
    }

    pub(crate) fn set_name(&self, name: &str) -> Result<(), NameError> {
        let wide: Vec<u16> = name.encode_utf16().chain(core::iter::once(0)).collect();
        unsafe { SetThreadDescription(self.handle, PCWSTR(wide.as_ptr())) }
            .map_err(|e| NameError::Os(e.code().0))
    }

    pub(crate) fn get_name(&self) -> Result<String, NameError> {
        let pwstr = unsafe { GetThreadDescription(self.handle) }
            .map_err(|e| NameError::Os(e.code().0))?;
        let name = String::from_utf16_lossy(unsafe { pwstr.as_wide() });
        let _ = unsafe { LocalFree(HLOCAL(pwstr.0 as *mut c_void)) };
        Ok(name)
    }
}

impl Drop for OsThread {
    fn drop(&mut self) {
        // Closing the handle releases our bookkeeping; the thread keeps
        // running and the OS reclaims it when its routine returns.
        let _ = unsafe { CloseHandle(self.handle) };
    }
}

/// Suspend the calling thread for at least `millis` milliseconds.
///
/// `Sleep` takes a u32, so very long durations are slept in chunks. The
/// INFINITE sentinel (u32::MAX) is never passed through.
pub(crate) fn sleep_millis(millis: u64) {
    let mut remaining = millis;
    loop {
        let chunk = remaining.min(u64::from(u32::MAX - 1)) as u32;
        unsafe { Sleep(chunk) };
        remaining -= u64::from(chunk);
        if remaining == 0 {
            break;
        }
    }
}
