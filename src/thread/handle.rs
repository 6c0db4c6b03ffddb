use core::ffi::c_void;
use core::fmt;

use super::MAX_NAME_LEN;
use crate::errors::{JoinError, NameError, SpawnError};
use crate::os::{OsThread, StartRoutine};

/// Move-only owner of at most one native OS thread.
///
/// A handle is either *invalid* (owns nothing) or *owning* (refers to exactly
/// one live thread). [`run`](Self::run) moves it from invalid to owning,
/// [`join`](Self::join) back. Starting a thread on an owning handle and
/// joining an invalid one are contract violations checked by `debug_assert!`;
/// in release builds the former detaches the previously owned thread and the
/// latter is a no-op.
///
/// # Drop Policy
///
/// Dropping an owning handle *detaches*: the OS bookkeeping is released
/// without waiting, the thread keeps running to completion, and no further
/// interaction with it is possible. Call [`join`](Self::join) first when the
/// thread's effects must be visible, or [`detach`](Self::detach) to make the
/// fire-and-forget intent explicit at the call site.
pub struct ThreadHandle {
    handle: Option<OsThread>,
    named: bool,
}

impl ThreadHandle {
    /// Create an empty handle that owns nothing.
    pub const fn new() -> Self {
        Self { handle: None, named: false }
    }

    /// Spawn a new OS thread running `start(arg)` and return an owning handle.
    ///
    /// # Errors
    ///
    /// Returns [`SpawnError`] when the OS refuses to create the thread, most
    /// commonly [`SpawnError::ResourceExhausted`].
    ///
    /// # Safety
    ///
    /// `arg` is handed to the new thread as-is. The caller must guarantee that
    /// whatever it points to stays valid for the thread's whole lifetime, and
    /// that any access to it from both sides is synchronized. Passing a null
    /// pointer is always fine.
    pub unsafe fn spawn(start: StartRoutine, arg: *mut c_void) -> Result<Self, SpawnError> {
        let os = OsThread::spawn(start, arg)?;
        Ok(Self { handle: Some(os), named: false })
    }

    /// `true` iff this handle currently owns a live thread.
    pub fn is_valid(&self) -> bool {
        self.handle.is_some()
    }

    /// Spawn a new OS thread running `start(arg)` on an invalid handle.
    ///
    /// Same semantics as [`spawn`](Self::spawn), but as a transition on an
    /// existing handle. The handle must be invalid; violating that is a
    /// contract error caught by `debug_assert!`.
    ///
    /// # Safety
    ///
    /// Same contract as [`spawn`](Self::spawn): `arg` must remain valid for
    /// the thread's lifetime and shared access to it must be synchronized.
    pub unsafe fn run(&mut self, start: StartRoutine, arg: *mut c_void) -> Result<(), SpawnError> {
        debug_assert!(self.handle.is_none(), "run() on a handle that already owns a thread");
        let os = OsThread::spawn(start, arg)?;
        // In release builds any previously owned thread is dropped here,
        // which detaches it.
        self.handle = Some(os);
        self.named = false;
        Ok(())
    }

    /// Block until the owned thread's routine returns, then release it.
    ///
    /// All memory effects of the routine are visible to the caller once this
    /// returns: join establishes a happens-before edge. The handle is invalid
    /// afterwards regardless of the result. Blocking is unbounded; there is
    /// no timeout variant.
    ///
    /// The handle must be owning; joining an invalid handle is a contract
    /// error caught by `debug_assert!` (a no-op `Ok` in release builds).
    pub fn join(&mut self) -> Result<(), JoinError> {
        debug_assert!(self.handle.is_some(), "join() on a handle that owns no thread");
        self.named = false;
        match self.handle.take() {
            Some(os) => os.join(),
            None => Ok(()),
        }
    }

    /// Label the owned thread for debuggers and profilers.
    ///
    /// Names are UTF-8, at most [`MAX_NAME_LEN`] bytes, with no interior NUL;
    /// overlong names are rejected deterministically rather than truncated.
    /// Has no effect on scheduling.
    ///
    /// # Errors
    ///
    /// [`NameError::NoThread`] on an invalid handle, [`NameError::TooLong`] /
    /// [`NameError::ContainsNul`] for bad names, and
    /// [`NameError::Unsupported`] on platforms that cannot name another
    /// thread (e.g. macOS).
    pub fn set_name(&mut self, name: &str) -> Result<(), NameError> {
        if name.len() > MAX_NAME_LEN {
            return Err(NameError::TooLong(name.len()));
        }
        if name.as_bytes().contains(&0) {
            return Err(NameError::ContainsNul);
        }
        let os = self.handle.as_ref().ok_or(NameError::NoThread)?;
        os.set_name(name)?;
        self.named = true;
        Ok(())
    }

    /// Copy the owned thread's name into `buf` as UTF-8.
    ///
    /// Returns the number of bytes written. The name is truncated at a
    /// character boundary to fit `buf`. If no name was ever assigned through
    /// this handle, `buf` is left untouched and `Ok(0)` is returned.
    pub fn get_name(&self, buf: &mut [u8]) -> Result<usize, NameError> {
        if !self.named {
            return Ok(0);
        }
        let os = self.handle.as_ref().ok_or(NameError::NoThread)?;
        let name = os.get_name()?;
        let bytes = name.as_bytes();
        let mut n = bytes.len().min(buf.len());
        while n > 0 && !name.is_char_boundary(n) {
            n -= 1;
        }
        buf[..n].copy_from_slice(&bytes[..n]);
        Ok(n)
    }

    /// Allocating convenience over [`get_name`](Self::get_name).
    ///
    /// Returns `Ok(None)` if no name was ever assigned through this handle.
    pub fn name(&self) -> Result<Option<String>, NameError> {
        if !self.named {
            return Ok(None);
        }
        let os = self.handle.as_ref().ok_or(NameError::NoThread)?;
        os.get_name().map(Some)
    }

    /// Explicitly give up on joining: release the OS bookkeeping and let the
    /// thread run to completion on its own.
    ///
    /// Equivalent to dropping the handle, but states the intent.
    pub fn detach(mut self) {
        self.handle.take();
    }
}

impl Default for ThreadHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThreadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadHandle")
            .field("valid", &self.is_valid())
            .finish()
    }
}
