//! Shared start routines for the concurrency tests.
//!
//! Routines receive their shared state through the opaque argument pointer,
//! exactly the way library users pass context to a spawned thread. Every test
//! joins before its state goes out of scope, so the raw-pointer derefs in
//! here are sound.

use crate::THREAD_OK;
use portable_atomic::{AtomicU64, Ordering};

crate::thread_routine! {
    /// Increment a counter behind a `spin::Mutex` by one.
    pub(super) fn bump_locked_counter(arg) {
        let counter = unsafe { &*(arg as *const spin::Mutex<u64>) };
        *counter.lock() += 1;
        THREAD_OK
    }
}

crate::thread_routine! {
    /// Increment an atomic counter by one.
    pub(super) fn bump_atomic_counter(arg) {
        let counter = unsafe { &*(arg as *const AtomicU64) };
        counter.fetch_add(1, Ordering::SeqCst);
        THREAD_OK
    }
}

crate::thread_routine! {
    /// Write a recognizable value through a plain (unsynchronized) pointer,
    /// to check that join publishes the routine's writes to the caller.
    pub(super) fn write_forty_two(arg) {
        let slot = arg as *mut u64;
        unsafe { *slot = 42 };
        THREAD_OK
    }
}
