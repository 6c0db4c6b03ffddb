use super::helpers;
use crate::{sleep_millis, ThreadHandle};
use core::ffi::c_void;
use portable_atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[test]
fn eight_threads_with_locked_counter_lose_no_updates() {
    let counter = spin::Mutex::new(0u64);
    let arg = &counter as *const _ as *mut c_void;

    let mut handles: Vec<ThreadHandle> = (0..8)
        .map(|_| unsafe { ThreadHandle::spawn(helpers::bump_locked_counter, arg) }.unwrap())
        .collect();

    for handle in &mut handles {
        handle.join().unwrap();
        assert!(!handle.is_valid());
    }

    assert_eq!(*counter.lock(), 8);
}

#[test]
fn eight_threads_with_atomic_counter_lose_no_updates() {
    let counter = AtomicU64::new(0);
    let arg = &counter as *const _ as *mut c_void;

    let mut handles: Vec<ThreadHandle> = (0..8)
        .map(|_| unsafe { ThreadHandle::spawn(helpers::bump_atomic_counter, arg) }.unwrap())
        .collect();

    for handle in &mut handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.load(Ordering::SeqCst), 8);
}

#[test]
fn join_publishes_the_routines_writes() {
    // The slot is written by the spawned thread with no synchronization of
    // its own; the join is the only thing ordering the write before the read.
    let mut slot: u64 = 0;
    let arg = &mut slot as *mut u64 as *mut c_void;

    let mut handle = unsafe { ThreadHandle::spawn(helpers::write_forty_two, arg) }.unwrap();
    handle.join().unwrap();

    assert_eq!(slot, 42);
}

#[test]
fn sleep_millis_suspends_at_least_that_long() {
    let start = Instant::now();
    sleep_millis(50);
    // 45ms floor leaves room for coarse platform timer granularity.
    assert!(
        start.elapsed() >= Duration::from_millis(45),
        "resumed after {:?}",
        start.elapsed()
    );
}

#[test]
fn sleep_millis_zero_returns() {
    sleep_millis(0);
}

#[test]
fn sequential_spawn_join_cycles_on_one_handle() {
    let counter = AtomicU64::new(0);
    let arg = &counter as *const _ as *mut c_void;

    let mut handle = ThreadHandle::new();
    for _ in 0..32 {
        unsafe { handle.run(helpers::bump_atomic_counter, arg) }.unwrap();
        handle.join().unwrap();
    }

    assert_eq!(counter.load(Ordering::SeqCst), 32);
}

#[test]
fn handle_can_move_across_threads_before_joining() {
    // ThreadHandle is Send: ownership of the join moves with the value.
    let counter = AtomicU64::new(0);
    let arg = &counter as *const _ as *mut c_void;

    let handle = unsafe { ThreadHandle::spawn(helpers::bump_atomic_counter, arg) }.unwrap();
    std::thread::scope(|s| {
        s.spawn(move || {
            let mut handle = handle;
            handle.join().unwrap();
        });
    });

    assert_eq!(counter.load(Ordering::SeqCst), 1);
}
