//! Cross-module tests: concurrency scenarios and timing behavior that span
//! the handle, the platform binding, and the sleep utility.

mod helpers;
mod integration;
