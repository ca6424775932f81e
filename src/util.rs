use std::time::{Duration, Instant};

pub fn measure_exec_time<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let duration = Instant::now() - start;
    (result, duration)
}

/// Swaps `a` and `b` when `a > b`, leaves them untouched otherwise.
pub fn order_pair<T: PartialOrd>(a: &mut T, b: &mut T) {
    if *a > *b {
        std::mem::swap(a, b);
    }
}
