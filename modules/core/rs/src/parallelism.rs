use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::{Result, WrapErr};
use rayon::{ThreadPool, ThreadPoolBuilder};

// Negative requests count back from the number of available cores: -1 = all of them
fn _normalize(requested: isize, max: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (max + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(max) as usize,
    }
}

/// Number of worker threads to use for the requested amount.
pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()?.get() as isize;
    Ok(_normalize(requested, max))
}

/// Build a dedicated rayon pool with the normalized number of threads.
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = available(requested)?;
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|ind| format!("coalign-{ind}"))
        .build()
        .wrap_err_with(|| format!("Failed to start a thread pool with {threads} threads"))
}
