//! Splits an image into horizontal bands and fills each band on its
//! own thread.
//!
//! Every band is a disjoint slice of the output buffer, handed to its
//! thread by `&mut`, so the threads never share anything writable and
//! need no locks.  All of them are joined before `fill_bands` returns.

use crossbeam;
use std::ops::Range;
use std::panic;

/// Cuts the rows `0..height` into `workers` contiguous bands.  Every
/// band is `height / workers` rows tall, except the last, which also
/// takes the remainder.
///
/// Panics if `workers` is zero or greater than `height`, as either
/// would produce an empty band.
pub fn partition(height: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(
        workers >= 1 && workers <= height,
        "cannot split {} rows among {} workers",
        height,
        workers
    );
    let chunk = height / workers;
    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 { height } else { start + chunk };
            start..end
        })
        .collect()
}

/// Fills `buffer`, which holds rows of `row_len` cells each, using
/// `workers` threads.  `fill` is called exactly once per row with the
/// row's index and its cells.  Blocks until every row is done.
///
/// A panic on any worker is re-raised here once all the others have
/// finished.
pub fn fill_bands<T, F>(buffer: &mut [T], row_len: usize, workers: usize, fill: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    assert!(row_len > 0 && buffer.len() % row_len == 0);
    let height = buffer.len() / row_len;
    let bands = partition(height, workers);
    debug!(
        "Dispatching {} rows to {} workers ({} rows each)",
        height,
        workers,
        height / workers
    );

    let mut rest = buffer;
    let mut jobs = Vec::with_capacity(bands.len());
    for band in bands {
        let (rows, tail) = { rest }.split_at_mut(band.len() * row_len);
        jobs.push((band, rows));
        rest = tail;
    }

    let fill = &fill;
    let result = crossbeam::scope(|spawner| {
        for (band, rows) in jobs {
            spawner.spawn(move |_| {
                for (row, cells) in band.clone().zip(rows.chunks_mut(row_len)) {
                    fill(row, cells);
                }
                trace!("Band {:?} complete", band);
            });
        }
    });

    if let Err(cause) = result {
        panic::resume_unwind(cause);
    }
}
