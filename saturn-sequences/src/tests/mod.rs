//! Helpers shared by the unit tests of every container.

// NOTE: The entire module is only compiled when running tests.
#![cfg(test)]


use core::cmp::Ordering;
use std::sync::Once;

/// Element ordered by `key` only, carrying its original position in `seq` so
/// tests can tell equal elements apart.
#[derive(Clone, Copy, Debug)]
pub struct Keyed {
    pub key: u8,
    pub seq: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Tags every key with its position.
pub fn keyed(keys: &[u8]) -> Vec<Keyed> {
    keys.iter()
        .enumerate()
        .map(|(seq, &key)| Keyed { key, seq })
        .collect()
}

/// `true` when equal keys appear in their original relative order.
pub fn is_stable(items: &[Keyed]) -> bool {
    items
        .windows(2)
        .all(|pair| pair[0].key != pair[1].key || pair[0].seq < pair[1].seq)
}

/// `true` when `items` is in non-descending order.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}

/// `0..len` arranged so that every middle element is the maximum of what
/// remains once larger values are removed. A quick sort that pivots on the
/// middle element peels off one value per partition round on this input.
pub fn middle_max(len: u32) -> Vec<u32> {
    let mut items = Vec::with_capacity(len as usize);
    for value in 0..len {
        items.insert((items.len() + 1) / 2, value);
    }
    items
}

static TRACING: Once = Once::new();

/// Routes `tracing` output through the libtest capture.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}
