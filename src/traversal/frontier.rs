use std::collections::VecDeque;

use crate::error::Result;

/// FIFO queue of adjacency records awaiting expansion.
///
/// The head entry stays queued while its neighbors are scanned and is only
/// dequeued once the scan finished.
#[derive(Debug, Default)]
pub(crate) struct Frontier<T> {
    queue: VecDeque<T>,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub(crate) fn enqueue(&mut self, item: T) -> Result<()> {
        self.queue.try_reserve(1)?;
        self.queue.push_back(item);
        Ok(())
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.queue.front()
    }

    pub(crate) fn dequeue(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
