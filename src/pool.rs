//! Line-buffer recycling between the console input source and the shell
//!
//! A fixed set of buffers alternates between two FIFO queues: *available*
//! (free for the input source to fill) and *ready* (filled, waiting for
//! dispatch). Ownership of a buffer travels with a move-only [`BufferToken`],
//! so a buffer can never sit on both sides at once and is never freed.

use heapless::Deque;

use crate::line_buffer::LineBuffer;

/// Number of line buffers, which bounds the commands queued at once
pub const SHELL_MAX_CMD_QUEUED: usize = 4;

/// Owning handle to one pool buffer
///
/// Minted by the pool when a buffer leaves a queue and consumed when it
/// enters one. Deliberately neither `Copy` nor `Clone`.
#[derive(Debug)]
pub struct BufferToken {
    index: usize,
}

/// Fixed pool of line buffers plus the two recycling queues
pub struct BufferPool<const N: usize = SHELL_MAX_CMD_QUEUED> {
    buffers: [LineBuffer; N],
    avail: Deque<usize, N>,
    ready: Deque<usize, N>,
}

impl<const N: usize> BufferPool<N> {
    /// Create a pool with every buffer available
    pub fn new() -> Self {
        let mut avail = Deque::new();
        for index in 0..N {
            // the deque holds exactly N slots
            let _ = avail.push_back(index);
        }
        Self {
            buffers: core::array::from_fn(|_| LineBuffer::new()),
            avail,
            ready: Deque::new(),
        }
    }

    /// Take a free buffer for filling (input source side)
    ///
    /// Returns `None` when every buffer is in flight; the source must drop
    /// or retry the line.
    pub fn acquire(&mut self) -> Option<BufferToken> {
        self.avail.pop_front().map(|index| BufferToken { index })
    }

    /// Hand a filled buffer over for dispatch (input source side)
    pub fn submit(&mut self, token: BufferToken) {
        // at most N tokens exist, so the queue cannot be full
        let _ = self.ready.push_back(token.index);
    }

    /// Take the oldest filled buffer (shell side)
    pub fn next_ready(&mut self) -> Option<BufferToken> {
        self.ready.pop_front().map(|index| BufferToken { index })
    }

    /// Return a drained buffer to the available queue (shell side)
    pub fn release(&mut self, token: BufferToken) {
        self.buffers[token.index].clear();
        // at most N tokens exist, so the queue cannot be full
        let _ = self.avail.push_back(token.index);
    }

    /// Mutable access to the buffer behind a token
    pub fn buffer_mut(&mut self, token: &BufferToken) -> &mut LineBuffer {
        &mut self.buffers[token.index]
    }

    /// Shared access to the buffer behind a token
    pub fn buffer(&self, token: &BufferToken) -> &LineBuffer {
        &self.buffers[token.index]
    }

    /// Number of buffers currently available to the input source
    pub fn free(&self) -> usize {
        self.avail.len()
    }

    /// Number of filled buffers waiting for dispatch
    pub fn pending(&self) -> usize {
        self.ready.len()
    }

    /// Total number of buffers in the pool
    pub fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for BufferPool<N> {
    fn default() -> Self {
        Self::new()
    }
}
