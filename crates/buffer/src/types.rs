// Chunk: docs/chunks/query_buffer - Growable UTF-8 query buffer

use std::collections::TryReserveError;

/// Errors produced by [`TextBuffer`](crate::TextBuffer) edits.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// Growing the backing storage failed. The buffer content is unchanged.
    #[error("could not grow query buffer to {requested} bytes")]
    Allocation {
        /// The capacity that was being reserved.
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}
