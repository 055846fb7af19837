use std::time::Duration;

/// The toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    /// Sequence number; a hide only applies to the toast it was scheduled for
    pub id: u64,
    pub message: String,
}

/// Request to hide toast `id` once `hide_after` has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTicket {
    pub id: u64,
    pub hide_after: Duration,
}
