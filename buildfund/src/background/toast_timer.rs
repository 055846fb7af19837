use tokio::sync::mpsc::UnboundedSender;

use super::BackgroundTaskManager;
use crate::events::AppEvent;
use crate::state::ToastTicket;

const TOAST_TASK_ID: &str = "toast_hide";

/// Single-slot hide timer: scheduling a new hide cancels the pending one.
pub fn schedule_hide(
    task_manager: &mut BackgroundTaskManager,
    event_tx: &UnboundedSender<AppEvent>,
    ticket: ToastTicket,
) {
    let event_tx = event_tx.clone();
    task_manager.spawn_task(TOAST_TASK_ID, async move {
        tokio::time::sleep(ticket.hide_after).await;
        if event_tx.send(AppEvent::ToastExpired { id: ticket.id }).is_err() {
            tracing::debug!("Event loop gone, dropping hide for toast #{}", ticket.id);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn ticket(id: u64, millis: u64) -> ToastTicket {
        ToastTicket {
            id,
            hide_after: Duration::from_millis(millis),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_timeout() {
        let mut task_manager = BackgroundTaskManager::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        schedule_hide(&mut task_manager, &tx, ticket(1, 2200));

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(rx.recv().await, Some(AppEvent::ToastExpired { id: 1 }));
    }

    #[tokio::test(start_paused = true)]
    async fn new_toast_cancels_pending_hide() {
        let mut task_manager = BackgroundTaskManager::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        schedule_hide(&mut task_manager, &tx, ticket(1, 2200));
        tokio::time::sleep(Duration::from_millis(1000)).await;
        schedule_hide(&mut task_manager, &tx, ticket(2, 2200));

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(rx.recv().await, Some(AppEvent::ToastExpired { id: 2 }));
        assert!(rx.try_recv().is_err());
    }
}
