use super::AppState;
use crate::events::AppEvent;

/// Pure state transition function for background events
pub fn reduce_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::ToastExpired { id } => {
            if state.hide_toast(id) {
                tracing::debug!("Toast #{} hidden", id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_toast_is_hidden() {
        let mut state = AppState::new();
        let ticket = state.show_toast("Project uploaded");

        reduce_app_event(&mut state, AppEvent::ToastExpired { id: ticket.id });

        assert!(state.toast.is_none());
    }

    #[test]
    fn expiry_for_replaced_toast_is_ignored() {
        let mut state = AppState::new();
        let old = state.show_toast("Project uploaded");
        state.show_toast("Draw request submitted");

        reduce_app_event(&mut state, AppEvent::ToastExpired { id: old.id });

        assert_eq!(
            state.toast.as_ref().map(|t| t.message.as_str()),
            Some("Draw request submitted")
        );
    }
}
