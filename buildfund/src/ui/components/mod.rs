pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod modal;
pub mod nav_bar;
pub mod popup;
pub mod project_list;
pub mod toast;
