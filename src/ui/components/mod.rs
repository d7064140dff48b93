pub mod confirm_dialog;
pub mod dialog_utils;
pub mod edit_dialog;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod input_bar;
pub mod logo;
pub mod stats;
pub mod tabs;
pub mod task_list;
pub mod theme_selector;
pub mod toast;
