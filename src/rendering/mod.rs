pub mod layout;
pub mod palette;
pub mod quiz_ui;
