pub mod gui_app;
pub mod page_host;
pub mod ports;
pub mod state;
