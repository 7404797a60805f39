pub mod available_times;
pub mod booking_window;
pub mod calendar_grid;
pub mod page_state;
