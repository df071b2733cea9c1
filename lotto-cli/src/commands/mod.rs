pub mod countdown;
pub mod draw;
pub mod history;
pub mod interactive;

pub use countdown::show_countdown;
pub use draw::{run_draw, DrawArgs};
pub use history::{check_numbers, show_latest, show_stats};
pub use interactive::run_interactive;
