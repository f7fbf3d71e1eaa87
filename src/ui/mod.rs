pub mod draw;
pub mod events;

pub use draw::draw_dashboard;
pub use events::EventHandler;
