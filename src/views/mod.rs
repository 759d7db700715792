// src/views/mod.rs

pub mod message_view;
pub mod stage;

pub use message_view::MessageView;
pub use stage::Stage;
