pub mod models;
pub mod render;

pub use models::{SlipItem, SlipOrder};
pub use render::SlipRenderer;
