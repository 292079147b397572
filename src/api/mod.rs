pub mod media_center;
pub mod models;

pub use media_center::*;
pub use models::*;
