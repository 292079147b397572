//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod icons;
mod nav_bar;
mod player;
mod thumbnail_bar;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use nav_bar::*;
pub use player::*;
pub use thumbnail_bar::*;

/// Await a timer on either target; all single-slot timers go through this.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn delay_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn delay_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}
