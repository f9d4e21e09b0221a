pub mod app;
pub mod drop_zone;
pub mod instructions;
pub mod preview;

pub use app::{App, AppProps};
