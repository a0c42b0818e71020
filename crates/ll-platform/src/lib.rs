//! Platform adapters for the Little Lemon client.

pub mod app_dirs;

pub use app_dirs::DirsAppDirsAdapter;
