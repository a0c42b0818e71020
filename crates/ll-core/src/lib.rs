//! # ll-core
//!
//! Core domain models and business logic for the Little Lemon client.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod menu;
pub mod onboarding;
pub mod ports;
pub mod profile;
pub mod storage_keys;

// Re-export commonly used types at the crate root
pub use config::ClientConfig;
pub use menu::{Category, CategoryFilter, FilterCriteria, MenuBrowser, MenuCatalog, MenuEntry};
pub use onboarding::{GateEvent, GateState, GateStateMachine, OnboardingForm};
pub use profile::{Profile, ProfileField, ProfileForm, ProfileLoad, ValidationErrors};
