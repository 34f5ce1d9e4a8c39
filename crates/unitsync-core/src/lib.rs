mod action;
mod config;
mod unit;

pub use action::LifecycleAction;
pub use config::HookConfig;
pub use unit::{UnitKind, UnitReference};
