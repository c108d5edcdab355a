pub mod call;
pub mod context;
pub mod logging;
pub mod overlay;
pub mod platform;
pub mod resume;
pub mod router;
pub mod settings;
