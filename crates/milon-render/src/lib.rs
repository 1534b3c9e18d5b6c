pub mod entry;
pub mod error;
pub mod fragment;
pub mod home;
pub mod sanitize;

pub use entry::EntryRenderer;
pub use error::RenderError;
pub use sanitize::Sanitizer;
