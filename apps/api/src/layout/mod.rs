// Template layout engine: turns a resume document plus a template descriptor
// into a render tree. Composition is pure; handlers run it inside
// tokio::task::spawn_blocking.

pub mod composer;
pub mod dates;
pub mod dispatch;
pub mod fields;
pub mod handlers;
pub mod icons;
pub mod registry;
pub mod sections;
pub mod style;
pub mod tree;
pub mod zones;

// Re-export the public API consumed by state, routes and main.
pub use dates::{DateFormatter, MonthYearFormatter};
pub use icons::IconRegistry;
pub use registry::TemplateRegistry;
