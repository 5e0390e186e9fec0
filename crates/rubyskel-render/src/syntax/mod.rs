/// Comment block rendering.
pub mod comment;
/// Method stub rendering.
pub mod method;
/// Module and class block rendering.
pub mod namespace;

pub use comment::render_comment;
pub use method::render_method;
pub use namespace::{included_ancestors, render_namespace, render_opening};
