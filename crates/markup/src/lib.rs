mod escape;
mod node;

pub use crate::escape::{escape_attribute, escape_text};
pub use crate::node::{Child, TagNode};
