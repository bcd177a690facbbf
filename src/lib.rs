//! Facade over the workspace crates: a server-side markup-construction core.
//!
//! A [`RenderContext`] owns one render pass: the components built during it,
//! the identifier registry over them, and the asset catalog they populate.
//! [`Dispatcher`] routes client events back to server-side listeners by
//! synthetic key; [`TagNode`] is the underlying markup tree.

pub use component::{
    AssetCatalog, AssetError, AssetKind, CLICK_EXECUTE_CLASS, Component, ComponentId, EventBinder,
    EventKind, MANIFEST_FILE, ManifestError, Package, RenderContext, get_global, nvl,
};
pub use dispatch::{Dispatcher, Event, Listener};
pub use markup::{Child, TagNode};
