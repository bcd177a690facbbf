mod assets;
mod component;
mod context;
mod events;
mod package;
mod value;

pub use crate::assets::{AssetCatalog, AssetError, AssetKind};
pub use crate::component::{CLICK_EXECUTE_CLASS, Component};
pub use crate::context::{ComponentId, RenderContext};
pub use crate::events::{EventBinder, EventKind};
pub use crate::package::{MANIFEST_FILE, ManifestError, Package};
pub use crate::value::{get_global, is_empty, is_zero, nvl};
