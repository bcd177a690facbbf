use std::collections::HashMap;

use log::debug;

use crate::assets::AssetCatalog;
use crate::component::Component;

/// Stable handle to a component owned by a `RenderContext`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ComponentId(u32);

/// Owns everything one render pass produces: the components themselves, the
/// identifier registry over them, and the asset catalog they populate.
///
/// Build one per request and drop it with the response; isolation between
/// passes is ownership, not a reset call.
#[derive(Debug, Default)]
pub struct RenderContext {
    components: Vec<Component>,
    registry: HashMap<String, ComponentId>,
    assets: AssetCatalog,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a component and take ownership of it; shorthand for
    /// `insert(Component::new(..))`.
    pub fn create(&mut self, tag: &str, identifier: Option<&str>) -> ComponentId {
        self.insert(Component::new(tag, identifier))
    }

    /// Take ownership of a component. A non-empty identifier publishes it in
    /// the registry; a colliding identifier silently overwrites the earlier
    /// entry (last writer wins) while both components stay alive.
    pub fn insert(&mut self, component: Component) -> ComponentId {
        let id = ComponentId(self.components.len() as u32);
        if let Some(identifier) = component.identifier() {
            let previous = self.registry.insert(identifier.to_string(), id);
            if let Some(previous) = previous {
                debug!(
                    "registry: identifier {identifier:?} re-registered, {previous:?} no longer retrievable"
                );
            }
        }
        self.components.push(component);
        id
    }

    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.get_mut(id.0 as usize)
    }

    /// Retrieve a component by identifier. An unknown identifier is a normal
    /// outcome, not an error.
    pub fn get_by_id(&self, identifier: &str) -> Option<&Component> {
        self.get(*self.registry.get(identifier)?)
    }

    pub fn get_by_id_mut(&mut self, identifier: &str) -> Option<&mut Component> {
        let id = *self.registry.get(identifier)?;
        self.get_mut(id)
    }

    pub fn assets(&self) -> &AssetCatalog {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetCatalog {
        &mut self.assets
    }

    /// Render the identified component's subtree at the given depth.
    pub fn build(&mut self, id: ComponentId, depth: usize) -> Option<String> {
        Some(self.get_mut(id)?.build(depth))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
