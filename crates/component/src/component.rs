use std::collections::HashMap;
use std::fmt;

use dispatch::{Dispatcher, Listener};
use markup::TagNode;
use serde_json::Value;

use crate::assets::{AssetCatalog, AssetError};
use crate::events::{EventBinder, EventKind};
use crate::package::Package;
use crate::value::{is_empty, is_zero};

/// Css class applied by `set_action` unless the caller picks another one.
pub const CLICK_EXECUTE_CLASS: &str = "click-execute";

type PreRenderFn = Box<dyn FnMut(&mut TagNode) + Send>;

/// One rendered HTML element: a markup node plus identity, opaque payload
/// data, non-rendered parameters, and behavior hooks.
///
/// All mutators return `&mut Self` for chaining. Lookups miss softly with
/// `Option`; nothing here validates caller input.
pub struct Component {
    node: TagNode,
    data: Value,
    params: HashMap<String, Value>,
    default_value: Option<Value>,
    package: Option<Package>,
    pre_render: Option<PreRenderFn>,
}

impl Component {
    pub fn new(tag: &str, identifier: Option<&str>) -> Self {
        Self {
            node: TagNode::new(tag, identifier),
            data: Value::Null,
            params: HashMap::new(),
            default_value: None,
            package: None,
            pre_render: None,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.node.id()
    }

    pub fn node(&self) -> &TagNode {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut TagNode {
        &mut self.node
    }

    /// Raw attribute write, append or replace. The named mutators below are
    /// the usual entry points; this is the escape hatch they share.
    pub fn att(&mut self, name: &str, value: &str, append: bool) -> &mut Self {
        self.node.att(name, value, append);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.node.attribute(name)
    }

    /// Add to (default) or replace the `class` attribute. Empty input is a
    /// no-op. Appending joins with a space, keeps order, never dedups.
    pub fn set_class(&mut self, class: &str, append: bool) -> &mut Self {
        if class.is_empty() {
            return self;
        }
        self.att("class", class, append)
    }

    /// Truthy condition sets `disabled="disabled"`; falsy leaves the
    /// attribute untouched rather than clearing it.
    pub fn set_disabled(&mut self, condition: bool) -> &mut Self {
        if condition {
            self.att("disabled", "disabled", false);
        }
        self
    }

    /// Same one-way semantics as `set_disabled`, for `readonly`.
    pub fn set_read_only(&mut self, condition: bool) -> &mut Self {
        if condition {
            self.att("readonly", "readonly", false);
        }
        self
    }

    pub fn set_placeholder(&mut self, placeholder: &str) -> &mut Self {
        self.att("placeholder", placeholder, false)
    }

    /// Stored for the pre-render hook or the host; no attribute effect here.
    pub fn set_default_value(&mut self, value: Value) -> &mut Self {
        self.default_value = Some(value);
        self
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Component-local configuration, never serialized into markup.
    pub fn set_parameter(&mut self, key: &str, value: Value) -> &mut Self {
        self.params.insert(key.to_string(), value);
        self
    }

    pub fn get_parameter(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Opaque payload, replaced verbatim.
    pub fn set_data(&mut self, data: Value) -> &mut Self {
        self.data = data;
        self
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Configure this component to trigger a named remote action. The
    /// parameters attribute is included when non-empty or literally
    /// zero/`"0"`; the confirm attribute only when a message is supplied.
    pub fn set_action(
        &mut self,
        action: &str,
        parameters: Option<&Value>,
        css_class: &str,
        confirm_message: Option<&str>,
    ) -> &mut Self {
        self.set_class(css_class, true).att("data-action", action, false);
        if let Some(value) = parameters
            && (!is_empty(value) || is_zero(value))
        {
            self.att("data-action-parameters", &value_text(value), false);
        }
        if let Some(message) = confirm_message.filter(|m| !m.is_empty()) {
            self.att("data-confirm", message, false);
        }
        self
    }

    /// Class mutation half of event wiring; `EventBinder::bind` is the other
    /// half. `on_click`/`on_change` compose the two.
    pub fn add_dispatch_class(&mut self, kind: EventKind) -> &mut Self {
        self.set_class(kind.dispatch_class(), true)
    }

    pub fn on_click(&mut self, dispatcher: &mut Dispatcher, listener: Listener) -> &mut Self {
        self.on_event(dispatcher, EventKind::Click, listener)
    }

    pub fn on_change(&mut self, dispatcher: &mut Dispatcher, listener: Listener) -> &mut Self {
        self.on_event(dispatcher, EventKind::Change, listener)
    }

    fn on_event(
        &mut self,
        dispatcher: &mut Dispatcher,
        kind: EventKind,
        listener: Listener,
    ) -> &mut Self {
        self.add_dispatch_class(kind);
        let identifier = self.identifier().unwrap_or_default().to_string();
        EventBinder::bind(dispatcher, &identifier, kind, listener);
        self
    }

    /// Package identity used to resolve this component's relative asset
    /// paths. Resolved at startup and injected, not discovered at runtime.
    pub fn set_package(&mut self, package: Package) -> &mut Self {
        self.package = Some(package);
        self
    }

    pub fn package(&self) -> Option<&Package> {
        self.package.as_ref()
    }

    /// Declare a script this component needs. Protocol-relative paths go in
    /// verbatim; anything else resolves through the injected package.
    pub fn require_js(&self, assets: &mut AssetCatalog, path: &str) -> Result<(), AssetError> {
        assets.require_js(&self.resolve_asset(path)?);
        Ok(())
    }

    /// Declare a stylesheet this component needs; same resolution rules.
    pub fn require_css(&self, assets: &mut AssetCatalog, path: &str) -> Result<(), AssetError> {
        assets.require_css(&self.resolve_asset(path)?);
        Ok(())
    }

    fn resolve_asset(&self, path: &str) -> Result<String, AssetError> {
        if path.starts_with("//") {
            return Ok(path.to_string());
        }
        let Some(package) = self.package.as_ref() else {
            return Err(AssetError::PackageUnresolved {
                path: path.to_string(),
            });
        };
        Ok(package.asset_path(path))
    }

    /// Install the pre-render hook: it runs once per `build` call, right
    /// before serialization, and may mutate attributes and children freely
    /// without changing the traversal itself.
    pub fn set_pre_render(&mut self, hook: impl FnMut(&mut TagNode) + Send + 'static) -> &mut Self {
        self.pre_render = Some(Box::new(hook));
        self
    }

    /// Run the pre-render hook (no-op when unset), then serialize the
    /// subtree at the given nesting depth.
    pub fn build(&mut self, depth: usize) -> String {
        if let Some(hook) = self.pre_render.as_mut() {
            hook(&mut self.node);
        }
        self.node.render(depth)
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("tag", &self.node.tag())
            .field("identifier", &self.identifier())
            .field("params", &self.params.len())
            .field("package", &self.package)
            .field("has_pre_render", &self.pre_render.is_some())
            .finish()
    }
}
