use log::debug;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Script,
    Stylesheet,
    InlineScript,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot resolve relative asset path {path:?}: component has no package")]
    PackageUnresolved { path: String },
}

/// Ordered, kind-keyed collection of client assets declared during a render
/// pass. `Script` and `Stylesheet` dedup by exact value; `InlineScript` is
/// append-only and never deduplicated.
#[derive(Clone, Debug, Default)]
pub struct AssetCatalog {
    scripts: Vec<String>,
    stylesheets: Vec<String>,
    inline_scripts: Vec<String>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a script by its already-resolved web path, at most once.
    pub fn require_js(&mut self, path: &str) {
        push_unique(&mut self.scripts, path);
    }

    /// Record a stylesheet by its already-resolved web path, at most once.
    pub fn require_css(&mut self, path: &str) {
        push_unique(&mut self.stylesheets, path);
    }

    /// Append one inline snippet. Additive: repeated snippets all survive.
    pub fn require_js_code(&mut self, code: &str) {
        self.inline_scripts.push(code.to_string());
    }

    /// Replace the whole inline list with this single snippet. Distinct from
    /// `require_js_code`: this is a reset-to-one-entry operation.
    pub fn set_javascript(&mut self, code: &str) {
        self.inline_scripts.clear();
        self.inline_scripts.push(code.to_string());
    }

    pub fn get(&self, kind: AssetKind) -> &[String] {
        match kind {
            AssetKind::Script => &self.scripts,
            AssetKind::Stylesheet => &self.stylesheets,
            AssetKind::InlineScript => &self.inline_scripts,
        }
    }

    /// Kind-to-entries view in a fixed emission order, for the host to turn
    /// into `<script>`/`<link>`/inline tags.
    pub fn snapshot(&self) -> impl Iterator<Item = (AssetKind, &[String])> {
        [
            (AssetKind::Script, self.scripts.as_slice()),
            (AssetKind::Stylesheet, self.stylesheets.as_slice()),
            (AssetKind::InlineScript, self.inline_scripts.as_slice()),
        ]
        .into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.stylesheets.is_empty() && self.inline_scripts.is_empty()
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if list.iter().any(|existing| existing == value) {
        debug!("assets: skipping duplicate entry {value:?}");
        return;
    }
    list.push(value.to_string());
}

#[cfg(test)]
mod tests {
    use super::{AssetCatalog, AssetKind};

    #[test]
    fn require_js_dedups_exact_paths() {
        let mut catalog = AssetCatalog::new();
        catalog.require_js("/assets/abc/widget.js");
        catalog.require_js("/assets/abc/widget.js");
        catalog.require_js("/assets/abc/other.js");
        assert_eq!(
            catalog.get(AssetKind::Script),
            ["/assets/abc/widget.js", "/assets/abc/other.js"]
        );
    }

    #[test]
    fn inline_scripts_are_never_deduped() {
        let mut catalog = AssetCatalog::new();
        catalog.require_js_code("init();");
        catalog.require_js_code("init();");
        assert_eq!(catalog.get(AssetKind::InlineScript), ["init();", "init();"]);
    }

    #[test]
    fn set_javascript_resets_to_one_entry() {
        let mut catalog = AssetCatalog::new();
        catalog.require_js_code("a();");
        catalog.require_js_code("b();");
        catalog.set_javascript("c();");
        assert_eq!(catalog.get(AssetKind::InlineScript), ["c();"]);

        catalog.set_javascript("d();");
        assert_eq!(catalog.get(AssetKind::InlineScript), ["d();"]);
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let mut catalog = AssetCatalog::new();
        catalog.require_css("/a.css");
        catalog.require_css("/b.css");
        let kinds: Vec<_> = catalog.snapshot().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            [
                AssetKind::Script,
                AssetKind::Stylesheet,
                AssetKind::InlineScript
            ]
        );
        assert_eq!(catalog.get(AssetKind::Stylesheet), ["/a.css", "/b.css"]);
    }
}
