// File: crates/chart-render-svg/src/surface.rs
// Summary: Drawing surfaces addressed by id, and the Stage registry that owns them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::node::Node;
use crate::tooltip::Tooltip;

/// One caller-owned drawing container. A render call replaces its children
/// wholesale; nothing is patched in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub children: Vec<Node>,
}

impl Surface {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self { id: id.into(), width, height, children: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn to_svg(&self) -> String {
        self.children.iter().map(Node::to_string).collect()
    }

    pub fn find_all(&self, tag: &str) -> Vec<&Node> {
        self.children.iter().flat_map(|c| c.find_all(tag)).collect()
    }
}

/// Host-document stand-in: surfaces by external id plus the per-container
/// floating tooltip side-table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stage {
    surfaces: BTreeMap<String, Surface>,
    tooltips: BTreeMap<String, Tooltip>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, surface: Surface) {
        self.surfaces.insert(surface.id.clone(), surface);
    }

    pub fn surface(&self, id: &str) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    pub fn surface_mut(&mut self, id: &str) -> Option<&mut Surface> {
        self.surfaces.get_mut(id)
    }

    pub fn surface_size(&self, id: &str) -> Option<(f64, f64)> {
        self.surfaces.get(id).map(|s| (s.width, s.height))
    }

    /// The floating tooltip owned by `container_id`, if a line chart has
    /// ever rendered there.
    pub fn tooltip(&self, container_id: &str) -> Option<&Tooltip> {
        self.tooltips.get(container_id)
    }

    pub(crate) fn tooltip_entry(&mut self, container_id: &str) -> &mut Tooltip {
        self.tooltips.entry(container_id.to_string()).or_default()
    }

    pub fn tooltip_count(&self) -> usize {
        self.tooltips.len()
    }

    /// Pointer entered hover target `target` of `container_id`'s chart.
    pub fn pointer_enter(&mut self, container_id: &str, target: usize) {
        if let Some(t) = self.tooltips.get_mut(container_id) {
            t.enter(target);
        }
    }

    pub fn pointer_move(&mut self, container_id: &str, x: f64, y: f64) {
        if let Some(t) = self.tooltips.get_mut(container_id) {
            t.follow(x, y);
        }
    }

    pub fn pointer_leave(&mut self, container_id: &str) {
        if let Some(t) = self.tooltips.get_mut(container_id) {
            t.leave();
        }
    }

    /// Write a surface's markup to a file.
    pub fn save_svg(&self, id: &str, path: impl AsRef<Path>) -> Result<()> {
        let Some(surface) = self.surface(id) else {
            bail!("unknown surface '{}'", id);
        };
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(path, surface.to_svg())
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
