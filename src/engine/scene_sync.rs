//! Host state setters for GlobeEngine
//!
//! Each setter updates the engine's copy of host state and re-syncs the
//! layer groups; groups whose dependencies did not change are left alone.

use rustc_hash::FxHashSet;

use super::GlobeEngine;
use crate::options::{Overlay, Theme};
use crate::topology::{LinkSample, LiveLatencies, Node};

impl GlobeEngine {
    /// Replace the active node set.
    ///
    /// While the data-flow overlay is shown, a changed node set restarts
    /// the particle simulation.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        let mut seen = FxHashSet::default();
        for node in &nodes {
            if !seen.insert(node.id.as_str()) {
                log::warn!("duplicate node id {}", node.id);
            }
        }
        if nodes == self.state.nodes {
            return;
        }
        self.state.nodes = nodes;
        self.resync();
        if self.is_mounted() {
            self.apply_particle_toggle();
        }
    }

    /// Set the selected node. Only the host changes the selection.
    pub fn set_selected(&mut self, selected: Option<String>) {
        self.state.selected = selected;
        self.resync();
    }

    /// Replace the link samples drawn as arcs.
    pub fn set_links(&mut self, links: Vec<LinkSample>) {
        self.state.links = links;
        self.resync();
    }

    /// Replace the live per-node latency map.
    pub fn set_live_latencies(&mut self, live: LiveLatencies) {
        self.state.live = live;
        self.resync();
    }

    /// Show or hide one overlay.
    pub fn set_overlay(&mut self, overlay: Overlay, shown: bool) {
        if self.options.display.is_shown(overlay) == shown {
            return;
        }
        self.options.display.set_shown(overlay, shown);
        log::debug!("{overlay:?} overlay {}", if shown { "on" } else { "off" });
        if overlay == Overlay::Particles {
            if self.is_mounted() {
                self.apply_particle_toggle();
            }
        } else {
            self.resync();
        }
    }

    /// Switch theme: background and globe tint only.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.options.display.theme == theme {
            return;
        }
        self.options.display.theme = theme;
        self.scene.set_theme(theme, &self.options);
    }

    /// Enable or disable idle rotation.
    pub fn set_auto_rotate(&mut self, on: bool) {
        self.options.display.auto_rotate = on;
    }

    /// Start the simulation from a clean slate when the data-flow overlay
    /// is shown, stop it otherwise, and mirror the result immediately.
    pub(super) fn apply_particle_toggle(&mut self) {
        if self.options.display.is_shown(Overlay::Particles) {
            self.simulation.enable(self.frame.clock);
        } else {
            self.simulation.disable();
        }
        let visuals = self.simulation.visuals(&self.state.nodes);
        self.scene.sync_particles(&visuals, &self.options);
    }
}
