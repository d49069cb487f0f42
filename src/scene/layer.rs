use std::fmt;

use glam::Quat;
use rustc_hash::FxHashMap;

use super::primitive::Primitive;
use super::resources::{ResourceHandle, ResourceLedger};

/// Which concern a layer group draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerKind {
    /// Node markers and the selection ring.
    Markers,
    /// Latency arcs.
    Connections,
    /// Cloud-region discs.
    Regions,
    /// Latency heat spots.
    Heatmap,
    /// Data-flow particles.
    Particles,
}

impl LayerKind {
    /// Every kind, in draw order.
    pub const ALL: [Self; 5] = [
        Self::Markers,
        Self::Connections,
        Self::Regions,
        Self::Heatmap,
        Self::Particles,
    ];
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Markers => "markers",
            Self::Connections => "connections",
            Self::Regions => "regions",
            Self::Heatmap => "heatmap",
            Self::Particles => "particles",
        };
        f.write_str(name)
    }
}

/// Globe orientation as Euler angles (pitch about X, then yaw about Y).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlobeRotation {
    /// Rotation about the X axis in radians.
    pub pitch: f32,
    /// Rotation about the Y axis in radians.
    pub yaw: f32,
}

impl GlobeRotation {
    /// Equivalent quaternion (XYZ Euler order).
    #[must_use]
    pub fn quat(&self) -> Quat {
        Quat::from_rotation_x(self.pitch) * Quat::from_rotation_y(self.yaw)
    }
}

#[derive(Debug, Clone)]
struct LayerEntry {
    handle: ResourceHandle,
    key: Option<u64>,
    primitive: Primitive,
}

/// A disposable collection of primitives for one concern.
///
/// Every primitive holds a handle from the scene's [`ResourceLedger`];
/// handles are released whenever the group is rebuilt or cleared.
#[derive(Debug, Clone)]
pub struct LayerGroup {
    kind: LayerKind,
    entries: Vec<LayerEntry>,
    rotation: GlobeRotation,
    rebuilds: u64,
}

impl LayerGroup {
    /// Empty group.
    #[must_use]
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            rotation: GlobeRotation::default(),
            rebuilds: 0,
        }
    }

    /// What this group draws.
    #[must_use]
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Current primitives in insertion order.
    pub fn primitives(&self) -> impl ExactSizeIterator<Item = &Primitive> + '_ {
        self.entries.iter().map(|e| &e.primitive)
    }

    /// Resource handles held by the group.
    pub fn handles(&self) -> impl ExactSizeIterator<Item = ResourceHandle> + '_ {
        self.entries.iter().map(|e| e.handle)
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rotation applied to every primitive when drawn.
    #[must_use]
    pub fn rotation(&self) -> GlobeRotation {
        self.rotation
    }

    /// Set the group rotation.
    pub fn set_rotation(&mut self, rotation: GlobeRotation) {
        self.rotation = rotation;
    }

    /// Completed replace-all rebuilds.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Release every handle and drop every primitive.
    pub fn clear(&mut self, ledger: &mut ResourceLedger) {
        for entry in self.entries.drain(..) {
            let _ = ledger.release(entry.handle);
        }
    }

    /// Clear, then add `desired` with freshly allocated handles.
    pub fn replace_all(
        &mut self,
        ledger: &mut ResourceLedger,
        desired: Vec<Primitive>,
    ) {
        self.clear(ledger);
        self.entries = desired
            .into_iter()
            .map(|primitive| LayerEntry {
                handle: ledger.allocate(),
                key: None,
                primitive,
            })
            .collect();
        self.rebuilds += 1;
        log::debug!("{} layer rebuilt with {} primitives", self.kind, self.entries.len());
    }

    /// Match entries to `desired` by key: kept keys update in place,
    /// new keys allocate, missing keys release.
    pub fn reconcile_keyed(
        &mut self,
        ledger: &mut ResourceLedger,
        desired: Vec<(u64, Primitive)>,
    ) {
        let mut previous: FxHashMap<u64, ResourceHandle> = self
            .entries
            .drain(..)
            .filter_map(|e| match e.key {
                Some(key) => Some((key, e.handle)),
                None => {
                    let _ = ledger.release(e.handle);
                    None
                }
            })
            .collect();
        self.entries = desired
            .into_iter()
            .map(|(key, primitive)| LayerEntry {
                handle: previous.remove(&key).unwrap_or_else(|| ledger.allocate()),
                key: Some(key),
                primitive,
            })
            .collect();
        for (_, handle) in previous {
            let _ = ledger.release(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::primitive::{Material, Shape};

    fn dot(x: f32) -> Primitive {
        Primitive::new(
            Shape::Sphere {
                center: Vec3::new(x, 0.0, 0.0),
                radius: 0.1,
            },
            Material::basic([1.0; 3], 1.0),
        )
    }

    #[test]
    fn replace_all_releases_previous_handles() {
        let mut ledger = ResourceLedger::new();
        let mut group = LayerGroup::new(LayerKind::Connections);
        group.replace_all(&mut ledger, vec![dot(0.0), dot(1.0)]);
        let first: Vec<_> = group.handles().collect();
        group.replace_all(&mut ledger, vec![dot(2.0)]);

        assert_eq!(group.len(), 1);
        assert_eq!(ledger.live_count(), 1);
        assert!(first.iter().all(|h| !ledger.is_live(*h)));
        assert_eq!(group.rebuild_count(), 2);
    }

    #[test]
    fn keyed_reconcile_keeps_surviving_handles() {
        let mut ledger = ResourceLedger::new();
        let mut group = LayerGroup::new(LayerKind::Particles);
        group.reconcile_keyed(&mut ledger, vec![(1, dot(0.0)), (2, dot(1.0))]);
        let kept: Vec<_> = group.handles().collect();

        group.reconcile_keyed(&mut ledger, vec![(2, dot(1.5)), (3, dot(0.5))]);
        let now: Vec<_> = group.handles().collect();
        assert_eq!(now[0], kept[1]);
        assert!(!ledger.is_live(kept[0]));
        assert_eq!(ledger.live_count(), 2);

        group.reconcile_keyed(&mut ledger, Vec::new());
        assert!(group.is_empty());
        assert_eq!(ledger.live_count(), 0);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut ledger = ResourceLedger::new();
        let mut group = LayerGroup::new(LayerKind::Heatmap);
        group.replace_all(&mut ledger, vec![dot(0.0)]);
        group.clear(&mut ledger);
        group.clear(&mut ledger);
        assert_eq!(ledger.live_count(), 0);
        assert_eq!(ledger.released_total(), 1);
    }
}
