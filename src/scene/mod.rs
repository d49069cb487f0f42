//! Authoritative scene: the persistent base globe, the lights and five
//! disposable layer groups.
//!
//! Each layer group's content is a pure function of its dependencies.
//! [`GlobeScene::sync`] compares the current dependencies with the ones
//! the group was last built from and rebuilds only the groups that
//! differ, replacing every primitive. Every primitive holds a handle from
//! the scene's [`ResourceLedger`], so teardown can prove that nothing is
//! left behind.

pub mod builders;
mod layer;
mod primitive;
mod resources;

use glam::Vec3;
pub use layer::{GlobeRotation, LayerGroup, LayerKind};
pub use primitive::{Material, Primitive, Shape};
pub use resources::{ResourceHandle, ResourceLedger};

use crate::camera::Ray;
use crate::options::{Options, Overlay, Theme};
use crate::simulation::ParticleVisual;
use crate::topology::{CloudRegion, LinkSample, LiveLatencies, Node};

// ---------------------------------------------------------------------------
// Base globe and lights
// ---------------------------------------------------------------------------

/// The persistent tinted sphere and its wireframe overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseGlobe {
    /// Globe sphere radius.
    pub radius: f32,
    /// Tessellation of the globe sphere.
    pub segments: u32,
    /// Globe material (tint follows the theme).
    pub material: Material,
    /// Wireframe sphere radius.
    pub wireframe_radius: f32,
    /// Number of meridians and parallels in the wireframe.
    pub wireframe_segments: u32,
    /// Wireframe color and opacity.
    pub wireframe_material: Material,
    /// Rotation of the globe and wireframe.
    pub rotation: GlobeRotation,
}

impl BaseGlobe {
    /// Globe and wireframe as configured, tinted for the current theme.
    #[must_use]
    pub fn from_options(options: &Options, rotation: GlobeRotation) -> Self {
        let theme = options.display.theme;
        Self {
            radius: options.geometry.globe_radius,
            segments: options.geometry.globe_segments,
            material: Material::phong(
                options.colors.globe_tint(theme),
                options.colors.globe_opacity,
                0.0,
            ),
            wireframe_radius: options.geometry.wireframe_radius,
            wireframe_segments: options.geometry.wireframe_segments,
            wireframe_material: Material::basic(
                options.colors.wireframe,
                options.colors.wireframe_opacity,
            ),
            rotation,
        }
    }
}

/// A point light in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Position.
    pub position: Vec3,
    /// Intensity multiplier for white light.
    pub intensity: f32,
}

/// Scene lighting: a white ambient term plus two point lights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    /// Ambient intensity.
    pub ambient: f32,
    /// Key and fill lights.
    pub points: [PointLight; 2],
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            points: [
                PointLight {
                    position: Vec3::splat(10.0),
                    intensity: 1.0,
                },
                PointLight {
                    position: Vec3::splat(-10.0),
                    intensity: 0.5,
                },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Dependencies
// ---------------------------------------------------------------------------

/// Host-owned state the layer groups are derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneState {
    /// Active nodes.
    pub nodes: Vec<Node>,
    /// Id of the selected node, if any.
    pub selected: Option<String>,
    /// Latest link samples.
    pub links: Vec<LinkSample>,
    /// Live per-node latency.
    pub live: LiveLatencies,
}

#[derive(Debug, Clone, PartialEq)]
struct MarkerDeps {
    nodes: Vec<Node>,
    selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct ConnectionDeps {
    shown: bool,
    links: Vec<LinkSample>,
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
struct RegionDeps {
    shown: bool,
    regions: Vec<CloudRegion>,
}

#[derive(Debug, Clone, PartialEq)]
struct HeatmapDeps {
    shown: bool,
    nodes: Vec<Node>,
    live: LiveLatencies,
}

#[derive(Debug, Clone, Default)]
struct BuiltFrom {
    markers: Option<MarkerDeps>,
    connections: Option<ConnectionDeps>,
    regions: Option<RegionDeps>,
    heatmap: Option<HeatmapDeps>,
}

/// Rebuild the snapshot in `slot` unless `unchanged` accepts it. Returns
/// whether it was rebuilt.
fn refresh<T>(
    slot: &mut Option<T>,
    unchanged: impl FnOnce(&T) -> bool,
    build: impl FnOnce() -> T,
) -> bool {
    if slot.as_ref().is_some_and(unchanged) {
        return false;
    }
    *slot = Some(build());
    true
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The base globe, lights and layer groups, plus the ledger that owns
/// every resource handle they hold.
#[derive(Debug)]
pub struct GlobeScene {
    ledger: ResourceLedger,
    base: BaseGlobe,
    base_handles: Vec<ResourceHandle>,
    lights: Lighting,
    background: [f32; 3],
    layers: [LayerGroup; 5],
    built_from: BuiltFrom,
    rotation: GlobeRotation,
    /// Monotonically increasing; bumped whenever a primitive changes.
    generation: u64,
    torn_down: bool,
}

impl GlobeScene {
    /// Build the base globe for the given options and theme. Layer groups
    /// start empty until the first [`sync`](Self::sync).
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let mut ledger = ResourceLedger::new();
        let base_handles = vec![ledger.allocate(), ledger.allocate()];
        let theme = options.display.theme;
        let base = BaseGlobe::from_options(options, GlobeRotation::default());
        Self {
            ledger,
            base,
            base_handles,
            lights: Lighting::default(),
            background: options.colors.background(theme),
            layers: LayerKind::ALL.map(LayerGroup::new),
            built_from: BuiltFrom::default(),
            rotation: GlobeRotation::default(),
            generation: 0,
            torn_down: false,
        }
    }

    // -- Accessors --

    /// The base globe.
    #[must_use]
    pub fn base(&self) -> &BaseGlobe {
        &self.base
    }

    /// Scene lights.
    #[must_use]
    pub fn lights(&self) -> &Lighting {
        &self.lights
    }

    /// Clear color for the current theme.
    #[must_use]
    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    /// One layer group.
    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &LayerGroup {
        &self.layers[kind as usize]
    }

    /// Every layer group in draw order.
    pub fn layers(&self) -> impl Iterator<Item = &LayerGroup> {
        self.layers.iter()
    }

    /// Resource bookkeeping.
    #[must_use]
    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// Current globe rotation.
    #[must_use]
    pub fn rotation(&self) -> GlobeRotation {
        self.rotation
    }

    /// Bumped on every primitive change.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // -- Mutation --

    /// Apply one rotation to the globe, the wireframe and every group.
    pub fn set_rotation(&mut self, rotation: GlobeRotation) {
        self.rotation = rotation;
        self.base.rotation = rotation;
        for layer in &mut self.layers {
            layer.set_rotation(rotation);
        }
    }

    /// Rebuild the base globe and background from `options`, keeping the
    /// current rotation. Layer groups are untouched.
    pub fn set_base(&mut self, options: &Options) {
        if self.torn_down {
            return;
        }
        self.base = BaseGlobe::from_options(options, self.rotation);
        self.background = options.colors.background(options.display.theme);
        self.generation += 1;
    }

    /// Retint the globe and background. Layer groups are untouched.
    pub fn set_theme(&mut self, theme: Theme, options: &Options) {
        self.base.material.color = options.colors.globe_tint(theme);
        self.background = options.colors.background(theme);
        self.generation += 1;
    }

    /// Forget what every group was built from so the next sync rebuilds
    /// them all. Used after an options change.
    pub fn invalidate(&mut self) {
        self.built_from = BuiltFrom::default();
    }

    /// Rebuild every group whose dependencies changed since its last
    /// build. Returns the groups that were rebuilt.
    pub fn sync(&mut self, state: &SceneState, options: &Options) -> Vec<LayerKind> {
        let mut rebuilt = Vec::new();
        if self.torn_down {
            return rebuilt;
        }
        let display = &options.display;

        let markers_rebuilt = refresh(
            &mut self.built_from.markers,
            |d| d.nodes == state.nodes && d.selected == state.selected,
            || MarkerDeps {
                nodes: state.nodes.clone(),
                selected: state.selected.clone(),
            },
        );
        if markers_rebuilt {
            let prims = builders::markers(
                &state.nodes,
                state.selected.as_deref(),
                &options.geometry,
                &options.colors,
            );
            self.rebuild(LayerKind::Markers, prims);
            rebuilt.push(LayerKind::Markers);
        }

        let shown = display.is_shown(Overlay::Connections);
        let connections_rebuilt = refresh(
            &mut self.built_from.connections,
            |d| d.shown == shown && d.links == state.links && d.nodes == state.nodes,
            || ConnectionDeps {
                shown,
                links: state.links.clone(),
                nodes: state.nodes.clone(),
            },
        );
        if connections_rebuilt {
            let prims = if shown {
                builders::connections(
                    &state.links,
                    &state.nodes,
                    &options.geometry,
                    &options.colors,
                )
            } else {
                Vec::new()
            };
            self.rebuild(LayerKind::Connections, prims);
            rebuilt.push(LayerKind::Connections);
        }

        let shown = display.is_shown(Overlay::Regions);
        let regions_rebuilt = refresh(
            &mut self.built_from.regions,
            |d| d.shown == shown && d.regions == options.regions,
            || RegionDeps {
                shown,
                regions: options.regions.clone(),
            },
        );
        if regions_rebuilt {
            let prims = if shown {
                builders::regions(&options.regions, &options.geometry, &options.colors)
            } else {
                Vec::new()
            };
            self.rebuild(LayerKind::Regions, prims);
            rebuilt.push(LayerKind::Regions);
        }

        let shown = display.is_shown(Overlay::Heatmap);
        let heatmap_rebuilt = refresh(
            &mut self.built_from.heatmap,
            |d| d.shown == shown && d.nodes == state.nodes && d.live == state.live,
            || HeatmapDeps {
                shown,
                nodes: state.nodes.clone(),
                live: state.live.clone(),
            },
        );
        if heatmap_rebuilt {
            let prims = if shown {
                builders::heatmap(
                    &state.nodes,
                    &state.live,
                    &options.geometry,
                    &options.colors,
                )
            } else {
                Vec::new()
            };
            self.rebuild(LayerKind::Heatmap, prims);
            rebuilt.push(LayerKind::Heatmap);
        }

        rebuilt
    }

    fn rebuild(&mut self, kind: LayerKind, prims: Vec<Primitive>) {
        let layer = &mut self.layers[kind as usize];
        layer.replace_all(&mut self.ledger, prims);
        layer.set_rotation(self.rotation);
        self.generation += 1;
    }

    /// Mirror the simulation's particles one-to-one, keyed by id.
    pub fn sync_particles(&mut self, visuals: &[ParticleVisual], options: &Options) {
        if self.torn_down {
            return;
        }
        let desired = builders::particles(visuals, &options.particles);
        if desired.is_empty() && self.layer(LayerKind::Particles).is_empty() {
            return;
        }
        let layer = &mut self.layers[LayerKind::Particles as usize];
        layer.reconcile_keyed(&mut self.ledger, desired);
        layer.set_rotation(self.rotation);
        self.generation += 1;
    }

    /// Nearest marker hit by `ray`, as a node id. Only marker spheres are
    /// considered.
    #[must_use]
    pub fn pick(&self, ray: &Ray) -> Option<&str> {
        let markers = self.layer(LayerKind::Markers);
        let rotation = markers.rotation().quat();
        markers
            .primitives()
            .filter_map(|prim| {
                let id = prim.pick_id.as_deref()?;
                let Shape::Sphere { center, radius } = prim.shape else {
                    return None;
                };
                let t = ray.intersect_sphere(rotation * center, radius)?;
                Some((t, id))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, id)| id)
    }

    /// Release every handle: all layer groups and the base globe.
    /// Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        for layer in &mut self.layers {
            layer.clear(&mut self.ledger);
        }
        for handle in self.base_handles.drain(..) {
            let _ = self.ledger.release(handle);
        }
        self.built_from = BuiltFrom::default();
        self.torn_down = true;
        self.generation += 1;
        log::info!(
            "scene torn down, {} of {} resources released",
            self.ledger.released_total(),
            self.ledger.allocated_total()
        );
    }
}
