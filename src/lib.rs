// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D latency globe.
//!
//! Netglobe renders exchange nodes on a sphere together with latency arcs,
//! cloud-region overlays, a latency heatmap and animated data-flow
//! particles. The core is headless: it owns the scene, the camera, the
//! interaction state machine and the particle simulation, and hands a
//! flat [`render::DrawList`] to a [`render::FrameSink`] once per frame.
//!
//! # Key entry points
//!
//! - [`engine::GlobeEngine`] - owns all per-frame state and drives the loop
//! - [`scene::GlobeScene`] - base globe plus the five layer groups
//! - [`options::Options`] - runtime configuration (camera, geometry, colors,
//!   particles, display toggles, key bindings)
//! - [`geo`] - lat/lng projection and bulged arc interpolation
//!
//! # Architecture
//!
//! Everything runs on one thread. Host state (nodes, selection, link
//! samples, live latencies, toggles) flows into the engine through setters;
//! each setter re-syncs the layer groups whose dependencies changed. Every
//! [`tick`](engine::GlobeEngine::tick) applies auto-rotation, advances the
//! particle simulation, propagates rotation to every layer and issues one
//! draw. Pointer input goes through [`input::InteractionController`], which
//! turns raw events into [`engine::GlobeCommand`]s.
//!
//! With the `gpu` feature, `gpu::GlobeRenderer` draws the list with wgpu;
//! the `viewer` feature adds a winit window around the engine.

pub mod camera;
pub mod engine;
pub mod error;
pub mod feed;
pub mod geo;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod simulation;
pub mod topology;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{GlobeCommand, GlobeEngine};
pub use error::GlobeError;
pub use input::{InputEvent, KeyAction};
pub use options::Options;
pub use topology::{LinkSample, LiveLatencies, Node, Provider};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
