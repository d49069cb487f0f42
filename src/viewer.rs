//! Standalone globe window backed by winit.
//!
//! The viewer owns a [`GlobeEngine`], a [`GlobeRenderer`] and a
//! [`SyntheticFeed`], and plays the host role: it forwards pointer and key
//! input, records marker clicks as the selection and pushes feed updates
//! into the engine.
//!
//! ```no_run
//! # use netglobe::Viewer;
//! Viewer::builder()
//!     .with_title("Exchange latency")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{cell::RefCell, rc::Rc, sync::Arc};

use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::{Instant, SystemTime, UNIX_EPOCH};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    error::GlobeError,
    feed::{LatencyFeed, SyntheticFeed},
    gpu::GlobeRenderer,
    options::Options,
    topology::{catalog, Node},
    util::frame_timing::FrameTiming,
    GlobeEngine, InputEvent,
};

/// Pointer travel in pixels beyond which a press is a drag, not a click.
const CLICK_SLOP: f32 = 4.0;
/// Wheel line steps are scaled to pixel-like deltas.
const LINE_DELTA_PX: f32 = 100.0;

/// Builder for configuring a [`Viewer`] before launch.
pub struct ViewerBuilder {
    options: Option<Options>,
    nodes: Option<Vec<Node>>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            nodes: None,
            title: "Netglobe".into(),
        }
    }

    /// Set initial display options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Replace the built-in exchange catalog.
    #[must_use]
    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = Some(nodes);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build the viewer.
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            nodes: self.nodes.unwrap_or_else(catalog::default_exchanges),
            title: self.title,
        }
    }
}

/// A standalone globe viewer window.
pub struct Viewer {
    options: Options,
    nodes: Vec<Node>,
    title: String,
}

impl Viewer {
    /// Create a builder for configuring the viewer.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open a window and run the event loop (blocks until closed).
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::Viewer`] if the event loop cannot be created
    /// or exits with an error.
    pub fn run(self) -> Result<(), GlobeError> {
        let event_loop =
            EventLoop::new().map_err(|e| GlobeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            renderer: None,
            feed: SyntheticFeed::new(StdRng::from_rng(&mut rand::rng())),
            started: Instant::now(),
            timing: FrameTiming::default(),
            pointer: Pointer::default(),
            picked: Rc::new(RefCell::new(None)),
            options: Some(self.options),
            nodes: self.nodes,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GlobeError::Viewer(e.to_string()))
    }
}

/// Raw pointer bookkeeping for click detection.
#[derive(Default)]
struct Pointer {
    position: (f32, f32),
    pressed_at: Option<(f32, f32)>,
    travelled: f32,
}

struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<GlobeEngine>,
    renderer: Option<GlobeRenderer>,
    feed: SyntheticFeed<StdRng>,
    started: Instant,
    timing: FrameTiming,
    pointer: Pointer,
    picked: Rc<RefCell<Option<String>>>,
    options: Option<Options>,
    nodes: Vec<Node>,
    title: String,
}

fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

impl ViewerApp {
    fn send(&mut self, event: InputEvent) {
        if let Some(engine) = &mut self.engine {
            let _ = engine.handle_input(event);
        }
        let picked = self.picked.borrow_mut().take();
        if let (Some(id), Some(engine)) = (picked, &mut self.engine) {
            log::info!("selected {id}");
            engine.set_selected(Some(id));
        }
    }

    fn mouse_button(&mut self, pressed: bool) {
        let (x, y) = self.pointer.position;
        if pressed {
            self.pointer.pressed_at = Some((x, y));
            self.pointer.travelled = 0.0;
            self.send(InputEvent::PointerDown { x, y });
            return;
        }
        self.send(InputEvent::PointerUp);
        if self.pointer.pressed_at.take().is_some()
            && self.pointer.travelled <= CLICK_SLOP
        {
            self.send(InputEvent::Click { x, y });
        }
    }

    fn cursor_moved(&mut self, x: f32, y: f32) {
        let (px, py) = self.pointer.position;
        if self.pointer.pressed_at.is_some() {
            self.pointer.travelled += (x - px).hypot(y - py);
        }
        self.pointer.position = (x, y);
        self.send(InputEvent::PointerMove { x, y });
    }

    fn redraw(&mut self) {
        let dt = self.timing.end_frame();
        let (Some(engine), Some(renderer)) =
            (&mut self.engine, &mut self.renderer)
        else {
            return;
        };

        let update = self.feed.poll(
            self.started.elapsed(),
            wall_clock_ms(),
            &engine.state().nodes,
        );
        if let Some(live) = update.live {
            engine.set_live_latencies(live);
        }
        if let Some(links) = update.links {
            engine.set_links(links);
        }

        let _ = engine.tick(dt, renderer);
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let renderer = match pollster::block_on(GlobeRenderer::new(
            window.clone(),
            (vp_w, vp_h),
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        let options = self.options.take().unwrap_or_default();
        let mut engine = GlobeEngine::new(options, vp_w, vp_h);
        let picked = Rc::clone(&self.picked);
        engine.on_select(move |id| {
            *picked.borrow_mut() = Some(id.to_owned());
        });
        engine.set_nodes(std::mem::take(&mut self.nodes));
        engine.mount();

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.engine = Some(engine);
        self.timing = FrameTiming::default();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            if let Some(engine) = &mut self.engine {
                engine.teardown();
            }
            event_loop.exit();
            return;
        }

        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(vp_w, vp_h);
                }
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                self.mouse_button(state == ElementState::Pressed);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports scroll-up as positive; deltaY grows downward.
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_DELTA_PX,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                self.send(InputEvent::Wheel { delta_y });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if let Some(engine) = &mut self.engine {
                    if !engine.handle_key_press(&key_str) {
                        log::trace!("unbound key {key_str}");
                    }
                }
            }

            _ => (),
        }
    }
}
