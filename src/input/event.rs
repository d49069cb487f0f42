/// Platform-agnostic pointer events.
///
/// These are fed into an
/// [`InteractionController`](super::InteractionController) which converts
/// them into [`GlobeCommand`](crate::GlobeCommand) values. Positions are in
/// physical pixels relative to the viewport's top-left corner.
///
/// `Click` is a separate event from `PointerUp`; the host decides which
/// releases count as clicks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Pointer moved to an absolute position.
    PointerMove {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Primary button released, or the pointer left the viewport.
    PointerUp,
    /// Scroll wheel, in DOM `deltaY` units (positive zooms out).
    Wheel {
        /// Vertical scroll amount.
        delta_y: f32,
    },
    /// Primary-button click.
    Click {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
}
