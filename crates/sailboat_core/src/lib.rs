//! Sailboat core: display elements, the viewport renderer and the pure
//! interaction state machine.
mod effect;
mod element;
mod msg;
mod state;
mod update;
mod view_model;
mod viewport;

pub use effect::Effect;
pub use element::{body, DisplayElement, ElementSequence, EMPTY_PAGE, LINE_BREAK};
pub use msg::{Command, Msg};
pub use state::{AppState, Mode};
pub use update::update;
pub use view_model::AppView;
pub use viewport::{
    RenderOverflow, ScrollDirection, ScrollState, StyleClass, Stroke, Surface, Viewport,
    ERROR_HEADING, IMAGE_MARKER,
};
