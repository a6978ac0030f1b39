//! Interaction engine over a parsed flamegraph.
//!
//! Each [`FlameView`] owns one graph's mutable view state: zoom history,
//! layout boxes, fitted labels, search fills, selection and readout. All
//! behavior runs synchronously inside the host's input events; there are no
//! timers and no background work, so no operation can observe an
//! inconsistent intermediate state.

pub mod keyboard;
pub mod layout;
pub mod search;
pub mod state;
pub mod text;
pub mod zoom;

pub use keyboard::{Key, NAV_DOWN, NAV_LEFT, NAV_RIGHT, NAV_UP};
pub use layout::{ROW_GAP, ROW_HEIGHT, Viewport, relayout};
pub use search::{SEARCH_HIGHLIGHT_FILL, apply_search};
pub use state::{FlameView, NodeView, Readout};
pub use text::fit_label;
pub use zoom::ZoomHistory;
