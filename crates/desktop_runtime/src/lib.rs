//! Web desktop window manager: session model, layout and stacking rules, and the Leptos shell.

pub mod apps;
pub mod components;
pub mod config;
pub mod drag;
mod effect_executor;
pub mod layout;
pub mod model;
pub mod placement;
pub mod reducer;
mod runtime_context;
pub mod viewport;
pub mod window_manager;
pub mod z_order;

pub use apps::{AppCatalog, ApplicationDefinition, CatalogError, DesktopLink};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DesktopConfig};
pub use drag::{CompactDragPolicy, DragController, DragState};
pub use layout::{LayoutCaps, LayoutEngine};
pub use model::*;
pub use placement::{
    Cascade, Centered, PlacementConfig, PlacementKind, PlacementStrategy, Randomized,
};
pub use reducer::{DesktopAction, PointerTarget, RuntimeEffect};
pub use viewport::ViewportMonitor;
pub use window_manager::{FullScreenTransition, OpenOutcome, PressOutcome, WindowManager};
pub use z_order::ZOrderArbiter;
