//! Pointer-drag state machine for moving windows by their title bar.

use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};

use crate::model::{DeviceClass, Position};

/// Whether windows may be dragged while the viewport is in the compact device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompactDragPolicy {
    /// Title-bar presses on compact viewports focus the window but never start a drag.
    Disabled,
    /// Dragging works everywhere and is clamped to the viewport like on regular viewports.
    #[default]
    Clamped,
}

impl CompactDragPolicy {
    pub fn permits(self, device_class: DeviceClass) -> bool {
        match (self, device_class) {
            (_, DeviceClass::Regular) => true,
            (Self::Clamped, DeviceClass::Compact) => true,
            (Self::Disabled, DeviceClass::Compact) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        window_id: ApplicationId,
        pointer_offset: Position,
    },
}

/// At most one drag exists at a time because the whole state is one owned enum value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn dragged_window(&self) -> Option<&ApplicationId> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { window_id, .. } => Some(window_id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// `idle -> dragging`. The offset keeps the grabbed point under the pointer.
    pub fn begin(&mut self, window_id: ApplicationId, pointer: Position, window_origin: Position) {
        self.state = DragState::Dragging {
            window_id,
            pointer_offset: pointer.offset_from(window_origin),
        };
    }

    /// Target top-left for the dragged window, or `None` while idle.
    pub fn target_for(&self, pointer: Position) -> Option<(ApplicationId, Position)> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging {
                window_id,
                pointer_offset,
            } => Some((window_id.clone(), pointer.offset_from(*pointer_offset))),
        }
    }

    /// `dragging -> idle`, returning the window that was being dragged.
    pub fn release(&mut self) -> Option<ApplicationId> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging { window_id, .. } => Some(window_id),
        }
    }

    /// Drops the drag if it targets `window_id`.
    pub fn cancel_for(&mut self, window_id: &ApplicationId) -> bool {
        if self.dragged_window() == Some(window_id) {
            self.state = DragState::Idle;
            true
        } else {
            false
        }
    }
}
