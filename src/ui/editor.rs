//! The graph editor interaction state machine.
//!
//! Pointer input, already resolved to logical space by the viewport, drives
//! hover, selection and drag against the graph. The state is one tagged
//! enum with a transition method per input kind, so combinations like
//! "dragging without a selection" cannot be represented.

use crate::geometry;
use crate::types::{Graph, Point, PointId};

/// The editor's interaction state.
///
/// `Drag` always carries a selection; dragging starts only by pressing on a
/// hovered point, which selects it first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// Nothing hovered or selected.
    #[default]
    Idle,
    /// The pointer is within hover range of a point.
    Hover {
        /// The point under the pointer.
        hovered: PointId,
    },
    /// A point is selected as the anchor for segment creation.
    Select {
        /// The selected anchor point.
        selected: PointId,
        /// The point under the pointer, if any.
        hovered: Option<PointId>,
    },
    /// The selected point follows the pointer.
    Drag {
        /// The point being dragged.
        selected: PointId,
        /// The point under the pointer, if any.
        hovered: Option<PointId>,
    },
}

/// Interaction state machine mediating between pointer input and graph
/// mutation.
#[derive(Debug, Default)]
pub struct GraphEditor {
    /// The graph being edited.
    pub graph: Graph,
    state: EditorState,
    mouse: Point,
}

impl GraphEditor {
    /// Creates an editor over an empty graph, in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current interaction state.
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Current pointer position in logical space.
    pub fn mouse(&self) -> Point {
        self.mouse
    }

    /// The point currently within hover range, if any.
    pub fn hovered(&self) -> Option<PointId> {
        match self.state {
            EditorState::Idle => None,
            EditorState::Hover { hovered } => Some(hovered),
            EditorState::Select { hovered, .. } | EditorState::Drag { hovered, .. } => hovered,
        }
    }

    /// The selected anchor point, if any.
    pub fn selected(&self) -> Option<PointId> {
        match self.state {
            EditorState::Idle | EditorState::Hover { .. } => None,
            EditorState::Select { selected, .. } | EditorState::Drag { selected, .. } => {
                Some(selected)
            }
        }
    }

    /// Whether a point drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, EditorState::Drag { .. })
    }

    /// Pointer moved to `mouse` (logical). `hover_radius` is the live hover
    /// threshold already scaled by the current zoom.
    ///
    /// Recomputes the hovered point and, while dragging, moves the selected
    /// point to the pointer — every attached segment follows through the id.
    pub fn on_pointer_move(&mut self, mouse: Point, hover_radius: f32) {
        self.mouse = mouse;
        let hovered = geometry::nearest_point(mouse, self.graph.points(), hover_radius);
        self.state = match self.state {
            EditorState::Idle | EditorState::Hover { .. } => match hovered {
                Some(hovered) => EditorState::Hover { hovered },
                None => EditorState::Idle,
            },
            EditorState::Select { selected, .. } => EditorState::Select { selected, hovered },
            EditorState::Drag { selected, .. } => {
                self.graph.set_position(selected, mouse);
                EditorState::Drag { selected, hovered }
            }
        };
    }

    /// Primary button pressed.
    ///
    /// On a hovered point: select it (creating a segment from any previous
    /// selection) and start dragging. On empty canvas: append a new point at
    /// the pointer, select it and treat it as hovered, without dragging.
    pub fn on_primary_down(&mut self) {
        if let Some(hovered) = self.hovered() {
            self.select_point(hovered);
            self.state = EditorState::Drag {
                selected: hovered,
                hovered: Some(hovered),
            };
            return;
        }
        let id = self.graph.add_point(self.mouse);
        self.select_point(id);
        self.state = EditorState::Select {
            selected: id,
            hovered: Some(id),
        };
    }

    /// Secondary button pressed.
    ///
    /// Clears the selection if one exists (deselect only); otherwise removes
    /// the hovered point and its incident segments.
    pub fn on_secondary_down(&mut self) {
        if self.selected().is_some() {
            self.state = match self.hovered() {
                Some(hovered) => EditorState::Hover { hovered },
                None => EditorState::Idle,
            };
        } else if let Some(hovered) = self.hovered() {
            self.graph.remove_point(hovered);
            self.state = EditorState::Idle;
        }
    }

    /// Primary or secondary button released: ends any drag, keeping the
    /// selection.
    pub fn on_button_up(&mut self) {
        if let EditorState::Drag { selected, hovered } = self.state {
            self.state = EditorState::Select { selected, hovered };
        }
    }

    /// Makes `p` the selected point.
    ///
    /// If a point was already selected, first attempts a segment from it to
    /// `p`; a rejection by the graph's invariants is silently ignored.
    pub fn select_point(&mut self, p: PointId) {
        if let Some(prev) = self.selected() {
            self.graph.try_add_segment(prev, p);
        }
        self.state = EditorState::Select {
            selected: p,
            hovered: self.hovered(),
        };
    }

    /// Empties the graph in place and returns to the idle state.
    pub fn dispose(&mut self) {
        self.graph.dispose();
        self.state = EditorState::Idle;
    }

    /// Drops hover/selection/drag without touching the graph.
    pub(crate) fn reset_interaction(&mut self) {
        self.state = EditorState::Idle;
    }
}
