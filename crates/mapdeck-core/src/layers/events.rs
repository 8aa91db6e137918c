use super::types::{LayerId, ListKind, SubLayerId};

/// Actions offered by the per-row settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerAction {
    ZoomToLayer,
    Detach,
}

impl LayerAction {
    pub fn all() -> [Self; 2] {
        [Self::ZoomToLayer, Self::Detach]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ZoomToLayer => "zoom-to-layer",
            Self::Detach => "detach",
        }
    }
}

/// Intents emitted by the layer list. The list never mutates layer state
/// itself; the owner applies these after the frame.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerListEvent {
    VisibilityToggled(LayerId),
    MenuAction {
        action: LayerAction,
        item: LayerId,
    },
    TransparencyChanged {
        item: LayerId,
        value: f32,
    },
    SubLayerSelectionChanged {
        item: LayerId,
        sub_layer: SubLayerId,
        selected: bool,
    },
    Reordered {
        kind: ListKind,
        order: Vec<LayerId>,
    },
    MovedBetweenLists {
        item: LayerId,
        from: ListKind,
        to: ListKind,
        index: usize,
    },
    EditRequested(LayerId),
    ItemEdited(LayerId),
    Selected(LayerId),
    AttachRequested {
        kind: ListKind,
        name: String,
        source: String,
    },
    /// Show All / Hide All from a list header
    AllVisibilitySet {
        kind: ListKind,
        visible: bool,
    },
}

impl LayerListEvent {
    /// The layer this intent is about, if it targets an existing one
    pub fn item(&self) -> Option<LayerId> {
        match self {
            Self::VisibilityToggled(id)
            | Self::EditRequested(id)
            | Self::ItemEdited(id)
            | Self::Selected(id) => Some(*id),
            Self::MenuAction { item, .. }
            | Self::TransparencyChanged { item, .. }
            | Self::SubLayerSelectionChanged { item, .. }
            | Self::MovedBetweenLists { item, .. } => Some(*item),
            Self::Reordered { .. } | Self::AttachRequested { .. } | Self::AllVisibilitySet { .. } => None,
        }
    }
}
