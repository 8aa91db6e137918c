use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of an attached layer, independent of its display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubLayerId(pub u32);

impl fmt::Display for SubLayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two layer stacks shown in the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    Background,
    Overlay,
}

impl ListKind {
    pub fn all() -> [Self; 2] {
        [Self::Background, Self::Overlay]
    }

    /// Identifier of the drop region hosting this list
    pub fn droppable_id(&self) -> &'static str {
        match self {
            Self::Background => "backgroundMapLayers",
            Self::Overlay => "overlayMapLayers",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Background => "Background Layers",
            Self::Overlay => "Overlay Layers",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Provider status as reported by the imagery source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayerStatus {
    #[default]
    Valid,
    RequiresAuth,
}

/// Whether the tile tree is displayable at the current view scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleRangeVisibility {
    #[default]
    Unknown,
    Visible,
    Partial,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubLayer {
    pub id: SubLayerId,
    pub name: String,
    pub visible: bool,
    #[serde(default)]
    pub parent: Option<SubLayerId>,
}

impl SubLayer {
    pub fn new(id: u32, name: impl Into<String>, visible: bool) -> Self {
        Self {
            id: SubLayerId(id),
            name: name.into(),
            visible,
            parent: None,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of debug logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// A layer as shown in one of the two lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerItem {
    pub id: LayerId,
    pub name: String,
    pub source: String,
    pub visible: bool,
    #[serde(default)]
    pub sub_layers: Vec<SubLayer>,
    #[serde(default)]
    pub mutually_exclusive_sub_layers: bool,
    #[serde(default)]
    pub status: LayerStatus,
    #[serde(default)]
    pub scale_range: ScaleRangeVisibility,
    #[serde(default)]
    pub transparency: f32,
    #[serde(skip)]
    pub credentials: Option<Credentials>,
}

impl LayerItem {
    pub fn new(id: LayerId, name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            source: source.into(),
            visible: true,
            sub_layers: Vec::new(),
            mutually_exclusive_sub_layers: false,
            status: LayerStatus::Valid,
            scale_range: ScaleRangeVisibility::Unknown,
            transparency: 0.0,
            credentials: None,
        }
    }

    pub fn with_sub_layers(mut self, sub_layers: Vec<SubLayer>, mutually_exclusive: bool) -> Self {
        self.sub_layers = sub_layers;
        self.mutually_exclusive_sub_layers = mutually_exclusive;
        self
    }

    pub fn with_status(mut self, status: LayerStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_scale_range(mut self, scale_range: ScaleRangeVisibility) -> Self {
        self.scale_range = scale_range;
        self
    }

    pub fn out_of_scale_range(&self) -> bool {
        self.scale_range == ScaleRangeVisibility::Hidden
    }

    pub fn requires_auth(&self) -> bool {
        self.status == LayerStatus::RequiresAuth
    }

    /// The sub-layer popup only makes sense with a choice to make
    pub fn has_selectable_sub_layers(&self) -> bool {
        self.sub_layers.len() > 1
    }

    pub fn sub_layer(&self, id: SubLayerId) -> Option<&SubLayer> {
        self.sub_layers.iter().find(|s| s.id == id)
    }
}
