pub mod strings;
pub mod droppable;
pub mod sub_layers;
pub mod settings_menu;
pub mod attach;
pub mod credentials;
pub mod property_grid;
pub mod tabs;

// Re-export the widgets
pub use droppable::{DragPhase, DragSession, LayerDragPayload, LayerDroppable, ListContent, ListView, RowView};
pub use attach::{AttachButtonType, AttachLayerPopup};
pub use credentials::{CredentialsDialog, DialogOutcome};
pub use property_grid::{PropertyGrid, PropertyRow, layer_properties};
pub use strings::{Localization, WidgetStrings};

// Re-export tab-related types
pub use tabs::{Tab, TabKind, TabViewer};
