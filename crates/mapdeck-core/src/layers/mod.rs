pub mod types;
pub mod events;
pub mod reorder;
pub mod manager;

// Re-export the main types for easy access
pub use types::{
    Credentials, LayerId, LayerItem, LayerStatus, ListKind, ScaleRangeVisibility, SubLayer, SubLayerId,
};
pub use events::{LayerAction, LayerListEvent};
pub use manager::{LayerManager, LayerStatistics};
