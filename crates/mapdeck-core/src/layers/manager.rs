use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::LayerError;
use super::events::{LayerAction, LayerListEvent};
use super::types::{Credentials, LayerId, LayerItem, LayerStatus, ListKind, SubLayerId};

pub type Result<T> = std::result::Result<T, LayerError>;

/// Owner of the background and overlay layer stacks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerManager {
    /// Bottom-most layer first
    background: Vec<LayerItem>,
    overlay: Vec<LayerItem>,
    next_id: u64,
}

impl LayerManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, kind: ListKind) -> &[LayerItem] {
        match kind {
            ListKind::Background => &self.background,
            ListKind::Overlay => &self.overlay,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut Vec<LayerItem> {
        match kind {
            ListKind::Background => &mut self.background,
            ListKind::Overlay => &mut self.overlay,
        }
    }

    pub fn kind_of(&self, id: LayerId) -> Option<ListKind> {
        ListKind::all()
            .into_iter()
            .find(|kind| self.list(*kind).iter().any(|item| item.id == id))
    }

    pub fn get(&self, id: LayerId) -> Option<&LayerItem> {
        self.background
            .iter()
            .chain(self.overlay.iter())
            .find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut LayerItem> {
        self.background
            .iter_mut()
            .chain(self.overlay.iter_mut())
            .find(|item| item.id == id)
    }

    fn get_mut_or_err(&mut self, id: LayerId) -> Result<&mut LayerItem> {
        self.get_mut(id).ok_or(LayerError::UnknownLayer(id))
    }

    /// Order of a layer within its stack, 0 being the bottom-most
    pub fn position_of(&self, id: LayerId) -> Option<(ListKind, usize)> {
        let kind = self.kind_of(id)?;
        let index = self.list(kind).iter().position(|item| item.id == id)?;
        Some((kind, index))
    }

    /// Position of a layer in its list, looked up by what the display style knows about it
    pub fn find_index_by_name_and_source(&self, kind: ListKind, name: &str, source: &str) -> Option<usize> {
        self.list(kind)
            .iter()
            .position(|item| item.name == name && item.source == source)
    }

    pub fn contains_name(&self, kind: ListKind, name: &str) -> bool {
        self.list(kind).iter().any(|item| item.name == name)
    }

    /// Attach a new layer on top of the given stack
    pub fn attach(&mut self, kind: ListKind, name: &str, source: &str) -> Result<LayerId> {
        self.attach_item(kind, LayerItem::new(LayerId(0), name, source))
    }

    /// Attach a prepared item. The item's id is replaced with a fresh one.
    pub fn attach_item(&mut self, kind: ListKind, mut item: LayerItem) -> Result<LayerId> {
        if self.contains_name(kind, &item.name) {
            return Err(LayerError::DuplicateName { kind, name: item.name });
        }
        let id = self.allocate_id();
        item.id = id;
        log::info!("Attached '{}' ({}) to {}", item.name, item.source, kind);
        self.list_mut(kind).push(item);
        Ok(id)
    }

    fn allocate_id(&mut self) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn detach(&mut self, id: LayerId) -> Result<LayerItem> {
        let kind = self.kind_of(id).ok_or(LayerError::UnknownLayer(id))?;
        let list = self.list_mut(kind);
        let index = list
            .iter()
            .position(|item| item.id == id)
            .ok_or(LayerError::UnknownLayer(id))?;
        let item = list.remove(index);
        log::info!("Detached '{}' from {}", item.name, kind);
        Ok(item)
    }

    pub fn toggle_visibility(&mut self, id: LayerId) -> Result<bool> {
        let item = self.get_mut_or_err(id)?;
        item.visible = !item.visible;
        Ok(item.visible)
    }

    pub fn show_all(&mut self, kind: ListKind) {
        for item in self.list_mut(kind) {
            item.visible = true;
        }
    }

    pub fn hide_all(&mut self, kind: ListKind) {
        for item in self.list_mut(kind) {
            item.visible = false;
        }
    }

    pub fn set_transparency(&mut self, id: LayerId, value: f32) -> Result<()> {
        self.get_mut_or_err(id)?.transparency = value.clamp(0.0, 1.0);
        Ok(())
    }

    /// Replace the order of a stack. `order` must be a permutation of its ids.
    pub fn apply_order(&mut self, kind: ListKind, order: &[LayerId]) -> Result<()> {
        let list = self.list_mut(kind);
        let current: HashSet<LayerId> = list.iter().map(|item| item.id).collect();
        let requested: HashSet<LayerId> = order.iter().copied().collect();
        if order.len() != list.len() || current != requested {
            return Err(LayerError::OrderMismatch { kind });
        }

        let mut reordered = Vec::with_capacity(list.len());
        for id in order {
            if let Some(index) = list.iter().position(|item| item.id == *id) {
                reordered.push(list.swap_remove(index));
            }
        }
        *list = reordered;
        Ok(())
    }

    /// Move a layer into another stack at `index` (clamped)
    pub fn move_between(&mut self, id: LayerId, to: ListKind, index: usize) -> Result<()> {
        let from = self.kind_of(id).ok_or(LayerError::UnknownLayer(id))?;
        if from == to {
            let mut order: Vec<LayerId> = self.list(to).iter().map(|item| item.id).collect();
            if let Some(position) = order.iter().position(|other| *other == id) {
                order = super::reorder::move_item(&order, position, index);
            }
            return self.apply_order(to, &order);
        }

        let name = self.get(id).map(|item| item.name.clone()).unwrap_or_default();
        if self.contains_name(to, &name) {
            return Err(LayerError::DuplicateName { kind: to, name });
        }
        let item = self.detach(id)?;
        let target = self.list_mut(to);
        let index = index.min(target.len());
        target.insert(index, item);
        Ok(())
    }

    /// Change one sub-layer's visibility. On mutually exclusive layers,
    /// selecting a sub-layer deselects its siblings.
    pub fn set_sub_layer_visibility(&mut self, id: LayerId, sub_layer: SubLayerId, selected: bool) -> Result<()> {
        let item = self.get_mut_or_err(id)?;
        if item.sub_layer(sub_layer).is_none() {
            return Err(LayerError::UnknownSubLayer { layer: id, sub_layer });
        }
        let exclusive = item.mutually_exclusive_sub_layers;
        for sub in item.sub_layers.iter_mut() {
            if sub.id == sub_layer {
                sub.visible = selected;
            } else if exclusive && selected {
                sub.visible = false;
            }
        }
        Ok(())
    }

    pub fn apply_credentials(&mut self, id: LayerId, credentials: Credentials) -> Result<()> {
        if credentials.user.trim().is_empty() {
            return Err(LayerError::InvalidCredentials("user name is empty".to_string()));
        }
        if credentials.password.is_empty() {
            return Err(LayerError::InvalidCredentials("password is empty".to_string()));
        }
        let item = self.get_mut_or_err(id)?;
        item.credentials = Some(credentials);
        item.status = LayerStatus::Valid;
        Ok(())
    }

    /// Apply an intent emitted by a layer list. Returns the id the intent
    /// was about. Intents that are pure UI requests (zoom, edit, select)
    /// only validate the target.
    pub fn apply(&mut self, event: &LayerListEvent) -> Result<Option<LayerId>> {
        log::debug!("Applying {:?}", event);
        match event {
            LayerListEvent::VisibilityToggled(id) => {
                self.toggle_visibility(*id)?;
            }
            LayerListEvent::MenuAction { action: LayerAction::Detach, item } => {
                self.detach(*item)?;
            }
            LayerListEvent::TransparencyChanged { item, value } => {
                self.set_transparency(*item, *value)?;
            }
            LayerListEvent::SubLayerSelectionChanged { item, sub_layer, selected } => {
                self.set_sub_layer_visibility(*item, *sub_layer, *selected)?;
            }
            LayerListEvent::Reordered { kind, order } => {
                self.apply_order(*kind, order)?;
            }
            LayerListEvent::MovedBetweenLists { item, to, index, .. } => {
                self.move_between(*item, *to, *index)?;
            }
            LayerListEvent::AttachRequested { kind, name, source } => {
                return self.attach(*kind, name, source).map(Some);
            }
            LayerListEvent::AllVisibilitySet { kind, visible: true } => self.show_all(*kind),
            LayerListEvent::AllVisibilitySet { kind, visible: false } => self.hide_all(*kind),
            LayerListEvent::MenuAction { action: LayerAction::ZoomToLayer, item }
            | LayerListEvent::EditRequested(item)
            | LayerListEvent::ItemEdited(item)
            | LayerListEvent::Selected(item) => {
                if self.get(*item).is_none() {
                    return Err(LayerError::UnknownLayer(*item));
                }
            }
        }
        Ok(event.item())
    }

    pub fn layer_count(&self) -> usize {
        self.background.len() + self.overlay.len()
    }

    pub fn get_statistics(&self) -> LayerStatistics {
        let all = || self.background.iter().chain(self.overlay.iter());
        LayerStatistics {
            background_layers: self.background.len(),
            overlay_layers: self.overlay.len(),
            visible_layers: all().filter(|item| item.visible).count(),
            requiring_auth: all().filter(|item| item.requires_auth()).count(),
        }
    }
}

/// Statistics about the layer manager state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStatistics {
    pub background_layers: usize,
    pub overlay_layers: usize,
    pub visible_layers: usize,
    pub requiring_auth: usize,
}
