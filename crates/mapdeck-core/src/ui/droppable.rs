//! Orderable layer list hosted in a drop region.
//!
//! The list renders one draggable row per layer, or an empty-state hint,
//! and reports everything the user does as [`LayerListEvent`]s. Layer state
//! is never touched here; the owner applies the events after the frame.

use egui::{Color32, CursorIcon, Id, RichText, Sense, Stroke, Ui};

use crate::layers::reorder::{insertion_index, insertion_to_target, move_item};
use crate::layers::{LayerId, LayerItem, LayerListEvent, ListKind};
use crate::ui::attach::{AttachButtonType, AttachLayerPopup};
use crate::ui::settings_menu::show_settings_menu;
use crate::ui::strings::WidgetStrings;
use crate::ui::sub_layers::show_sub_layers_popup;

/// What travels with a row while it is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerDragPayload {
    pub item: LayerId,
    pub source: ListKind,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging { item: LayerId, source: ListKind },
}

impl DragPhase {
    pub fn from_payload(payload: Option<&LayerDragPayload>) -> Self {
        match payload {
            Some(payload) => Self::Dragging {
                item: payload.item,
                source: payload.source,
            },
            None => Self::Idle,
        }
    }
}

/// Drop handling for one list
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    kind: ListKind,
    disabled: bool,
}

impl DragSession {
    pub fn new(kind: ListKind, disabled: bool) -> Self {
        Self { kind, disabled }
    }

    pub fn can_pick_up(&self) -> bool {
        !self.disabled
    }

    /// Turn a drop at insertion slot `insertion` (0..=len, measured on
    /// `items` as displayed) into an intent.
    pub fn release(
        &self,
        payload: &LayerDragPayload,
        insertion: usize,
        items: &[LayerItem],
    ) -> Option<LayerListEvent> {
        if self.disabled {
            return None;
        }
        let insertion = insertion.min(items.len());

        if payload.source != self.kind {
            return Some(LayerListEvent::MovedBetweenLists {
                item: payload.item,
                from: payload.source,
                to: self.kind,
                index: insertion,
            });
        }

        let in_list = items
            .get(payload.index)
            .is_some_and(|item| item.id == payload.item);
        debug_assert!(in_list, "dragged layer {:?} is not in {}", payload, self.kind);
        if !in_list {
            log::warn!("Ignoring drop of {} which is not in {}", payload.item, self.kind);
            return None;
        }

        let target = insertion_to_target(payload.index, insertion);
        if target == payload.index {
            return None;
        }
        let ids: Vec<LayerId> = items.iter().map(|item| item.id).collect();
        Some(LayerListEvent::Reordered {
            kind: self.kind,
            order: move_item(&ids, payload.index, target),
        })
    }
}

/// Display description of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: LayerId,
    pub index: usize,
    pub name: String,
    pub visible: bool,
    pub label_dimmed: bool,
    pub tooltip: Option<String>,
    pub show_sub_layers: bool,
    pub show_auth_warning: bool,
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    Rows(Vec<RowView>),
    Empty { label: String, show_attach: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub kind: ListKind,
    pub content: ListContent,
    /// Drag currently hovering a non-empty list
    pub highlight: bool,
}

/// Chooses the paint layer of the row clone that follows the pointer
pub type CloneContainer<'a> = Box<dyn Fn(Id) -> egui::LayerId + 'a>;

pub struct LayerDroppable<'a> {
    kind: ListKind,
    items: &'a [LayerItem],
    disabled: bool,
    strings: &'a WidgetStrings,
    clone_container: CloneContainer<'a>,
}

impl<'a> LayerDroppable<'a> {
    pub fn new(kind: ListKind, items: &'a [LayerItem], strings: &'a WidgetStrings) -> Self {
        Self {
            kind,
            items,
            disabled: false,
            strings,
            clone_container: Box::new(|id| egui::LayerId::new(egui::Order::Tooltip, id)),
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn clone_container(mut self, container: impl Fn(Id) -> egui::LayerId + 'a) -> Self {
        self.clone_container = Box::new(container);
        self
    }

    pub fn session(&self) -> DragSession {
        DragSession::new(self.kind, self.disabled)
    }

    pub fn row_view(&self, item: &LayerItem, index: usize) -> RowView {
        let out_of_range = item.out_of_scale_range();
        RowView {
            id: item.id,
            index,
            name: item.name.clone(),
            visible: item.visible,
            label_dimmed: self.disabled || out_of_range,
            tooltip: out_of_range.then(|| self.strings.out_of_range_title.clone()),
            show_sub_layers: item.has_selectable_sub_layers(),
            show_auth_warning: item.requires_auth(),
            interactive: !self.disabled,
        }
    }

    pub fn view(&self, dragging_over: bool) -> ListView {
        // A locked list does not advertise itself as a drop target
        let dragging_over = dragging_over && !self.disabled;
        if self.items.is_empty() {
            let label = if dragging_over {
                self.strings.drop_layer_label.clone()
            } else {
                self.empty_hint().to_string()
            };
            return ListView {
                kind: self.kind,
                content: ListContent::Empty {
                    label,
                    show_attach: !dragging_over,
                },
                highlight: false,
            };
        }

        ListView {
            kind: self.kind,
            content: ListContent::Rows(
                self.items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| self.row_view(item, index))
                    .collect(),
            ),
            highlight: dragging_over,
        }
    }

    fn empty_hint(&self) -> &str {
        match self.kind {
            ListKind::Background => &self.strings.no_background_layers,
            ListKind::Overlay => &self.strings.no_overlay_layers,
        }
    }

    /// Render the list and return the intents produced this frame
    pub fn show(self, ui: &mut Ui) -> Vec<LayerListEvent> {
        let ctx = ui.ctx().clone();
        let zone_id = ui.id().with(self.kind.droppable_id());
        let session = self.session();

        let payload = egui::DragAndDrop::payload::<LayerDragPayload>(&ctx);
        let phase = DragPhase::from_payload(payload.as_deref());
        let last_zone: Option<egui::Rect> = ctx.memory(|mem| mem.data.get_temp(zone_id));
        // The pointer sits on the clone layer while dragging, so test geometry only
        let dragging_over = phase != DragPhase::Idle
            && last_zone
                .zip(ctx.pointer_hover_pos())
                .is_some_and(|(rect, pointer)| rect.contains(pointer));

        let view = self.view(dragging_over);
        let mut events = Vec::new();
        let mut row_centers = Vec::new();

        let mut frame = egui::Frame::group(ui.style());
        if view.highlight {
            frame = frame
                .fill(ui.visuals().selection.bg_fill.gamma_multiply(0.25))
                .stroke(ui.visuals().selection.stroke);
        }

        let zone = frame.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            match &view.content {
                ListContent::Rows(rows) => {
                    for row in rows {
                        let item = &self.items[row.index];
                        let rect = self.show_row(ui, zone_id.with(row.id), row, item, &mut events);
                        row_centers.push(rect.center().y);
                    }
                }
                ListContent::Empty { label, show_attach } => {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(label).weak())
                            .on_hover_text(self.empty_hint());
                        if *show_attach {
                            let popup = AttachLayerPopup::new(self.kind, AttachButtonType::Primary)
                                .enabled(!self.disabled);
                            if let Some(request) = popup.show(ui, self.strings) {
                                events.push(request);
                            }
                        }
                    });
                }
            }
        });
        ctx.memory_mut(|mem| mem.data.insert_temp(zone_id, zone.response.rect));

        if !dragging_over {
            return events;
        }
        let Some(pointer) = ctx.pointer_hover_pos() else {
            return events;
        };
        let insertion = insertion_index(&row_centers, pointer.y);

        // Insertion marker between rows
        if view.highlight && session.can_pick_up() {
            let rect = zone.response.rect;
            let y = if insertion == 0 {
                rect.top() + 2.0
            } else if insertion >= row_centers.len() {
                rect.bottom() - 2.0
            } else {
                (row_centers[insertion - 1] + row_centers[insertion]) / 2.0
            };
            ui.painter()
                .hline(rect.x_range(), y, Stroke::new(2.0, ui.visuals().selection.stroke.color));
        }

        if ui.input(|i| i.pointer.any_released()) {
            if let Some(payload) = egui::DragAndDrop::take_payload::<LayerDragPayload>(&ctx) {
                if let Some(event) = session.release(&payload, insertion, self.items) {
                    log::debug!("Drop on {}: {:?}", self.kind, event);
                    events.push(event);
                }
            }
        }
        events
    }

    /// A row either sits in the list, or follows the pointer on the clone
    /// layer while it is being dragged.
    fn show_row(
        &self,
        ui: &mut Ui,
        row_id: Id,
        row: &RowView,
        item: &LayerItem,
        events: &mut Vec<LayerListEvent>,
    ) -> egui::Rect {
        let can_drag = row.interactive && self.session().can_pick_up();
        if can_drag && ui.ctx().is_being_dragged(row_id) {
            egui::DragAndDrop::set_payload(
                ui.ctx(),
                LayerDragPayload {
                    item: row.id,
                    source: self.kind,
                    index: row.index,
                },
            );

            let layer_id = (self.clone_container)(row_id);
            let mut ignored = Vec::new();
            let response = ui
                .scope_builder(egui::UiBuilder::new().layer_id(layer_id), |ui| {
                    self.row_contents(ui, None, row, item, &mut ignored)
                })
                .response;
            if let Some(pointer) = ui.ctx().pointer_interact_pos() {
                let delta = pointer - response.rect.center();
                ui.ctx()
                    .transform_layer_shapes(layer_id, egui::emath::TSTransform::from_translation(delta));
            }
            response.rect
        } else {
            let handle = can_drag.then_some(row_id);
            ui.scope(|ui| self.row_contents(ui, handle, row, item, events))
                .response
                .rect
        }
    }

    fn row_contents(
        &self,
        ui: &mut Ui,
        handle: Option<Id>,
        row: &RowView,
        item: &LayerItem,
        events: &mut Vec<LayerListEvent>,
    ) {
        let strings = self.strings;
        ui.horizontal(|ui| {
            let icon = if row.visible { "👁" } else { "◌" };
            let toggle = ui
                .add_enabled(row.interactive, egui::Button::new(icon).frame(false))
                .on_hover_text(&strings.toggle_visibility);
            if toggle.clicked() {
                events.push(LayerListEvent::VisibilityToggled(row.id));
            }

            let mut text = RichText::new(&row.name);
            if row.label_dimmed {
                text = text.weak();
            }
            let mut label = ui.add(egui::Label::new(text).selectable(false));
            if let Some(tooltip) = &row.tooltip {
                label = label.on_hover_text(tooltip);
            }
            // The label doubles as the drag handle
            if let Some(handle) = handle {
                let grip = ui
                    .interact(label.rect, handle, Sense::click_and_drag())
                    .on_hover_cursor(CursorIcon::Grab);
                if grip.clicked() {
                    events.push(LayerListEvent::Selected(row.id));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(event) = show_settings_menu(ui, item, row.interactive, strings) {
                    events.push(event);
                }

                if row.show_auth_warning {
                    let warning = ui
                        .add_enabled(
                            row.interactive,
                            egui::Button::new(RichText::new("⚠").color(Color32::from_rgb(230, 160, 0)))
                                .frame(false),
                        )
                        .on_hover_text(&strings.require_auth_tooltip);
                    if warning.clicked() {
                        events.push(LayerListEvent::EditRequested(row.id));
                    }
                }

                if row.show_sub_layers {
                    events.extend(show_sub_layers_popup(ui, item, strings));
                }
            });
        });
    }
}
