use egui_lens::ReactiveEventLogger;
use serde::{Deserialize, Serialize};

use crate::app::MapDeckApp;
use crate::layers::{LayerListEvent, ListKind};
use crate::ui::attach::{AttachButtonType, AttachLayerPopup};
use crate::ui::droppable::LayerDroppable;
use crate::ui::property_grid::PropertyGrid;

/// Define the tabs for the DockArea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    MapLayers,
    Properties,
    EventLog,
}

/// Tab container struct for DockArea
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub kind: TabKind,
}

impl Tab {
    pub fn new(kind: TabKind) -> Self {
        Self { kind }
    }

    pub fn title(&self) -> String {
        match self.kind {
            TabKind::MapLayers => "Map Layers".to_string(),
            TabKind::Properties => "Properties".to_string(),
            TabKind::EventLog => "Event Log".to_string(),
        }
    }

    pub fn content(&self, ui: &mut egui::Ui, app: &mut MapDeckApp) {
        match self.kind {
            TabKind::MapLayers => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    // Overlays are drawn above the background, so list them first
                    for kind in [ListKind::Overlay, ListKind::Background] {
                        show_layer_section(ui, app, kind);
                        ui.add_space(8.0);
                    }
                });
            }
            TabKind::Properties => {
                let mut show_empty = app.show_empty_property_values;
                PropertyGrid::new(&app.layer_manager, app.selected_layer).show(ui, &mut show_empty);
                app.show_empty_property_values = show_empty;
            }
            TabKind::EventLog => {
                let logger = ReactiveEventLogger::with_colors(&app.logger_state, &app.log_colors);
                logger.show(ui);
            }
        }
    }
}

fn show_layer_section(ui: &mut egui::Ui, app: &mut MapDeckApp, kind: ListKind) {
    ui.horizontal(|ui| {
        ui.strong(kind.display_name());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let popup = AttachLayerPopup::new(kind, AttachButtonType::Plain).enabled(!app.lists_disabled);
            if let Some(request) = popup.show(ui, &app.strings) {
                app.pending_events.push(request);
            }

            let has_layers = !app.layer_manager.list(kind).is_empty();
            ui.add_enabled_ui(has_layers && !app.lists_disabled, |ui| {
                if ui.small_button("Hide All").clicked() {
                    app.pending_events.push(LayerListEvent::AllVisibilitySet { kind, visible: false });
                }
                if ui.small_button("Show All").clicked() {
                    app.pending_events.push(LayerListEvent::AllVisibilitySet { kind, visible: true });
                }
            });
        });
    });

    let events = LayerDroppable::new(kind, app.layer_manager.list(kind), &app.strings)
        .disabled(app.lists_disabled)
        .show(ui);
    app.pending_events.extend(events);
}

pub struct TabViewer<'a> {
    pub app: &'a mut MapDeckApp,
}

impl<'a> egui_dock::TabViewer for TabViewer<'a> {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        tab.content(ui, self.app);
    }
}
