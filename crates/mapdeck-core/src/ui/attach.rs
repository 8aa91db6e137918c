use egui::{Color32, RichText};

use crate::layers::{LayerListEvent, ListKind};
use crate::ui::strings::WidgetStrings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachButtonType {
    /// Filled call-to-action, used by the empty-state hint
    Primary,
    Plain,
}

/// Entry form state kept in egui memory between frames
#[derive(Debug, Clone, Default)]
struct AttachDraft {
    open: bool,
    name: String,
    source: String,
}

impl AttachDraft {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.source.trim().is_empty()
    }
}

pub struct AttachLayerPopup {
    kind: ListKind,
    button_type: AttachButtonType,
    enabled: bool,
}

impl AttachLayerPopup {
    pub fn new(kind: ListKind, button_type: AttachButtonType) -> Self {
        Self {
            kind,
            button_type,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Button plus entry window. Returns an attach request once the user confirms.
    pub fn show(self, ui: &mut egui::Ui, strings: &WidgetStrings) -> Option<LayerListEvent> {
        let draft_id = egui::Id::new(("attach_layer", self.kind.droppable_id(), self.button_type));
        let mut draft: AttachDraft = ui
            .ctx()
            .memory(|mem| mem.data.get_temp(draft_id))
            .unwrap_or_default();

        let button = match self.button_type {
            AttachButtonType::Primary => egui::Button::new(RichText::new(&strings.attach_layer).color(Color32::WHITE))
                .fill(Color32::from_rgb(0, 113, 184)),
            AttachButtonType::Plain => egui::Button::new(format!("➕ {}", strings.attach_layer)),
        };
        if ui.add_enabled(self.enabled, button).clicked() {
            draft.open = !draft.open;
        }

        let mut request = None;
        if draft.open {
            let mut close = false;
            egui::Window::new(format!("{} ({})", strings.attach_layer, self.kind))
                .id(draft_id.with("window"))
                .collapsible(false)
                .resizable(false)
                .show(ui.ctx(), |ui| {
                    egui::Grid::new(draft_id.with("form")).num_columns(2).show(ui, |ui| {
                        ui.label(&strings.layer_name);
                        ui.text_edit_singleline(&mut draft.name);
                        ui.end_row();
                        ui.label(&strings.layer_source);
                        ui.text_edit_singleline(&mut draft.source);
                        ui.end_row();
                    });

                    ui.horizontal(|ui| {
                        if ui.add_enabled(draft.is_complete(), egui::Button::new(&strings.ok)).clicked() {
                            request = Some(LayerListEvent::AttachRequested {
                                kind: self.kind,
                                name: draft.name.trim().to_string(),
                                source: draft.source.trim().to_string(),
                            });
                            close = true;
                        }
                        if ui.button(&strings.cancel).clicked() {
                            close = true;
                        }
                    });
                });
            if close {
                draft = AttachDraft::default();
            }
        }

        ui.ctx().memory_mut(|mem| mem.data.insert_temp(draft_id, draft));
        request
    }
}
