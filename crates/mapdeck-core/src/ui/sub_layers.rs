use crate::layers::{LayerItem, LayerListEvent};
use crate::ui::strings::WidgetStrings;

/// Popup listing the sub-layers of a layer.
///
/// Mutually exclusive layers get radio buttons, everything else a checkbox
/// per sub-layer. Returns the selection changes made this frame.
pub fn show_sub_layers_popup(ui: &mut egui::Ui, item: &LayerItem, strings: &WidgetStrings) -> Vec<LayerListEvent> {
    let mut events = Vec::new();

    ui.menu_button("☰", |ui| {
        ui.label(egui::RichText::new(&strings.sub_layers).strong());
        ui.separator();

        for sub_layer in &item.sub_layers {
            // Children are indented under their group
            let depth = if sub_layer.parent.is_some() { 1.0 } else { 0.0 };
            ui.horizontal(|ui| {
                ui.add_space(depth * 12.0);
                if item.mutually_exclusive_sub_layers {
                    if ui.radio(sub_layer.visible, &sub_layer.name).clicked() && !sub_layer.visible {
                        events.push(LayerListEvent::SubLayerSelectionChanged {
                            item: item.id,
                            sub_layer: sub_layer.id,
                            selected: true,
                        });
                    }
                } else {
                    let mut visible = sub_layer.visible;
                    if ui.checkbox(&mut visible, &sub_layer.name).changed() {
                        events.push(LayerListEvent::SubLayerSelectionChanged {
                            item: item.id,
                            sub_layer: sub_layer.id,
                            selected: visible,
                        });
                    }
                }
            });
        }
    })
    .response
    .on_hover_text(&strings.sub_layers);

    events
}
