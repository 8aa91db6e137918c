use crate::layers::{LayerAction, LayerItem, LayerListEvent};
use crate::ui::strings::WidgetStrings;

fn action_label<'a>(action: LayerAction, strings: &'a WidgetStrings) -> &'a str {
    match action {
        LayerAction::ZoomToLayer => &strings.zoom_to_layer,
        LayerAction::Detach => &strings.detach_layer,
    }
}

/// Per-row settings menu: layer actions plus a transparency slider
pub fn show_settings_menu(
    ui: &mut egui::Ui,
    item: &LayerItem,
    enabled: bool,
    strings: &WidgetStrings,
) -> Option<LayerListEvent> {
    let mut selected = None;

    ui.add_enabled_ui(enabled, |ui| {
        ui.menu_button("⚙", |ui| {
            for action in LayerAction::all() {
                if ui.button(action_label(action, strings)).clicked() {
                    selected = Some(LayerListEvent::MenuAction { action, item: item.id });
                    ui.close();
                }
            }

            ui.separator();
            let mut transparency = item.transparency;
            let slider = egui::Slider::new(&mut transparency, 0.0..=1.0).text(&strings.transparency);
            if ui.add(slider).changed() {
                selected = Some(LayerListEvent::TransparencyChanged {
                    item: item.id,
                    value: transparency,
                });
            }
        });
    });

    selected
}
