use crate::layers::{LayerItem, LayerManager, LayerStatus, ScaleRangeVisibility};

/// One label/value row of the property grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub label: &'static str,
    pub value: String,
}

impl PropertyRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

pub fn layer_properties(item: &LayerItem, show_empty_values: bool) -> Vec<PropertyRow> {
    let visible_sub_layers: Vec<&str> = item
        .sub_layers
        .iter()
        .filter(|sub| sub.visible)
        .map(|sub| sub.name.as_str())
        .collect();

    let rows = vec![
        PropertyRow::new("Name", item.name.as_str()),
        PropertyRow::new("Source", item.source.as_str()),
        PropertyRow::new("Visible", if item.visible { "Yes" } else { "No" }),
        PropertyRow::new("Transparency", format!("{:.0}%", item.transparency * 100.0)),
        PropertyRow::new(
            "Status",
            match item.status {
                LayerStatus::Valid => "Valid",
                LayerStatus::RequiresAuth => "Requires authentication",
            },
        ),
        PropertyRow::new(
            "Scale range",
            match item.scale_range {
                ScaleRangeVisibility::Unknown => "",
                ScaleRangeVisibility::Visible => "In range",
                ScaleRangeVisibility::Partial => "Partially in range",
                ScaleRangeVisibility::Hidden => "Out of range",
            },
        ),
        PropertyRow::new("Sub-layers", item.sub_layers.len().to_string()),
        PropertyRow::new("Visible sub-layers", visible_sub_layers.join(", ")),
        PropertyRow::new(
            "Signed in as",
            item.credentials.as_ref().map(|c| c.user.as_str()).unwrap_or_default(),
        ),
    ];

    rows.into_iter()
        .filter(|row| show_empty_values || !row.value.is_empty())
        .collect()
}

/// Properties of the selected layer. Renders only a hint when nothing is selected.
pub struct PropertyGrid<'a> {
    manager: &'a LayerManager,
    selected: Option<crate::layers::LayerId>,
}

impl<'a> PropertyGrid<'a> {
    pub fn new(manager: &'a LayerManager, selected: Option<crate::layers::LayerId>) -> Self {
        Self { manager, selected }
    }

    pub fn show(self, ui: &mut egui::Ui, show_empty_values: &mut bool) {
        let Some(item) = self.selected.and_then(|id| self.manager.get(id)) else {
            ui.weak("Select a layer to see its properties");
            return;
        };

        ui.horizontal(|ui| {
            ui.heading(&item.name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(show_empty_values, "Show empty values");
            });
        });
        ui.separator();

        egui::Grid::new("layer_property_grid")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                if let Some((kind, index)) = self.manager.position_of(item.id) {
                    ui.label("Stack");
                    ui.label(format!("{} (position {})", kind, index + 1));
                    ui.end_row();
                }
                for row in layer_properties(item, *show_empty_values) {
                    ui.label(row.label);
                    ui.label(row.value);
                    ui.end_row();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{LayerId, SubLayer};

    #[test]
    fn test_empty_values_filtered() {
        let item = LayerItem::new(LayerId(1), "Streets", "https://tiles.example");
        let rows = layer_properties(&item, false);
        assert!(rows.iter().all(|row| !row.value.is_empty()));
        assert!(!rows.iter().any(|row| row.label == "Signed in as"));

        let all = layer_properties(&item, true);
        assert!(all.len() > rows.len());
    }

    #[test]
    fn test_visible_sub_layers_listed() {
        let item = LayerItem::new(LayerId(1), "Imagery", "wms").with_sub_layers(
            vec![
                SubLayer::new(1, "Roads", true),
                SubLayer::new(2, "Labels", false),
                SubLayer::new(3, "Rivers", true),
            ],
            false,
        );
        let rows = layer_properties(&item, false);
        let row = rows.iter().find(|row| row.label == "Visible sub-layers").unwrap();
        assert_eq!(row.value, "Roads, Rivers");
    }
}
