use crate::layers::{
    LayerId, LayerItem, LayerManager, LayerStatus, ListKind, ScaleRangeVisibility, SubLayer,
};

/// Layers shown on first start, before any configuration was saved
pub fn load_default_layers() -> LayerManager {
    let mut layer_manager = LayerManager::new();

    let background = [
        LayerItem::new(LayerId(0), "OpenStreetMap", "https://tile.openstreetmap.org/{z}/{x}/{y}.png"),
        LayerItem::new(LayerId(0), "World Imagery", "https://services.example.com/arcgis/rest/services/World_Imagery/MapServer")
            .with_sub_layers(
                vec![
                    SubLayer::new(0, "Satellite", true),
                    SubLayer::new(1, "Hybrid", false),
                    SubLayer::new(2, "Terrain", false),
                ],
                true,
            ),
    ];
    let overlay = [
        LayerItem::new(LayerId(0), "Parcels", "https://gis.example.com/wms?service=WMS")
            .with_status(LayerStatus::RequiresAuth),
        LayerItem::new(LayerId(0), "Flood Zones", "https://gis.example.com/wmts/flood")
            .with_scale_range(ScaleRangeVisibility::Hidden)
            .with_sub_layers(
                vec![
                    SubLayer::new(0, "100-year", true),
                    SubLayer::new(1, "500-year", true),
                ],
                false,
            ),
    ];

    for (kind, items) in [(ListKind::Background, background), (ListKind::Overlay, overlay)] {
        for item in items {
            let name = item.name.clone();
            if let Err(e) = layer_manager.attach_item(kind, item) {
                log::warn!("Skipping default layer '{}': {}", name, e);
            }
        }
    }

    layer_manager
}
