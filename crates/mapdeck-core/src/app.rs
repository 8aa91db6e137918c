use std::{
    fs,
    path::{Path, PathBuf},
};

use egui_dock::{DockArea, DockState, NodeIndex, Style};

/// egui_lens imports
use egui_lens::{LogColors, ReactiveEventLogger, ReactiveEventLoggerState};
use egui_mobius_reactive::Dynamic;

use crate::config::{self, AppConfig, DOCK_STATE_FILE};
use crate::constants::{LOG_TYPE_CREDENTIALS, LOG_TYPE_REORDER, LOG_TYPE_VISIBILITY};
use crate::defaults;
use crate::layers::{LayerAction, LayerId, LayerListEvent, LayerManager};
use crate::ui::credentials::{CredentialsDialog, DialogOutcome};
use crate::ui::strings::{Localization, WidgetStrings};
use crate::ui::{Tab, TabKind, TabViewer};

/// The main application struct
pub struct MapDeckApp {
    // Layer state owned by the viewer
    pub layer_manager: LayerManager,
    pub selected_layer: Option<LayerId>,

    // Widget inputs
    pub strings: WidgetStrings,
    pub lists_disabled: bool,
    pub show_empty_property_values: bool,

    // Intents collected during the frame, applied after the UI pass
    pub pending_events: Vec<LayerListEvent>,

    // Open credential dialog, if any
    pub credentials_dialog: Option<CredentialsDialog>,

    // Logger state and colors
    pub logger_state: Dynamic<ReactiveEventLoggerState>,
    pub log_colors: Dynamic<LogColors>,

    // Dock state
    dock_state: DockState<Tab>,
    config_dir: Option<PathBuf>,
    locale_path: Option<PathBuf>,
}

impl Drop for MapDeckApp {
    fn drop(&mut self) {
        self.save_dock_state();
        self.save_settings();
    }
}

impl MapDeckApp {
    /// Load the saved configuration (or the default layers on first start)
    pub fn new() -> Self {
        let config_dir = match config::config_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                log::warn!("{}; settings will not be saved", e);
                None
            }
        };

        let config = Self::load_config(config_dir.as_deref());
        let mut app = Self::with_config(config, config_dir);
        if let Some(dock_state) = app.load_dock_state() {
            app.dock_state = dock_state;
        }

        let logger = ReactiveEventLogger::with_colors(&app.logger_state, &app.log_colors);
        let stats = app.layer_manager.get_statistics();
        logger.log_info(&format!(
            "mapdeck v{}: {} background and {} overlay layers",
            env!("CARGO_PKG_VERSION"),
            stats.background_layers,
            stats.overlay_layers
        ));
        app
    }

    fn load_config(config_dir: Option<&Path>) -> AppConfig {
        let saved = match config_dir.map(AppConfig::load_from_file) {
            Some(Ok(saved)) => saved,
            Some(Err(e)) => {
                log::warn!("Failed to load configuration: {}", e);
                None
            }
            None => None,
        };
        saved.unwrap_or_else(Self::first_start_config)
    }

    /// Seed layers for a start without a saved configuration. A saved
    /// configuration with no layers stays empty.
    fn first_start_config() -> AppConfig {
        AppConfig {
            layers: defaults::load_default_layers(),
            ..Default::default()
        }
    }

    /// Build the app from an already loaded configuration. Nothing is
    /// persisted when `config_dir` is `None`.
    pub fn with_config(config: AppConfig, config_dir: Option<PathBuf>) -> Self {
        let localization = match &config.locale_path {
            Some(path) => Localization::load_from_file(path).unwrap_or_else(|e| {
                log::warn!("Failed to load strings from {}: {}", path.display(), e);
                Localization::english()
            }),
            None => Localization::english(),
        };

        Self {
            layer_manager: config.layers,
            selected_layer: None,
            strings: WidgetStrings::resolve(&localization),
            lists_disabled: false,
            show_empty_property_values: config.show_empty_property_values,
            pending_events: Vec::new(),
            credentials_dialog: None,
            logger_state: Dynamic::new(ReactiveEventLoggerState::new()),
            log_colors: Dynamic::new(LogColors::default()),
            dock_state: Self::default_dock_state(),
            config_dir,
            locale_path: config.locale_path,
        }
    }

    fn default_dock_state() -> DockState<Tab> {
        let mut dock_state = DockState::new(vec![Tab::new(TabKind::MapLayers)]);
        let surface = dock_state.main_surface_mut();

        let [layers, _properties] = surface.split_right(
            NodeIndex::root(),
            0.55,
            vec![Tab::new(TabKind::Properties)],
        );
        surface.split_below(layers, 0.7, vec![Tab::new(TabKind::EventLog)]);

        dock_state
    }

    /// Apply the intents collected during the last UI pass, in order
    pub fn process_events(&mut self) {
        let logger_state = self.logger_state.clone();
        let log_colors = self.log_colors.clone();
        let logger = ReactiveEventLogger::with_colors(&logger_state, &log_colors);

        for event in std::mem::take(&mut self.pending_events) {
            let name = event
                .item()
                .and_then(|id| self.layer_manager.get(id))
                .map(|item| item.name.clone())
                .unwrap_or_default();

            match &event {
                LayerListEvent::EditRequested(id) => {
                    if let Some(item) = self.layer_manager.get(*id) {
                        self.credentials_dialog = Some(CredentialsDialog::new(item));
                    } else {
                        log::warn!("Edit requested for unknown layer {}", id);
                    }
                    continue;
                }
                LayerListEvent::Selected(id) => {
                    self.selected_layer = Some(*id);
                    continue;
                }
                LayerListEvent::MenuAction { action: LayerAction::ZoomToLayer, .. } => {
                    // Camera control belongs to the viewer
                    logger.log_info(&format!("Zoom to '{}' requested", name));
                    continue;
                }
                LayerListEvent::AttachRequested { kind, name, source } => {
                    // Re-attaching the same imagery selects the existing layer
                    if let Some(index) = self.layer_manager.find_index_by_name_and_source(*kind, name, source) {
                        self.selected_layer = self.layer_manager.list(*kind).get(index).map(|item| item.id);
                        logger.log_warning(&format!("'{}' is already attached to {}", name, kind.display_name().to_lowercase()));
                        continue;
                    }
                }
                LayerListEvent::ItemEdited(_) => {
                    logger.log_custom(LOG_TYPE_CREDENTIALS, &format!("'{}' credentials updated", name));
                    continue;
                }
                _ => {}
            }

            match self.layer_manager.apply(&event) {
                Ok(_) => match &event {
                    LayerListEvent::VisibilityToggled(_) => {
                        logger.log_custom(LOG_TYPE_VISIBILITY, &format!("Toggled visibility of '{}'", name));
                    }
                    LayerListEvent::Reordered { kind, .. } => {
                        logger.log_custom(LOG_TYPE_REORDER, &format!("Reordered {}", kind.display_name().to_lowercase()));
                    }
                    LayerListEvent::MovedBetweenLists { to, .. } => {
                        logger.log_custom(LOG_TYPE_REORDER, &format!("Moved '{}' to {}", name, to.display_name().to_lowercase()));
                    }
                    LayerListEvent::MenuAction { action: LayerAction::Detach, item } => {
                        if self.selected_layer == Some(*item) {
                            self.selected_layer = None;
                        }
                        logger.log_info(&format!("Detached '{}'", name));
                    }
                    LayerListEvent::AttachRequested { kind, name, .. } => {
                        logger.log_info(&format!("Attached '{}' to {}", name, kind.display_name().to_lowercase()));
                    }
                    LayerListEvent::AllVisibilitySet { kind, visible } => {
                        let state = if *visible { "shown" } else { "hidden" };
                        logger.log_custom(
                            LOG_TYPE_VISIBILITY,
                            &format!("All {} {}", kind.display_name().to_lowercase(), state),
                        );
                    }
                    _ => {}
                },
                Err(e) => {
                    log::warn!("Rejected {:?}: {}", event, e);
                    logger.log_error(&e.to_string());
                }
            }
        }
    }

    /// Show the credential dialog and apply its result
    fn show_credentials_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.credentials_dialog.as_mut() else {
            return;
        };
        let Some(outcome) = dialog.show(ctx, &self.strings) else {
            return;
        };

        match outcome {
            DialogOutcome::Accepted(credentials) => {
                let layer = dialog.layer;
                match self.layer_manager.apply_credentials(layer, credentials) {
                    Ok(()) => {
                        self.credentials_dialog = None;
                        self.pending_events.push(LayerListEvent::ItemEdited(layer));
                    }
                    Err(e) => dialog.set_error(e.to_string()),
                }
            }
            DialogOutcome::Cancelled => self.credentials_dialog = None,
        }
    }

    fn save_settings(&self) {
        let Some(dir) = &self.config_dir else {
            return;
        };
        let config = AppConfig {
            layers: self.layer_manager.clone(),
            show_empty_property_values: self.show_empty_property_values,
            locale_path: self.locale_path.clone(),
        };
        if let Err(e) = config.save_to_file(dir) {
            log::error!("Failed to save configuration: {}", e);
        }
    }

    fn save_dock_state(&self) {
        let Some(dir) = &self.config_dir else {
            return;
        };
        if let Err(e) = fs::create_dir_all(dir) {
            log::error!("Failed to create config directory: {}", e);
            return;
        }
        match serde_json::to_string_pretty(&self.dock_state) {
            Ok(json) => {
                if let Err(e) = fs::write(dir.join(DOCK_STATE_FILE), json) {
                    log::error!("Failed to write dock state: {}", e);
                }
            }
            Err(e) => log::error!("Failed to serialize dock state: {}", e),
        }
    }

    fn load_dock_state(&self) -> Option<DockState<Tab>> {
        let path = self.config_dir.as_ref()?.join(DOCK_STATE_FILE);
        let json = fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<DockState<Tab>>(&json) {
            Ok(dock_state) => Some(dock_state),
            Err(e) => {
                log::warn!("Failed to deserialize dock state: {}", e);
                // Delete corrupted file
                fs::remove_file(path).ok();
                None
            }
        }
    }
}

impl Default for MapDeckApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for MapDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("app_ribbon").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("🗺 Map Layers");
                ui.separator();
                let stats = self.layer_manager.get_statistics();
                ui.label(format!(
                    "{} visible of {}",
                    stats.visible_layers,
                    stats.background_layers + stats.overlay_layers
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.checkbox(&mut self.lists_disabled, "Lock layer lists");
                });
            });
        });

        let mut dock_state = self.dock_state.clone();
        let mut tab_viewer = TabViewer { app: self };
        let mut style = Style::from_egui(ctx.style().as_ref());
        style.dock_area_padding = None;
        style.tab_bar.fill_tab_bar = true;

        DockArea::new(&mut dock_state)
            .style(style)
            .show_add_buttons(false)
            .show_close_buttons(false)
            .show(ctx, &mut tab_viewer);

        self.dock_state = dock_state;

        self.show_credentials_dialog(ctx);

        // Deferred actions after the UI pass
        self.process_events();
    }
}
