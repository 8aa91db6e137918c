use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;

pub const TOGGLE_VISIBILITY: &str = "mapLayers:Widget.ToggleVisibility";
pub const REQUIRE_AUTH_TOOLTIP: &str = "mapLayers:Widget.RequireAuthTooltip";
pub const NO_BACKGROUND_LAYERS: &str = "mapLayers:Widget.NoBackgroundLayers";
pub const NO_OVERLAY_LAYERS: &str = "mapLayers:Widget.NoOverlayLayers";
pub const DROP_LAYER_LABEL: &str = "mapLayers:Widget.DropLayerLabel";
pub const LAYER_OUT_OF_RANGE: &str = "mapLayers:Widget.layerOutOfRange";
pub const ATTACH_LAYER: &str = "mapLayers:Widget.AttachLayer";
pub const SUB_LAYERS: &str = "mapLayers:Widget.SubLayers";
pub const ZOOM_TO_LAYER: &str = "mapLayers:LayerMenu.ZoomToLayer";
pub const DETACH_LAYER: &str = "mapLayers:LayerMenu.Detach";
pub const TRANSPARENCY: &str = "mapLayers:LayerMenu.Transparency";
pub const CREDENTIALS_TITLE: &str = "mapLayers:CustomAttach.CredentialsTitle";
pub const USER_NAME: &str = "mapLayers:AuthenticationInputs.Username";
pub const PASSWORD: &str = "mapLayers:AuthenticationInputs.Password";
pub const OK: &str = "mapLayers:Dialog.Ok";
pub const CANCEL: &str = "mapLayers:Dialog.Cancel";
pub const LAYER_NAME: &str = "mapLayers:CustomAttach.Name";
pub const LAYER_SOURCE: &str = "mapLayers:CustomAttach.URL";

const DEFAULT_STRINGS: &[(&str, &str)] = &[
    (TOGGLE_VISIBILITY, "Toggle Visibility"),
    (REQUIRE_AUTH_TOOLTIP, "This layer requires authentication. Click to enter credentials."),
    (NO_BACKGROUND_LAYERS, "No background layers"),
    (NO_OVERLAY_LAYERS, "No overlay layers"),
    (DROP_LAYER_LABEL, "Drop layer here"),
    (LAYER_OUT_OF_RANGE, "Layer is not displayed at the current view scale"),
    (ATTACH_LAYER, "Attach layer"),
    (SUB_LAYERS, "Sub-layers"),
    (ZOOM_TO_LAYER, "Zoom to layer"),
    (DETACH_LAYER, "Detach"),
    (TRANSPARENCY, "Transparency"),
    (CREDENTIALS_TITLE, "Enter credentials"),
    (USER_NAME, "User name"),
    (PASSWORD, "Password"),
    (OK, "OK"),
    (CANCEL, "Cancel"),
    (LAYER_NAME, "Name"),
    (LAYER_SOURCE, "Source"),
];

/// Key to string lookup table
#[derive(Debug, Clone, Default)]
pub struct Localization {
    strings: HashMap<String, String>,
}

impl Localization {
    /// The built-in English table
    pub fn english() -> Self {
        Self {
            strings: DEFAULT_STRINGS
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Parse a JSON object of `"key": "string"` entries on top of the English table
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: HashMap<String, String> = serde_json::from_str(json)?;
        let mut localization = Self::english();
        localization.strings.extend(overrides);
        Ok(localization)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Unknown keys resolve to the key itself so a missing entry is visible
    pub fn get_localized_string(&self, key: &str) -> String {
        self.strings.get(key).cloned().unwrap_or_else(|| {
            log::warn!("Missing localized string for '{}'", key);
            key.to_string()
        })
    }
}

/// Strings used by the layer widgets, resolved once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetStrings {
    pub toggle_visibility: String,
    pub require_auth_tooltip: String,
    pub no_background_layers: String,
    pub no_overlay_layers: String,
    pub drop_layer_label: String,
    pub out_of_range_title: String,
    pub attach_layer: String,
    pub sub_layers: String,
    pub zoom_to_layer: String,
    pub detach_layer: String,
    pub transparency: String,
    pub credentials_title: String,
    pub user_name: String,
    pub password: String,
    pub ok: String,
    pub cancel: String,
    pub layer_name: String,
    pub layer_source: String,
}

impl WidgetStrings {
    pub fn resolve(localization: &Localization) -> Self {
        let get = |key| localization.get_localized_string(key);
        Self {
            toggle_visibility: get(TOGGLE_VISIBILITY),
            require_auth_tooltip: get(REQUIRE_AUTH_TOOLTIP),
            no_background_layers: get(NO_BACKGROUND_LAYERS),
            no_overlay_layers: get(NO_OVERLAY_LAYERS),
            drop_layer_label: get(DROP_LAYER_LABEL),
            out_of_range_title: get(LAYER_OUT_OF_RANGE),
            attach_layer: get(ATTACH_LAYER),
            sub_layers: get(SUB_LAYERS),
            zoom_to_layer: get(ZOOM_TO_LAYER),
            detach_layer: get(DETACH_LAYER),
            transparency: get(TRANSPARENCY),
            credentials_title: get(CREDENTIALS_TITLE),
            user_name: get(USER_NAME),
            password: get(PASSWORD),
            ok: get(OK),
            cancel: get(CANCEL),
            layer_name: get(LAYER_NAME),
            layer_source: get(LAYER_SOURCE),
        }
    }
}

impl Default for WidgetStrings {
    fn default() -> Self {
        Self::resolve(&Localization::english())
    }
}
