use crate::layers::{Credentials, LayerId, LayerItem};
use crate::ui::strings::WidgetStrings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted(Credentials),
    Cancelled,
}

/// Credential entry for a layer whose provider requires authentication
#[derive(Debug, Clone)]
pub struct CredentialsDialog {
    pub layer: LayerId,
    layer_name: String,
    source: String,
    user: String,
    password: String,
    error: Option<String>,
}

impl CredentialsDialog {
    pub fn new(item: &LayerItem) -> Self {
        let (user, password) = item
            .credentials
            .as_ref()
            .map(|c| (c.user.clone(), c.password.clone()))
            .unwrap_or_default();
        Self {
            layer: item.id,
            layer_name: item.name.clone(),
            source: item.source.clone(),
            user,
            password,
            error: None,
        }
    }

    /// Shown inside the dialog after a rejected attempt
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.user.trim(), self.password.clone())
    }

    pub fn show(&mut self, ctx: &egui::Context, strings: &WidgetStrings) -> Option<DialogOutcome> {
        let mut outcome = None;

        egui::Window::new(&strings.credentials_title)
            .id(egui::Id::new(("credentials_dialog", self.layer)))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(&self.layer_name).strong());
                ui.small(&self.source);
                ui.add_space(6.0);

                egui::Grid::new("credentials_form").num_columns(2).show(ui, |ui| {
                    ui.label(&strings.user_name);
                    ui.text_edit_singleline(&mut self.user);
                    ui.end_row();
                    ui.label(&strings.password);
                    ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
                    ui.end_row();
                });

                if let Some(error) = &self.error {
                    ui.colored_label(ui.visuals().error_fg_color, error);
                }

                ui.horizontal(|ui| {
                    if ui.button(&strings.ok).clicked() {
                        outcome = Some(DialogOutcome::Accepted(self.credentials()));
                    }
                    if ui.button(&strings.cancel).clicked() {
                        outcome = Some(DialogOutcome::Cancelled);
                    }
                });
            });

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::LayerStatus;

    #[test]
    fn test_prefills_stored_credentials() {
        let mut item = LayerItem::new(LayerId(4), "Private", "wms").with_status(LayerStatus::RequiresAuth);
        item.credentials = Some(Credentials::new("alice", "old"));

        let mut dialog = CredentialsDialog::new(&item);
        assert_eq!(dialog.layer, LayerId(4));
        assert_eq!(dialog.credentials(), Credentials::new("alice", "old"));
        assert_eq!(dialog.error(), None);

        dialog.set_error("password is empty");
        assert_eq!(dialog.error(), Some("password is empty"));
    }
}
