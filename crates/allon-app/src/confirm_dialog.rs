//! Confirm dialog state.
//!
//! Data model for the "apply configuration" confirmation. The rendering
//! widget lives in allon-tui's `widgets/confirm_dialog.rs`.

use allon_core::{Project, ProjectId};

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Second line, rendered in the warning color
    pub warning: Option<String>,
    /// Project that will be applied on confirm
    pub project_id: ProjectId,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Dialog asking whether to overwrite the device configuration
    pub fn load_project(project: &Project) -> Self {
        Self {
            title: "Load configuration?".to_string(),
            message: format!("Load configuration of \"{}\"?", project.name),
            warning: Some("This will overwrite the device's current configuration.".to_string()),
            project_id: project.id.clone(),
            options: vec![
                ("Yes".to_string(), Message::ConfirmLoad),
                ("No".to_string(), Message::CancelLoad),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_project_dialog_names_project() {
        let dialog = ConfirmDialogState::load_project(&Project::new("3", "Greenhouse"));
        assert!(dialog.message.contains("\"Greenhouse\""));
        assert!(dialog.warning.as_deref().unwrap().contains("overwrite"));
        assert_eq!(dialog.project_id.as_str(), "3");
        assert_eq!(dialog.options.len(), 2);
    }
}
