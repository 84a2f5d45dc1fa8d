use std::collections::HashSet;

use serde::Deserialize;

use super::errors::SettingsError;
use crate::theme::ColorPalette;
use crate::widgets::page_tabs::context_menu::MenuPlacement;
use crate::widgets::page_tabs::model::{Page, PageId, default_pages};

/// Startup settings read from the optional settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SettingsData {
    active_page_id: PageId,
    pages: Vec<Page>,
    narrow_viewport_width: f32,
    menu_right_inset: f32,
    palette: ColorPalette,
}

impl Default for SettingsData {
    fn default() -> Self {
        let placement = MenuPlacement::default();
        Self {
            active_page_id: PageId::new("1"),
            pages: default_pages(),
            narrow_viewport_width: placement.narrow_viewport_width,
            menu_right_inset: placement.right_inset,
            palette: ColorPalette::default(),
        }
    }
}

impl SettingsData {
    /// Parse and validate a settings payload.
    pub(crate) fn from_json(payload: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(payload)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.pages.is_empty() {
            return Err(validation("pages must not be empty"));
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.id()) {
                return Err(validation(format!(
                    "duplicate page id '{}'",
                    page.id()
                )));
            }
        }

        if !self.narrow_viewport_width.is_finite()
            || self.narrow_viewport_width < 0.0
        {
            return Err(validation("narrow_viewport_width must be >= 0"));
        }
        if !self.menu_right_inset.is_finite() || self.menu_right_inset < 0.0 {
            return Err(validation("menu_right_inset must be >= 0"));
        }

        Ok(())
    }

    pub(crate) fn active_page_id(&self) -> &PageId {
        &self.active_page_id
    }

    pub(crate) fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub(crate) fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub(crate) fn menu_placement(&self) -> MenuPlacement {
        MenuPlacement {
            narrow_viewport_width: self.narrow_viewport_width,
            right_inset: self.menu_right_inset,
        }
    }
}

fn validation(message: impl Into<String>) -> SettingsError {
    SettingsError::Validation {
        message: message.into(),
    }
}
