//! Editor settings and the settings file

use crate::{Result, DEFAULT_DOCUMENT_NAME, DOCUMENT_EXTENSION};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main editor settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    /// Local file settings
    pub files: FileSettings,
    /// Cloud document settings
    pub cloud: CloudSettings,
    /// Scrolling behaviour
    pub scrolling: ScrollSettings,
}

/// Local file settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileSettings {
    /// Extension required for saved and loaded documents
    pub document_extension: String,
    /// Name given to new, unsaved documents
    pub default_document_name: String,
    /// Suggested file name for HTML exports
    pub export_file_name: String,
    /// Directory downloads are written to
    pub download_dir: PathBuf,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            document_extension: DOCUMENT_EXTENSION.to_string(),
            default_document_name: DEFAULT_DOCUMENT_NAME.to_string(),
            export_file_name: "document.html".to_string(),
            download_dir: PathBuf::from("downloads"),
        }
    }
}

/// Cloud document settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudSettings {
    /// Suggested title when saving a document that has no name yet
    pub default_title: String,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            default_title: "My Document".to_string(),
        }
    }
}

/// Scrolling behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollSettings {
    /// Distance in pixels kept between the caret and the viewport edges
    pub autoscroll_buffer_px: f64,
    /// Scroll offset at or below which the header is always shown
    pub header_top_threshold_px: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            autoscroll_buffer_px: 50.0,
            header_top_threshold_px: 5.0,
        }
    }
}

/// Name of the settings file inside the app data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Reads and writes the editor settings file
///
/// A missing file means defaults. A file that no longer parses is logged
/// and replaced by defaults in memory; it is only overwritten on the next
/// explicit save.
pub struct SettingsManager {
    app_data_dir: PathBuf,
    current: EditorSettings,
}

impl SettingsManager {
    pub fn new(app_data_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_data_dir: app_data_dir.into(),
            current: EditorSettings::default(),
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.app_data_dir.join(SETTINGS_FILE_NAME)
    }

    /// Load the settings file into the manager
    pub async fn load(&mut self) -> Result<&EditorSettings> {
        let path = self.settings_path();
        self.current = if tokio::fs::try_exists(&path).await? {
            parse_or_default(&tokio::fs::read_to_string(&path).await?)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            EditorSettings::default()
        };
        Ok(&self.current)
    }

    /// Replace the settings and write them to disk
    pub async fn save(&mut self, settings: EditorSettings) -> Result<()> {
        tokio::fs::create_dir_all(&self.app_data_dir).await?;
        let content = serde_json::to_string_pretty(&settings)?;
        tokio::fs::write(self.settings_path(), content).await?;
        self.current = settings;
        Ok(())
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.current
    }

    /// Directory downloads go to; relative paths are taken from the app data directory
    pub fn download_dir(&self) -> PathBuf {
        self.app_data_dir.join(&self.current.files.download_dir)
    }
}

fn parse_or_default(content: &str) -> EditorSettings {
    match serde_json::from_str::<EditorSettings>(content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse settings file, using defaults");
            EditorSettings::default()
        }
    }
}
