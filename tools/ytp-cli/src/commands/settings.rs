//! Project settings editing.

use std::path::Path;

use ytp_project_model::project::ProjectFile;

use super::{load_project, save_project};

pub fn set(project_path: &Path, field: &str, value: &str) -> anyhow::Result<()> {
    let mut project = load_project(project_path)?;
    project.settings.set_field(field, value)?;
    println!("{field} = {value}");
    save_project(&project, project_path)
}

/// Restore every part of the project, sources included, to defaults.
pub fn reset(project_path: &Path) -> anyhow::Result<()> {
    save_project(&ProjectFile::default(), project_path)?;
    println!("Project reset to defaults: {}", project_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytp_project_model::settings::ProjectType;

    #[test]
    fn test_set_parses_typed_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ytp_project.json");

        set(&path, "width", "1280").unwrap();
        set(&path, "cut_audio", "true").unwrap();
        set(&path, "project_type", "ytpmv").unwrap();

        let settings = load_project(&path).unwrap().settings;
        assert_eq!(settings.width, 1280);
        assert!(settings.cut_audio);
        assert_eq!(settings.project_type, ProjectType::Ytpmv);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ytp_project.json");

        assert!(set(&path, "width", "wide").is_err());
        assert!(set(&path, "colour", "red").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_reset_discards_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ytp_project.json");
        set(&path, "clip_count", "3").unwrap();

        reset(&path).unwrap();
        assert_eq!(load_project(&path).unwrap(), ProjectFile::default());
    }
}
