pub mod check;
pub mod effects;
pub mod info;
pub mod init;
pub mod plan;
pub mod preview;
pub mod render;
pub mod settings;
pub mod sources;

use std::path::Path;

use ytp_project_model::project::ProjectFile;

/// Load the project at `path`, or a default project when none exists yet.
pub fn load_project(path: &Path) -> anyhow::Result<ProjectFile> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "No project file yet; using defaults");
        return Ok(ProjectFile::default());
    }
    ProjectFile::load(path).map_err(|e| anyhow::anyhow!("Failed to load project: {e}"))
}

pub fn save_project(project: &ProjectFile, path: &Path) -> anyhow::Result<()> {
    project
        .save(path)
        .map_err(|e| anyhow::anyhow!("Failed to save project: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytp_project_model::sources::MediaKind;

    #[test]
    fn test_load_missing_project_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let project = load_project(&dir.path().join("ytp_project.json")).unwrap();
        assert_eq!(project, ProjectFile::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ytp_project.json");
        let mut project = ProjectFile::default();
        project.sources.add(MediaKind::Audio, "boom.wav");

        save_project(&project, &path).unwrap();
        assert_eq!(load_project(&path).unwrap(), project);
    }

    #[test]
    fn test_load_corrupt_project_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ytp_project.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_project(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load project"));
    }
}
