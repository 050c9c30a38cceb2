//! Plan export.

use std::path::Path;

use ytp_common::error::YtpResult;
use ytp_processing_core::plan::generate_plan;
use ytp_project_model::job::RenderJob;

/// Pretty-printed plan JSON for `job` (2-space indent, no trailing newline).
pub fn plan_json(job: &RenderJob) -> YtpResult<String> {
    Ok(serde_json::to_string_pretty(&generate_plan(job))?)
}

/// Write the plan for `job` to `destination`, creating parent directories.
/// An existing file is overwritten.
pub fn export_plan(job: &RenderJob, destination: &Path) -> YtpResult<()> {
    let json = plan_json(job)?;
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(destination, json)?;
    tracing::info!(path = %destination.display(), "Exported job plan");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use ytp_processing_core::effects::compile;
    use ytp_processing_core::plan::{PlanDocument, PlanFilters};
    use ytp_project_model::effect::{EffectId, EffectMap};
    use ytp_project_model::project::ProjectFile;
    use ytp_project_model::sources::MediaKind;

    fn job() -> RenderJob {
        let mut project = ProjectFile::default();
        project.sources.add(MediaKind::Video, "clips/a.mp4");
        project.sources.add(MediaKind::Gif, "loops/spin.gif");
        project.to_job(PathBuf::from("temp/tempoutput.mp4"), None)
    }

    #[test]
    fn test_plan_json_layout() {
        let json = plan_json(&job()).unwrap();
        assert!(json.starts_with("{\n  \"sources\": {"));
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn test_export_creates_parents_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out").join("ytp_plan.json");
        let job = job();

        export_plan(&job, &dest).unwrap();

        let parsed: PlanDocument =
            serde_json::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(parsed, generate_plan(&job));
        assert_eq!(parsed.sources.gifs, vec!["loops/spin.gif"]);
    }

    #[test]
    fn test_reexport_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("plan.json");
        let job = job();

        export_plan(&job, &dest).unwrap();
        let first = std::fs::read(&dest).unwrap();
        export_plan(&job, &dest).unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), first);
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("plan.json");
        std::fs::write(&dest, "stale contents that are longer than nothing").unwrap();

        let mut job = job();
        job.effects = EffectMap::new();
        export_plan(&job, &dest).unwrap();

        let parsed: PlanDocument =
            serde_json::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(parsed.effects.len(), 35);
        assert_eq!(PlanFilters::from(compile(&parsed.effects)), parsed.filters);
        assert!(parsed.filters.video.contains(&"negate".to_string()));
    }

    #[test]
    fn test_sparse_project_plan_effects_agree_with_filters() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("ytp_project.json");
        std::fs::write(
            &project_path,
            r#"{"effects":{"invert":{"name":"Invert Colors","enabled":false,"probability":0.5,"max_level":1,"description":""}}}"#,
        )
        .unwrap();
        let project = ProjectFile::load(&project_path).unwrap();
        let dest = dir.path().join("plan.json");

        export_plan(&project.to_job("out.mp4", None), &dest).unwrap();

        let parsed: PlanDocument =
            serde_json::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(parsed.effects.len(), 35);
        assert!(!parsed.effects[&EffectId::Invert].enabled);
        assert!(parsed.effects[&EffectId::Reverse].enabled);
        assert!(!parsed.filters.video.contains(&"negate".to_string()));
        assert_eq!(PlanFilters::from(compile(&parsed.effects)), parsed.filters);
    }

    #[test]
    fn test_export_into_missing_parent_that_is_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = export_plan(&job(), &blocker.join("plan.json")).unwrap_err();
        assert!(matches!(err, ytp_common::error::YtpError::Io(_)));
    }
}
