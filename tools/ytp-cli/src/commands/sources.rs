//! Source library editing.

use std::path::{Path, PathBuf};

use ytp_project_model::sources::MediaKind;

use super::{load_project, save_project};

fn parse_kind(kind: &str) -> anyhow::Result<MediaKind> {
    kind.parse().map_err(|e: String| anyhow::anyhow!(e))
}

/// Resolve the kind for `path`: explicit kind wins, otherwise infer from
/// the extension.
fn kind_for(path: &Path, explicit: Option<MediaKind>) -> anyhow::Result<MediaKind> {
    explicit.or_else(|| MediaKind::infer(path)).ok_or_else(|| {
        anyhow::anyhow!(
            "Cannot infer media kind of {}; pass --kind",
            path.display()
        )
    })
}

pub fn add(project_path: &Path, kind: Option<String>, paths: Vec<PathBuf>) -> anyhow::Result<()> {
    let explicit = kind.as_deref().map(parse_kind).transpose()?;
    let mut project = load_project(project_path)?;

    // Resolve every kind first so a bad path leaves the project untouched.
    let resolved = paths
        .into_iter()
        .map(|p| kind_for(&p, explicit).map(|k| (k, p)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for (kind, path) in resolved {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Source does not exist (added anyway)");
        }
        println!("Added {kind}: {}", path.display());
        project.sources.add(kind, path);
    }

    save_project(&project, project_path)
}

pub fn add_url(project_path: &Path, url: &str) -> anyhow::Result<()> {
    let mut project = load_project(project_path)?;
    if !project.sources.add_url(url) {
        anyhow::bail!("URL is empty");
    }
    println!("Added URL: {}", url.trim());
    save_project(&project, project_path)
}

pub fn remove(project_path: &Path, kind: &str, index: usize) -> anyhow::Result<()> {
    let kind = parse_kind(kind)?;
    let mut project = load_project(project_path)?;
    let removed = project
        .sources
        .remove(kind, index)
        .ok_or_else(|| anyhow::anyhow!("No {kind} source at index {index}"))?;
    println!("Removed {kind}: {}", removed.display());
    save_project(&project, project_path)
}

pub fn remove_url(project_path: &Path, index: usize) -> anyhow::Result<()> {
    let mut project = load_project(project_path)?;
    let removed = project
        .sources
        .remove_url(index)
        .ok_or_else(|| anyhow::anyhow!("No URL at index {index}"))?;
    println!("Removed URL: {removed}");
    save_project(&project, project_path)
}

pub fn clear(project_path: &Path, kind: Option<String>) -> anyhow::Result<()> {
    let mut project = load_project(project_path)?;
    match kind.as_deref().map(parse_kind).transpose()? {
        Some(kind) => {
            project.sources.clear(kind);
            println!("Cleared {kind} sources");
        }
        None => {
            for kind in MediaKind::ALL {
                project.sources.clear(kind);
            }
            project.sources.urls.clear();
            println!("Cleared all sources and URLs");
        }
    }
    save_project(&project, project_path)
}
