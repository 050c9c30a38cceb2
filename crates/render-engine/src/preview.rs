//! Previewer selection.
//!
//! The configured previewer is preferred, then the bare `ffplay`, then the
//! configured processor and finally the bare `ffmpeg`. The processor is
//! invoked as `-i <input>`; the previewer takes the input directly.

use std::path::{Path, PathBuf};

use ytp_common::error::{YtpError, YtpResult};
use ytp_project_model::tools::ToolPaths;

use crate::command::ToolInvocation;

const FALLBACK_PREVIEWER: &str = "ffplay";
const FALLBACK_PROCESSOR: &str = "ffmpeg";

/// Which kind of program was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewerKind {
    Previewer,
    Processor,
}

/// A resolved preview program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Previewer {
    pub kind: PreviewerKind,
    pub program: PathBuf,
}

impl Previewer {
    /// The command that opens `input` in this previewer.
    pub fn invocation(&self, input: &Path) -> ToolInvocation {
        let cmd = ToolInvocation::new(self.program.to_string_lossy());
        let input = input.to_string_lossy().into_owned();
        match self.kind {
            PreviewerKind::Previewer => cmd.arg(input),
            PreviewerKind::Processor => cmd.arg("-i").arg(input),
        }
    }
}

/// Candidate programs in lookup order, without duplicates or blanks.
pub fn candidates(tools: &ToolPaths) -> Vec<(PreviewerKind, String)> {
    let ordered = [
        (PreviewerKind::Previewer, tools.ffplay.as_str()),
        (PreviewerKind::Previewer, FALLBACK_PREVIEWER),
        (PreviewerKind::Processor, tools.ffmpeg.as_str()),
        (PreviewerKind::Processor, FALLBACK_PROCESSOR),
    ];

    let mut out: Vec<(PreviewerKind, String)> = Vec::with_capacity(ordered.len());
    for (kind, name) in ordered {
        if name.is_empty() || out.iter().any(|(_, seen)| seen == name) {
            continue;
        }
        out.push((kind, name.to_string()));
    }
    out
}

/// Pick the first candidate that `lookup` can locate.
pub fn resolve_previewer(
    tools: &ToolPaths,
    lookup: impl Fn(&str) -> Option<PathBuf>,
) -> YtpResult<Previewer> {
    let candidates = candidates(tools);
    for (kind, name) in &candidates {
        if let Some(program) = lookup(name) {
            tracing::debug!(program = %program.display(), ?kind, "Resolved previewer");
            return Ok(Previewer {
                kind: *kind,
                program,
            });
        }
    }

    Err(YtpError::tool_not_found(
        "no previewer or media processor available",
        candidates.into_iter().map(|(_, name)| name).collect(),
    ))
}
