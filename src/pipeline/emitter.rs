use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::types::{GenerationRequest, GenerationResult};
use crate::catalog::{CommentStyle, Language};
use crate::util::single_line;

/// Writes finished skeletons as `<output_dir>/<language>/leetcode_<id>_test.<ext>`.
pub struct FileEmitter {
    output_dir: PathBuf,
}

pub fn file_name(problem_id: u32, language: Language) -> String {
    format!("leetcode_{}_test.{}", problem_id, language.file_extension())
}

/// Header banner: problem id, title, difficulty, description and completeness.
pub fn header(request: &GenerationRequest, result: &GenerationResult) -> String {
    let meta = &result.metadata;
    let mut lines = vec![
        format!(
            "LeetCode #{}: {}",
            request.problem_id(),
            single_line(&meta.title)
        ),
        format!("Difficulty: {}", single_line(&meta.difficulty)),
        String::new(),
        "Description:".to_string(),
    ];
    lines.extend(meta.description.lines().map(|l| l.trim_end().to_string()));
    lines.push(String::new());
    lines.push(format!("Completeness: {}%", request.scaffold_level()));

    match request.language().comment_style() {
        CommentStyle::Block => {
            let mut out = String::from("/*\n");
            for line in lines {
                // A stray terminator would close the banner early
                let line = line.replace("*/", "* /");
                if line.is_empty() {
                    out.push_str(" *\n");
                } else {
                    out.push_str(&format!(" * {}\n", line));
                }
            }
            out.push_str(" */\n\n");
            out
        }
        CommentStyle::Hash => {
            let mut out = String::new();
            for line in lines {
                if line.is_empty() {
                    out.push_str("#\n");
                } else {
                    out.push_str(&format!("# {}\n", line));
                }
            }
            out.push('\n');
            out
        }
    }
}

impl FileEmitter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn language_dir(&self, language: Language) -> PathBuf {
        self.output_dir.join(language.as_str())
    }

    /// Write the banner and code in one go and return the file path.
    pub fn emit(&self, request: &GenerationRequest, result: &GenerationResult) -> Result<PathBuf> {
        let lang_dir = self.language_dir(request.language());
        fs::create_dir_all(&lang_dir)
            .with_context(|| format!("failed to create directory {}", lang_dir.display()))?;

        let path = lang_dir.join(file_name(request.problem_id(), request.language()));
        let contents = format!("{}{}", header(request, result), result.code);
        debug!("Writing {} bytes to {}", contents.len(), path.display());

        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());

        Ok(path)
    }
}
