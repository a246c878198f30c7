const UNTRACKED_MARKER: &str = "?? ";

/// Working tree state derived from `git status --porcelain`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingTreeStatus {
    /// Porcelain lines describing tracked changes
    pub dirty_entries: Vec<String>,
}

impl WorkingTreeStatus {
    /// Classify porcelain output; only `?? ` lines are tolerated
    pub fn from_porcelain(output: &str) -> Self {
        let dirty_entries = output
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with(UNTRACKED_MARKER))
            .map(|line| line.to_string())
            .collect();

        WorkingTreeStatus { dirty_entries }
    }

    pub fn is_clean(&self) -> bool {
        self.dirty_entries.is_empty()
    }
}
