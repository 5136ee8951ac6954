/// Attached to issues that do not cite an existing commit.
pub const MISSING_HASH_LABEL: &str = "Invalid-MissingHash/Commit/NotAC";
/// Issues carrying this label are exempt from the commit check.
pub const FEATURE_LABEL: &str = "Feature";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Categories with a dedicated pull request labeler deployment.
pub enum PullRequestCategory {
    Core,
    Db,
    Script,
    Workflow,
}

impl PullRequestCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Core => "CORE",
            Self::Db => "DB",
            Self::Script => "Script",
            Self::Workflow => "Workflow",
        }
    }
}
