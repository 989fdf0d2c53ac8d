//! Run-scoped invocation context.

/// Immutable invocation context, built once from parsed CLI arguments and
/// passed by reference into every component that needs it.
#[derive(Debug, Clone)]
pub struct Context {
    /// ECR repository name
    pub repo: String,
    /// Make target to execute on confirmation
    pub target: String,
    /// Optional substring filter applied to image tags
    pub filter: Option<String>,
    /// Maximum number of images to fetch
    pub limit: usize,
}
