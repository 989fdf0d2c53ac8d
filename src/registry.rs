//! Registry query construction.
//!
//! Builds the shell pipelines that `exec` runs; no I/O happens here.

/// Tags matching this pattern are internal build artifacts, not deployable
/// images. They are excluded at the query stage (case-insensitive), so they
/// never reach the parser.
const RESERVED_TAG_PATTERN: &str = "makefile";

/// Build the pipeline that lists `[tag, pushedAt]` pairs for a repository,
/// newest first, capped at `limit`.
pub fn fetch_images_command(repo: &str, limit: usize) -> String {
    format!(
        "aws ecr describe-images \
         --repository-name {repo} \
         --query 'imageDetails[?imageTags[0]!=`null`].[imageTags[0],imagePushedAt]' \
         --output json | \
         jq 'map(select(.[0] | test(\"{pattern}\"; \"i\") | not)) | sort_by(.[1]) | reverse | .[:{limit}]'",
        repo = repo,
        pattern = RESERVED_TAG_PATTERN,
        limit = limit,
    )
}

/// Build the deploy invocation: set the version variable, run the make target.
pub fn deploy_command(tag: &str, target: &str) -> String {
    format!("VERSION={} && make {}", tag, target)
}
