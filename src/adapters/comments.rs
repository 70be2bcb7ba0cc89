use crate::domain::ports::CommentSink;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Default sink: the platform's comment endpoint is not wired up yet, so the
/// comment is only logged. Swap in a real `CommentSink` to write it back.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCommentSink;

#[async_trait]
impl CommentSink for NoopCommentSink {
    async fn post_comment(&self, candidate_id: &str, text: &str) -> Result<()> {
        tracing::info!(
            candidate_id,
            comment = text,
            "📝 Comment posting is not configured, skipping"
        );
        Ok(())
    }
}
