use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    domain::{ChannelId, GuildId, NewThreadOptions, ThreadRef},
    Result,
};

/// Host-side guild registry.
///
/// The plugin resolves its inbox guild through this port exactly once and
/// caches the reference for its lifetime.
pub trait GuildRegistry: Send + Sync {
    fn find_guild(&self, id: GuildId) -> Option<Arc<dyn GuildChannels>>;
}

/// Channel lookup surface of a single guild.
pub trait GuildChannels: Send + Sync {
    fn get_channel(&self, id: ChannelId) -> Option<Arc<dyn ChannelHandle>>;
}

/// A live channel object owned by the host.
#[async_trait]
pub trait ChannelHandle: Send + Sync {
    fn name(&self) -> String;

    /// Rename the channel. Transient failures surface as `Err`, never a
    /// panic; callers decide whether to log or ignore. No retries.
    async fn edit_name(&self, name: &str) -> Result<()>;
}

/// Thread-lifecycle hook surface the host dispatches into.
///
/// The host guarantees serialized delivery per thread and fires each
/// transition at most once; handlers never fail from the host's point of
/// view.
#[async_trait]
pub trait ThreadLifecycleHooks: Send + Sync {
    /// Runs before the host creates a thread's channel; may rewrite the
    /// creation options in place.
    fn before_new_thread(&self, opts: &mut NewThreadOptions);

    /// Runs after a thread's closure has been scheduled.
    async fn after_thread_close_scheduled(&self, thread: ThreadRef);

    /// Runs after a pending scheduled closure has been canceled.
    async fn after_thread_close_schedule_canceled(&self, thread: ThreadRef);
}
