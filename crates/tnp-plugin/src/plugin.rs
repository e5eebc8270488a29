use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use tnp_core::{
    domain::{GuildId, NewThreadOptions, ThreadRef},
    ports::{GuildChannels, GuildRegistry, ThreadLifecycleHooks},
    prefix::{apply_prefix_on_create, swap_prefix},
    settings::{inbox_server_id, resolve_settings},
    Result,
};

/// The Thread Name Prefix plugin.
///
/// Holds the immutable settings resolved at load time plus a lazily cached
/// reference to the inbox guild. All per-thread state lives with the host;
/// the plugin is stateless across events.
pub struct ThreadNamePrefix {
    prefix: String,
    scheduled_close_prefix: Option<String>,
    inbox_server_id: GuildId,
    registry: Arc<dyn GuildRegistry>,
    inbox_guild: OnceLock<Option<Arc<dyn GuildChannels>>>,
}

impl ThreadNamePrefix {
    /// Resolve settings from the host config and construct the plugin.
    ///
    /// Returns `Ok(None)` when no creation prefix is configured: the plugin
    /// is disengaged for the process lifetime and the host should skip hook
    /// registration entirely. An engaged plugin without a usable inbox
    /// server id is a config error.
    pub fn engage(raw_config: &Value, registry: Arc<dyn GuildRegistry>) -> Result<Option<Self>> {
        let settings = resolve_settings(raw_config);

        if !settings.is_engaged() {
            info!("thread name prefix disengaged, no configuration provided");
            return Ok(None);
        }

        let inbox_server_id = inbox_server_id(raw_config)?;

        info!("thread name prefix engaged");

        Ok(Some(Self {
            prefix: settings.prefix.unwrap_or_default(),
            // Normalized once: an empty swap prefix disables the scheduled
            // close behavior entirely.
            scheduled_close_prefix: settings.scheduled_close_prefix.filter(|p| !p.is_empty()),
            inbox_server_id,
            registry,
            inbox_guild: OnceLock::new(),
        }))
    }

    /// The inbox guild, resolved from the registry on first use and cached
    /// for the instance lifetime.
    fn inbox_guild(&self) -> Option<Arc<dyn GuildChannels>> {
        self.inbox_guild
            .get_or_init(|| self.registry.find_guild(self.inbox_server_id))
            .clone()
    }

    async fn swap_channel_prefix(&self, thread: ThreadRef, from: Option<&str>, to: Option<&str>) {
        let Some(guild) = self.inbox_guild() else {
            warn!(
                guild_id = self.inbox_server_id.0,
                "inbox guild not found, skipping rename"
            );
            return;
        };

        let Some(channel) = guild.get_channel(thread.channel_id) else {
            warn!(
                channel_id = thread.channel_id.0,
                "channel not found in inbox guild, skipping rename"
            );
            return;
        };

        let Some(new_name) = swap_prefix(&channel.name(), from, to) else {
            return;
        };

        if let Err(e) = channel.edit_name(&new_name).await {
            warn!(channel_id = thread.channel_id.0, "channel rename failed: {e}");
        }
    }
}

#[async_trait]
impl ThreadLifecycleHooks for ThreadNamePrefix {
    fn before_new_thread(&self, opts: &mut NewThreadOptions) {
        opts.channel_name = apply_prefix_on_create(&self.prefix, &opts.channel_name);
    }

    async fn after_thread_close_scheduled(&self, thread: ThreadRef) {
        let Some(scheduled) = self.scheduled_close_prefix.as_deref() else {
            return;
        };

        self.swap_channel_prefix(thread, Some(&self.prefix), Some(scheduled))
            .await;
    }

    async fn after_thread_close_schedule_canceled(&self, thread: ThreadRef) {
        let Some(scheduled) = self.scheduled_close_prefix.as_deref() else {
            return;
        };

        self.swap_channel_prefix(thread, Some(scheduled), Some(&self.prefix))
            .await;
    }
}
