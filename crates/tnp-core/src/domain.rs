/// Guild id (numeric snowflake).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GuildId(pub u64);

/// Channel id (numeric snowflake).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(pub u64);

/// A support thread as seen by lifecycle hooks.
///
/// Threads map 1:1 to a channel; the hooks only need the channel id to find
/// the live channel object in the inbox guild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThreadRef {
    pub channel_id: ChannelId,
}

/// Mutable creation options for a new thread, rewritten in place before the
/// host creates the channel.
#[derive(Clone, Debug)]
pub struct NewThreadOptions {
    pub channel_name: String,
}
