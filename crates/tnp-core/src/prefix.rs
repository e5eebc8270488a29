//! Channel-name prefix transforms.
//!
//! Pure string operations; the plugin decides when a computed name is
//! actually pushed to the host.

/// Prefix a newly created thread's channel name.
///
/// The creation hook fires exactly once per new thread, so there is no guard
/// against double-prefixing.
pub fn apply_prefix_on_create(prefix: &str, channel_name: &str) -> String {
    format!("{prefix}{channel_name}")
}

/// Swap one status prefix for another on a live channel name.
///
/// Returns `None` when `to_prefix` is absent or empty, meaning no rename
/// should be issued at all. When the current name no longer starts with
/// `from_prefix` (external edits can lose it), the body is kept as-is and
/// only the new prefix is prepended.
///
/// Not idempotent under repeated same-direction application; callers invoke
/// it at most once per lifecycle transition.
pub fn swap_prefix(
    current_name: &str,
    from_prefix: Option<&str>,
    to_prefix: Option<&str>,
) -> Option<String> {
    let to = to_prefix.filter(|t| !t.is_empty())?;

    let body = match from_prefix {
        Some(from) if !from.is_empty() && current_name.starts_with(from) => {
            &current_name[from.len()..]
        }
        _ => current_name,
    };

    Some(format!("{to}{body}"))
}
