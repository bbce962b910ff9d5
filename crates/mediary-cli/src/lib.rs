use std::collections::BTreeMap;

use mediary_core::classify::MediaKind;

/// Count kinds in a classified batch for one-line summaries, e.g.
/// `album: 2, film: 1, unknown: 1`.
pub fn kind_summary(kinds: &[MediaKind]) -> String {
    let mut counts: BTreeMap<MediaKind, usize> = BTreeMap::new();
    for kind in kinds {
        *counts.entry(*kind).or_default() += 1;
    }
    counts
        .iter()
        .map(|(kind, count)| format!("{}: {}", kind, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
