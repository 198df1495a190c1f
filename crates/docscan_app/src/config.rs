use std::fs;
use std::path::Path;

use anyhow::Context;
use docscan_core::ExpectedStatusMap;
use scan_logging::scan_info;

/// Load the expected-status map.
///
/// Without a path the built-in PEP vocabulary applies. A path that cannot be
/// read or parsed is a configuration error and fatal: silently falling back
/// would change which statuses reconcile.
pub fn load_expected_status(path: Option<&Path>) -> anyhow::Result<ExpectedStatusMap> {
    let Some(path) = path else {
        return Ok(ExpectedStatusMap::builtin());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read expected-status map from {path:?}"))?;
    let map: ExpectedStatusMap = ron::from_str(&content)
        .with_context(|| format!("failed to parse expected-status map from {path:?}"))?;

    scan_info!("Loaded expected-status map from {:?}", path);
    Ok(map)
}
