//! Long-press alternates for a base key.

use std::collections::HashSet;

/// Probe settings for one script.
#[derive(Debug, Clone)]
pub struct VariantProbe {
    /// Append `a` to the base key for its canonical form (abugidas).
    pub force_inherent: bool,
    /// Suffixes appended to the base key, in popup order.
    pub suffixes: Vec<String>,
}

/// Collect the distinct renderings of `base_key` with each probe suffix.
///
/// The canonical form comes first. A probe whose output is blank or equal
/// to the probe string itself (nothing was transliterated) is skipped.
pub fn generate<F>(base_key: &str, probe: &VariantProbe, transliterate: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    if base_key.is_empty() {
        return Vec::new();
    }

    let canonical = if probe.force_inherent {
        format!("{base_key}a")
    } else {
        base_key.to_string()
    };
    let probes = std::iter::once(canonical).chain(
        probe
            .suffixes
            .iter()
            .map(|suffix| format!("{base_key}{suffix}")),
    );

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for probe_input in probes {
        let rendered = transliterate(&probe_input);
        if rendered.trim().is_empty() || rendered == probe_input {
            continue;
        }
        if seen.insert(rendered.clone()) {
            out.push(rendered);
        }
    }
    out
}
