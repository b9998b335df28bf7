use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::value_objects::GaugeId;

/// Backend category names whose gauge ids differ on the template side.
static BLOCK_KEY_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("tecnicos", "tecnico"),
        ("ciclo", "ciclos"),
        ("risco", "riscos"),
    ])
});

/// Resolve the gauge id for a backend category key. Unknown keys map to
/// themselves.
pub fn map_block_key(key: &str) -> GaugeId {
    GaugeId::new(*BLOCK_KEY_MAP.get(key).unwrap_or(&key))
}
