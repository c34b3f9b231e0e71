use super::domain::CoreValue;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Tension at or above this level is reported as a profile conflict.
pub const SIGNIFICANT_TENSION: u8 = 5;

const TENSION_ENTRIES: &[(CoreValue, CoreValue, u8)] = &[
    (CoreValue::Security, CoreValue::Adventure, 8),
    (CoreValue::Security, CoreValue::Autonomy, 6),
    (CoreValue::Balance, CoreValue::Challenge, 7),
    (CoreValue::Balance, CoreValue::Leadership, 6),
    (CoreValue::Balance, CoreValue::Growth, 5),
    (CoreValue::Security, CoreValue::Creativity, 5),
    (CoreValue::Recognition, CoreValue::Authenticity, 6),
    (CoreValue::Family, CoreValue::Challenge, 7),
    (CoreValue::Family, CoreValue::Leadership, 8),
    (CoreValue::Family, CoreValue::Adventure, 9),
    (CoreValue::Mastery, CoreValue::Variety, 6),
    (CoreValue::Service, CoreValue::Recognition, 4),
    (CoreValue::Spirituality, CoreValue::Recognition, 7),
];

fn pair_key(a: CoreValue, b: CoreValue) -> (CoreValue, CoreValue) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn tension_table() -> &'static BTreeMap<(CoreValue, CoreValue), u8> {
    static TABLE: OnceLock<BTreeMap<(CoreValue, CoreValue), u8>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TENSION_ENTRIES
            .iter()
            .map(|&(a, b, level)| (pair_key(a, b), level))
            .collect()
    })
}

/// Tension (1-10) between two values, independent of argument order.
pub fn tension_between(a: CoreValue, b: CoreValue) -> Option<u8> {
    tension_table().get(&pair_key(a, b)).copied()
}
