use std::collections::{HashMap, HashSet};

/// Hands out unique component identifiers for scene base names.
///
/// The first scene with a given base name keeps it; later ones get `_1`,
/// `_2`, ... from a per-name counter. A suffixed name that is already taken
/// (for example by a scene literally named `foo_1`) is skipped.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    counters: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, base: &str) -> String {
        if !self.counters.contains_key(base) && !self.taken.contains(base) {
            self.counters.insert(base.to_string(), 0);
            self.taken.insert(base.to_string());
            return base.to_string();
        }

        let counter = self.counters.entry(base.to_string()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{base}_{counter}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
