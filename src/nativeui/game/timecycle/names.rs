//! Names of time cycle modifiers seen so far. The engine only keeps hashes.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::hash::{joaat, Hash};

lazy_static! {
    static ref KNOWN_NAMES: RwLock<HashMap<Hash, String>> = RwLock::new(HashMap::new());
}

/// Remembers `name` and returns its hash.
pub fn register(name: &str) -> Hash {
    let hash = joaat(name);
    match KNOWN_NAMES.write() {
        Ok(mut names) => {
            names.insert(hash, name.to_string());
        }
        Err(_) => warn!("Known names lock is poisoned, `{}` is not remembered", name)
    }
    hash
}

pub fn lookup(hash: Hash) -> Option<String> {
    KNOWN_NAMES.read().ok().and_then(|names| names.get(&hash).cloned())
}

/// `name` if it was registered, the hash in hex otherwise.
pub fn display_name(hash: Hash) -> String {
    lookup(hash).unwrap_or_else(|| format!("0x{:08X}", hash))
}
