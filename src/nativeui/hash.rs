use std::num::Wrapping;

pub type Hash = u32;

/// Jenkins one-at-a-time hash as used by the engine for names, lowercased first.
pub fn joaat<S>(s: S) -> Hash where S: AsRef<str> {
    let mut hash = Wrapping(0u32);
    for b in s.as_ref().bytes() {
        hash += Wrapping(b.to_ascii_lowercase() as u32);
        hash += hash << 10;
        hash ^= hash >> 6;
    }
    hash += hash << 3;
    hash ^= hash >> 11;
    hash += hash << 15;
    hash.0
}

pub trait Hashable {
    fn joaat(&self) -> Hash;
}

impl<'a> Hashable for &'a str {
    fn joaat(&self) -> Hash {
        joaat(self)
    }
}

impl Hashable for String {
    fn joaat(&self) -> Hash {
        joaat(self)
    }
}

impl Hashable for Hash {
    fn joaat(&self) -> Hash {
        *self
    }
}
