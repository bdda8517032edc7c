use crate::error::Result;
use crate::pattern::MemoryRegion;

use super::{NativeHandler, NativeTable, SetVectorResults};

const TABLE_PATTERN: &str = "76 32 48 8B 53 40";
const VECTOR_FIXER_PATTERN: &str = "83 79 18 ? 48 8B D1 74 4A FF 4A 18";

#[repr(C)]
struct NativeRegistration {
    next_registration_1: u64,
    _next_registration_2: u64,
    handlers: [NativeHandler; 7],
    num_entries_1: u32,
    num_entries_2: u32,
    _hashes: u64
}

impl NativeRegistration {
    unsafe fn next(&self) -> *mut NativeRegistration {
        let addr = (&self.next_registration_1 as *const u64).cast::<u32>();
        let mask = (addr as u64 as u32 ^ *addr.add(2)) as u64;
        ((mask << 32 | mask) ^ addr.cast::<u64>().read_unaligned()) as *mut NativeRegistration
    }

    unsafe fn len(&self) -> usize {
        let addr = &self.num_entries_1 as *const u32;
        (addr as u64 as u32 ^ self.num_entries_1 ^ self.num_entries_2) as usize
    }

    unsafe fn hash(&self, index: usize) -> u64 {
        let addr = (&self.next_registration_1 as *const u64).cast::<u32>().add(4 * index + 21);
        let mask = (addr as u64 as u32 ^ *addr.add(2)) as u64;
        (mask << 32 | mask) ^ addr.cast::<u64>().read_unaligned()
    }
}

#[repr(C)]
struct NativeRegistrationBuckets {
    entries: [*mut NativeRegistration; 0xFF],
    _unknown: u32,
    initialized: bool
}

/// The engine's obfuscated native registration table.
pub struct RegistrationTable {
    buckets: *mut NativeRegistrationBuckets,
    vector_fixer: SetVectorResults
}

unsafe impl Send for RegistrationTable {}
unsafe impl Sync for RegistrationTable {}

impl RegistrationTable {
    pub fn resolve(mem: &MemoryRegion) -> Result<RegistrationTable> {
        let buckets = mem.find_str(TABLE_PATTERN, "native registration table")?;
        let vector_fixer = mem.find_str(VECTOR_FIXER_PATTERN, "vector fixer")?;
        unsafe {
            let buckets = buckets.add(9).read_ptr(4).as_mut_ptr().cast::<NativeRegistrationBuckets>();
            info!("Native registration table at {:p} (initialized: {})", buckets, (*buckets).initialized);
            Ok(RegistrationTable {
                buckets,
                vector_fixer: std::mem::transmute::<*mut u8, SetVectorResults>(vector_fixer.as_mut_ptr())
            })
        }
    }
}

impl NativeTable for RegistrationTable {
    fn get_handler(&self, hash: u64) -> Option<NativeHandler> {
        unsafe {
            let mut registration = (*self.buckets).entries[(hash & 0xFF) as usize];
            while !registration.is_null() {
                let entries = (*registration).len().min(7);
                for i in 0..entries {
                    if (*registration).hash(i) == hash {
                        return Some((*registration).handlers[i]);
                    }
                }
                registration = (*registration).next();
            }
        }
        None
    }

    fn vector_fixer(&self) -> Option<SetVectorResults> {
        Some(self.vector_fixer)
    }
}
