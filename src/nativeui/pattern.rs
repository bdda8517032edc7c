use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    bytes: Vec<Option<u8>>
}

impl Pattern {
    /// Parses an IDA-style signature, `?` and `??` being wildcards.
    pub fn compile(pattern: &str) -> Result<Pattern> {
        let mut bytes = Vec::new();
        for b in pattern.split_whitespace() {
            if b == "?" || b == "??" {
                bytes.push(None);
            } else {
                let b = u8::from_str_radix(b, 16)
                    .map_err(|_| Error::InvalidPattern(b.to_string()))?;
                bytes.push(Some(b))
            }
        }
        if bytes.is_empty() {
            return Err(Error::InvalidPattern(pattern.to_string()));
        }
        Ok(Pattern { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn matches(&self, window: &[u8]) -> bool {
        window.len() >= self.bytes.len() && self.bytes.iter().zip(window)
            .all(|(p, b)| p.map_or(true, |p| p == *b))
    }

    pub fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        if haystack.len() < self.len() {
            return None;
        }
        (0..=haystack.len() - self.len()).find(|&i| self.matches(&haystack[i..]))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let symbols = self.bytes.iter()
            .map(|b| b.map_or_else(|| String::from("?"), |b| format!("{:02X}", b)))
            .collect::<Vec<_>>();
        f.pad(&symbols.join(" "))
    }
}

#[derive(Clone, Debug)]
pub struct MemoryRegion {
    base: *mut u8,
    size: usize
}

impl MemoryRegion {
    /// # Safety
    /// `base` must be readable for `size` bytes for as long as the region is used.
    pub unsafe fn new(base: *mut u8, size: usize) -> MemoryRegion {
        MemoryRegion { base, size }
    }

    #[cfg(windows)]
    pub fn image() -> MemoryRegion {
        use winapi::um::libloaderapi::GetModuleHandleA;
        use winapi::um::winnt::{IMAGE_DOS_HEADER, IMAGE_NT_HEADERS64};

        unsafe {
            let handle = GetModuleHandleA(std::ptr::null()) as *mut u8;
            let dos = handle.cast::<IMAGE_DOS_HEADER>().read_unaligned();
            let nt = handle.offset(dos.e_lfanew as isize).cast::<IMAGE_NT_HEADERS64>().read_unaligned();
            MemoryRegion {
                base: handle,
                size: nt.OptionalHeader.SizeOfImage as usize
            }
        }
    }

    pub fn find(&self, pattern: &Pattern) -> Option<MemoryRegion> {
        let haystack = unsafe { std::slice::from_raw_parts(self.base as *const u8, self.size) };
        pattern.find_in(haystack).map(|offset| MemoryRegion {
            base: unsafe { self.base.add(offset) },
            size: self.size - offset
        })
    }

    pub fn find_str(&self, pattern: &str, what: &'static str) -> Result<MemoryRegion> {
        let pattern = Pattern::compile(pattern)?;
        self.find(&pattern).ok_or(Error::PatternNotFound(what))
    }

    pub fn contains(&self, address: *const u8) -> bool {
        let address = address as usize;
        address >= self.base as usize && address < self.base as usize + self.size
    }

    pub unsafe fn add(&self, offset: usize) -> MemoryRegion {
        MemoryRegion {
            base: self.base.add(offset),
            size: self.size.saturating_sub(offset)
        }
    }

    /// Resolves the rip-relative displacement at the start of this region,
    /// `len` being the distance from the displacement to the next instruction.
    pub unsafe fn read_ptr(&self, len: usize) -> MemoryRegion {
        let displacement = self.base.cast::<i32>().read_unaligned();
        MemoryRegion {
            base: self.base.add(len).offset(displacement as isize),
            size: 0
        }
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.base
    }

    pub fn as_mut_ptr(&self) -> *mut u8 {
        self.base
    }
}

unsafe impl Sync for MemoryRegion {}
unsafe impl Send for MemoryRegion {}
