use std::alloc::Layout;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

use crate::error::{Error, Result};

/// Heap the engine's own containers are allocated from. Arrays that belong to the
/// game must only ever be grown or released through the game's allocator.
pub trait NativeAllocator: Send + Sync {
    unsafe fn allocate(&self, size: usize, align: usize) -> *mut u8;
    unsafe fn free(&self, ptr: *mut u8);
}

/// Engine array: pointer, element count and capacity, both 16 bit.
#[repr(C)]
pub struct AtArray<T> {
    items: *mut T,
    count: u16,
    size: u16
}

impl<T> AtArray<T> {
    #[inline]
    pub fn empty() -> AtArray<T> {
        AtArray {
            items: std::ptr::null_mut(),
            count: 0,
            size: 0
        }
    }

    /// # Safety
    /// `items` must be valid for `size` elements, the first `count` initialized.
    pub unsafe fn from_raw_parts(items: *mut T, count: u16, size: u16) -> AtArray<T> {
        AtArray { items, count, size }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count >= self.size
    }

    pub fn as_ptr(&self) -> *const T {
        self.items
    }

    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Grows the backing storage so `additional` more elements fit, copying the
    /// live elements over and releasing the old block.
    pub fn reserve(&mut self, additional: usize, allocator: &dyn NativeAllocator) -> Result<()> {
        let required = self.len() + additional;
        if required <= self.capacity() {
            return Ok(());
        }
        if required > u16::MAX as usize {
            return Err(Error::CapacityExceeded(u16::MAX as usize));
        }
        let capacity = required.max(self.capacity() * 2).max(4).min(u16::MAX as usize);
        let bytes = capacity * std::mem::size_of::<T>();
        let items = unsafe { allocator.allocate(bytes, std::mem::align_of::<T>()) }.cast::<T>();
        if items.is_null() {
            return Err(Error::Allocation(bytes));
        }
        unsafe {
            if !self.items.is_null() {
                std::ptr::copy_nonoverlapping(self.items, items, self.len());
                allocator.free(self.items.cast());
            }
        }
        debug!("Grew native array from {} to {} entries", self.size, capacity);
        self.items = items;
        self.size = capacity as u16;
        Ok(())
    }

    pub fn push_within_capacity(&mut self, value: T) -> std::result::Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        unsafe { self.items.add(self.len()).write(value) };
        self.count += 1;
        Ok(())
    }

    pub fn push(&mut self, value: T, allocator: &dyn NativeAllocator) -> Result<()> {
        self.reserve(1, allocator)?;
        self.push_within_capacity(value)
            .map_err(|_| Error::CapacityExceeded(self.capacity()))
    }

    /// Inserts at `index`, shifting the tail one slot up.
    pub fn insert(&mut self, index: usize, value: T, allocator: &dyn NativeAllocator) -> Result<()> {
        if index > self.len() {
            return Err(Error::out_of_range("index", index, 0, self.len()));
        }
        self.reserve(1, allocator)?;
        unsafe {
            let slot = self.items.add(index);
            std::ptr::copy(slot, slot.add(1), self.len() - index);
            slot.write(value);
        }
        self.count += 1;
        Ok(())
    }

    /// Removes the element at `index` and closes the gap.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        unsafe {
            let slot = self.items.add(index);
            let value = slot.read();
            std::ptr::copy(slot.add(1), slot, self.len() - index - 1);
            self.count -= 1;
            Some(value)
        }
    }
}

impl<T> Deref for AtArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        if self.items.is_null() {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(self.items, self.len()) }
        }
    }
}

impl<T> DerefMut for AtArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        if self.items.is_null() {
            &mut []
        } else {
            unsafe { std::slice::from_raw_parts_mut(self.items, self.len()) }
        }
    }
}

/// Process heap allocator, remembering layouts so blocks can be released by pointer.
#[derive(Default)]
pub struct SystemAllocator {
    layouts: Mutex<HashMap<usize, Layout>>
}

impl SystemAllocator {
    pub fn new() -> SystemAllocator {
        SystemAllocator::default()
    }

    pub fn live_allocations(&self) -> usize {
        self.layouts.lock().map(|l| l.len()).unwrap_or(0)
    }
}

impl NativeAllocator for SystemAllocator {
    unsafe fn allocate(&self, size: usize, align: usize) -> *mut u8 {
        let layout = match Layout::from_size_align(size.max(1), align.max(1)) {
            Ok(layout) => layout,
            Err(_) => return std::ptr::null_mut()
        };
        let ptr = std::alloc::alloc_zeroed(layout);
        if !ptr.is_null() {
            if let Ok(mut layouts) = self.layouts.lock() {
                layouts.insert(ptr as usize, layout);
            }
        }
        ptr
    }

    unsafe fn free(&self, ptr: *mut u8) {
        let layout = self.layouts.lock().ok().and_then(|mut l| l.remove(&(ptr as usize)));
        match layout {
            Some(layout) => std::alloc::dealloc(ptr, layout),
            None => warn!("Refusing to free foreign block at {:p}", ptr)
        }
    }
}

#[cfg(all(windows, target_arch = "x86_64"))]
pub use self::game::GameAllocator;

#[cfg(all(windows, target_arch = "x86_64"))]
mod game {
    use std::arch::asm;

    use crate::error::Result;
    use crate::pattern::MemoryRegion;

    use super::NativeAllocator;

    #[repr(C)]
    struct SysMemAllocatorVT {
        destructor: usize,
        set_quit_on_fail: usize,
        allocate: unsafe extern "C" fn(*mut SysMemAllocator, usize, usize, i32) -> *mut u8,
        try_allocate: usize,
        free: unsafe extern "C" fn(*mut SysMemAllocator, *mut u8),
    }

    #[repr(C)]
    struct SysMemAllocator {
        vtable: *const SysMemAllocatorVT
    }

    unsafe fn read_gs_qword(offset: u32) -> u64 {
        let out: u64;
        asm!(
            "mov {}, gs:[{:e}]",
            lateout(reg) out,
            in(reg) offset,
            options(nostack, pure, readonly),
        );
        out
    }

    /// The engine's per-thread `sysMemAllocator`.
    pub struct GameAllocator {
        tls_offset: u32
    }

    impl GameAllocator {
        pub fn resolve(mem: &MemoryRegion, pattern: &str) -> Result<GameAllocator> {
            let region = mem.find_str(pattern, "allocator TLS offset")?;
            let tls_offset = unsafe { region.add(1).as_ptr().cast::<u32>().read_unaligned() };
            info!("Game allocator TLS offset: 0x{:X}", tls_offset);
            Ok(GameAllocator { tls_offset })
        }

        unsafe fn current(&self) -> *mut SysMemAllocator {
            let module_tls = *(read_gs_qword(88) as *mut *mut u8);
            *module_tls.add(self.tls_offset as usize).cast::<*mut SysMemAllocator>()
        }
    }

    impl NativeAllocator for GameAllocator {
        unsafe fn allocate(&self, size: usize, align: usize) -> *mut u8 {
            let allocator = self.current();
            ((*(*allocator).vtable).allocate)(allocator, size, align, 0)
        }

        unsafe fn free(&self, ptr: *mut u8) {
            let allocator = self.current();
            ((*(*allocator).vtable).free)(allocator, ptr)
        }
    }
}
