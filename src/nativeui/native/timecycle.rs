use std::marker::PhantomData;

use serde_derive::{Deserialize, Serialize};

use crate::error::Result;
use crate::hash::Hash;
use crate::native::alloc::{AtArray, NativeAllocator};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModEntry {
    pub mod_type: i32,
    pub value1: f32,
    pub value2: f32,
}

impl ModEntry {
    pub fn new(mod_type: i32, value1: f32, value2: f32) -> ModEntry {
        ModEntry { mod_type, value1, value2 }
    }

    pub fn values(&self) -> (f32, f32) {
        (self.value1, self.value2)
    }
}

/// A modifier as the engine stores it. `mods` is kept sorted by `mod_type`,
/// the engine looks mods up by binary search.
#[repr(C)]
pub struct CTimeCycleModifier {
    pub mods: AtArray<ModEntry>,
    pub name: Hash,
    _pad14: u32,
    _unk18: u64,
    pub flags: u32,
    _pad24: u32,
}

impl CTimeCycleModifier {
    pub fn new(name: Hash, flags: u32) -> CTimeCycleModifier {
        CTimeCycleModifier {
            mods: AtArray::empty(),
            name,
            _pad14: 0,
            _unk18: 0,
            flags,
            _pad24: 0
        }
    }

    /// Position of `mod_type`, or where it would have to be inserted.
    pub fn search_mod(&self, mod_type: i32) -> std::result::Result<usize, usize> {
        self.mods.binary_search_by_key(&mod_type, |m| m.mod_type)
    }

    pub fn find_mod(&self, mod_type: i32) -> Option<usize> {
        self.search_mod(mod_type).ok()
    }

    /// Writes `entry` in place, replacing an entry of the same type. Growing past
    /// the native capacity goes through `allocator`.
    pub fn insert_mod(&mut self, entry: ModEntry, allocator: &dyn NativeAllocator) -> Result<usize> {
        match self.search_mod(entry.mod_type) {
            Ok(index) => {
                self.mods[index] = entry;
                Ok(index)
            }
            Err(index) => {
                self.mods.insert(index, entry, allocator)?;
                Ok(index)
            }
        }
    }

    pub fn remove_mod(&mut self, index: usize) -> Option<ModEntry> {
        self.mods.remove(index)
    }

    pub fn clear_mods(&mut self) {
        self.mods.clear()
    }

    pub fn sort_mods(&mut self) {
        self.mods.sort_by_key(|m| m.mod_type)
    }
}

/// Typed accessor for a field at a fixed offset inside a native object.
pub struct NativeField<T> {
    offset: usize,
    _ty: PhantomData<T>
}

impl<T> NativeField<T> {
    pub const fn new(offset: usize) -> NativeField<T> {
        NativeField { offset, _ty: PhantomData }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// # Safety
    /// `base` must point to an object that has a `T` at this field's offset.
    pub unsafe fn ptr(&self, base: *mut u8) -> *mut T {
        base.add(self.offset).cast()
    }

    /// # Safety
    /// See [`NativeField::ptr`].
    pub unsafe fn read(&self, base: *mut u8) -> T where T: Copy {
        self.ptr(base).read_unaligned()
    }

    /// # Safety
    /// See [`NativeField::ptr`].
    pub unsafe fn write(&self, base: *mut u8, value: T) {
        self.ptr(base).write_unaligned(value)
    }
}

/// Field offsets inside the engine's time cycle manager.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeCycleLayout {
    pub modifiers: usize,
    pub current_modifier_index: usize,
    pub current_modifier_strength: usize,
    pub transition_modifier_index: usize,
    pub transition_current_strength: usize,
    pub transition_speed: usize,
}

impl Default for TimeCycleLayout {
    fn default() -> Self {
        TimeCycleLayout {
            modifiers: 0x40,
            current_modifier_index: 0x2560,
            current_modifier_strength: 0x2564,
            transition_modifier_index: 0x2568,
            transition_current_strength: 0x256C,
            transition_speed: 0x2570
        }
    }
}

impl TimeCycleLayout {
    pub fn modifiers(&self) -> NativeField<AtArray<*mut CTimeCycleModifier>> {
        NativeField::new(self.modifiers)
    }

    pub fn current_modifier_index(&self) -> NativeField<i32> {
        NativeField::new(self.current_modifier_index)
    }

    pub fn current_modifier_strength(&self) -> NativeField<f32> {
        NativeField::new(self.current_modifier_strength)
    }

    pub fn transition_modifier_index(&self) -> NativeField<i32> {
        NativeField::new(self.transition_modifier_index)
    }

    pub fn transition_current_strength(&self) -> NativeField<f32> {
        NativeField::new(self.transition_current_strength)
    }

    pub fn transition_speed(&self) -> NativeField<f32> {
        NativeField::new(self.transition_speed)
    }

    /// Bytes needed to hold every field.
    pub fn span(&self) -> usize {
        let scalars = [
            self.current_modifier_index,
            self.current_modifier_strength,
            self.transition_modifier_index,
            self.transition_current_strength,
            self.transition_speed
        ];
        let array_end = self.modifiers + std::mem::size_of::<AtArray<*mut CTimeCycleModifier>>();
        scalars.iter().map(|o| o + 4).fold(array_end, usize::max)
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::{CTimeCycleModifier, ModEntry, TimeCycleLayout};
    use crate::native::alloc::SystemAllocator;

    fn modifier_with(allocator: &SystemAllocator, types: &[i32]) -> CTimeCycleModifier {
        let mut modifier = CTimeCycleModifier::new(0x1234, 0);
        for t in types {
            modifier.insert_mod(ModEntry::new(*t, *t as f32, 0.0), allocator).unwrap();
        }
        modifier
    }

    fn types(modifier: &CTimeCycleModifier) -> Vec<i32> {
        modifier.mods.iter().map(|m| m.mod_type).collect()
    }

    #[test]
    fn native_layout() {
        assert_eq!(size_of::<ModEntry>(), 12);
        assert_eq!(size_of::<CTimeCycleModifier>(), 0x28);
        assert_eq!(offset_of!(CTimeCycleModifier, name), 0x10);
        assert_eq!(offset_of!(CTimeCycleModifier, flags), 0x20);
    }

    #[test]
    fn inserts_keep_mods_sorted() {
        let allocator = SystemAllocator::new();
        let modifier = modifier_with(&allocator, &[77, 3, 400, 0, 91]);
        assert_eq!(types(&modifier), vec![0, 3, 77, 91, 400]);
        assert_eq!(modifier.find_mod(91), Some(3));
        assert_eq!(modifier.find_mod(92), None);
        assert_eq!(modifier.search_mod(92), Err(4));
    }

    #[test]
    fn insert_replaces_existing_type() {
        let allocator = SystemAllocator::new();
        let mut modifier = modifier_with(&allocator, &[5, 10]);
        let index = modifier.insert_mod(ModEntry::new(10, 1.5, 2.5), &allocator).unwrap();
        assert_eq!(index, 1);
        assert_eq!(modifier.mods.len(), 2);
        assert_eq!(modifier.mods[1].values(), (1.5, 2.5));
    }

    #[test]
    fn remove_and_clear() {
        let allocator = SystemAllocator::new();
        let mut modifier = modifier_with(&allocator, &[1, 2, 3]);
        let removed = modifier.remove_mod(modifier.find_mod(2).unwrap()).unwrap();
        assert_eq!(removed.mod_type, 2);
        assert_eq!(types(&modifier), vec![1, 3]);
        assert_eq!(modifier.find_mod(3), Some(1));
        modifier.clear_mods();
        assert_eq!(modifier.find_mod(1), None);
    }

    #[test]
    fn sort_repairs_unsorted_arrays() {
        let allocator = SystemAllocator::new();
        let mut modifier = modifier_with(&allocator, &[]);
        modifier.mods.reserve(3, &allocator).unwrap();
        for t in [9, 4, 6] {
            modifier.mods.push_within_capacity(ModEntry::new(t, 0.0, 0.0)).unwrap();
        }
        modifier.sort_mods();
        assert_eq!(types(&modifier), vec![4, 6, 9]);
    }

    #[test]
    fn layout_span_covers_last_field() {
        let layout = TimeCycleLayout::default();
        assert_eq!(layout.span(), 0x2574);
        let layout: TimeCycleLayout = serde_json::from_str(r#"{ "modifiers": 8 }"#).unwrap();
        assert_eq!(layout.modifiers, 8);
        assert_eq!(layout.transition_speed, TimeCycleLayout::default().transition_speed);
    }
}
