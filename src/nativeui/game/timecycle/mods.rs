use crate::error::{Error, Result};
use crate::native::alloc::NativeAllocator;
use crate::native::timecycle::{CTimeCycleModifier, ModEntry};

use super::{TimeCycle, TimeCycleModifierModType};

/// Dictionary view over the sorted mod array of a modifier.
///
/// Every access runs under the time cycle's edit lock and reads hand out
/// copies, so a view never keeps a borrow into the native array while another
/// view of the same modifier grows it.
///
/// Entries whose type is not a known [`TimeCycleModifierModType`] stay in the
/// native array; they are skipped by the typed iterators and visible through
/// [`TimeCycleModifierMods::entries`].
pub struct TimeCycleModifierMods<'a> {
    time_cycle: &'a TimeCycle,
    native: *mut CTimeCycleModifier
}

impl<'a> TimeCycleModifierMods<'a> {
    pub(crate) fn new(time_cycle: &'a TimeCycle, native: *mut CTimeCycleModifier) -> TimeCycleModifierMods<'a> {
        TimeCycleModifierMods { time_cycle, native }
    }

    fn with_native<F, R>(&self, f: F) -> R where F: FnOnce(&mut CTimeCycleModifier, &dyn NativeAllocator) -> R {
        let _edit = self.time_cycle.lock_edits();
        f(unsafe { &mut *self.native }, self.time_cycle.allocator())
    }

    pub fn len(&self) -> usize {
        self.with_native(|m, _| m.mods.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the raw native entries, sorted by type.
    pub fn entries(&self) -> Vec<ModEntry> {
        self.with_native(|m, _| m.mods.to_vec())
    }

    pub fn get_at(&self, index: usize) -> Result<(f32, f32)> {
        self.with_native(|m, _| {
            check_index(m, index)?;
            Ok(m.mods[index].values())
        })
    }

    pub fn set_at(&mut self, index: usize, (value1, value2): (f32, f32)) -> Result<()> {
        self.with_native(|m, _| {
            check_index(m, index)?;
            let entry = &mut m.mods[index];
            entry.value1 = value1;
            entry.value2 = value2;
            Ok(())
        })
    }

    pub fn find_index(&self, mod_type: TimeCycleModifierModType) -> Option<usize> {
        self.with_native(|m, _| m.find_mod(mod_type.value()))
    }

    pub fn contains_key(&self, mod_type: TimeCycleModifierModType) -> bool {
        self.find_index(mod_type).is_some()
    }

    pub fn get(&self, mod_type: TimeCycleModifierModType) -> Result<(f32, f32)> {
        self.try_get(mod_type).ok_or(Error::MissingMod(mod_type))
    }

    pub fn try_get(&self, mod_type: TimeCycleModifierModType) -> Option<(f32, f32)> {
        self.with_native(|m, _| m.find_mod(mod_type.value()).map(|i| m.mods[i].values()))
    }

    /// Overwrites the values of `mod_type`, adding the mod if missing.
    pub fn set(&mut self, mod_type: TimeCycleModifierModType, (value1, value2): (f32, f32)) -> Result<()> {
        self.with_native(|m, allocator| {
            m.insert_mod(ModEntry::new(mod_type.value(), value1, value2), allocator)?;
            Ok(())
        })
    }

    pub fn add(&mut self, mod_type: TimeCycleModifierModType, (value1, value2): (f32, f32)) -> Result<()> {
        self.with_native(|m, allocator| {
            if m.find_mod(mod_type.value()).is_some() {
                return Err(Error::DuplicateMod(mod_type));
            }
            m.insert_mod(ModEntry::new(mod_type.value(), value1, value2), allocator)?;
            Ok(())
        })
    }

    pub fn remove(&mut self, mod_type: TimeCycleModifierModType) -> bool {
        self.with_native(|m, _| match m.find_mod(mod_type.value()) {
            Some(index) => m.remove_mod(index).is_some(),
            None => false
        })
    }

    /// Whether `mod_type` is present with exactly `values`.
    pub fn contains_entry(&self, mod_type: TimeCycleModifierModType, values: (f32, f32)) -> bool {
        self.try_get(mod_type) == Some(values)
    }

    /// Removes `mod_type` only if it holds exactly `values`.
    pub fn remove_entry(&mut self, mod_type: TimeCycleModifierModType, values: (f32, f32)) -> bool {
        self.with_native(|m, _| match m.find_mod(mod_type.value()) {
            Some(index) if m.mods[index].values() == values => m.remove_mod(index).is_some(),
            _ => false
        })
    }

    pub fn contains_value(&self, values: (f32, f32)) -> bool {
        self.with_native(|m, _| m.mods.iter().any(|e| e.values() == values))
    }

    pub fn clear(&mut self) {
        self.with_native(|m, _| {
            if !m.mods.is_empty() {
                m.clear_mods();
            }
        })
    }

    /// Snapshot of the known mods in type order.
    pub fn iter(&self) -> std::vec::IntoIter<(TimeCycleModifierModType, (f32, f32))> {
        self.with_native(|m, _| {
            m.mods.iter()
                .filter_map(|e| TimeCycleModifierModType::try_from(e.mod_type).ok().map(|t| (t, e.values())))
                .collect::<Vec<_>>()
        }).into_iter()
    }

    pub fn keys(&self) -> Vec<TimeCycleModifierModType> {
        self.iter().map(|(t, _)| t).collect()
    }

    pub fn values(&self) -> Vec<(f32, f32)> {
        self.iter().map(|(_, v)| v).collect()
    }
}

fn check_index(modifier: &CTimeCycleModifier, index: usize) -> Result<()> {
    let len = modifier.mods.len();
    if index >= len {
        return Err(Error::out_of_range("index", index as i64, 0, len as i64 - 1));
    }
    Ok(())
}
