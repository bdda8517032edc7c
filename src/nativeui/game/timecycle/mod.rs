use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::error::{Error, Result};
use crate::hash::{joaat, Hash, Hashable};
use crate::native::alloc::{AtArray, NativeAllocator};
use crate::native::timecycle::{CTimeCycleModifier, ModEntry, TimeCycleLayout};

pub mod mod_type;
pub mod mods;
pub mod names;

pub use self::mod_type::TimeCycleModifierModType;
pub use self::mods::TimeCycleModifierMods;

/// Engine lookup from a name hash to the modifier index, `-1` when missing.
pub type GetModifierIndex = unsafe extern "C" fn(*mut u8, *const Hash) -> i32;

lazy_static! {
    static ref TIME_CYCLE: RwLock<Option<Arc<TimeCycle>>> = RwLock::new(None);
}

pub fn install(time_cycle: TimeCycle) -> Arc<TimeCycle> {
    let time_cycle = Arc::new(time_cycle);
    match TIME_CYCLE.write() {
        Ok(mut current) => *current = Some(time_cycle.clone()),
        Err(_) => error!("Time cycle lock is poisoned, the new manager is not installed")
    }
    time_cycle
}

pub fn get() -> Result<Arc<TimeCycle>> {
    TIME_CYCLE.read().ok()
        .and_then(|t| t.clone())
        .ok_or(Error::TimeCycleMissing)
}

/// View of the engine's time cycle manager.
pub struct TimeCycle {
    base: *mut u8,
    layout: TimeCycleLayout,
    allocator: Box<dyn NativeAllocator>,
    index_lookup: Option<GetModifierIndex>,
    cache: Mutex<HashMap<Hash, usize>>,
    edits: Mutex<()>
}

unsafe impl Send for TimeCycle {}
unsafe impl Sync for TimeCycle {}

impl TimeCycle {
    /// # Safety
    /// `base` must point to a manager laid out as `layout` describes, alive for
    /// as long as the returned value.
    pub unsafe fn from_raw(base: *mut u8, layout: TimeCycleLayout, allocator: Box<dyn NativeAllocator>) -> TimeCycle {
        TimeCycle {
            base,
            layout,
            allocator,
            index_lookup: None,
            cache: Mutex::new(HashMap::new()),
            edits: Mutex::new(())
        }
    }

    /// # Safety
    /// `lookup` must accept this manager.
    pub unsafe fn with_index_lookup(mut self, lookup: GetModifierIndex) -> TimeCycle {
        self.index_lookup = Some(lookup);
        self
    }

    #[cfg(windows)]
    pub fn resolve(mem: &crate::pattern::MemoryRegion, settings: &crate::settings::TimeCycleSettings,
                   allocator: Box<dyn NativeAllocator>) -> Result<TimeCycle> {
        let manager = mem.find_str(&settings.manager_pattern, "time cycle manager")?;
        let base = unsafe { manager.add(settings.manager_offset).read_ptr(4).as_mut_ptr() };
        info!("Time cycle manager at {:p}", base);
        let mut time_cycle = unsafe { TimeCycle::from_raw(base, settings.layout, allocator) };
        if let Some(pattern) = &settings.index_lookup_pattern {
            match mem.find_str(pattern, "time cycle modifier index lookup") {
                Ok(lookup) => {
                    let lookup = unsafe { std::mem::transmute::<*mut u8, GetModifierIndex>(lookup.as_mut_ptr()) };
                    time_cycle.index_lookup = Some(lookup);
                }
                Err(e) => warn!("{}, falling back to scanning modifiers", e)
            }
        }
        Ok(time_cycle)
    }

    pub fn layout(&self) -> &TimeCycleLayout {
        &self.layout
    }

    pub fn allocator(&self) -> &dyn NativeAllocator {
        self.allocator.as_ref()
    }

    /// Serializes changes to native arrays owned by this manager.
    pub(crate) fn lock_edits(&self) -> MutexGuard<()> {
        self.edits.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn modifiers(&self) -> &AtArray<*mut CTimeCycleModifier> {
        unsafe { &*self.layout.modifiers().ptr(self.base) }
    }

    #[allow(clippy::mut_from_ref)]
    fn modifiers_mut(&self) -> &mut AtArray<*mut CTimeCycleModifier> {
        unsafe { &mut *self.layout.modifiers().ptr(self.base) }
    }

    pub fn count(&self) -> usize {
        self.modifiers().len()
    }

    pub fn get_by_index(&self, index: usize) -> Result<TimeCycleModifier> {
        let count = self.count();
        if index >= count {
            return Err(Error::out_of_range("index", index as i64, 0, count as i64 - 1));
        }
        let native = self.modifiers()[index];
        if native.is_null() {
            return Err(Error::EmptySlot(index));
        }
        let hash = unsafe { (*native).name };
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(hash, index);
        }
        Ok(TimeCycleModifier { time_cycle: self, native, index })
    }

    fn cached(&self, hash: Hash) -> Option<TimeCycleModifier> {
        let index = *self.cache.lock().ok()?.get(&hash)?;
        let modifier = self.get_by_index(index).ok()?;
        if modifier.hash() == hash {
            Some(modifier)
        } else {
            if let Ok(mut cache) = self.cache.lock() {
                cache.remove(&hash);
            }
            None
        }
    }

    fn find_index(&self, hash: Hash) -> Option<usize> {
        let modifiers = self.modifiers();
        let matches = |index: usize| modifiers.get(index)
            .map_or(false, |m| !m.is_null() && unsafe { (**m).name } == hash);
        if let Some(lookup) = self.index_lookup {
            let index = unsafe { lookup(self.base, &hash) };
            match usize::try_from(index) {
                Ok(index) if matches(index) => return Some(index),
                Ok(index) => warn!("Engine returned index {} for 0x{:08X}, scanning instead", index, hash),
                Err(_) => {}
            }
        }
        (0..modifiers.len()).find(|&i| matches(i))
    }

    pub fn get_by_hash(&self, hash: Hash) -> Option<TimeCycleModifier> {
        if let Some(modifier) = self.cached(hash) {
            return Some(modifier);
        }
        self.find_index(hash).and_then(|index| self.get_by_index(index).ok())
    }

    /// Looks a modifier up by its case insensitive name, remembering the name.
    pub fn get_by_name(&self, name: &str) -> Option<TimeCycleModifier> {
        let hash = names::register(name);
        self.get_by_hash(hash)
    }

    pub fn get_all(&self) -> Vec<TimeCycleModifier> {
        (0..self.count()).filter_map(|i| self.get_by_index(i).ok()).collect()
    }

    /// Accepts a name or its hash.
    pub fn is_name_used<H>(&self, name: H) -> bool where H: Hashable {
        self.get_by_hash(name.joaat()).is_some()
    }

    fn current_modifier_index(&self) -> i32 {
        unsafe { self.layout.current_modifier_index().read(self.base) }
    }

    fn transition_modifier_index(&self) -> i32 {
        unsafe { self.layout.transition_modifier_index().read(self.base) }
    }

    /// The active modifier, or the one being transitioned to.
    pub fn current_modifier(&self) -> Option<TimeCycleModifier> {
        let mut index = self.current_modifier_index();
        if index == -1 {
            index = self.transition_modifier_index();
        }
        usize::try_from(index).ok().and_then(|i| self.get_by_index(i).ok())
    }

    /// Activates `modifier`, `None` clears both the active and transitioning modifier.
    pub fn set_current_modifier(&self, modifier: Option<&TimeCycleModifier>) {
        let layout = &self.layout;
        unsafe {
            match modifier.filter(|m| m.is_valid()) {
                Some(modifier) => layout.current_modifier_index().write(self.base, modifier.index as i32),
                None => {
                    layout.current_modifier_index().write(self.base, -1);
                    layout.transition_modifier_index().write(self.base, -1);
                    layout.transition_current_strength().write(self.base, 0.0);
                    layout.transition_speed().write(self.base, 0.0);
                }
            }
        }
    }

    pub fn strength(&self) -> f32 {
        unsafe { self.layout.current_modifier_strength().read(self.base) }
    }

    pub fn set_strength(&self, strength: f32) {
        unsafe { self.layout.current_modifier_strength().write(self.base, strength) }
    }

    pub fn transition_current_strength(&self) -> f32 {
        unsafe { self.layout.transition_current_strength().read(self.base) }
    }

    pub fn transition_speed(&self) -> f32 {
        unsafe { self.layout.transition_speed().read(self.base) }
    }

    /// Adds a new modifier to the engine. Fails if `name` is taken or a mod type repeats.
    pub fn create_modifier(&self, name: &str, flags: u32, mods: &[(TimeCycleModifierModType, f32, f32)]) -> Result<TimeCycleModifier> {
        let mut seen = Vec::with_capacity(mods.len());
        for (mod_type, _, _) in mods {
            if seen.contains(mod_type) {
                return Err(Error::DuplicateMod(*mod_type));
            }
            seen.push(*mod_type);
        }
        let entries = mods.iter()
            .map(|(t, v1, v2)| ModEntry::new(t.value(), *v1, *v2))
            .collect::<Vec<_>>();
        self.create_raw(name, flags, &entries)
    }

    /// Adds a new modifier with the flags and mods of `template`.
    pub fn create_from_template(&self, name: &str, template: &TimeCycleModifier) -> Result<TimeCycleModifier> {
        let entries = template.mods().entries();
        self.create_raw(name, template.flags(), &entries)
    }

    fn fill(modifier: &mut CTimeCycleModifier, entries: &[ModEntry], allocator: &dyn NativeAllocator) -> Result<()> {
        modifier.mods.reserve(entries.len(), allocator)?;
        for entry in entries {
            modifier.insert_mod(*entry, allocator)?;
        }
        Ok(())
    }

    fn create_raw(&self, name: &str, flags: u32, entries: &[ModEntry]) -> Result<TimeCycleModifier> {
        if self.is_name_used(name) {
            return Err(Error::NameInUse(name.to_string()));
        }
        let hash = joaat(name);

        let _edit = self.lock_edits();
        let allocator = self.allocator();
        let size = std::mem::size_of::<CTimeCycleModifier>();
        let native = unsafe { allocator.allocate(size, std::mem::align_of::<CTimeCycleModifier>()) }
            .cast::<CTimeCycleModifier>();
        if native.is_null() {
            return Err(Error::Allocation(size));
        }
        unsafe { native.write(CTimeCycleModifier::new(hash, flags)) };

        let filled = unsafe { TimeCycle::fill(&mut *native, entries, allocator) }
            .and_then(|_| self.modifiers_mut().push(native, allocator));
        if let Err(e) = filled {
            unsafe {
                let mods = (*native).mods.as_ptr() as *mut u8;
                if !mods.is_null() {
                    allocator.free(mods);
                }
                allocator.free(native.cast());
            }
            return Err(e);
        }

        let index = self.count() - 1;
        names::register(name);
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(hash, index);
        }
        info!("Created time cycle modifier `{}` at index {} with {} mods", name, index, entries.len());
        Ok(TimeCycleModifier { time_cycle: self, native, index })
    }
}

/// A modifier living in the engine's modifier array.
#[derive(Clone, Copy)]
pub struct TimeCycleModifier<'a> {
    time_cycle: &'a TimeCycle,
    native: *mut CTimeCycleModifier,
    index: usize
}

impl<'a> TimeCycleModifier<'a> {
    pub fn hash(&self) -> Hash {
        unsafe { (*self.native).name }
    }

    /// The registered name, or the hash as `0x%08X`.
    pub fn name(&self) -> String {
        names::display_name(self.hash())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn flags(&self) -> u32 {
        unsafe { (*self.native).flags }
    }

    pub fn address(&self) -> *mut CTimeCycleModifier {
        self.native
    }

    pub fn is_valid(&self) -> bool {
        !self.native.is_null()
    }

    pub fn is_active(&self) -> bool {
        let index = self.index as i32;
        self.time_cycle.current_modifier_index() == index || self.time_cycle.transition_modifier_index() == index
    }

    pub fn set_active(&self, active: bool) {
        if active {
            self.time_cycle.set_current_modifier(Some(self));
        } else if self.is_active() {
            self.time_cycle.set_current_modifier(None);
        }
    }

    pub fn is_in_transition(&self) -> bool {
        self.time_cycle.transition_modifier_index() == self.index as i32
    }

    /// Fades this modifier in over `time` seconds, up to the current strength.
    pub fn set_active_with_transition(&self, time: f32) {
        self.set_active_with_transition_to(time, self.time_cycle.strength())
    }

    pub fn set_active_with_transition_to(&self, time: f32, target_strength: f32) {
        let time_cycle = self.time_cycle;
        let layout = &time_cycle.layout;
        let base = time_cycle.base;
        unsafe {
            layout.current_modifier_strength().write(base, target_strength);
            if time <= 0.0 {
                layout.transition_modifier_index().write(base, -1);
                layout.transition_current_strength().write(base, 0.0);
                layout.transition_speed().write(base, 0.0);
                layout.current_modifier_index().write(base, self.index as i32);
                return;
            }
            layout.current_modifier_index().write(base, -1);
            layout.transition_current_strength().write(base, 0.0);
            layout.transition_modifier_index().write(base, self.index as i32);
            layout.transition_speed().write(base, target_strength / time);
        }
    }

    pub fn mods(&self) -> TimeCycleModifierMods<'a> {
        TimeCycleModifierMods::new(self.time_cycle, self.native)
    }
}

impl<'a> std::fmt::Debug for TimeCycleModifier<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("TimeCycleModifier")
            .field("name", &self.name())
            .field("index", &self.index)
            .field("flags", &self.flags())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::{names, TimeCycle, TimeCycleModifierModType as ModType};
    use crate::error::Error;
    use crate::hash::{joaat, Hash};
    use crate::native::alloc::{NativeAllocator, SystemAllocator};
    use crate::native::timecycle::TimeCycleLayout;

    /// A zeroed manager with no active modifier, backed by a local buffer.
    pub(crate) struct FakeTimeCycle {
        pub buffer: Vec<u64>,
        pub time_cycle: TimeCycle
    }

    pub(crate) fn fake_time_cycle() -> FakeTimeCycle {
        fake_time_cycle_with(Box::new(SystemAllocator::new()))
    }

    fn fake_time_cycle_with(allocator: Box<dyn NativeAllocator>) -> FakeTimeCycle {
        let layout = TimeCycleLayout::default();
        let mut buffer = vec![0u64; layout.span() / 8 + 1];
        let time_cycle = unsafe {
            TimeCycle::from_raw(buffer.as_mut_ptr().cast(), layout, allocator)
        };
        time_cycle.set_current_modifier(None);
        FakeTimeCycle { buffer, time_cycle }
    }

    fn with_modifiers(names: &[&str]) -> FakeTimeCycle {
        let fake = fake_time_cycle();
        for name in names {
            fake.time_cycle.create_modifier(name, 0, &[]).unwrap();
        }
        fake
    }

    #[test]
    fn create_and_lookup() {
        let fake = with_modifiers(&["tc_test_a", "tc_test_b"]);
        let time_cycle = &fake.time_cycle;
        let modifier = time_cycle.create_modifier("tc_test_c", 7, &[
            (ModType::LightDirMult, 2.0, 0.0),
            (ModType::LightDirColR, 1.0, 0.5)
        ]).unwrap();
        assert_eq!(modifier.index(), 2);
        assert_eq!(modifier.flags(), 7);
        assert_eq!(modifier.name(), "tc_test_c");
        assert_eq!(time_cycle.count(), 3);
        assert_eq!(modifier.mods().keys(), vec![ModType::LightDirColR, ModType::LightDirMult]);

        assert_eq!(time_cycle.get_by_name("TC_TEST_B").unwrap().index(), 1);
        assert_eq!(time_cycle.get_by_hash(joaat("tc_test_a")).unwrap().index(), 0);
        assert!(time_cycle.get_by_hash(0x1234_5678).is_none());
        assert_eq!(time_cycle.get_all().len(), 3);

        assert!(time_cycle.is_name_used("TC_TEST_A"));
        assert!(time_cycle.is_name_used(String::from("tc_test_c")));
        assert!(time_cycle.is_name_used(joaat("tc_test_b")));
        assert!(!time_cycle.is_name_used("tc_test_z"));
    }

    /// Hands out `remaining` blocks from a shared system heap, then returns null.
    struct LimitedAllocator {
        heap: Arc<SystemAllocator>,
        remaining: AtomicUsize
    }

    impl NativeAllocator for LimitedAllocator {
        unsafe fn allocate(&self, size: usize, align: usize) -> *mut u8 {
            match self.remaining.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1)) {
                Ok(_) => self.heap.allocate(size, align),
                Err(_) => std::ptr::null_mut()
            }
        }

        unsafe fn free(&self, ptr: *mut u8) {
            self.heap.free(ptr)
        }
    }

    #[test]
    fn failed_creation_releases_its_blocks() {
        let mods = [(ModType::LightDirMult, 1.0, 0.0)];
        // modifier, its mod array, then the manager's modifier array
        for budget in 0..3 {
            let heap = Arc::new(SystemAllocator::new());
            let fake = fake_time_cycle_with(Box::new(LimitedAllocator {
                heap: heap.clone(),
                remaining: AtomicUsize::new(budget)
            }));
            let result = fake.time_cycle.create_modifier("tc_alloc_fails", 0, &mods);
            assert!(matches!(result, Err(Error::Allocation(_))), "budget {}", budget);
            assert_eq!(fake.time_cycle.count(), 0);
            assert_eq!(heap.live_allocations(), 0, "budget {}", budget);
            assert!(!fake.time_cycle.is_name_used("tc_alloc_fails"));
        }
        assert!(names::lookup(joaat("tc_alloc_fails")).is_none());

        let heap = Arc::new(SystemAllocator::new());
        let fake = fake_time_cycle_with(Box::new(LimitedAllocator {
            heap: heap.clone(),
            remaining: AtomicUsize::new(3)
        }));
        let modifier = fake.time_cycle.create_modifier("tc_alloc_fits", 0, &mods).unwrap();
        assert_eq!(modifier.name(), "tc_alloc_fits");
        assert_eq!(heap.live_allocations(), 3);
    }

    #[test]
    fn creation_failures() {
        let fake = with_modifiers(&["tc_taken"]);
        let time_cycle = &fake.time_cycle;
        assert!(matches!(time_cycle.create_modifier("TC_TAKEN", 0, &[]), Err(Error::NameInUse(_))));
        let duplicate = [(ModType::LightDirMult, 1.0, 0.0), (ModType::LightDirMult, 2.0, 0.0)];
        assert!(matches!(time_cycle.create_modifier("tc_dup", 0, &duplicate), Err(Error::DuplicateMod(ModType::LightDirMult))));
        assert_eq!(time_cycle.count(), 1);
    }

    #[test]
    fn index_out_of_range() {
        let fake = with_modifiers(&["tc_only"]);
        assert!(matches!(fake.time_cycle.get_by_index(1), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn template_copies_flags_and_mods() {
        let fake = fake_time_cycle();
        let time_cycle = &fake.time_cycle;
        let template = time_cycle.create_modifier("tc_template", 3, &[(ModType::LodMultHd, 0.25, 1.0)]).unwrap();
        let copy = time_cycle.create_from_template("tc_copy", &template).unwrap();
        assert_eq!(copy.flags(), 3);
        assert_eq!(copy.mods().get(ModType::LodMultHd).unwrap(), (0.25, 1.0));
        assert_ne!(copy.address(), template.address());
    }

    #[test]
    fn activation() {
        let fake = with_modifiers(&["tc_act_a", "tc_act_b"]);
        let time_cycle = &fake.time_cycle;
        let a = time_cycle.get_by_index(0).unwrap();
        let b = time_cycle.get_by_index(1).unwrap();
        assert!(time_cycle.current_modifier().is_none());

        a.set_active(true);
        assert!(a.is_active());
        assert_eq!(time_cycle.current_modifier().unwrap().index(), 0);

        b.set_active(false);
        assert!(a.is_active());

        a.set_active(false);
        assert!(!a.is_active());
        assert!(time_cycle.current_modifier().is_none());
    }

    #[test]
    fn transition() {
        let fake = with_modifiers(&["tc_tr_a", "tc_tr_b"]);
        let time_cycle = &fake.time_cycle;
        let b = time_cycle.get_by_index(1).unwrap();
        time_cycle.set_strength(0.5);
        b.set_active_with_transition(2.0);
        assert!(b.is_in_transition());
        assert!(b.is_active());
        assert_eq!(time_cycle.current_modifier().unwrap().index(), 1);
        assert_eq!(time_cycle.transition_speed(), 0.25);
        assert_eq!(time_cycle.transition_current_strength(), 0.0);

        b.set_active_with_transition_to(0.0, 0.8);
        assert!(!b.is_in_transition());
        assert!(b.is_active());
        assert_eq!(time_cycle.strength(), 0.8);

        time_cycle.set_current_modifier(None);
        assert!(!b.is_active());
        assert_eq!(time_cycle.transition_speed(), 0.0);
    }

    static ENGINE_LOOKUPS: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn always_second(_base: *mut u8, _hash: *const Hash) -> i32 {
        ENGINE_LOOKUPS.fetch_add(1, Ordering::SeqCst);
        1
    }

    unsafe extern "C" fn never_found(_base: *mut u8, _hash: *const Hash) -> i32 {
        -1
    }

    #[test]
    fn stale_cache_entries_are_rechecked() {
        let fake = with_modifiers(&["tc_cache_a", "tc_cache_b"]);
        let time_cycle = &fake.time_cycle;
        time_cycle.cache.lock().unwrap().insert(joaat("tc_cache_a"), 1);
        assert_eq!(time_cycle.get_by_name("tc_cache_a").unwrap().index(), 0);
    }

    #[test]
    fn engine_lookup_first_then_scan() {
        let FakeTimeCycle { buffer, time_cycle } = with_modifiers(&["tc_lookup_a", "tc_lookup_b"]);
        let fake = FakeTimeCycle { buffer, time_cycle: unsafe { time_cycle.with_index_lookup(always_second) } };
        fake.time_cycle.cache.lock().unwrap().clear();
        assert_eq!(fake.time_cycle.get_by_hash(joaat("tc_lookup_b")).unwrap().index(), 1);
        assert!(ENGINE_LOOKUPS.load(Ordering::SeqCst) > 0);
        // a wrong engine answer falls back to the scan
        let a = fake.time_cycle.get_by_hash(joaat("tc_lookup_a")).unwrap();
        assert_eq!(a.index(), 0);
        assert_eq!(a.hash(), joaat("tc_lookup_a"));
        assert!(fake.time_cycle.get_by_hash(0xDEAD).is_none());

        let FakeTimeCycle { buffer, time_cycle } = with_modifiers(&["tc_lookup_c", "tc_lookup_d"]);
        let fake = FakeTimeCycle { buffer, time_cycle: unsafe { time_cycle.with_index_lookup(never_found) } };
        fake.time_cycle.cache.lock().unwrap().clear();
        assert_eq!(fake.time_cycle.get_by_name("tc_lookup_d").unwrap().index(), 1);
        assert!(fake.time_cycle.get_by_hash(0xDEAD).is_none());
    }
}
