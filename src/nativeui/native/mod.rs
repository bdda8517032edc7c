use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::error::{Error, Result};

pub mod alloc;
pub mod scaleform;
pub mod system;
pub mod timecycle;
#[cfg(windows)]
pub mod registration;
#[cfg(test)]
pub mod testing;

pub type NativeHandler = extern "C" fn(*mut NativeCallContext);
pub type SetVectorResults = unsafe extern "C" fn(*mut NativeCallContext);

lazy_static! {
    static ref NATIVES: RwLock<Option<Box<dyn NativeTable>>> = RwLock::new(None);
}

/// Hash of the native being invoked, for crash reports.
pub static CURRENT_NATIVE: AtomicU64 = AtomicU64::new(0);

pub trait NativeTable: Send + Sync {
    fn get_handler(&self, hash: u64) -> Option<NativeHandler>;

    fn vector_fixer(&self) -> Option<SetVectorResults> {
        None
    }
}

pub fn install<T>(table: T) where T: NativeTable + 'static {
    match NATIVES.write() {
        Ok(mut natives) => {
            *natives = Some(Box::new(table));
            info!("Native table installed");
        }
        Err(_) => error!("Native table lock is poisoned, keeping the previous table")
    }
}

pub fn is_installed() -> bool {
    NATIVES.read().map(|n| n.is_some()).unwrap_or(false)
}

#[repr(C)]
pub struct NativeReturnStack {
    pub stack: [u64; 3]
}

#[repr(C)]
pub struct NativeArgStack {
    pub stack: [u64; 32]
}

#[repr(C)]
pub struct NativeCallContext {
    pub returns: *mut NativeReturnStack,
    pub arg_count: u32,
    pub args: *mut NativeArgStack,
    pub data_count: u32,
    pub data: [u32; 48],
}

impl NativeCallContext {
    /// # Safety
    /// `index` must be below `arg_count` and the slot must hold a `T`.
    pub unsafe fn arg<T>(&self, index: usize) -> T where T: NativeStackValue {
        T::read_from_stack((*self.args).stack.as_ptr().add(index))
    }

    /// # Safety
    /// The slot at `index` must hold a pointer to a NUL terminated string.
    pub unsafe fn arg_str(&self, index: usize) -> String {
        let ptr = self.arg::<u64>(index) as *const c_char;
        if ptr.is_null() {
            String::new()
        } else {
            CStr::from_ptr(ptr).to_string_lossy().into_owned()
        }
    }

    /// # Safety
    /// `returns` must point to a live return stack.
    pub unsafe fn set_return<T>(&mut self, value: T) where T: NativeStackValue {
        value.write_to_stack((*self.returns).stack.as_mut_ptr())
    }
}

pub trait NativeStackValue: Sized {
    unsafe fn read_from_stack(stack: *const u64) -> Self {
        assert!(std::mem::size_of::<Self>() <= 8, "`{}` doesn't fit a stack slot", std::any::type_name::<Self>());
        stack.cast::<Self>().read()
    }

    unsafe fn write_to_stack(self, stack: *mut u64) {
        assert!(std::mem::size_of::<Self>() <= 8, "`{}` doesn't fit a stack slot", std::any::type_name::<Self>());
        stack.write(0);
        stack.cast::<Self>().write(self)
    }

    fn get_stack_size(&self) -> usize {
        1
    }
}

impl NativeStackValue for i32 {}
impl NativeStackValue for u32 {}
impl NativeStackValue for &mut u32 {}
impl NativeStackValue for f32 {}
impl NativeStackValue for bool {}
impl NativeStackValue for u64 {}
impl NativeStackValue for () {}

/// Argument list of a single invocation, owning the strings it points to.
pub struct NativeArgs {
    stack: NativeArgStack,
    count: usize,
    strings: Vec<CString>
}

impl NativeArgs {
    pub fn new() -> NativeArgs {
        NativeArgs {
            stack: NativeArgStack { stack: [0; 32] },
            count: 0,
            strings: Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn push<A>(&mut self, arg: A) where A: NativeArg {
        arg.push_to(self)
    }

    fn push_value<T>(&mut self, value: T) where T: NativeStackValue {
        let size = value.get_stack_size();
        assert!(self.count + size <= self.stack.stack.len(), "too many native arguments");
        unsafe { value.write_to_stack(self.stack.stack.as_mut_ptr().add(self.count)) };
        self.count += size;
    }

    fn push_str(&mut self, value: &str) {
        let value = CString::new(value).unwrap_or_else(|e| {
            let mut bytes = e.into_vec();
            bytes.retain(|b| *b != 0);
            CString::new(bytes).unwrap_or_default()
        });
        let ptr = value.as_ptr() as u64;
        self.strings.push(value);
        self.push_value(ptr);
    }
}

impl Default for NativeArgs {
    fn default() -> Self {
        NativeArgs::new()
    }
}

pub trait NativeArg {
    fn push_to(self, args: &mut NativeArgs);
}

impl<T> NativeArg for T where T: NativeStackValue {
    fn push_to(self, args: &mut NativeArgs) {
        args.push_value(self)
    }
}

impl<'a> NativeArg for &'a str {
    fn push_to(self, args: &mut NativeArgs) {
        args.push_str(self)
    }
}

impl<'a> NativeArg for &'a String {
    fn push_to(self, args: &mut NativeArgs) {
        args.push_str(self)
    }
}

pub fn get_handler(hash: u64) -> Result<(NativeHandler, Option<SetVectorResults>)> {
    let natives = NATIVES.read().map_err(|_| Error::NativesMissing)?;
    let table = natives.as_ref().ok_or(Error::NativesMissing)?;
    let handler = table.get_handler(hash).ok_or(Error::MissingHandler(hash))?;
    Ok((handler, table.vector_fixer()))
}

pub fn call<R>(hash: u64, mut args: NativeArgs) -> Result<R> where R: NativeStackValue {
    let (handler, vector_fixer) = get_handler(hash)?;
    let mut returns = NativeReturnStack { stack: [0; 3] };
    let mut context = NativeCallContext {
        returns: &mut returns,
        arg_count: args.count as u32,
        args: &mut args.stack,
        data_count: 0,
        data: [0; 48]
    };
    CURRENT_NATIVE.store(hash, Ordering::SeqCst);
    handler(&mut context);
    if let Some(fix) = vector_fixer {
        unsafe { fix(&mut context) };
    }
    CURRENT_NATIVE.store(0, Ordering::SeqCst);
    Ok(unsafe { R::read_from_stack(returns.stack.as_ptr()) })
}

#[macro_export]
macro_rules! invoke {
    ($ret:ty, $hash:expr $(, $arg:expr)*) => {{
        #[allow(unused_mut)]
        let mut args = $crate::native::NativeArgs::new();
        $(
            args.push($arg);
        )*
        $crate::native::call::<$ret>($hash, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::testing;
    use crate::error::Error;

    #[test]
    fn invoke_passes_arguments_and_returns() {
        testing::setup();
        let handle = invoke!(u32, testing::ECHO_SUM, 40i32, 2u32).unwrap();
        assert_eq!(handle, 42);
    }

    #[test]
    fn strings_survive_the_call() {
        testing::setup();
        let len = invoke!(u32, testing::ECHO_STRLEN, "mp_big_message_freemode").unwrap();
        assert_eq!(len, 23);
        let len = invoke!(u32, testing::ECHO_STRLEN, "in\0side").unwrap();
        assert_eq!(len, 6);
    }

    #[test]
    fn missing_handler_is_an_error() {
        testing::setup();
        match invoke!((), 0x0123456789ABCDEFu64) {
            Err(Error::MissingHandler(hash)) => assert_eq!(hash, 0x0123456789ABCDEF),
            other => panic!("unexpected {:?}", other)
        }
    }
}
