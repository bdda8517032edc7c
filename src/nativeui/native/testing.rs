//! Fake native table for unit tests. Every handler records into a per-thread log,
//! so tests running in parallel never observe each other's calls.

use std::cell::{Cell, RefCell};
use std::sync::Once;

use super::{scaleform, system, NativeCallContext, NativeHandler, NativeTable};

pub const ECHO_SUM: u64 = 0x5E70;
pub const ECHO_STRLEN: u64 = 0x5E71;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Request(String),
    Release(u32),
    Begin(u32, String),
    Int(i32),
    Float(f32),
    Bool(bool),
    Str(String),
    End,
    EndReturnable,
    Draw(u32, [i32; 4]),
    DrawFullscreen(u32, [i32; 4]),
    Draw3d(u32, bool),
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = RefCell::new(Vec::new());
    static GAME_TIME: Cell<u32> = Cell::new(0);
    static NEXT_HANDLE: Cell<u32> = Cell::new(7);
}

static SETUP: Once = Once::new();

pub fn setup() {
    SETUP.call_once(|| super::install(FakeNatives));
}

pub fn take_calls() -> Vec<Call> {
    CALLS.with(|c| std::mem::take(&mut *c.borrow_mut()))
}

pub fn set_game_time(time: u32) {
    GAME_TIME.with(|t| t.set(time))
}

pub fn set_next_handle(handle: u32) {
    NEXT_HANDLE.with(|h| h.set(handle))
}

fn record(call: Call) {
    CALLS.with(|c| c.borrow_mut().push(call))
}

fn ctx<'a>(context: *mut NativeCallContext) -> &'a mut NativeCallContext {
    unsafe { &mut *context }
}

fn color(context: &NativeCallContext, first: usize) -> [i32; 4] {
    unsafe {
        [context.arg(first), context.arg(first + 1), context.arg(first + 2), context.arg(first + 3)]
    }
}

extern "C" fn echo_sum(context: *mut NativeCallContext) {
    let context = ctx(context);
    unsafe {
        let sum = context.arg::<i32>(0) as u32 + context.arg::<u32>(1);
        context.set_return(sum);
    }
}

extern "C" fn echo_strlen(context: *mut NativeCallContext) {
    let context = ctx(context);
    unsafe {
        let len = context.arg_str(0).len() as u32;
        context.set_return(len);
    }
}

extern "C" fn game_timer(context: *mut NativeCallContext) {
    let context = ctx(context);
    unsafe { context.set_return(GAME_TIME.with(|t| t.get())) }
}

extern "C" fn request(context: *mut NativeCallContext) {
    let context = ctx(context);
    unsafe {
        record(Call::Request(context.arg_str(0)));
        context.set_return(NEXT_HANDLE.with(|h| h.get()));
    }
}

extern "C" fn has_loaded(context: *mut NativeCallContext) {
    unsafe { ctx(context).set_return(true) }
}

extern "C" fn release(context: *mut NativeCallContext) {
    let context = ctx(context);
    unsafe {
        let handle = context.arg::<u64>(0) as *mut u32;
        record(Call::Release(*handle));
        *handle = 0;
    }
}

extern "C" fn begin_method(context: *mut NativeCallContext) {
    let context = ctx(context);
    unsafe { record(Call::Begin(context.arg(0), context.arg_str(1))) }
}

extern "C" fn push_int(context: *mut NativeCallContext) {
    unsafe { record(Call::Int(ctx(context).arg(0))) }
}

extern "C" fn push_float(context: *mut NativeCallContext) {
    unsafe { record(Call::Float(ctx(context).arg(0))) }
}

extern "C" fn push_bool(context: *mut NativeCallContext) {
    unsafe { record(Call::Bool(ctx(context).arg(0))) }
}

extern "C" fn push_string(context: *mut NativeCallContext) {
    unsafe { record(Call::Str(ctx(context).arg_str(0))) }
}

extern "C" fn end_method(_context: *mut NativeCallContext) {
    record(Call::End)
}

extern "C" fn end_method_returnable(context: *mut NativeCallContext) {
    record(Call::EndReturnable);
    unsafe { ctx(context).set_return(3i32) }
}

extern "C" fn is_return_value_ready(context: *mut NativeCallContext) {
    let context = ctx(context);
    unsafe {
        let ready = context.arg::<i32>(0) == 3;
        context.set_return(ready)
    }
}

extern "C" fn return_value_int(context: *mut NativeCallContext) {
    unsafe { ctx(context).set_return(12i32) }
}

extern "C" fn return_value_bool(context: *mut NativeCallContext) {
    unsafe { ctx(context).set_return(true) }
}

extern "C" fn draw(context: *mut NativeCallContext) {
    let context = ctx(context);
    unsafe { record(Call::Draw(context.arg(0), color(context, 5))) }
}

extern "C" fn draw_fullscreen(context: *mut NativeCallContext) {
    let context = ctx(context);
    unsafe { record(Call::DrawFullscreen(context.arg(0), color(context, 1))) }
}

extern "C" fn draw_3d(context: *mut NativeCallContext) {
    unsafe { record(Call::Draw3d(ctx(context).arg(0), false)) }
}

extern "C" fn draw_3d_solid(context: *mut NativeCallContext) {
    unsafe { record(Call::Draw3d(ctx(context).arg(0), true)) }
}

struct FakeNatives;

impl NativeTable for FakeNatives {
    fn get_handler(&self, hash: u64) -> Option<NativeHandler> {
        let handler: NativeHandler = match hash {
            ECHO_SUM => echo_sum,
            ECHO_STRLEN => echo_strlen,
            system::GET_GAME_TIMER => game_timer,
            scaleform::REQUEST => request,
            scaleform::HAS_LOADED => has_loaded,
            scaleform::SET_AS_NO_LONGER_NEEDED => release,
            scaleform::BEGIN_METHOD => begin_method,
            scaleform::PUSH_INT => push_int,
            scaleform::PUSH_FLOAT => push_float,
            scaleform::PUSH_BOOL => push_bool,
            scaleform::PUSH_STRING => push_string,
            scaleform::END_METHOD => end_method,
            scaleform::END_METHOD_RETURNABLE => end_method_returnable,
            scaleform::IS_RETURN_VALUE_READY => is_return_value_ready,
            scaleform::GET_RETURN_VALUE_INT => return_value_int,
            scaleform::GET_RETURN_VALUE_BOOL => return_value_bool,
            scaleform::DRAW => draw,
            scaleform::DRAW_FULLSCREEN => draw_fullscreen,
            scaleform::DRAW_3D => draw_3d,
            scaleform::DRAW_3D_SOLID => draw_3d_solid,
            _ => return None
        };
        Some(handler)
    }
}
