use crate::error::Result;
use crate::game::{Handle, Rgba};
use crate::invoke;

pub(crate) const REQUEST: u64 = 0x11FE353CF9733E6F;
pub(crate) const HAS_LOADED: u64 = 0x85F01B8D5B90570E;
pub(crate) const SET_AS_NO_LONGER_NEEDED: u64 = 0x1D132D614DD86811;
pub(crate) const BEGIN_METHOD: u64 = 0xF6E48914C7A8694E;
pub(crate) const PUSH_INT: u64 = 0xC3D0841A0CC546A6;
pub(crate) const PUSH_FLOAT: u64 = 0xD69736AAE04DB51A;
pub(crate) const PUSH_BOOL: u64 = 0xC58424BA936EB458;
pub(crate) const PUSH_STRING: u64 = 0xBA7148484BD90365;
pub(crate) const END_METHOD: u64 = 0xC6796A8FFA375E53;
pub(crate) const END_METHOD_RETURNABLE: u64 = 0xC50AA39A577AF886;
pub(crate) const IS_RETURN_VALUE_READY: u64 = 0x768FF8961BA904D6;
pub(crate) const GET_RETURN_VALUE_INT: u64 = 0x2DE7EFA66B906036;
pub(crate) const GET_RETURN_VALUE_BOOL: u64 = 0xD80A80346A45D761;
pub(crate) const DRAW: u64 = 0x54972ADAF0294A93;
pub(crate) const DRAW_FULLSCREEN: u64 = 0x0DF606929C105BE1;
pub(crate) const DRAW_3D: u64 = 0x87D51D72255D4E78;
pub(crate) const DRAW_3D_SOLID: u64 = 0x1CE592FDC749D6F5;

pub fn request(id: &str) -> Result<Handle> {
    invoke!(Handle, REQUEST, id)
}

pub fn has_loaded(handle: Handle) -> Result<bool> {
    invoke!(bool, HAS_LOADED, handle)
}

pub fn set_as_no_longer_needed(handle: &mut Handle) -> Result<()> {
    invoke!((), SET_AS_NO_LONGER_NEEDED, handle)
}

pub fn begin_method(handle: Handle, name: &str) -> Result<()> {
    invoke!((), BEGIN_METHOD, handle, name)
}

pub fn push_i32(value: i32) -> Result<()> {
    invoke!((), PUSH_INT, value)
}

pub fn push_f32(value: f32) -> Result<()> {
    invoke!((), PUSH_FLOAT, value)
}

pub fn push_bool(value: bool) -> Result<()> {
    invoke!((), PUSH_BOOL, value)
}

pub fn push_str(value: &str) -> Result<()> {
    invoke!((), PUSH_STRING, value)
}

pub fn end_method() -> Result<()> {
    invoke!((), END_METHOD)
}

pub fn end_method_returnable() -> Result<i32> {
    invoke!(i32, END_METHOD_RETURNABLE)
}

pub fn is_return_value_ready(id: i32) -> Result<bool> {
    invoke!(bool, IS_RETURN_VALUE_READY, id)
}

pub fn get_return_value_int(id: i32) -> Result<i32> {
    invoke!(i32, GET_RETURN_VALUE_INT, id)
}

pub fn get_return_value_bool(id: i32) -> Result<bool> {
    invoke!(bool, GET_RETURN_VALUE_BOOL, id)
}

pub fn draw(handle: Handle, x: f32, y: f32, width: f32, height: f32, color: Rgba) -> Result<()> {
    invoke!((), DRAW, handle, x, y, width, height,
        color.r as i32, color.g as i32, color.b as i32, color.a as i32, 0i32)
}

pub fn draw_fullscreen(handle: Handle, color: Rgba) -> Result<()> {
    invoke!((), DRAW_FULLSCREEN, handle, color.r as i32, color.g as i32, color.b as i32, color.a as i32, 0i32)
}

pub fn draw_3d(handle: Handle, pos: [f32; 3], rot: [f32; 3], scale: [f32; 3], solid: bool) -> Result<()> {
    let hash = if solid { DRAW_3D_SOLID } else { DRAW_3D };
    invoke!((), hash, handle, pos[0], pos[1], pos[2], rot[0], rot[1], rot[2],
        2.0f32, 2.0f32, 1.0f32, scale[0], scale[1], scale[2], 2i32)
}
