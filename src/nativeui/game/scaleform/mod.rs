use cgmath::{Vector2, Vector3};

use crate::error::{Error, Result};
use crate::game::{Handle, Rgba};
use crate::native::scaleform;

pub mod big_message;

pub use self::big_message::{BigMessage, OutTransition};

/// A requested scaleform movie, released once dropped.
pub struct Scaleform {
    id: String,
    handle: Handle
}

impl Scaleform {
    pub fn new(id: &str) -> Result<Scaleform> {
        let handle = scaleform::request(id)?;
        if handle == 0 {
            return Err(Error::ScaleformRequest(id.to_string()));
        }
        debug!("Requested scaleform `{}` as {}", id, handle);
        Ok(Scaleform { id: id.to_string(), handle })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn is_valid(&self) -> bool {
        self.handle != 0
    }

    pub fn is_loaded(&self) -> Result<bool> {
        scaleform::has_loaded(self.handle)
    }

    fn begin(&self, method: &str, args: &[ScaleformArg]) -> Result<()> {
        scaleform::begin_method(self.handle, method)?;
        for arg in args {
            match arg {
                ScaleformArg::I32(i) => scaleform::push_i32(*i)?,
                ScaleformArg::F32(f) => scaleform::push_f32(*f)?,
                ScaleformArg::Bool(b) => scaleform::push_bool(*b)?,
                ScaleformArg::Str(s) => scaleform::push_str(s)?
            }
        }
        Ok(())
    }

    pub fn call_method(&self, method: &str, args: &[ScaleformArg]) -> Result<()> {
        self.begin(method, args)?;
        scaleform::end_method()
    }

    /// Calls a method whose result arrives on a later frame.
    pub fn call_function(&self, method: &str, args: &[ScaleformArg]) -> Result<ScaleformReturn> {
        self.begin(method, args)?;
        let id = scaleform::end_method_returnable()?;
        Ok(ScaleformReturn { id })
    }

    pub fn draw(&self, color: Rgba) -> Result<()> {
        scaleform::draw_fullscreen(self.handle, color)
    }

    pub fn draw_at(&self, pos: Vector2<f32>, size: Vector2<f32>, color: Rgba) -> Result<()> {
        scaleform::draw(self.handle, pos.x, pos.y, size.x, size.y, color)
    }

    pub fn draw_3d(&self, pos: Vector3<f32>, rot: Vector3<f32>, scale: Vector3<f32>, solid: bool) -> Result<()> {
        scaleform::draw_3d(self.handle, pos.into(), rot.into(), scale.into(), solid)
    }
}

impl Drop for Scaleform {
    fn drop(&mut self) {
        if self.handle != 0 {
            if let Err(e) = scaleform::set_as_no_longer_needed(&mut self.handle) {
                error!("Failed to release scaleform `{}`: {}", self.id, e);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScaleformArg {
    I32(i32),
    F32(f32),
    Bool(bool),
    Str(String)
}

impl From<i32> for ScaleformArg {
    fn from(value: i32) -> Self {
        ScaleformArg::I32(value)
    }
}

impl From<u32> for ScaleformArg {
    fn from(value: u32) -> Self {
        ScaleformArg::I32(value as i32)
    }
}

impl From<u8> for ScaleformArg {
    fn from(value: u8) -> Self {
        ScaleformArg::I32(value as i32)
    }
}

impl From<f32> for ScaleformArg {
    fn from(value: f32) -> Self {
        ScaleformArg::F32(value)
    }
}

impl From<bool> for ScaleformArg {
    fn from(value: bool) -> Self {
        ScaleformArg::Bool(value)
    }
}

impl From<&str> for ScaleformArg {
    fn from(value: &str) -> Self {
        ScaleformArg::Str(value.to_string())
    }
}

impl From<String> for ScaleformArg {
    fn from(value: String) -> Self {
        ScaleformArg::Str(value)
    }
}

/// Pending result of [`Scaleform::call_function`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleformReturn {
    id: i32
}

impl ScaleformReturn {
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn is_ready(&self) -> Result<bool> {
        scaleform::is_return_value_ready(self.id)
    }

    pub fn get<R>(&self) -> Result<R> where R: ScaleformResult {
        R::read(self.id)
    }
}

pub trait ScaleformResult: Sized {
    fn read(id: i32) -> Result<Self>;
}

impl ScaleformResult for i32 {
    fn read(id: i32) -> Result<Self> {
        scaleform::get_return_value_int(id)
    }
}

impl ScaleformResult for bool {
    fn read(id: i32) -> Result<Self> {
        scaleform::get_return_value_bool(id)
    }
}

#[macro_export]
macro_rules! scaleform_args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::game::scaleform::ScaleformArg::from($arg)),*]
    };
}

#[cfg(test)]
mod tests {
    use cgmath::{Vector2, Vector3};

    use super::{Scaleform, ScaleformArg};
    use crate::error::Error;
    use crate::game::Rgba;
    use crate::native::testing::{self, Call};

    #[test]
    fn request_and_release() {
        testing::setup();
        testing::take_calls();
        testing::set_next_handle(4);
        {
            let movie = Scaleform::new("instructional_buttons").unwrap();
            assert_eq!(movie.handle(), 4);
            assert!(movie.is_loaded().unwrap());
        }
        assert_eq!(testing::take_calls(), vec![
            Call::Request("instructional_buttons".to_string()),
            Call::Release(4)
        ]);
    }

    #[test]
    fn null_handle_is_an_error() {
        testing::setup();
        testing::set_next_handle(0);
        match Scaleform::new("missing") {
            Err(Error::ScaleformRequest(id)) => assert_eq!(id, "missing"),
            _ => panic!("expected a request error")
        }
        testing::set_next_handle(7);
    }

    #[test]
    fn call_method_pushes_arguments_in_order() {
        testing::setup();
        testing::set_next_handle(9);
        let movie = Scaleform::new("mp_big_message_freemode").unwrap();
        testing::take_calls();
        movie.call_method("SHOW", &scaleform_args!["msg", 100, 0.5f32, true]).unwrap();
        assert_eq!(testing::take_calls(), vec![
            Call::Begin(9, "SHOW".to_string()),
            Call::Str("msg".to_string()),
            Call::Int(100),
            Call::Float(0.5),
            Call::Bool(true),
            Call::End
        ]);
        testing::set_next_handle(7);
    }

    #[test]
    fn call_function_returns_pending_value() {
        testing::setup();
        let movie = Scaleform::new("pause_menu").unwrap();
        testing::take_calls();
        let ret = movie.call_function("GET_COLUMN_SELECTION", &[ScaleformArg::I32(0)]).unwrap();
        assert!(ret.is_ready().unwrap());
        assert_eq!(ret.get::<i32>().unwrap(), 12);
        assert!(ret.get::<bool>().unwrap());
        assert_eq!(testing::take_calls().last(), Some(&Call::EndReturnable));
    }

    #[test]
    fn draw_variants() {
        testing::setup();
        testing::set_next_handle(7);
        let movie = Scaleform::new("breaking_news").unwrap();
        testing::take_calls();
        movie.draw(Rgba::new(1, 2, 3, 4)).unwrap();
        movie.draw_at(Vector2::new(0.5, 0.5), Vector2::new(1.0, 1.0), Rgba::WHITE).unwrap();
        let v = Vector3::new(0.0, 0.0, 0.0);
        movie.draw_3d(v, v, v, true).unwrap();
        assert_eq!(testing::take_calls(), vec![
            Call::DrawFullscreen(7, [1, 2, 3, 4]),
            Call::Draw(7, [255, 255, 255, 255]),
            Call::Draw3d(7, true)
        ]);
    }
}
