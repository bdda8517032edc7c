use crate::error::Result;
use crate::invoke;

pub(crate) const GET_GAME_TIMER: u64 = 0x9CD27B0045628463;

/// Milliseconds since the game started, wrapping.
pub fn game_timer() -> Result<u32> {
    invoke!(u32, GET_GAME_TIMER)
}
