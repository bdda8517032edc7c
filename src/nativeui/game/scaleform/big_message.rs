use cgmath::{Vector2, Vector3};
use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::game::Rgba;
use crate::game::ui::HudColor;
use crate::native::system;
use crate::scaleform_args;
use crate::settings::BigMessageSettings;

use super::{Scaleform, ScaleformArg};

pub const MOVIE: &str = "mp_big_message_freemode";
pub const DEFAULT_TIME: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutTransition {
    None,
    FadeAway,
    MoveUp
}

impl Default for OutTransition {
    fn default() -> Self {
        OutTransition::MoveUp
    }
}

/// `true` once `now` is strictly past `time` on the wrapping game clock.
fn is_past(now: u32, time: u32) -> bool {
    (now.wrapping_sub(time) as i32) > 0
}

/// Full screen "big message" shards. Messages stay for their display time,
/// then play the out transition and disappear.
pub struct BigMessage {
    scaleform: Scaleform,
    end_time: Option<u32>,
    performed_out_transition: bool,
    out_transition: OutTransition,
    out_transition_secs: f32,
    out_transition_ms: u32,
}

impl BigMessage {
    pub fn new() -> Result<BigMessage> {
        BigMessage::with_settings(&BigMessageSettings::default())
    }

    pub fn with_settings(settings: &BigMessageSettings) -> Result<BigMessage> {
        let mut message = BigMessage {
            scaleform: Scaleform::new(MOVIE)?,
            end_time: None,
            performed_out_transition: false,
            out_transition: settings.out_transition,
            out_transition_secs: 0.0,
            out_transition_ms: 0
        };
        message.set_out_transition_time(settings.out_transition_time)?;
        Ok(message)
    }

    pub fn scaleform(&self) -> &Scaleform {
        &self.scaleform
    }

    pub fn out_transition(&self) -> OutTransition {
        self.out_transition
    }

    pub fn set_out_transition(&mut self, transition: OutTransition) {
        self.out_transition = transition;
    }

    /// Out transition length in seconds.
    pub fn out_transition_time(&self) -> f32 {
        self.out_transition_secs
    }

    pub fn out_transition_time_ms(&self) -> u32 {
        self.out_transition_ms
    }

    pub fn set_out_transition_time(&mut self, secs: f32) -> Result<()> {
        if secs < 0.0 || secs.is_nan() {
            return Err(Error::Negative("out_transition_time"));
        }
        self.out_transition_secs = secs;
        self.out_transition_ms = (secs * 1000.0) as u32;
        Ok(())
    }

    /// Whether a message is currently on screen, its out transition included.
    pub fn is_showing(&self) -> bool {
        self.end_time.is_some()
    }

    pub fn set_vertical_position_override(&self, y: f32) -> Result<()> {
        self.scaleform.call_method("OVERRIDE_Y_POSITION", &[ScaleformArg::F32(y)])
    }

    pub fn call_method_and_show(&mut self, time: u32, method: &str, args: &[ScaleformArg]) -> Result<()> {
        self.scaleform.call_method(method, args)?;
        self.end_time = Some(system::game_timer()?.wrapping_add(time));
        self.performed_out_transition = false;
        Ok(())
    }

    /// Starts the out transition now, the message disappears once it finishes.
    pub fn hide(&mut self) -> Result<()> {
        if self.end_time.is_some() && !self.performed_out_transition {
            self.perform_out_transition()?;
            self.performed_out_transition = true;
            self.end_time = Some(system::game_timer()?);
        }
        Ok(())
    }

    pub fn show_mission_passed_message(&mut self, message: &str, time: u32) -> Result<()> {
        // the subtitle only shows after TRANSITION_UP, but an empty one breaks vertical centering
        self.call_method_and_show(time, "SHOW_MISSION_PASSED_MESSAGE",
            &scaleform_args![message, "placeholder", 100, true, 0, true])
    }

    pub fn show_mission_passed_old_message(&mut self, message: &str, subtitle: &str, time: u32) -> Result<()> {
        self.call_method_and_show(time, "SHOW_MISSION_PASSED_MESSAGE", &scaleform_args![message, subtitle])
    }

    pub fn show_mp_message_large(&mut self, message: &str, subtitle: &str, text_alpha: u8, time: u32) -> Result<()> {
        self.call_method_and_show(time, "SHOW_CENTERED_MP_MESSAGE_LARGE",
            &scaleform_args![message, subtitle, 100, true, text_alpha])
    }

    pub fn show_colored_shard(&mut self, message: &str, subtitle: &str, text_color: HudColor, background_color: HudColor, time: u32) -> Result<()> {
        self.call_method_and_show(time, "SHOW_SHARD_CENTERED_MP_MESSAGE",
            &scaleform_args![message, subtitle, text_color.id(), background_color.id()])
    }

    pub fn show_simple_shard(&mut self, message: &str, subtitle: &str, time: u32) -> Result<()> {
        self.call_method_and_show(time, "SHOW_SHARD_CREW_RANKUP_MP_MESSAGE", &scaleform_args![message, subtitle])
    }

    pub fn show_rankup_message(&mut self, message: &str, subtitle: &str, rank: i32, time: u32) -> Result<()> {
        self.call_method_and_show(time, "SHOW_BIG_MP_MESSAGE", &scaleform_args![message, subtitle, rank])
    }

    pub fn show_weapon_purchased_message(&mut self, message: &str, weapon_name: &str, weapon: u32, alpha: u8, time: u32) -> Result<()> {
        self.call_method_and_show(time, "SHOW_WEAPON_PURCHASED",
            &scaleform_args![message, weapon_name, weapon, 0, alpha])
    }

    fn perform_out_transition(&self) -> Result<()> {
        let secs = self.out_transition_secs;
        match self.out_transition {
            OutTransition::None => Ok(()),
            OutTransition::FadeAway => self.scaleform.call_method("SHARD_ANIM_OUT", &scaleform_args![2, secs, 6]),
            OutTransition::MoveUp => self.scaleform.call_method("TRANSITION_OUT", &scaleform_args![secs])
        }
    }

    /// Advances the message timer, returns whether the movie should be drawn this frame.
    fn update(&mut self) -> Result<bool> {
        let end_time = match self.end_time {
            Some(end_time) => end_time,
            None => return Ok(false)
        };
        let now = system::game_timer()?;
        if is_past(now, end_time.wrapping_add(self.out_transition_ms)) {
            self.end_time = None;
            self.performed_out_transition = false;
        } else if !self.performed_out_transition && is_past(now, end_time) {
            self.perform_out_transition()?;
            self.performed_out_transition = true;
        }
        Ok(true)
    }

    pub fn draw(&mut self, color: Rgba) -> Result<()> {
        if self.update()? {
            self.scaleform.draw(color)?;
        }
        Ok(())
    }

    pub fn draw_at(&mut self, pos: Vector2<f32>, size: Vector2<f32>, color: Rgba) -> Result<()> {
        if self.update()? {
            self.scaleform.draw_at(pos, size, color)?;
        }
        Ok(())
    }

    pub fn draw_3d(&mut self, pos: Vector3<f32>, rot: Vector3<f32>, scale: Vector3<f32>, solid: bool) -> Result<()> {
        if self.update()? {
            self.scaleform.draw_3d(pos, rot, scale, solid)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BigMessage, OutTransition, DEFAULT_TIME, MOVIE};
    use crate::error::Error;
    use crate::game::Rgba;
    use crate::game::ui::HudColor;
    use crate::native::testing::{self, Call};

    fn message() -> BigMessage {
        testing::setup();
        testing::set_next_handle(3);
        testing::set_game_time(1000);
        let message = BigMessage::new().unwrap();
        testing::take_calls();
        message
    }

    fn method_calls(calls: &[Call]) -> Vec<String> {
        calls.iter().filter_map(|c| match c {
            Call::Begin(_, name) => Some(name.clone()),
            _ => None
        }).collect()
    }

    fn draws(calls: &[Call]) -> usize {
        calls.iter().filter(|c| matches!(c, Call::DrawFullscreen(..))).count()
    }

    #[test]
    fn requests_movie_with_defaults() {
        testing::setup();
        testing::take_calls();
        let message = BigMessage::new().unwrap();
        assert_eq!(testing::take_calls()[0], Call::Request(MOVIE.to_string()));
        assert_eq!(message.out_transition(), OutTransition::MoveUp);
        assert_eq!(message.out_transition_time(), 0.4);
        assert_eq!(message.out_transition_time_ms(), 400);
        assert!(!message.is_showing());
    }

    #[test]
    fn negative_transition_time_is_rejected() {
        let mut message = message();
        assert!(matches!(message.set_out_transition_time(-1.0), Err(Error::Negative(_))));
        assert_eq!(message.out_transition_time_ms(), 400);
        message.set_out_transition_time(1.25).unwrap();
        assert_eq!(message.out_transition_time_ms(), 1250);
    }

    #[test]
    fn mission_passed_arguments() {
        let mut message = message();
        message.show_mission_passed_message("PASSED", DEFAULT_TIME).unwrap();
        assert_eq!(testing::take_calls(), vec![
            Call::Begin(3, "SHOW_MISSION_PASSED_MESSAGE".to_string()),
            Call::Str("PASSED".to_string()),
            Call::Str("placeholder".to_string()),
            Call::Int(100),
            Call::Bool(true),
            Call::Int(0),
            Call::Bool(true),
            Call::End
        ]);
        assert!(message.is_showing());
    }

    #[test]
    fn shard_and_weapon_arguments() {
        let mut message = message();
        message.show_colored_shard("a", "b", HudColor::Red, HudColor::Gold, 100).unwrap();
        message.show_weapon_purchased_message("c", "Pistol", 0x1B06D571, 50, 100).unwrap();
        let calls = testing::take_calls();
        assert_eq!(&calls[3..5], &[Call::Int(6), Call::Int(107)]);
        assert_eq!(&calls[9..12], &[Call::Int(0x1B06D571), Call::Int(0), Call::Int(50)]);
        assert_eq!(method_calls(&calls), vec!["SHOW_SHARD_CENTERED_MP_MESSAGE", "SHOW_WEAPON_PURCHASED"]);
    }

    #[test]
    fn other_show_methods() {
        let mut message = message();
        message.show_mission_passed_old_message("a", "b", 1).unwrap();
        message.show_mp_message_large("a", "b", 100, 1).unwrap();
        message.show_simple_shard("a", "b", 1).unwrap();
        message.show_rankup_message("a", "b", 12, 1).unwrap();
        message.set_vertical_position_override(0.25).unwrap();
        assert_eq!(method_calls(&testing::take_calls()), vec![
            "SHOW_MISSION_PASSED_MESSAGE",
            "SHOW_CENTERED_MP_MESSAGE_LARGE",
            "SHOW_SHARD_CREW_RANKUP_MP_MESSAGE",
            "SHOW_BIG_MP_MESSAGE",
            "OVERRIDE_Y_POSITION"
        ]);
    }

    #[test]
    fn timer_runs_out_transition_once_then_clears() {
        let mut message = message();
        message.draw(Rgba::WHITE).unwrap();
        assert_eq!(draws(&testing::take_calls()), 0);

        message.show_simple_shard("a", "b", 2000).unwrap();
        testing::take_calls();

        testing::set_game_time(2500);
        message.draw(Rgba::WHITE).unwrap();
        let calls = testing::take_calls();
        assert_eq!(draws(&calls), 1);
        assert!(method_calls(&calls).is_empty());

        testing::set_game_time(3001);
        message.draw(Rgba::WHITE).unwrap();
        message.draw(Rgba::WHITE).unwrap();
        let calls = testing::take_calls();
        assert_eq!(method_calls(&calls), vec!["TRANSITION_OUT"]);
        assert!(calls.contains(&Call::Float(0.4)));
        assert_eq!(draws(&calls), 2);

        testing::set_game_time(3401);
        message.draw(Rgba::WHITE).unwrap();
        assert_eq!(draws(&testing::take_calls()), 1);
        assert!(!message.is_showing());
        message.draw(Rgba::WHITE).unwrap();
        assert_eq!(draws(&testing::take_calls()), 0);
    }

    #[test]
    fn hide_fades_away_immediately() {
        let mut message = message();
        message.set_out_transition(OutTransition::FadeAway);
        message.show_rankup_message("a", "b", 1, DEFAULT_TIME).unwrap();
        testing::take_calls();

        testing::set_game_time(1500);
        message.hide().unwrap();
        message.hide().unwrap();
        let calls = testing::take_calls();
        assert_eq!(method_calls(&calls), vec!["SHARD_ANIM_OUT"]);
        assert_eq!(&calls[1..4], &[Call::Int(2), Call::Float(0.4), Call::Int(6)]);

        testing::set_game_time(1800);
        message.draw(Rgba::WHITE).unwrap();
        assert_eq!(method_calls(&testing::take_calls()), Vec::<String>::new());
        testing::set_game_time(1901);
        message.draw(Rgba::WHITE).unwrap();
        testing::take_calls();
        assert!(!message.is_showing());
    }

    #[test]
    fn no_transition_and_clock_wrap() {
        let mut message = message();
        message.set_out_transition(OutTransition::None);
        testing::set_game_time(u32::MAX - 10);
        message.show_simple_shard("a", "b", 100).unwrap();
        testing::take_calls();
        testing::set_game_time(20);
        message.draw(Rgba::WHITE).unwrap();
        let calls = testing::take_calls();
        assert!(method_calls(&calls).is_empty());
        assert_eq!(draws(&calls), 1);
        assert!(message.is_showing());
        testing::set_game_time(600);
        message.draw(Rgba::WHITE).unwrap();
        assert!(!message.is_showing());
    }
}
