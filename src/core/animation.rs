//! Frame-cursor animation state machine shared by every actor.
//!
//! The cursor advances at a fixed rate regardless of content. One-shot clips
//! (attack, hurt) return to idle when they run out, death holds its last
//! frame, everything else loops.

use bevy::math::Vec2;

/// Playback rate in frames per second.
pub const FRAME_RATE: f32 = 10.0;

/// Animation state of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Walk,
    Run,
    Attack,
    Hurt,
    Death,
    /// Terminal. Excluded from updates, collisions and drawing.
    Gone,
}

impl AnimState {
    pub const ALL: [AnimState; 6] = [
        AnimState::Idle,
        AnimState::Walk,
        AnimState::Run,
        AnimState::Attack,
        AnimState::Hurt,
        AnimState::Death,
    ];

    /// Asset name fragment for this state.
    pub fn name(self) -> &'static str {
        match self {
            AnimState::Idle => "idle",
            AnimState::Walk => "walk",
            AnimState::Run => "run",
            AnimState::Attack => "attack",
            AnimState::Hurt => "hurt",
            AnimState::Death => "death",
            AnimState::Gone => "gone",
        }
    }

    /// Death or gone: no damage, no actions.
    pub fn is_terminal(self) -> bool {
        matches!(self, AnimState::Death | AnimState::Gone)
    }
}

/// Facing direction, also selects the sprite row or sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Down, Facing::Up, Facing::Left, Facing::Right];

    pub fn name(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }

    /// Unit step in tile units, y pointing down.
    pub fn step(self) -> (i32, i32) {
        match self {
            Facing::Up => (0, -1),
            Facing::Down => (0, 1),
            Facing::Left => (-1, 0),
            Facing::Right => (1, 0),
        }
    }

    /// Facing for a step, horizontal component first. `None` for a zero step.
    pub fn from_step(dx: i32, dy: i32) -> Option<Self> {
        if dx > 0 {
            Some(Facing::Right)
        } else if dx < 0 {
            Some(Facing::Left)
        } else if dy > 0 {
            Some(Facing::Down)
        } else if dy < 0 {
            Some(Facing::Up)
        } else {
            None
        }
    }

    /// Facing along the dominant axis of `offset`, vertical on a tie.
    /// `None` for a zero offset.
    pub fn toward(offset: Vec2) -> Option<Self> {
        if offset == Vec2::ZERO {
            return None;
        }
        if offset.x.abs() > offset.y.abs() {
            Self::from_step(offset.x.signum() as i32, 0)
        } else {
            Self::from_step(0, offset.y.signum() as i32)
        }
    }
}

/// Frame counts per state for one actor type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipTable {
    pub idle: u32,
    pub walk: u32,
    pub run: u32,
    pub attack: u32,
    pub hurt: u32,
    pub death: u32,
}

impl ClipTable {
    pub fn frames(&self, state: AnimState) -> u32 {
        match state {
            AnimState::Idle => self.idle,
            AnimState::Walk => self.walk,
            AnimState::Run => self.run,
            AnimState::Attack => self.attack,
            AnimState::Hurt => self.hurt,
            AnimState::Death | AnimState::Gone => self.death,
        }
    }

    /// Index of the final death frame.
    pub fn last_death_frame(&self) -> f32 {
        self.death.saturating_sub(1) as f32
    }
}

/// Per-actor animation state and frame cursor.
#[derive(Debug, Clone)]
pub struct Animator {
    state: AnimState,
    cursor: f32,
    clips: ClipTable,
}

impl Animator {
    pub fn new(clips: ClipTable) -> Self {
        Self {
            state: AnimState::Idle,
            cursor: 0.0,
            clips,
        }
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Integer frame for rendering, never past the clip's last frame.
    pub fn frame_index(&self) -> u32 {
        let last = self.clips.frames(self.state).saturating_sub(1);
        (self.cursor.max(0.0) as u32).min(last)
    }

    /// Switch to `state` if it differs from the current one. Returns whether
    /// a transition happened.
    pub fn transition(&mut self, state: AnimState) -> bool {
        if self.state == state || self.state == AnimState::Gone {
            return false;
        }
        self.state = state;
        self.cursor = 0.0;
        true
    }

    /// Enter `state` from its first frame even if already in it (attack swings).
    pub fn restart(&mut self, state: AnimState) {
        if self.state == AnimState::Gone {
            return;
        }
        self.state = state;
        self.cursor = 0.0;
    }

    /// Advance the cursor by `FRAME_RATE * dt`.
    ///
    /// Returns the one-shot state that just finished, if any, so the owner can
    /// clear per-cycle flags.
    pub fn advance(&mut self, dt: f32) -> Option<AnimState> {
        if self.state == AnimState::Gone {
            return None;
        }
        let total = self.clips.frames(self.state) as f32;
        self.cursor += FRAME_RATE * dt;
        if self.cursor < total {
            return None;
        }
        match self.state {
            AnimState::Attack | AnimState::Hurt => {
                let finished = self.state;
                self.state = AnimState::Idle;
                self.cursor = 0.0;
                Some(finished)
            }
            AnimState::Death => {
                self.cursor = total - 1.0;
                None
            }
            _ => {
                self.cursor = 0.0;
                None
            }
        }
    }

    /// Death clip is resting on its final frame.
    pub fn death_settled(&self) -> bool {
        self.state == AnimState::Death && self.cursor >= self.clips.last_death_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIPS: ClipTable = ClipTable {
        idle: 4,
        walk: 6,
        run: 8,
        attack: 12,
        hurt: 4,
        death: 11,
    };

    #[test]
    fn looping_states_wrap() {
        let mut anim = Animator::new(CLIPS);
        for _ in 0..3 {
            anim.advance(0.1);
        }
        assert_eq!(anim.frame_index(), 3);
        assert_eq!(anim.advance(0.1), None);
        assert_eq!(anim.state(), AnimState::Idle);
        assert_eq!(anim.cursor(), 0.0);
    }

    #[test]
    fn attack_returns_to_idle() {
        let mut anim = Animator::new(CLIPS);
        anim.restart(AnimState::Attack);
        let mut finished = None;
        for _ in 0..12 {
            finished = finished.or(anim.advance(0.1));
        }
        assert_eq!(finished, Some(AnimState::Attack));
        assert_eq!(anim.state(), AnimState::Idle);
        assert_eq!(anim.cursor(), 0.0);
    }

    #[test]
    fn death_clamps_on_last_frame() {
        let mut anim = Animator::new(CLIPS);
        anim.restart(AnimState::Death);
        for _ in 0..40 {
            anim.advance(0.1);
        }
        assert_eq!(anim.state(), AnimState::Death);
        assert_eq!(anim.cursor(), 10.0);
        assert!(anim.death_settled());
    }

    #[test]
    fn transition_resets_cursor_only_on_change() {
        let mut anim = Animator::new(CLIPS);
        anim.transition(AnimState::Run);
        anim.advance(0.25);
        assert!(!anim.transition(AnimState::Run));
        assert_eq!(anim.cursor(), 2.5);
        assert!(anim.transition(AnimState::Idle));
        assert_eq!(anim.cursor(), 0.0);
    }

    #[test]
    fn facing_follows_the_dominant_axis() {
        assert_eq!(Facing::toward(Vec2::new(0.0, -1.0)), Some(Facing::Up));
        assert_eq!(Facing::toward(Vec2::new(0.0, 3.0)), Some(Facing::Down));
        assert_eq!(Facing::toward(Vec2::new(-2.0, 1.0)), Some(Facing::Left));
        assert_eq!(Facing::toward(Vec2::ZERO), None);
    }

    #[test]
    fn gone_is_terminal() {
        let mut anim = Animator::new(CLIPS);
        anim.restart(AnimState::Gone);
        assert!(!anim.transition(AnimState::Idle));
        anim.restart(AnimState::Attack);
        assert_eq!(anim.state(), AnimState::Gone);
        assert_eq!(anim.advance(1.0), None);
    }
}
