//! Combat resolution rules.
//!
//! Sword hitbox geometry, stomp validity, and the damage/invincibility
//! state machine. The world loop owns the orchestration (who hits whom,
//! in what order); this module owns the rules themselves.

use serde::{Serialize, Deserialize};
use super::character::{Body, SwordState};
use super::constants::{INVINCIBILITY_TICKS, SWORD_HITBOX_HEIGHT, SWORD_REACH};
use super::geometry::Aabb;

/// The active sword hitbox, or None while not swinging.
///
/// The blade extends straight out from the wielder's facing side, vertically
/// centered on the body.
pub fn sword_hitbox(body: &Body, sword: &SwordState) -> Option<Aabb> {
    if !sword.attacking {
        return None;
    }
    let x = if body.facing_right {
        body.x + body.width
    } else {
        body.x - SWORD_REACH
    };
    let y = body.center_y() - SWORD_HITBOX_HEIGHT / 2.0;
    Some(Aabb::new(x, y, SWORD_REACH, SWORD_HITBOX_HEIGHT))
}

/// A stomp only kills when the attacker is falling onto the target: the
/// player must be mid-stomp with their vertical center still above the
/// target's head. Any other body contact hurts the player instead.
pub fn is_stomp_kill(player: &Body, is_stomping: bool, npc: &Body) -> bool {
    is_stomping && player.center_y() < npc.y
}

/// Damage/invincibility state machine.
///
/// Taking a hit grants a fixed window of invincibility during which further
/// hits are no-ops. The countdown ticks once per frame regardless of what
/// else happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageState {
    Vulnerable,
    Invincible { ticks_left: u32 },
}

impl DamageState {
    pub fn is_invincible(&self) -> bool {
        matches!(self, DamageState::Invincible { .. })
    }

    /// Remaining invincibility in ticks (0 while vulnerable). For the HUD.
    pub fn ticks_left(&self) -> u32 {
        match self {
            DamageState::Vulnerable => 0,
            DamageState::Invincible { ticks_left } => *ticks_left,
        }
    }

    /// Enter the post-hit invincibility window
    pub fn trigger(&mut self) {
        *self = DamageState::Invincible { ticks_left: INVINCIBILITY_TICKS };
    }

    /// Tick the countdown; returns to Vulnerable when it runs out
    pub fn advance(&mut self) {
        if let DamageState::Invincible { ticks_left } = self {
            *ticks_left -= 1;
            if *ticks_left == 0 {
                *self = DamageState::Vulnerable;
            }
        }
    }
}

impl Default for DamageState {
    fn default() -> Self {
        DamageState::Vulnerable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::CHARACTER_SIZE;

    fn attacking_sword() -> SwordState {
        let mut sword = SwordState::default();
        sword.try_start();
        sword
    }

    #[test]
    fn test_no_hitbox_while_not_attacking() {
        let body = Body::new(100.0, 100.0);
        assert!(sword_hitbox(&body, &SwordState::default()).is_none());
    }

    #[test]
    fn test_hitbox_extends_from_facing_side() {
        let mut body = Body::new(100.0, 100.0);
        let sword = attacking_sword();

        let right = sword_hitbox(&body, &sword).unwrap();
        assert_eq!(right.x, 100.0 + CHARACTER_SIZE);
        assert_eq!(right.w, SWORD_REACH);
        assert_eq!(right.h, SWORD_HITBOX_HEIGHT);
        assert_eq!(right.center_y(), body.center_y());

        body.facing_right = false;
        let left = sword_hitbox(&body, &sword).unwrap();
        assert_eq!(left.x, 100.0 - SWORD_REACH);
        assert_eq!(left.right(), 100.0);
    }

    #[test]
    fn test_stomp_requires_height_advantage() {
        let mut player = Body::new(100.0, 100.0);
        let npc = Body::new(100.0, 140.0);

        // Player center (124) above npc top (140)
        assert!(is_stomp_kill(&player, true, &npc));
        // Not stomping: no kill regardless of geometry
        assert!(!is_stomp_kill(&player, false, &npc));

        // Same height: center is below the target's head
        player.y = 140.0;
        assert!(!is_stomp_kill(&player, true, &npc));
    }

    #[test]
    fn test_damage_state_counts_down_to_vulnerable() {
        let mut state = DamageState::default();
        assert!(!state.is_invincible());

        state.trigger();
        assert!(state.is_invincible());
        assert_eq!(state.ticks_left(), INVINCIBILITY_TICKS);

        for _ in 0..INVINCIBILITY_TICKS - 1 {
            state.advance();
            assert!(state.is_invincible());
        }
        state.advance();
        assert_eq!(state, DamageState::Vulnerable);
        assert_eq!(state.ticks_left(), 0);

        // Advancing while vulnerable is a no-op
        state.advance();
        assert_eq!(state, DamageState::Vulnerable);
    }
}
