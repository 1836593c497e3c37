//! Push game physics step
//!
//! Two agents stand on a platform and shove each other. Each frame:
//! fall check, drag, pushes, head-on collision, horizontal move, jumps,
//! then overlap correction. Stateless: everything lives in the agents.
//!
//! Units: `dt` arrives in milliseconds. Velocities are px/sec, except that
//! horizontal velocity is scaled by [`VX_SCALE`] before integrating.

use super::agent::Agent;
use super::geometry::{Rect, colliding, directly_above, is_left};
use crate::consts::*;

/// Which of the two agents passed to [`update`] won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
}

/// Start and continue jumps for one agent
///
/// A jump request always resets the vertical velocity, even mid-air. While
/// jumping, the agent lands on the platform (bottom edge snapped to the
/// platform's top) or bumps against the top of the screen.
pub fn do_jump(agent: &mut dyn Agent, platform: &Rect, dt_ms: f32) {
    let dt = dt_ms / 1000.0;

    if agent.take_jump_request() {
        agent.set_jump_state(true);
        agent.body_mut().vel.y = JUMP_VELOCITY;
    }

    if !agent.is_jumping() {
        return;
    }

    let vy = agent.body().vel.y;
    agent.move_by(0.0, vy * dt);
    agent.body_mut().vel.y += GRAVITY * dt;

    let rect = agent.rect();
    if colliding(&rect, platform) {
        agent.body_mut().vel.y = 0.0;
        agent.set_jump_state(false);
        agent.sprite().set_position(rect.x(), platform.y() - rect.height());
        log::debug!("Agent landed at x={:.1}", rect.x());
    } else if rect.y() <= 0.0 {
        agent.sprite().set_position(rect.x(), CEILING_Y);
        agent.body_mut().vel.y = 0.0;
    }
}

/// Exponential horizontal slow-down (1/e every [`DRAG_TIME_CONSTANT_MS`])
pub fn do_drag(agent: &mut dyn Agent, dt_ms: f32) {
    let vx = agent.body().vel.x;
    agent.body_mut().vel.x -= dt_ms * vx / DRAG_TIME_CONSTANT_MS;
}

/// Integrate horizontal velocity
pub fn do_move(agent: &mut dyn Agent, dt_ms: f32) {
    let dt = dt_ms / 1000.0;
    let dx = agent.body().vel.x * VX_SCALE * dt;
    agent.move_by(dx, 0.0);
}

/// Are the two velocities closing on each other (left agent's first)?
///
/// Either heading inwards, or heading the same way with the trailing agent
/// faster than the leading one.
fn converging(left_vx: f32, right_vx: f32) -> bool {
    let inwards = right_vx <= 0.0 && left_vx >= 0.0;
    let catching_up = right_vx * left_vx > 0.0
        && ((right_vx > 0.0 && left_vx > right_vx) || (right_vx < 0.0 && right_vx < left_vx));
    inwards || catching_up
}

/// Advance the match by one frame.
///
/// Returns the winner once an agent's center leaves the platform span, after
/// telling both agents the match is over. The first agent is checked first,
/// so if both fall in the same frame the second agent wins.
///
/// A non-positive or non-finite `dt_ms` does nothing.
pub fn update(
    a1: &mut dyn Agent,
    a2: &mut dyn Agent,
    platform: &Rect,
    dt_ms: f32,
) -> Option<Winner> {
    if !(dt_ms.is_finite() && dt_ms > 0.0) {
        log::trace!("Skipping physics step with dt={}", dt_ms);
        return None;
    }

    // Are we done?
    if !directly_above(platform, &a1.rect()) {
        a1.game_over(false);
        a2.game_over(true);
        log::info!("First agent fell off the platform");
        return Some(Winner::Second);
    }
    if !directly_above(platform, &a2.rect()) {
        a1.game_over(true);
        a2.game_over(false);
        log::info!("Second agent fell off the platform");
        return Some(Winner::First);
    }

    do_drag(a1, dt_ms);
    do_drag(a2, dt_ms);

    let (left, right): (&mut dyn Agent, &mut dyn Agent) = if is_left(&a1.rect(), &a2.rect()) {
        (a1, a2)
    } else {
        (a2, a1)
    };

    // Facing is agent-local: right is always +x
    let push_left =
        left.drain_push() * left.direction().sign() * (left.stamina() + STAMINA_FLOOR);
    let push_right =
        right.drain_push() * right.direction().sign() * (right.stamina() + STAMINA_FLOOR);

    left.body_mut().vel.x += push_left;
    right.body_mut().vel.x += push_right;

    let left_vx = left.body().vel.x;
    let right_vx = right.body().vel.x;
    if colliding(&left.rect(), &right.rect()) && converging(left_vx, right_vx) {
        // Perfectly inelastic: both share the mass-weighted push
        let (left_mass, right_mass) = (left.mass(), right.mass());
        let velocity = (push_left * left_mass + push_right * right_mass) / (left_mass + right_mass);
        left.body_mut().vel.x = velocity;
        right.body_mut().vel.x = velocity;
        log::debug!(
            "Head-on collision: pushes {:.2}/{:.2} -> shared vx {:.3}",
            push_left,
            push_right,
            velocity
        );
    }

    do_move(left, dt_ms);
    do_move(right, dt_ms);

    do_jump(right, platform, dt_ms);
    do_jump(left, platform, dt_ms);

    // Separate anything still overlapping
    let (left_rect, right_rect) = (left.rect(), right.rect());
    if colliding(&left_rect, &right_rect) {
        let overlap = left_rect.right() - right_rect.x();
        if overlap > 0.0 {
            let (left_mass, right_mass) = (left.mass(), right.mass());
            let total_mass = left_mass + right_mass;
            left.move_by(-overlap * left_mass / total_mass, 0.0);
            right.move_by(overlap * right_mass / total_mass, 0.0);
        }
    }

    None
}
