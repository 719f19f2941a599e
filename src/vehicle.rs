use std::f64::consts::PI;

use crate::constants::{STEER_STEP, VEHICLE_COLOR, VEHICLE_WIDTH, VELOCITY_STEP};
use crate::geometry::{rotated_rect_corners, Point2};
use crate::input::ControlCommand;
use crate::platform::Surface;

/// Anything the simulation loop advances once per tick.
pub trait Body {
    /// Integrates one fixed tick.
    fn advance(&mut self);

    /// Reacts to a driver command. Bodies nobody drives ignore it.
    fn control(&mut self, _command: ControlCommand) {}

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), String>;
}

/// Kinematic bicycle model of a single car.
///
/// Velocity is a displacement per tick rather than a rate, so `advance` has
/// no explicit time step. Neither velocity nor steering is bounded.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub velocity: f64,
    pub steer_angle: f64,
    wheelbase_length: f64,
}

impl VehicleState {
    pub fn new(x: f64, y: f64, heading: f64, wheelbase_length: f64) -> Self {
        debug_assert!(wheelbase_length > 0.0, "wheelbase must be positive");
        VehicleState {
            x,
            y,
            heading,
            velocity: 0.0,
            steer_angle: 0.0,
            wheelbase_length,
        }
    }

    pub fn wheelbase_length(&self) -> f64 {
        self.wheelbase_length
    }

    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Angle between heading and the direction of travel, caused by
    /// tracking the body from its centre rather than the steered axle.
    pub fn slip_angle(&self) -> f64 {
        let half_wheelbase = self.wheelbase_length / 2.0;
        (half_wheelbase * self.steer_angle.tan()).atan2(self.wheelbase_length)
    }

    pub fn angular_velocity(&self) -> f64 {
        self.velocity * self.steer_angle.tan() * self.slip_angle().cos() / self.wheelbase_length
    }

    pub fn apply(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::Accelerate => self.velocity += VELOCITY_STEP,
            ControlCommand::Decelerate => self.velocity -= VELOCITY_STEP,
            ControlCommand::SteerLeft => self.steer_angle += STEER_STEP,
            ControlCommand::SteerRight => self.steer_angle -= STEER_STEP,
            ControlCommand::Stop => {
                self.velocity = 0.0;
                self.steer_angle = 0.0;
            }
        }
    }

    pub fn outline(&self) -> [Point2; 4] {
        rotated_rect_corners(VEHICLE_WIDTH, self.wheelbase_length, self.position(), self.heading)
    }
}

impl Body for VehicleState {
    fn advance(&mut self) {
        let slip_angle = self.slip_angle();
        let angular_velocity = self.angular_velocity();

        // The extra half turn makes heading 0 drive towards the top of the window
        let travel = self.heading + slip_angle + PI;
        self.x += self.velocity * travel.sin();
        self.y += self.velocity * travel.cos();
        self.heading += angular_velocity;
    }

    fn control(&mut self, command: ControlCommand) {
        self.apply(command);
        log::debug!(
            "{:?}: velocity {:.1}, steer {:.2} rad",
            command,
            self.velocity,
            self.steer_angle
        );
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.draw_closed_polyline(VEHICLE_COLOR, &self.outline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn car() -> VehicleState {
        VehicleState::new(400.0, 300.0, 0.0, 50.0)
    }

    #[test]
    fn starts_at_rest() {
        let car = car();
        assert_eq!(car.velocity, 0.0);
        assert_eq!(car.steer_angle, 0.0);
        assert_eq!(car.wheelbase_length(), 50.0);
    }

    #[test]
    fn straight_steering_moves_along_heading() {
        for &(velocity, heading) in &[(1.0, 0.0), (-3.5, 1.2), (7.25, -2.9), (0.5, 10.0)] {
            let mut car = VehicleState::new(10.0, 20.0, heading, 50.0);
            car.velocity = velocity;
            car.advance();

            assert_eq!(car.heading, heading);
            assert!((car.x - (10.0 + velocity * (heading + PI).sin())).abs() < EPS);
            assert!((car.y - (20.0 + velocity * (heading + PI).cos())).abs() < EPS);
        }
    }

    #[test]
    fn zero_steer_has_no_slip_or_turn() {
        let mut car = car();
        car.velocity = 12.0;
        assert_eq!(car.slip_angle(), 0.0);
        assert_eq!(car.angular_velocity(), 0.0);
    }

    #[test]
    fn standing_still_ignores_steering() {
        for &steer in &[0.5, -1.0, 1.5, 4.0] {
            let mut car = car();
            car.steer_angle = steer;
            let before = car.clone();
            car.advance();
            assert_eq!(car.x, before.x);
            assert_eq!(car.y, before.y);
            assert_eq!(car.heading, before.heading);
        }
    }

    #[test]
    fn advance_only_touches_pose() {
        let mut car = car();
        car.velocity = 2.0;
        car.steer_angle = -0.5;
        car.advance();
        assert_eq!(car.velocity, 2.0);
        assert_eq!(car.steer_angle, -0.5);
        assert_eq!(car.wheelbase_length(), 50.0);
    }

    #[test]
    fn advance_is_deterministic() {
        let mut a = car();
        a.velocity = 3.0;
        a.steer_angle = 0.5;
        let mut b = a.clone();
        for _ in 0..100 {
            a.advance();
            b.advance();
        }
        assert_eq!(a, b);
    }

    #[test]
    fn one_forward_tick_moves_up_one_pixel() {
        let mut car = car();
        car.apply(ControlCommand::Accelerate);
        car.advance();
        assert!((car.x - 400.0).abs() < EPS);
        assert_eq!(car.y, 299.0);
        assert_eq!(car.heading, 0.0);
    }

    #[test]
    fn steered_tick_matches_bicycle_formulas() {
        let mut car = car();
        car.apply(ControlCommand::SteerLeft);
        car.apply(ControlCommand::Accelerate);
        car.advance();

        let tan_steer = 0.5_f64.tan();
        let slip = (25.0 * tan_steer).atan2(50.0);
        let angular = tan_steer * slip.cos() / 50.0;
        assert!((car.x - (400.0 + (slip + PI).sin())).abs() < EPS);
        assert!((car.y - (300.0 + (slip + PI).cos())).abs() < EPS);
        assert!((car.heading - angular).abs() < EPS);

        // Turning left drifts towards -x while still climbing the screen
        assert!((car.x - 399.7365).abs() < 1e-3);
        assert!((car.y - 299.0353).abs() < 1e-3);
        assert!((car.heading - 0.010540).abs() < 1e-5);
    }

    #[test]
    fn up_then_down_cancels() {
        let mut car = car();
        car.velocity = 4.0;
        car.apply(ControlCommand::Accelerate);
        car.apply(ControlCommand::Decelerate);
        assert_eq!(car.velocity, 4.0);
    }

    #[test]
    fn stop_is_a_hard_reset() {
        let mut car = car();
        for _ in 0..7 {
            car.apply(ControlCommand::Accelerate);
            car.apply(ControlCommand::SteerRight);
        }
        car.apply(ControlCommand::Stop);
        assert_eq!(car.velocity, 0.0);
        assert_eq!(car.steer_angle, 0.0);
    }

    #[test]
    fn repeated_impulses_are_not_clamped() {
        let mut car = car();
        for _ in 0..40 {
            car.apply(ControlCommand::Accelerate);
            car.apply(ControlCommand::SteerLeft);
        }
        assert_eq!(car.velocity, 40.0);
        assert_eq!(car.steer_angle, 20.0);
    }

    #[test]
    fn outline_is_centred_on_the_car() {
        let mut car = car();
        car.heading = 0.8;
        let outline = car.outline();
        let cx = outline.iter().map(|p| p.x).sum::<f64>() / 4.0;
        let cy = outline.iter().map(|p| p.y).sum::<f64>() / 4.0;
        assert!((cx - 400.0).abs() < 1e-9);
        assert!((cy - 300.0).abs() < 1e-9);
    }
}
