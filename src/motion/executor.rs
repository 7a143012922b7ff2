//! Motion execution - resumable, step-wise plan execution.
//!
//! The control loop advances an in-flight plan one step unit at a time, so
//! an End press is observable between any two units and an abort always
//! leaves the trolley at a confirmed step boundary.

use crate::board::TrolleyPosition;
use crate::driver::{Axis, GantryDriver};
use crate::error::{MotionError, Result};

use super::plan::{MoveAction, MovePlan};

/// Outcome of one execution slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepStatus {
    /// More step units remain.
    InProgress,
    /// The plan has run to completion.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExecState {
    Running,
    Complete,
    Aborted,
    Faulted,
}

/// Runtime state for one in-flight move plan.
#[derive(Debug, Clone)]
pub struct MotionExecutor {
    plan: MovePlan,
    action_idx: usize,
    units_done: u32,
    magnet_on: bool,
    state: ExecState,
}

impl MotionExecutor {
    /// Begin executing a plan.
    pub fn new(plan: MovePlan) -> Self {
        let state = if plan.is_empty() {
            ExecState::Complete
        } else {
            ExecState::Running
        };
        Self {
            plan,
            action_idx: 0,
            units_done: 0,
            magnet_on: false,
            state,
        }
    }

    /// Whether the plan ran to completion.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == ExecState::Complete
    }

    /// Whether the plan was aborted before completion.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.state == ExecState::Aborted
    }

    /// Whether a piece is currently held by the magnet.
    #[inline]
    pub fn carrying_piece(&self) -> bool {
        self.magnet_on
    }

    /// Execute one step unit.
    ///
    /// Magnet actions queued before the next travel unit are applied first;
    /// they are point operations, never concurrent with axis motion, and
    /// only run once the preceding travel has confirmed stationary. Then at
    /// most one travel unit is issued: one step on the segment's axis, or
    /// one step on both axes for a diagonal unit. `TrolleyPosition` is
    /// updated per axis only after the driver confirms the step.
    ///
    /// # Errors
    ///
    /// A driver fault surfaces as `MotionError::MotionFault`. The magnet is
    /// forced to the safe disengaged state unless a piece is mid-transport,
    /// in which case it stays engaged.
    pub fn step_once<D: GantryDriver>(
        &mut self,
        driver: &mut D,
        position: &mut TrolleyPosition,
    ) -> Result<StepStatus> {
        if self.state != ExecState::Running {
            return Ok(StepStatus::Done);
        }

        // Apply point operations queued before the next travel unit.
        while let Some(MoveAction::Magnet(on)) = self.plan.get(self.action_idx) {
            driver.set_magnet(*on);
            self.magnet_on = *on;
            self.action_idx += 1;
        }

        // Only a travel action (or the end of the plan) can follow here.
        let segment = match self.plan.get(self.action_idx).copied() {
            Some(MoveAction::Travel(segment)) => segment,
            _ => {
                self.state = ExecState::Complete;
                return Ok(StepStatus::Done);
            }
        };

        let (da, db) = segment.kind.unit_delta();
        if da != 0 {
            self.step_axis(driver, position, Axis::A, da, segment.rate)?;
        }
        if db != 0 {
            self.step_axis(driver, position, Axis::B, db, segment.rate)?;
        }

        self.units_done += 1;
        if self.units_done >= segment.units {
            self.action_idx += 1;
            self.units_done = 0;
        }

        Ok(StepStatus::InProgress)
    }

    fn step_axis<D: GantryDriver>(
        &mut self,
        driver: &mut D,
        position: &mut TrolleyPosition,
        axis: Axis,
        delta: i32,
        rate: crate::config::units::StepRate,
    ) -> Result<()> {
        if driver.step_axis(axis, delta, rate).is_err() {
            self.state = ExecState::Faulted;
            if !self.magnet_on {
                driver.set_magnet(false);
            }
            return Err(MotionError::MotionFault { axis }.into());
        }
        position.offset_axis(axis, delta);
        Ok(())
    }

    /// Abort the plan between step units.
    ///
    /// Halts motion and releases the magnet (a carried piece is set down in
    /// place). The position stays at the last confirmed step boundary; grid
    /// alignment may be lost and is recoverable only via calibration.
    pub fn abort<D: GantryDriver>(&mut self, driver: &mut D) {
        if self.state == ExecState::Running {
            self.state = ExecState::Aborted;
        }
        driver.set_magnet(false);
        self.magnet_on = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{StepRate, Steps};
    use crate::driver::DriveFault;
    use crate::motion::plan::{MoveKind, PrimitiveMove};

    const RATE: StepRate = StepRate(1000);

    /// Scripted driver recording per-axis travel and magnet switches.
    struct RecordingDriver {
        a_steps: i32,
        b_steps: i32,
        magnet: bool,
        magnet_switches: u32,
        fault_after: Option<u32>,
        calls: u32,
    }

    impl RecordingDriver {
        fn new() -> Self {
            Self {
                a_steps: 0,
                b_steps: 0,
                magnet: false,
                magnet_switches: 0,
                fault_after: None,
                calls: 0,
            }
        }
    }

    impl GantryDriver for RecordingDriver {
        fn step_axis(
            &mut self,
            axis: Axis,
            steps: i32,
            _rate: StepRate,
        ) -> core::result::Result<(), DriveFault> {
            if let Some(limit) = self.fault_after {
                if self.calls >= limit {
                    return Err(DriveFault::Stall);
                }
            }
            self.calls += 1;
            match axis {
                Axis::A => self.a_steps += steps,
                Axis::B => self.b_steps += steps,
            }
            Ok(())
        }

        fn set_magnet(&mut self, on: bool) {
            if self.magnet != on {
                self.magnet_switches += 1;
            }
            self.magnet = on;
        }

        fn limit_tripped(&mut self, _axis: Axis) -> bool {
            false
        }
    }

    fn travel(kind: MoveKind, units: u32) -> MoveAction {
        MoveAction::Travel(PrimitiveMove { kind, units, rate: RATE })
    }

    #[test]
    fn test_empty_plan_completes_immediately() {
        let mut driver = RecordingDriver::new();
        let mut position = TrolleyPosition::zero();
        let mut exec = MotionExecutor::new(MovePlan::new());

        assert!(exec.is_complete());
        assert_eq!(
            exec.step_once(&mut driver, &mut position).unwrap(),
            StepStatus::Done
        );
    }

    #[test]
    fn test_runs_plan_to_completion() {
        let mut plan = MovePlan::new();
        let _ = plan.push(MoveAction::Magnet(true));
        let _ = plan.push(travel(MoveKind::NorthEast, 3));
        let _ = plan.push(travel(MoveKind::East, 2));
        let _ = plan.push(MoveAction::Magnet(false));

        let mut driver = RecordingDriver::new();
        let mut position = TrolleyPosition::zero();
        let mut exec = MotionExecutor::new(plan);

        let mut slices = 0;
        loop {
            match exec.step_once(&mut driver, &mut position).unwrap() {
                StepStatus::InProgress => slices += 1,
                StepStatus::Done => break,
            }
            assert!(slices < 100, "executor did not terminate");
        }

        assert!(exec.is_complete());
        assert_eq!(slices, 5);
        assert_eq!(driver.a_steps, 5);
        assert_eq!(driver.b_steps, 3);
        assert_eq!(position, TrolleyPosition::new(Steps(5), Steps(3)));
        // Engaged once, released once
        assert_eq!(driver.magnet_switches, 2);
        assert!(!driver.magnet);
    }

    #[test]
    fn test_magnet_never_toggles_mid_segment() {
        let mut plan = MovePlan::new();
        let _ = plan.push(travel(MoveKind::North, 2));
        let _ = plan.push(MoveAction::Magnet(true));
        let _ = plan.push(travel(MoveKind::South, 2));

        let mut driver = RecordingDriver::new();
        let mut position = TrolleyPosition::zero();
        let mut exec = MotionExecutor::new(plan);

        // Two units of approach travel before the magnet may engage
        exec.step_once(&mut driver, &mut position).unwrap();
        assert!(!driver.magnet);
        exec.step_once(&mut driver, &mut position).unwrap();
        assert!(!driver.magnet);

        // Engagement happens with the head stationary at the segment boundary
        exec.step_once(&mut driver, &mut position).unwrap();
        assert!(driver.magnet);
        assert!(exec.carrying_piece());
    }

    #[test]
    fn test_abort_releases_magnet_at_step_boundary() {
        let mut plan = MovePlan::new();
        let _ = plan.push(MoveAction::Magnet(true));
        let _ = plan.push(travel(MoveKind::East, 10));

        let mut driver = RecordingDriver::new();
        let mut position = TrolleyPosition::zero();
        let mut exec = MotionExecutor::new(plan);

        exec.step_once(&mut driver, &mut position).unwrap();
        exec.step_once(&mut driver, &mut position).unwrap();
        exec.step_once(&mut driver, &mut position).unwrap();

        exec.abort(&mut driver);

        assert!(exec.is_aborted());
        assert!(!driver.magnet);
        // Position equals the confirmed steps actually issued
        assert_eq!(position.a, Steps(3));

        // An aborted executor issues nothing further
        assert_eq!(
            exec.step_once(&mut driver, &mut position).unwrap(),
            StepStatus::Done
        );
        assert_eq!(driver.a_steps, 3);
    }

    #[test]
    fn test_fault_without_piece_forces_magnet_safe() {
        let mut plan = MovePlan::new();
        let _ = plan.push(travel(MoveKind::East, 5));

        let mut driver = RecordingDriver::new();
        driver.magnet = true; // stale engaged state from before
        driver.fault_after = Some(2);
        let mut position = TrolleyPosition::zero();
        let mut exec = MotionExecutor::new(plan);

        exec.step_once(&mut driver, &mut position).unwrap();
        exec.step_once(&mut driver, &mut position).unwrap();
        let err = exec.step_once(&mut driver, &mut position).unwrap_err();

        assert_eq!(
            err,
            crate::error::Error::Motion(MotionError::MotionFault { axis: Axis::A })
        );
        assert!(!driver.magnet);
        assert_eq!(position.a, Steps(2));
    }

    #[test]
    fn test_fault_mid_transport_keeps_magnet_engaged() {
        let mut plan = MovePlan::new();
        let _ = plan.push(MoveAction::Magnet(true));
        let _ = plan.push(travel(MoveKind::North, 5));

        let mut driver = RecordingDriver::new();
        driver.fault_after = Some(1);
        let mut position = TrolleyPosition::zero();
        let mut exec = MotionExecutor::new(plan);

        exec.step_once(&mut driver, &mut position).unwrap();
        let err = exec.step_once(&mut driver, &mut position).unwrap_err();

        assert!(matches!(
            err,
            crate::error::Error::Motion(MotionError::MotionFault { .. })
        ));
        // Piece mid-transport: do not drop it
        assert!(driver.magnet);
    }
}
