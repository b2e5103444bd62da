use statig::prelude::*;

use super::*;
use crate::touch::{
    classify::{classify, exceeds_slop},
    timer::DelayTimer,
    types::SwipeDirection,
};

pub(super) struct GestureHsm {
    config: GestureConfig,
    capabilities: Capabilities,
    samples: SampleBuffer,
    long_press_timer: DelayTimer,
    session_id: u32,
    phase: SessionPhase,
    touched: bool,
    long_pressed: bool,
    swipe_direction: SwipeDirection,
    touch_duration_ms: u64,
}

impl GestureHsm {
    pub(super) fn new(config: GestureConfig, capabilities: Capabilities) -> Self {
        Self {
            config,
            capabilities,
            samples: SampleBuffer::new(),
            long_press_timer: DelayTimer::new(),
            session_id: 0,
            phase: SessionPhase::Idle,
            touched: false,
            long_pressed: false,
            swipe_direction: SwipeDirection::None,
            touch_duration_ms: 0,
        }
    }

    pub(super) fn next_deadline(&self) -> Option<u64> {
        self.long_press_timer.deadline_ms()
    }

    pub(super) fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub(super) fn samples(&self) -> &SampleBuffer {
        &self.samples
    }

    pub(super) fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub(super) fn touch_state(&self) -> TouchState {
        TouchState {
            touched: self.touched,
            long_pressed: self.long_pressed,
            swipe_direction: self.swipe_direction,
            touch_duration_ms: self.touch_duration_ms,
        }
    }

    fn is_inert(&self) -> bool {
        !self.config.feedback_enabled
            && !self.config.swipe_enabled
            && !self.capabilities.tap
            && !self.capabilities.long_press
    }

    fn begin_session(&mut self, context: &mut DispatchContext, point: ContactPoint) {
        self.session_id = self.session_id.wrapping_add(1);
        self.long_pressed = false;
        self.swipe_direction = SwipeDirection::None;
        self.samples.record_start(point);
        self.touched = self.config.feedback_enabled;
        self.phase = SessionPhase::Pressed;

        if self.capabilities.long_press {
            self.long_press_timer
                .arm(point.t_ms, self.config.long_press_delay_ms, self.session_id);
        }

        log::debug!(
            "session {} start at ({}, {}) t={}",
            self.session_id,
            point.x,
            point.y,
            point.t_ms
        );
        self.emit(context, GestureEventKind::Start, point);
    }

    fn record_move(&mut self, context: &mut DispatchContext, point: ContactPoint) {
        self.samples.record_move(point);
        log::trace!("session {} move to ({}, {})", self.session_id, point.x, point.y);
        self.emit(context, GestureEventKind::Move, point);
    }

    fn left_slop(&self, point: ContactPoint) -> bool {
        self.samples
            .start()
            .is_some_and(|start| exceeds_slop(start, point, self.config.long_press_slop))
    }

    fn fire_long_press(&mut self, context: &mut DispatchContext, now_ms: u64) -> bool {
        let due_ms = self.long_press_timer.deadline_ms().unwrap_or(now_ms);
        match self.long_press_timer.poll(now_ms) {
            Some(token) if token == self.session_id => {
                self.long_pressed = true;
                self.phase = SessionPhase::LongPressed;
                let at = self
                    .samples
                    .last()
                    .map(|last| ContactPoint { t_ms: due_ms, ..last })
                    .unwrap_or_default();
                log::debug!("session {} long press at t={}", self.session_id, due_ms);
                self.emit(context, GestureEventKind::LongPress, at);
                true
            }
            Some(stale) => {
                log::debug!(
                    "ignoring long press armed for session {stale} (current {})",
                    self.session_id
                );
                false
            }
            None => false,
        }
    }

    fn finish_session(&mut self, context: &mut DispatchContext, point: ContactPoint) {
        self.long_press_timer.cancel();
        self.samples.record_move(point);
        self.emit(context, GestureEventKind::End, point);

        let params = self.config.classifier_params();
        if let Some(result) = classify(self.samples.start(), self.samples.last(), &params) {
            self.touch_duration_ms = result.duration_ms;

            let gesture = if self.long_pressed {
                // Tap never follows a long-press; swipe only when not terminal.
                match result.gesture() {
                    Some(GestureEventKind::Swipe(_)) if !self.config.long_press_terminal => {
                        result.gesture()
                    }
                    _ => None,
                }
            } else {
                result.gesture()
            };

            if let Some(GestureEventKind::Swipe(direction)) = gesture {
                self.swipe_direction = direction;
            }
            if let Some(kind) = gesture {
                log::debug!(
                    "session {} resolved as {} (dx={} dy={} duration={}ms)",
                    self.session_id,
                    kind.label(),
                    result.dx,
                    result.dy,
                    result.duration_ms
                );
                self.emit(context, kind, point);
            }
        }

        self.reset_session();
    }

    fn abort_session(&mut self, context: &mut DispatchContext, now_ms: u64) {
        self.long_press_timer.cancel();
        let at = self
            .samples
            .last()
            .map(|last| ContactPoint { t_ms: now_ms, ..last })
            .unwrap_or_default();
        log::debug!("session {} cancelled at t={}", self.session_id, now_ms);
        self.emit(context, GestureEventKind::Cancel, at);
        self.swipe_direction = SwipeDirection::None;
        self.touch_duration_ms = 0;
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.long_press_timer.cancel();
        self.samples.clear();
        self.touched = false;
        self.long_pressed = false;
        self.phase = SessionPhase::Idle;
    }

    fn emit(&self, context: &mut DispatchContext, kind: GestureEventKind, point: ContactPoint) {
        let start = self.samples.start().unwrap_or(point);
        context.emit(GestureEvent {
            kind,
            t_ms: point.t_ms,
            x: point.x,
            y: point.y,
            start_x: start.x,
            start_y: start.y,
            duration_ms: point.t_ms.saturating_sub(start.t_ms),
        });
    }
}

#[state_machine(initial = "State::idle()")]
impl GestureHsm {
    #[state]
    fn idle(&mut self, context: &mut DispatchContext, event: &GestureHsmEvent) -> Outcome<State> {
        match event {
            GestureHsmEvent::Start(point) => {
                if self.is_inert() {
                    log::trace!("inert interpreter ignores contact start");
                    return Handled;
                }
                self.begin_session(context, *point);
                Transition(State::pressed())
            }
            // Nothing recorded: no start means no classification.
            _ => Handled,
        }
    }

    #[state(superstate = "touching")]
    fn pressed(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        match event {
            GestureHsmEvent::Move(point) => {
                self.record_move(context, *point);
                if self.left_slop(*point) {
                    if self.long_press_timer.cancel() {
                        log::debug!("session {} left slop, long press disarmed", self.session_id);
                    }
                    self.phase = SessionPhase::Dragging;
                    return Transition(State::dragging());
                }
                Handled
            }
            GestureHsmEvent::Timer { now_ms } => {
                log::trace!("session {} timer poll t={}", self.session_id, now_ms);
                if self.fire_long_press(context, *now_ms) {
                    Transition(State::long_pressed())
                } else {
                    Handled
                }
            }
            _ => Super,
        }
    }

    #[state(superstate = "touching")]
    fn dragging(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        match event {
            GestureHsmEvent::Move(point) => {
                self.record_move(context, *point);
                Handled
            }
            _ => Super,
        }
    }

    #[state(superstate = "touching")]
    fn long_pressed(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        match event {
            GestureHsmEvent::Move(point) => {
                self.record_move(context, *point);
                Handled
            }
            _ => Super,
        }
    }

    #[superstate]
    fn touching(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        match event {
            GestureHsmEvent::End(point) => {
                self.finish_session(context, *point);
                Transition(State::idle())
            }
            GestureHsmEvent::Cancel { now_ms } => {
                self.abort_session(context, *now_ms);
                Transition(State::idle())
            }
            GestureHsmEvent::Start(point) => {
                // A start without a matching end: drop the dangling session first.
                self.abort_session(context, point.t_ms);
                self.begin_session(context, *point);
                Transition(State::pressed())
            }
            GestureHsmEvent::Detach => {
                log::debug!("session {} detached", self.session_id);
                self.reset_session();
                Transition(State::idle())
            }
            GestureHsmEvent::Timer { .. } | GestureHsmEvent::Move(_) => Handled,
        }
    }
}
