//! The action arbitrator.
//!
//! [`ActionsComponent`] owns at most one running action per pawn and decides
//! what happens to every new request:
//!
//! - **Idle**: the request is created and started immediately
//! - **Outranked**: the incumbent's priority is strictly higher, so the
//!   request is dropped without side effects
//! - **Displacing**: the incumbent is aborted (forced for reactions,
//!   graceful otherwise) and the request starts once it is finished
//! - **Waiting**: the request did not ask to abort, so it starts when the
//!   incumbent finishes on its own
//!
//! Waiting requests form an ordered queue. When the incumbent finishes, the
//! most urgent one starts (newest first among equals) and the rest are
//! discarded as superseded.

use core::fmt;

use tracing::{debug, trace};

use crate::action::{ActionId, ActionKind, PawnAction, PawnEvent};
use crate::env::ActionContext;
use crate::error::ActionError;
use crate::event::ActionEvent;
use crate::priority::ActionPriority;
use crate::status::{AbortMode, AbortState, ActionResult, ActionState, Progress};

/// Deferred constructor for an action.
pub type ActionFactory = Box<dyn FnOnce() -> Box<dyn PawnAction>>;

/// Request to run an action.
///
/// The action itself is only created when the request is granted.
pub struct ActionRequest {
    kind: ActionKind,
    priority: ActionPriority,
    abort_current: bool,
    factory: ActionFactory,
}

impl ActionRequest {
    /// Creates a request that waits for the incumbent instead of aborting it.
    pub fn new<A, F>(kind: ActionKind, priority: ActionPriority, factory: F) -> Self
    where
        A: PawnAction + 'static,
        F: FnOnce() -> A + 'static,
    {
        Self {
            kind,
            priority,
            abort_current: false,
            factory: Box::new(move || Box::new(factory()) as Box<dyn PawnAction>),
        }
    }

    /// Sets whether granting this request aborts the incumbent (builder pattern).
    #[must_use]
    pub fn abort_current(mut self, abort: bool) -> Self {
        self.abort_current = abort;
        self
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn priority(&self) -> ActionPriority {
        self.priority
    }

    pub fn aborts_current(&self) -> bool {
        self.abort_current
    }
}

impl fmt::Debug for ActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRequest")
            .field("kind", &self.kind)
            .field("priority", &self.priority)
            .field("abort_current", &self.abort_current)
            .finish_non_exhaustive()
    }
}

/// What became of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// The action was created and started.
    Started(ActionId),
    /// The request waits for the incumbent to finish.
    Queued,
    /// The request was not granted.
    Rejected(ActionError),
}

impl RequestOutcome {
    /// Returns the started action's id, if the request started one.
    pub fn started(&self) -> Option<ActionId> {
        match self {
            Self::Started(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

struct RunningAction {
    id: ActionId,
    kind: ActionKind,
    priority: ActionPriority,
    state: ActionState,
    action: Box<dyn PawnAction>,
}

struct PendingRequest {
    seq: u64,
    request: ActionRequest,
}

/// Arbitrator holding the running action of one pawn.
#[derive(Default)]
pub struct ActionsComponent {
    current: Option<RunningAction>,
    pending: Vec<PendingRequest>,
    next_id: u64,
    next_seq: u64,
    events: Vec<ActionEvent>,
}

impl ActionsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no action is running or winding down.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    pub fn current_id(&self) -> Option<ActionId> {
        self.current.as_ref().map(|current| current.id)
    }

    pub fn current_kind(&self) -> Option<ActionKind> {
        self.current.as_ref().map(|current| current.kind)
    }

    pub fn current_priority(&self) -> Option<ActionPriority> {
        self.current.as_ref().map(|current| current.priority)
    }

    /// State of the current action; `Running` or `AbortPending` when present.
    pub fn current_state(&self) -> Option<ActionState> {
        self.current.as_ref().map(|current| current.state)
    }

    /// Number of requests waiting for the incumbent.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Events recorded since the last drain, oldest first.
    pub fn events(&self) -> &[ActionEvent] {
        &self.events
    }

    /// Takes the recorded events, oldest first.
    pub fn drain_events(&mut self) -> Vec<ActionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Submits a request.
    ///
    /// Never fails hard: an outranked request comes back as
    /// [`RequestOutcome::Rejected`] and leaves the component untouched, events
    /// included. A request whose kind is already waiting is a no-op that
    /// reports [`RequestOutcome::Queued`].
    pub fn request_start(
        &mut self,
        request: ActionRequest,
        ctx: &mut ActionContext<'_>,
    ) -> RequestOutcome {
        let kind = request.kind;
        let priority = request.priority;

        if let Some(current) = &self.current
            && !priority.can_displace(current.priority)
        {
            let error = ActionError::PriorityRejected {
                requested: kind,
                priority,
                incumbent: current.kind,
                incumbent_priority: current.priority,
            };
            // Outranked requests leave no trace in the outbox
            debug!(code = error.error_code(), "{error}");
            return RequestOutcome::Rejected(error);
        }

        if self.pending.iter().any(|pending| pending.request.kind == kind) {
            trace!(%kind, "same kind already waiting");
            return RequestOutcome::Queued;
        }

        let abort = request.abort_current;
        let seq = self.enqueue(request);

        if abort {
            self.abort_current(priority.abort_mode(), ctx);
        }

        if self.current.is_some() {
            debug!(%kind, %priority, "request queued behind incumbent");
            self.events.push(ActionEvent::Queued { kind, priority });
            return RequestOutcome::Queued;
        }

        match self.promote(ctx) {
            Some((started, outcome)) if started == seq => outcome,
            _ => RequestOutcome::Rejected(ActionError::Superseded { kind }),
        }
    }

    /// Advances the current action by one tick, then starts a waiting request
    /// if the incumbent finished.
    pub fn tick(&mut self, ctx: &mut ActionContext<'_>, delta_seconds: f32) {
        if let Some(current) = self.current.as_mut()
            && let Progress::Finish(result) = current.action.tick(ctx, delta_seconds)
        {
            self.finish_current(result);
        }

        if self.current.is_none() {
            self.promote(ctx);
        }
    }

    /// Routes an external notification to the current action.
    pub fn dispatch(&mut self, event: &PawnEvent, ctx: &mut ActionContext<'_>) {
        let Some(current) = self.current.as_mut() else {
            trace!(?event, "no action to receive event");
            return;
        };

        if let Progress::Finish(result) = current.action.on_event(ctx, event) {
            self.finish_current(result);
            self.promote(ctx);
        }
    }

    /// Force-aborts the current action and discards every waiting request.
    pub fn abort_all(&mut self, ctx: &mut ActionContext<'_>) {
        self.discard_pending();
        self.abort_current(AbortMode::Forced, ctx);
    }

    fn enqueue(&mut self, request: ActionRequest) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingRequest { seq, request });
        seq
    }

    fn abort_current(&mut self, mode: AbortMode, ctx: &mut ActionContext<'_>) {
        let Some(current) = self.current.as_mut() else {
            return;
        };

        let answer = if current.state == ActionState::Running {
            debug!(id = %current.id, kind = %current.kind, ?mode, "aborting action");
            self.events.push(ActionEvent::Aborted {
                id: current.id,
                kind: current.kind,
                mode,
            });
            current.action.abort(ctx, mode)
        } else {
            // Already winding down from an earlier graceful abort
            AbortState::Pending
        };

        match (mode, answer) {
            (AbortMode::Graceful, AbortState::Pending) => {
                current.state = ActionState::AbortPending;
            }
            _ => self.finish_current(mode.result()),
        }
    }

    fn finish_current(&mut self, result: ActionResult) {
        let Some(mut finished) = self.current.take() else {
            return;
        };

        let result = if finished.state == ActionState::AbortPending && result.is_success() {
            ActionResult::Aborted
        } else {
            result
        };
        finished.state = ActionState::Finished;

        debug!(id = %finished.id, kind = %finished.kind, ?result, "action finished");
        self.events.push(ActionEvent::Finished {
            id: finished.id,
            kind: finished.kind,
            result,
        });
    }

    /// Starts the most urgent waiting request; returns its sequence number
    /// and outcome. Everything else still waiting is superseded.
    fn promote(&mut self, ctx: &mut ActionContext<'_>) -> Option<(u64, RequestOutcome)> {
        debug_assert!(self.current.is_none());

        let index = self
            .pending
            .iter()
            .enumerate()
            .max_by_key(|(_, pending)| (pending.request.priority, pending.seq))
            .map(|(index, _)| index)?;

        let chosen = self.pending.swap_remove(index);
        self.discard_pending();

        let outcome = self.start_request(chosen.request, ctx);
        Some((chosen.seq, outcome))
    }

    fn discard_pending(&mut self) {
        for superseded in self.pending.drain(..) {
            let error = ActionError::Superseded {
                kind: superseded.request.kind,
            };
            debug!(code = error.error_code(), "{error}");
            self.events.push(ActionEvent::Rejected { error });
        }
    }

    fn start_request(
        &mut self,
        request: ActionRequest,
        ctx: &mut ActionContext<'_>,
    ) -> RequestOutcome {
        let ActionRequest {
            kind,
            priority,
            factory,
            ..
        } = request;

        let mut action = factory();
        match action.start(ctx) {
            Ok(progress) => {
                let id = ActionId(self.next_id);
                self.next_id += 1;

                debug!(%id, %kind, %priority, "action started");
                self.events.push(ActionEvent::Started { id, kind, priority });
                self.current = Some(RunningAction {
                    id,
                    kind,
                    priority,
                    state: ActionState::Running,
                    action,
                });

                if let Progress::Finish(result) = progress {
                    self.finish_current(result);
                }
                RequestOutcome::Started(id)
            }
            Err(error) => {
                debug!(%kind, code = error.error_code(), "{error}");
                self.events.push(ActionEvent::Rejected {
                    error: error.clone(),
                });
                RequestOutcome::Rejected(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::IntentState;
    use std::cell::Cell;
    use std::rc::Rc;
    use strum::IntoEnumIterator;

    /// Runs until aborted; counts drops.
    struct Idle {
        drops: Rc<Cell<u32>>,
    }

    impl PawnAction for Idle {
        fn kind(&self) -> ActionKind {
            ActionKind::Custom("idle")
        }

        fn start(&mut self, _ctx: &mut ActionContext<'_>) -> Result<Progress, ActionError> {
            Ok(Progress::Continue)
        }
    }

    impl Drop for Idle {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    /// Needs `ticks` more ticks to stop after a graceful abort.
    struct WindDown {
        ticks: u32,
        aborting: bool,
    }

    impl PawnAction for WindDown {
        fn kind(&self) -> ActionKind {
            ActionKind::Custom("wind_down")
        }

        fn start(&mut self, _ctx: &mut ActionContext<'_>) -> Result<Progress, ActionError> {
            Ok(Progress::Continue)
        }

        fn tick(&mut self, _ctx: &mut ActionContext<'_>, _dt: f32) -> Progress {
            if !self.aborting {
                return Progress::Continue;
            }
            self.ticks = self.ticks.saturating_sub(1);
            if self.ticks == 0 {
                Progress::SUCCESS
            } else {
                Progress::Continue
            }
        }

        fn abort(&mut self, _ctx: &mut ActionContext<'_>, mode: AbortMode) -> AbortState {
            match mode {
                AbortMode::Forced => AbortState::Done,
                AbortMode::Graceful => {
                    self.aborting = true;
                    AbortState::Pending
                }
            }
        }
    }

    /// Finishes on its own after `ticks` ticks.
    struct Timed {
        ticks: u32,
    }

    impl PawnAction for Timed {
        fn kind(&self) -> ActionKind {
            ActionKind::Custom("timed")
        }

        fn start(&mut self, _ctx: &mut ActionContext<'_>) -> Result<Progress, ActionError> {
            Ok(Progress::Continue)
        }

        fn tick(&mut self, _ctx: &mut ActionContext<'_>, _dt: f32) -> Progress {
            self.ticks = self.ticks.saturating_sub(1);
            if self.ticks == 0 {
                Progress::SUCCESS
            } else {
                Progress::Continue
            }
        }
    }

    struct Refuses;

    impl PawnAction for Refuses {
        fn kind(&self) -> ActionKind {
            ActionKind::Custom("refuses")
        }

        fn start(&mut self, _ctx: &mut ActionContext<'_>) -> Result<Progress, ActionError> {
            Err(ActionError::start_failed(self.kind(), "nope"))
        }
    }

    struct Instant;

    impl PawnAction for Instant {
        fn kind(&self) -> ActionKind {
            ActionKind::Custom("instant")
        }

        fn start(&mut self, _ctx: &mut ActionContext<'_>) -> Result<Progress, ActionError> {
            Ok(Progress::SUCCESS)
        }
    }

    fn idle(priority: ActionPriority, drops: &Rc<Cell<u32>>) -> ActionRequest {
        let drops = Rc::clone(drops);
        ActionRequest::new(ActionKind::Custom("idle"), priority, move || Idle { drops })
    }

    fn wind_down(priority: ActionPriority, ticks: u32) -> ActionRequest {
        ActionRequest::new(ActionKind::Custom("wind_down"), priority, move || WindDown {
            ticks,
            aborting: false,
        })
    }

    fn timed(priority: ActionPriority, ticks: u32) -> ActionRequest {
        ActionRequest::new(ActionKind::Custom("timed"), priority, move || Timed { ticks })
    }

    #[test]
    fn starts_immediately_when_idle() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();
        let drops = Rc::new(Cell::new(0));

        let outcome = actions.request_start(idle(ActionPriority::Logic, &drops), &mut ctx);

        assert_eq!(outcome, RequestOutcome::Started(ActionId(0)));
        assert_eq!(actions.current_state(), Some(ActionState::Running));
        assert_eq!(actions.current_priority(), Some(ActionPriority::Logic));
        assert_eq!(
            actions.drain_events(),
            vec![ActionEvent::Started {
                id: ActionId(0),
                kind: ActionKind::Custom("idle"),
                priority: ActionPriority::Logic,
            }]
        );
    }

    #[test]
    fn request_succeeds_iff_priority_at_least_incumbent() {
        for incumbent in ActionPriority::iter() {
            for requested in ActionPriority::iter() {
                let mut intent = IntentState::new();
                let mut ctx = ActionContext::new(&mut intent);
                let mut actions = ActionsComponent::new();
                let drops = Rc::new(Cell::new(0));

                let first = actions.request_start(idle(incumbent, &drops), &mut ctx);
                let first_id = first.started().expect("idle component starts");
                actions.drain_events();

                let outcome = actions.request_start(
                    timed(requested, 5).abort_current(true),
                    &mut ctx,
                );

                if requested >= incumbent {
                    assert!(outcome.started().is_some(), "{requested} vs {incumbent}");
                    assert_eq!(actions.current_kind(), Some(ActionKind::Custom("timed")));
                    assert_eq!(drops.get(), 1);
                } else {
                    assert!(outcome.is_rejected(), "{requested} vs {incumbent}");
                    assert_eq!(actions.current_id(), Some(first_id));
                    assert_eq!(actions.current_state(), Some(ActionState::Running));
                    assert_eq!(actions.pending_len(), 0);
                    assert_eq!(drops.get(), 0);
                    assert!(actions.events().is_empty());
                }
            }
        }
    }

    #[test]
    fn tie_favors_newer_request() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();
        let drops = Rc::new(Cell::new(0));

        actions.request_start(idle(ActionPriority::Logic, &drops), &mut ctx);
        let outcome = actions.request_start(
            timed(ActionPriority::Logic, 3).abort_current(true),
            &mut ctx,
        );

        assert_eq!(outcome, RequestOutcome::Started(ActionId(1)));
        let events = actions.drain_events();
        assert!(events.contains(&ActionEvent::Finished {
            id: ActionId(0),
            kind: ActionKind::Custom("idle"),
            result: ActionResult::Aborted,
        }));
    }

    #[test]
    fn graceful_abort_waits_for_wind_down() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();

        actions.request_start(wind_down(ActionPriority::Logic, 2), &mut ctx);
        let outcome = actions.request_start(
            timed(ActionPriority::Logic, 10).abort_current(true),
            &mut ctx,
        );

        assert_eq!(outcome, RequestOutcome::Queued);
        assert_eq!(actions.current_state(), Some(ActionState::AbortPending));
        assert_eq!(actions.pending_len(), 1);

        actions.tick(&mut ctx, 0.016);
        assert_eq!(actions.current_kind(), Some(ActionKind::Custom("wind_down")));

        actions.tick(&mut ctx, 0.016);
        assert_eq!(actions.current_kind(), Some(ActionKind::Custom("timed")));
        assert_eq!(actions.current_state(), Some(ActionState::Running));

        let finished = actions
            .drain_events()
            .into_iter()
            .find(|event| matches!(event, ActionEvent::Finished { .. }));
        assert_eq!(
            finished,
            Some(ActionEvent::Finished {
                id: ActionId(0),
                kind: ActionKind::Custom("wind_down"),
                result: ActionResult::Aborted,
            })
        );
    }

    #[test]
    fn forced_abort_does_not_wait() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();

        actions.request_start(wind_down(ActionPriority::Logic, 5), &mut ctx);
        let outcome = actions.request_start(
            timed(ActionPriority::Reaction, 1).abort_current(true),
            &mut ctx,
        );

        assert_eq!(outcome, RequestOutcome::Started(ActionId(1)));
        assert!(actions.events().contains(&ActionEvent::Finished {
            id: ActionId(0),
            kind: ActionKind::Custom("wind_down"),
            result: ActionResult::ForciblyAborted,
        }));
    }

    #[test]
    fn forced_abort_cuts_a_pending_wind_down_short() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();

        actions.request_start(wind_down(ActionPriority::Logic, 5), &mut ctx);
        actions.request_start(timed(ActionPriority::Logic, 5).abort_current(true), &mut ctx);
        assert_eq!(actions.current_state(), Some(ActionState::AbortPending));

        let outcome = actions.request_start(
            timed(ActionPriority::Reaction, 5).abort_current(true),
            &mut ctx,
        );

        // The reaction outranks the waiting logic request
        assert_eq!(outcome, RequestOutcome::Started(ActionId(1)));
        assert_eq!(actions.current_priority(), Some(ActionPriority::Reaction));
        assert_eq!(actions.pending_len(), 0);
    }

    #[test]
    fn non_aborting_request_waits_for_natural_finish() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();

        actions.request_start(timed(ActionPriority::Logic, 2), &mut ctx);
        let outcome = actions.request_start(wind_down(ActionPriority::Reaction, 1), &mut ctx);
        assert_eq!(outcome, RequestOutcome::Queued);
        assert_eq!(actions.current_state(), Some(ActionState::Running));

        actions.tick(&mut ctx, 0.016);
        assert_eq!(actions.current_priority(), Some(ActionPriority::Logic));

        actions.tick(&mut ctx, 0.016);
        assert_eq!(actions.current_priority(), Some(ActionPriority::Reaction));

        let finished: Vec<_> = actions
            .drain_events()
            .into_iter()
            .filter_map(|event| match event {
                ActionEvent::Finished { result, .. } => Some(result),
                _ => None,
            })
            .collect();
        assert_eq!(finished, vec![ActionResult::Success]);
    }

    #[test]
    fn most_urgent_waiting_request_wins() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();
        let drops = Rc::new(Cell::new(0));

        actions.request_start(timed(ActionPriority::SoftScript, 1), &mut ctx);
        actions.request_start(timed(ActionPriority::Logic, 9), &mut ctx);
        actions.request_start(wind_down(ActionPriority::HardScript, 9), &mut ctx);
        actions.request_start(idle(ActionPriority::Logic, &drops), &mut ctx);
        assert_eq!(actions.pending_len(), 3);
        actions.drain_events();

        actions.tick(&mut ctx, 0.016);

        assert_eq!(actions.current_kind(), Some(ActionKind::Custom("wind_down")));
        assert_eq!(actions.pending_len(), 0);
        let superseded = actions
            .drain_events()
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    ActionEvent::Rejected {
                        error: ActionError::Superseded { .. }
                    }
                )
            })
            .count();
        assert_eq!(superseded, 2);
    }

    #[test]
    fn refused_start_leaves_component_idle() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();

        let request = ActionRequest::new(ActionKind::Custom("refuses"), ActionPriority::Logic, || {
            Refuses
        });
        let outcome = actions.request_start(request, &mut ctx);

        assert!(matches!(
            outcome,
            RequestOutcome::Rejected(ActionError::StartFailed { .. })
        ));
        assert!(actions.is_idle());
    }

    #[test]
    fn action_may_finish_during_start() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();

        let request =
            ActionRequest::new(ActionKind::Custom("instant"), ActionPriority::Logic, || Instant);
        let outcome = actions.request_start(request, &mut ctx);

        assert_eq!(outcome, RequestOutcome::Started(ActionId(0)));
        assert!(actions.is_idle());
        assert_eq!(actions.drain_events().len(), 2);
    }

    #[test]
    fn at_most_one_action_runs_through_a_request_sequence() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();
        let drops = Rc::new(Cell::new(0));

        let priorities: Vec<_> = ActionPriority::iter().collect();
        let mut live = 0i32;
        let mut started = 0u32;
        for step in 0..60usize {
            let priority = priorities[(step * 7) % priorities.len()];
            let request = match step % 4 {
                0 => idle(priority, &drops).abort_current(true),
                1 => timed(priority, (step % 3) as u32 + 1),
                2 => wind_down(priority, 2).abort_current(step % 3 == 0),
                _ => timed(priority, 1).abort_current(true),
            };
            actions.request_start(request, &mut ctx);
            actions.tick(&mut ctx, 0.016);

            // Replay lifecycle transitions: a start may only follow a finish
            for event in actions.drain_events() {
                match event {
                    ActionEvent::Started { .. } => {
                        live += 1;
                        started += 1;
                    }
                    ActionEvent::Finished { .. } => live -= 1,
                    _ => {}
                }
                assert!((0..=1).contains(&live), "step {step}: {live} live actions");
            }

            assert_eq!(live, i32::from(!actions.is_idle()), "step {step}");
            match actions.current_state() {
                Some(state) => assert!(state.is_active(), "step {step}: {state:?}"),
                None => assert_eq!(actions.pending_len(), 0, "step {step}"),
            }
        }
        assert!(started > 1);
    }

    #[test]
    fn repeated_request_of_a_waiting_kind_is_a_no_op() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();

        actions.request_start(wind_down(ActionPriority::Logic, 3), &mut ctx);
        let first = actions.request_start(
            timed(ActionPriority::Logic, 9).abort_current(true),
            &mut ctx,
        );
        assert_eq!(first, RequestOutcome::Queued);
        actions.drain_events();

        for _ in 0..10 {
            let again = actions.request_start(
                timed(ActionPriority::Logic, 9).abort_current(true),
                &mut ctx,
            );
            assert_eq!(again, RequestOutcome::Queued);
        }

        assert_eq!(actions.pending_len(), 1);
        assert!(actions.events().is_empty());

        for _ in 0..3 {
            actions.tick(&mut ctx, 0.016);
        }
        assert_eq!(actions.current_kind(), Some(ActionKind::Custom("timed")));
        let superseded = actions
            .drain_events()
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    ActionEvent::Rejected {
                        error: ActionError::Superseded { .. }
                    }
                )
            })
            .count();
        assert_eq!(superseded, 0);
    }

    #[test]
    fn abort_all_clears_everything() {
        let mut intent = IntentState::new();
        let mut ctx = ActionContext::new(&mut intent);
        let mut actions = ActionsComponent::new();
        let drops = Rc::new(Cell::new(0));

        actions.request_start(idle(ActionPriority::Logic, &drops), &mut ctx);
        actions.request_start(timed(ActionPriority::Reaction, 1), &mut ctx);
        assert_eq!(actions.pending_len(), 1);

        actions.abort_all(&mut ctx);

        assert!(actions.is_idle());
        assert_eq!(actions.pending_len(), 0);
        assert_eq!(drops.get(), 1);
        assert!(actions.events().contains(&ActionEvent::Finished {
            id: ActionId(0),
            kind: ActionKind::Custom("idle"),
            result: ActionResult::ForciblyAborted,
        }));
    }
}
