//! The player controller: input bindings, tick driver and falling trigger.

use pawn_actions::{
    ActionContext, ActionRequest, ActionsComponent, ControllerId, DirectionalMove,
    FallingReaction, HitResult, IntentState, Pawn, PawnEvent, PlayerView, RequestOutcome,
    TargetedMove, TraceSettings,
};
use tokio::sync::broadcast;
use tracing::{debug, info, trace};

use crate::config::ControllerConfig;
use crate::events::{ControllerEvent, EventBus};
use crate::input::{InputEvent, InputPhase, MoveAxis};

/// Owns the intent state and the action arbitrator of one possessed pawn.
///
/// The host calls, in order each frame: [`handle_input`](Self::handle_input)
/// for every pending input, the movement hooks
/// ([`on_begin_airborne`](Self::on_begin_airborne),
/// [`on_landed`](Self::on_landed)) as the pawn reports them, then
/// [`player_tick`](Self::player_tick) once.
pub struct PlayerController {
    id: ControllerId,
    intent: IntentState,
    actions: ActionsComponent,
    trace: TraceSettings,
    bus: EventBus,
    frame: u64,
    possessing: bool,
}

impl PlayerController {
    pub fn new(id: ControllerId, config: &ControllerConfig) -> Self {
        Self {
            id,
            intent: IntentState::new(),
            actions: ActionsComponent::new(),
            trace: config.input.trace_settings(),
            bus: EventBus::with_capacity(config.events.capacity),
            frame: 0,
            possessing: false,
        }
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn intent(&self) -> &IntentState {
        &self.intent
    }

    pub fn actions(&self) -> &ActionsComponent {
        &self.actions
    }

    /// Number of completed [`player_tick`](Self::player_tick) calls.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_possessing(&self) -> bool {
        self.possessing
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ControllerEvent> {
        self.bus.subscribe()
    }

    /// Takes control of a pawn. Input left over from a previous pawn is cleared.
    pub fn possess(&mut self) {
        info!(controller = self.id.0, "possessing pawn");
        self.intent = IntentState::new();
        self.possessing = true;
    }

    /// Releases the pawn, force-aborting its action and every waiting request.
    pub fn unpossess(&mut self, pawn: Option<&mut dyn Pawn>, view: Option<&dyn PlayerView>) {
        info!(controller = self.id.0, "releasing pawn");
        let mut ctx = context(&mut self.intent, pawn, view);
        self.actions.abort_all(&mut ctx);
        *ctx.intent = IntentState::new();
        self.possessing = false;
        self.publish();
    }

    /// Writes one raw input into the intent state. Ignored while no pawn is possessed.
    pub fn handle_input(&mut self, event: InputEvent, pawn: Option<&mut dyn Pawn>) {
        if !self.possessing {
            trace!(?event, "input ignored: not possessing");
            return;
        }
        trace!(?event, "input");
        match event {
            InputEvent::Axis {
                axis: MoveAxis::MoveRight,
                value,
            } => self.intent.set_move_x(value),
            InputEvent::Axis {
                axis: MoveAxis::MoveForward,
                value,
            } => self.intent.set_move_y(value),
            InputEvent::SetDestination(phase) => {
                self.intent.set_pointer_pressed(phase == InputPhase::Pressed);
            }
            InputEvent::Touch {
                phase: InputPhase::Pressed,
                ..
            } => {
                self.intent.set_touch(true);
                self.intent.set_pointer_pressed(true);
            }
            InputEvent::Touch {
                phase: InputPhase::Released,
                ..
            } => {
                self.intent.set_pointer_pressed(false);
                self.intent.set_touch(false);
            }
            InputEvent::Jump => match pawn {
                Some(pawn) => pawn.jump(),
                None => debug!("jump ignored: no pawn"),
            },
        }
    }

    /// Runs the tick driver, then ticks the running action.
    ///
    /// The driver only runs while a pawn is possessed; host-issued actions
    /// keep ticking either way.
    pub fn player_tick(
        &mut self,
        delta_seconds: f32,
        pawn: Option<&mut dyn Pawn>,
        view: Option<&dyn PlayerView>,
    ) {
        let mut ctx = context(&mut self.intent, pawn, view);

        if self.possessing
            && let Some(request) = drive(ctx.intent, self.trace)
        {
            self.actions.request_start(request, &mut ctx);
        }
        self.actions.tick(&mut ctx, delta_seconds);

        self.publish();
        self.frame += 1;
    }

    /// Movement-mode hook: the pawn left the ground.
    pub fn on_begin_airborne(
        &mut self,
        was_jump: bool,
        pawn: Option<&mut dyn Pawn>,
        view: Option<&dyn PlayerView>,
    ) -> RequestOutcome {
        debug!(was_jump, "pawn airborne");
        let outcome = self.request(FallingReaction::request(was_jump), pawn, view);
        self.publish();
        outcome
    }

    /// Movement-mode hook: the pawn touched ground.
    ///
    /// Broadcasts on the pawn's landed delegate, then routes the landing to
    /// the running action.
    pub fn on_landed(
        &mut self,
        hit: HitResult,
        pawn: Option<&mut dyn Pawn>,
        view: Option<&dyn PlayerView>,
    ) {
        if let Some(pawn) = pawn.as_deref() {
            let notified = pawn.landed().broadcast(hit);
            debug!(location = %hit.location, notified, "pawn landed");
        }

        let mut ctx = context(&mut self.intent, pawn, view);
        self.actions.dispatch(&PawnEvent::Landed(hit), &mut ctx);
        self.publish();
    }

    /// Submits an arbitrary request to the arbitrator.
    pub fn request(
        &mut self,
        request: ActionRequest,
        pawn: Option<&mut dyn Pawn>,
        view: Option<&dyn PlayerView>,
    ) -> RequestOutcome {
        let mut ctx = context(&mut self.intent, pawn, view);
        self.actions.request_start(request, &mut ctx)
    }

    fn publish(&mut self) {
        for event in self.actions.drain_events() {
            self.bus.publish(ControllerEvent {
                frame: self.frame,
                event,
            });
        }
    }
}

/// First matching rule wins; directional input always beats the pointer.
fn drive(intent: &IntentState, trace: TraceSettings) -> Option<ActionRequest> {
    if intent.has_directional_input() && !intent.directional_active() {
        return Some(DirectionalMove::request());
    }

    if intent.pointer_pressed() && !intent.targeted_active() && !intent.directional_active() {
        return Some(TargetedMove::request(trace));
    }

    None
}

fn context<'a, 'p: 'a>(
    intent: &'a mut IntentState,
    pawn: Option<&'a mut (dyn Pawn + 'p)>,
    view: Option<&'a dyn PlayerView>,
) -> ActionContext<'a> {
    let mut ctx = ActionContext::new(intent);
    if let Some(pawn) = pawn {
        ctx = ctx.with_pawn(pawn);
    }
    if let Some(view) = view {
        ctx = ctx.with_view(view);
    }
    ctx
}
