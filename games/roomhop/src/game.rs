use roomhop_engine::*;
use glam::Vec2;

use crate::controls::{TouchControls, TouchInputState};
use crate::movement::{self, MoveIntent};
use crate::room_view::RoomView;
use crate::rooms::lookup;
use crate::session::GameSession;
use crate::textures;
use crate::transition::{attempt_move, check_exit, Transition, TransitionController};
use crate::tuning::{EDGE_PADDING, EVENT_ROOM_CHANGED, GRAVITY_Y, WORLD_H, WORLD_W};

/// The room-hopping platformer.
pub struct RoomHopper {
    session: Option<GameSession>,
    view: Option<RoomView>,
    transitions: TransitionController,
    touch: Option<TouchControls>,
    touch_state: TouchInputState,
}

impl RoomHopper {
    pub fn new() -> Self {
        Self {
            session: None,
            view: None,
            transitions: TransitionController::new(),
            touch: None,
            touch_state: TouchInputState::default(),
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    fn apply_movement(&mut self, ctx: &mut EngineContext, player: EntityId, input: &InputState) {
        let intent = MoveIntent::read(input, &mut self.touch_state);
        let out = movement::resolve(intent, ctx.blocked_down(player));

        let vy = out.vy.unwrap_or_else(|| ctx.velocity(player).y);
        ctx.set_velocity(player, Vec2::new(out.vx, vy));
        if let Some(face_left) = out.face_left {
            if let Some(entity) = ctx.scene.get_mut(player) {
                entity.set_flip_x(face_left);
            }
        }
    }

    fn check_room_transition(&mut self, ctx: &mut EngineContext) {
        let (Some(session), Some(view)) = (self.session.as_mut(), self.view.as_ref()) else {
            return;
        };
        let player = session.player;
        let Some(pos) = ctx.scene.get(player).map(|e| e.pos) else {
            return;
        };
        let viewport = ctx.world_size();
        let Some(exit) = check_exit(pos, viewport, EDGE_PADDING) else {
            return;
        };

        match attempt_move(session.current_room, exit, pos, viewport, EDGE_PADDING) {
            Transition::Blocked { pos } => {
                log::debug!("no room past {:?} of {:?}", exit, session.current_room);
                ctx.teleport(player, pos);
                ctx.set_velocity(player, Vec2::ZERO);
            }
            Transition::Entered { room, def, pos } => {
                self.transitions.begin();
                let from = session.current_room;
                session.current_room = room;
                view.load(ctx, def);
                ctx.teleport(player, pos);
                ctx.set_velocity(player, Vec2::ZERO);
                ctx.emit_event(GameEvent::new(EVENT_ROOM_CHANGED, room.x as f32, room.y as f32, 0.0));
                log::info!("moved {:?} from {:?} to {:?} ({})", exit, from, room, def.label);
                self.transitions.finish();
            }
        }
    }
}

impl Default for RoomHopper {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for RoomHopper {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            max_instances: 64,
            gravity: Vec2::new(0.0, GRAVITY_Y),
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), InitError> {
        if !ctx.device.has_keyboard {
            return Err(InitError::KeyboardUnavailable);
        }

        let tex = textures::register(&mut ctx.textures);
        let session = GameSession::start(ctx, tex.player);
        let view = RoomView::new(ctx, tex.pixel);
        match lookup(session.current_room) {
            Some(room) => view.load(ctx, room),
            None => log::warn!("start room {:?} is not in the grid", session.current_room),
        }

        if !ctx.device.is_desktop {
            self.touch = Some(TouchControls::create(ctx));
        }

        log::info!(
            "RoomHopper: started in {:?} (touch controls: {})",
            session.current_room,
            self.touch.is_some()
        );
        self.session = Some(session);
        self.view = Some(view);
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
        let Some(player) = self.session.map(|s| s.player) else {
            return;
        };
        if let Some(touch) = self.touch.as_mut() {
            touch.handle(input.pointer_events(), &mut self.touch_state);
        }
        self.apply_movement(ctx, player, input);
        self.check_room_transition(ctx);
    }

    fn teardown(&mut self, ctx: &mut EngineContext) {
        if let Some(view) = self.view.take() {
            view.clear(ctx);
        }
        if let Some(touch) = self.touch.take() {
            touch.remove(ctx);
        }
        if let Some(session) = self.session.take() {
            ctx.despawn(session.player);
        }
        self.touch_state = TouchInputState::default();
        log::info!("RoomHopper: torn down");
    }
}
