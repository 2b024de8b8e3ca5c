use wasm_bindgen::prelude::*;
use roomhop_engine::*;

#[cfg(not(all(feature = "physics", feature = "vectors")))]
compile_error!("roomhop needs the `physics` and `vectors` features");

pub mod backdrop;
pub mod controls;
pub mod game;
pub mod movement;
pub mod room_view;
pub mod rooms;
pub mod session;
pub mod textures;
pub mod transition;
pub mod tuning;

use game::RoomHopper;

roomhop_web::export_game!(RoomHopper, "roomhop", vectors);
