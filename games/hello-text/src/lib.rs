use wasm_bindgen::prelude::*;
use roomhop_engine::*;

mod game;
use game::HelloText;

roomhop_web::export_game!(HelloText, "hello-text");
