use wasm_bindgen::prelude::*;

mod game;
use game::PendulumClock;

clockwork_web::export_game!(PendulumClock, "pendulum-clock");
