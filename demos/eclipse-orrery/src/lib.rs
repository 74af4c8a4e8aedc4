use wasm_bindgen::prelude::*;

mod bodies;
mod game;
use game::EclipseOrrery;

clockwork_web::export_game!(EclipseOrrery, "eclipse-orrery");

#[cfg(test)]
mod tests {
    #[test]
    fn manifest_takes_js_bindings_from_the_web_bridge() {
        let manifest = include_str!("../Cargo.toml");
        assert!(manifest.contains("clockwork-web"));
        assert!(!manifest.contains("js-sys"));
        assert!(!manifest.contains("web-sys"));
    }
}
