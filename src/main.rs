// WASM entrypoint for Trunk.
//
// Native builds are intentionally no-ops; the real app is behind
// `--features web` and a wasm32 target.

fn main() {
    diapredict_ui::start();
}
