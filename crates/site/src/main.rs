//! Binary entrypoint for the browser-hosted HamzaOS desktop.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    hamza_site::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `hamza_site_app` for wasm32 with the `csr` feature (e.g. `trunk serve`)."
    );
}
