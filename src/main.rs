#[cfg(target_arch = "wasm32")]
fn main() {
    use leptos::*;
    use nexushr_frontend::{config, App};
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting NexusHR frontend");

    spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
        mount_to_body(|| view! { <App /> });
    });
}

// The binary only does anything on the WASM target; host builds exist for
// the test suite against the library.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("nexushr-frontend is a WASM application; build it with trunk for the browser");
}
