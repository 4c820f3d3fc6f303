//! Trunk entry point: mounts the showcase into `<body>`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("mounting showcase (base path {})", client::util::base_path::base_path());
    leptos::mount::mount_to_body(client::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
