mod app;
mod core;
mod features;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    leptos::mount::mount_to_body(App);
}
