mod api;
mod app;
mod components;
mod state;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
