mod app;
mod components;
mod fixtures;
mod services;
mod state;
mod types;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
