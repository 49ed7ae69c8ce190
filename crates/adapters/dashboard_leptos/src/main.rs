fn main() {
    leptos::mount::mount_to_body(salonview_dashboard::App);
}
