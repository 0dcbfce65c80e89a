fn main() {
    request_tracking_system::server::run();
}
