fn main() {
    caredesk::run();
}
