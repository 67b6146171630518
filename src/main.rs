fn main() {
    bifrost_plugin::run_cli();
}
