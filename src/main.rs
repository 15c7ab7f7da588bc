use vocal_password::Settings;

fn main() -> cushy::Result {
    vocal_password::initialize_tracing();
    vocal_password::run(Settings::default())
}
