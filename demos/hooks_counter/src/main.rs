use hooks_counter::App;
use hooks_platform::run_console_app;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("hooks counter starting; type `help` for commands");
    run_console_app(App)
}
