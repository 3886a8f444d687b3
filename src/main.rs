use ip_lookup::config::Config;
use ip_lookup::infoblox::WapiClient;
use ip_lookup::{args, report_error};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    ip_lookup::init_logging("log4rs.yml");
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => return ExitCode::from(report_error(&e, &mut std::io::stdout())),
    };

    let target = match args::resolve_os(std::env::args_os().skip(1)) {
        Ok(target) => target,
        Err(e) => return ExitCode::from(report_error(&e, &mut std::io::stdout())),
    };

    let client = match WapiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => return ExitCode::from(report_error(&e, &mut std::io::stderr())),
    };

    let mut stdout = std::io::stdout().lock();
    match ip_lookup::run(&client, target, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(report_error(&e, &mut std::io::stderr())),
    }
}
