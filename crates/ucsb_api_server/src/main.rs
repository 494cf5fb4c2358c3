use std::process::ExitCode;
use ucsb_api_server::{run, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ucsb-api: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=server_exit module=server status=error error={err}");
            eprintln!("ucsb-api: {err}");
            ExitCode::FAILURE
        }
    }
}
