use clap::Parser;
use echo_server::core::concat;
use echo_server::utils::{logger, validation::Validate};
use echo_server::ConcatConfig;

fn main() {
    let config = ConcatConfig::parse();
    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = if config.files.is_empty() {
        let stdin = std::io::stdin();
        concat::copy_stream(&mut stdin.lock(), &mut out)
    } else {
        concat::concat_files(&config.files, &mut out)
    };

    match result {
        Ok(copied) => tracing::debug!("Copied {} bytes", copied),
        Err(e) => {
            tracing::error!("concat failed: {}", e);
            std::process::exit(1);
        }
    }
}
