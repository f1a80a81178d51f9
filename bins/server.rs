use common::utils::logging::{init_logging, init_logging_default, LogOutput};
use configs::{AppConfig, LogConfig, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn init_service_logging(log: &LogConfig) {
    let output = match log.format {
        LogFormat::Compact => LogOutput::Compact,
        LogFormat::Json => LogOutput::Json,
    };
    init_logging(output, log.filter.as_deref());
    info!(service = "people_api", event = "logger_init", format = ?log.format, "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG, CONFIG_PATH and SERVER_* are visible
    dotenv().ok();

    let cfg = match AppConfig::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging_default();
            error!(service = "people_api", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    init_service_logging(&cfg.log);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "people_api",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "people_api", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "people_api",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "people api starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(server::run(cfg));

        tokio::select! {
            res = server_task => {
                match res {
                    Ok(Ok(())) => {
                        info!(service = "people_api", event = "stop", %service_id, pid, "server stopped normally");
                        std::process::ExitCode::SUCCESS
                    }
                    Ok(Err(e)) => {
                        error!(service = "people_api", event = "run_failed", error = %e, "server::run returned error");
                        std::process::ExitCode::FAILURE
                    }
                    Err(e) => {
                        error!(service = "people_api", event = "task_join_error", error = %e, "server task join error");
                        std::process::ExitCode::FAILURE
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!(service = "people_api", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
