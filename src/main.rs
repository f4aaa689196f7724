use std::path::Path;
use std::sync::Arc;

mod api;
mod config;
mod dataset;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load_from("config")?;
    logger::init(&cfg)?;
    prepare_workspace(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_listener(addr)?;
    let state = Arc::new(config::AppState::new(cfg));

    logger::log_server_start(&addr, &state.config);

    // Connections are served on local tasks
    let local = tokio::task::LocalSet::new();
    local.run_until(server::run(listener, state)).await
}

/// Create the expected directories when absent and refuse to start without
/// the files every request depends on.
fn prepare_workspace(cfg: &config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let paths = &cfg.paths;

    let mut dirs = vec![
        Path::new(&paths.template_dir),
        Path::new(&paths.static_dir),
    ];
    let data_dir = Path::new(&paths.data_file)
        .parent()
        .filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = data_dir {
        dirs.push(dir);
    }

    for dir in dirs {
        if !dir.exists() {
            logger::log_warning(&format!("Directory '{}' not found. Creating...", dir.display()));
            std::fs::create_dir_all(dir)?;
        }
    }

    let index = Path::new(&paths.template_dir).join(&paths.index_file);
    if !index.exists() {
        return Err(format!(
            "critical file missing: '{}' (nothing to serve at /)",
            index.display()
        )
        .into());
    }

    if !Path::new(&paths.data_file).exists() {
        return Err(format!(
            "critical file missing: '{}' (API endpoints would fail)",
            paths.data_file
        )
        .into());
    }

    Ok(())
}
