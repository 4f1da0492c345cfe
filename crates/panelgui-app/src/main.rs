mod cli;
mod logging;
mod script;
mod settings;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use panelgui_config::schema::PanelGuiConfig;
use panelgui_engine::PanelManager;

fn main() {
    let args = cli::parse();
    let log_handle = logging::init(args.log_level.as_deref());

    tracing::info!("PanelGUI v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = panelgui_config::load_config(args.config.as_deref().map(Path::new))
        .unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            PanelGuiConfig::default()
        });
    logging::apply_config(&log_handle, args.log_level.as_deref(), &config.logging);
    tracing::info!("Config loaded (theme: {})", config.theme.name);

    if args.print_config {
        println!("{}", panelgui_config::config_to_json(&config));
        return;
    }

    let mut manager = PanelManager::new(settings::engine_settings(&config));
    let stdout = io::stdout().lock();

    let result = match args.script.as_deref() {
        None | Some("-") => script::run_script(&mut manager, io::stdin().lock(), stdout),
        Some(path) => match File::open(path) {
            Ok(file) => script::run_script(&mut manager, BufReader::new(file), stdout),
            Err(e) => {
                tracing::error!("Cannot open script {path}: {e}");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        tracing::error!("Script aborted: {e}");
        std::process::exit(1);
    }
}
