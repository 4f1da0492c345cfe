use clap::Parser;

/// PanelGUI: a floating-panel windowing engine driven by JSON-lines commands.
#[derive(Parser, Debug)]
#[command(name = "panelgui", version, about)]
pub struct Args {
    /// Command script to run, one JSON command per line. Reads stdin when
    /// omitted or "-".
    #[arg(short = 's', long)]
    pub script: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error, or a full filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
