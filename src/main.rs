use anyhow::Result;
use env_logger::Env;
use memberdash::cli::{self, Commands};
use memberdash::commands;
use memberdash::config;
use memberdash::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = cli::parse_args();

    init_logging(cli.verbosity);

    let formatting = if cli.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    formatting.apply();

    let api = config::resolve_api(cli.api_base.as_deref());

    match cli.command {
        Commands::Dashboard {
            input,
            format,
            output,
        } => commands::run_dashboard(commands::DashboardOptions {
            input,
            format,
            output,
            api,
        }),
        Commands::List { format, output } => commands::list_members(&api, format, output),
        Commands::Show { id, format, output } => commands::show_member(&api, id, format, output),
        Commands::Create { file } => commands::create_member(&api, &file),
        Commands::Update { id, file } => commands::update_member(&api, id, &file),
        Commands::Delete { id, yes } => commands::delete_member(&api, id, yes),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}
