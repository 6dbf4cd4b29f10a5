use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use hogsmeade::animation::MotionMode;
use hogsmeade::app::App;
use hogsmeade::config::Config;
use hogsmeade::render::TerminalRenderer;
use hogsmeade::{logging, onboard};
use std::io;
use std::process;

#[derive(Parser)]
#[command(
    name = "hogsmeade",
    version,
    about = "A terminal village with flying brooms, clickable lights and a day/night sun",
    long_about = None
)]
struct Cli {
    #[arg(short, long, help = "Start at night")]
    night: bool,

    #[arg(short, long, value_enum, value_name = "MODE", help = "How the flying brooms move")]
    motion: Option<MotionMode>,

    #[arg(
        short,
        long,
        value_name = "MS",
        help = "Milliseconds per animation tick (1-1000)"
    )]
    tick_ms: Option<u64>,

    #[arg(long, help = "Hide the status line")]
    hide_hud: bool,

    #[arg(long, help = "Run the interactive setup and write the config file")]
    setup: bool,

    #[arg(long, value_name = "SHELL", help = "Print shell completions and exit")]
    completions: Option<Shell>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if self.night {
            config.scene.start_at_night = true;
        }
        if let Some(motion) = self.motion {
            config.animation.motion = motion;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.animation.tick_ms = tick_ms;
        }
        if self.hide_hud {
            config.hide_hud = true;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "hogsmeade", &mut io::stdout());
        return Ok(());
    }

    if cli.setup {
        if let Err(e) = onboard::run() {
            eprintln!("Setup failed: {e}");
            process::exit(1);
        }
        return Ok(());
    }

    let (mut config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            eprintln!("\nContinuing with the default scene settings.");
            eprintln!("\nTo customize, run `hogsmeade --setup` or edit:");
            eprintln!("  $XDG_CONFIG_HOME/hogsmeade/config.toml");
            eprintln!("  or ~/.config/hogsmeade/config.toml");
            eprintln!();
            (Config::default(), Some(e))
        }
    };

    cli.apply(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        process::exit(2);
    }

    if let Err(e) = logging::init(config.log_file.as_deref()) {
        eprintln!("Warning: could not open log file: {e}");
    }
    if let Some(e) = &load_error {
        logging::config_fallback(e);
    }
    log::info!("starting with {:?}", config);

    let mut renderer = TerminalRenderer::new()?;
    renderer.init()?;

    let (term_width, term_height) = renderer.get_size();
    let mut app = App::new(&config, term_width, term_height);

    let result = app.run(&mut renderer).await;

    renderer.cleanup()?;

    if let Err(ref e) = result {
        log::error!("scene loop failed: {e}");
    }
    result
}
