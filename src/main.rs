use bedtime::config::{self, Overrides};
use bedtime::gui::app::AppModel;
use bedtime::sys::runtime;
use clap::Parser;
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "bedtime", version, about, long_about = None)]
struct Cli {
    /// Initial bed handle angle in degrees (0 = 3 o'clock, counter-clockwise)
    #[arg(long, allow_hyphen_values = true)]
    bed_angle: Option<f64>,

    /// Initial wake handle angle in degrees
    #[arg(long, allow_hyphen_values = true)]
    wake_angle: Option<f64>,

    /// Pin the bed handle; only the wake handle can be dragged
    #[arg(long)]
    fixed_bed_time: bool,

    /// Write the default config file if missing, print its path and exit
    #[arg(long)]
    write_config: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            bed_angle: self.bed_angle,
            wake_angle: self.wake_angle,
            fixed_bed_time: self.fixed_bed_time,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let overrides = cli.overrides();
    let mut config = config::load_or_default();
    overrides.apply(&mut config);

    let (tx, rx) = async_channel::bounded(32);

    if let Err(e) = runtime::spawn_config_watcher(tx) {
        log::warn!("Config hot reload unavailable: {}", e);
    }

    // clap already consumed the arguments
    let app = RelmApp::new("org.bedtime.picker").with_args(Vec::new());

    app.run::<AppModel>((config, overrides, rx));
    Ok(())
}
