use clap::Parser;
use quadsweep_core::GameConfig;
use wasm_bindgen::prelude::*;

mod game;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board side length
    #[arg(long, default_value_t = GameConfig::CLASSIC.size)]
    size: u8,

    /// Number of mines, must leave at least one free cell
    #[arg(long, default_value_t = GameConfig::CLASSIC.mines)]
    mines: u16,

    /// Lives per round
    #[arg(long, default_value_t = GameConfig::CLASSIC.lives)]
    lives: u8,

    /// Safe clicks per round
    #[arg(long, default_value_t = GameConfig::CLASSIC.safe_clicks)]
    safe_clicks: u8,
}

impl Args {
    /// Parses arguments from a location hash like `#-v&--seed=42`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn game_config(&self) -> GameConfig {
        match GameConfig::new(self.size, self.mines) {
            Ok(config) => config
                .with_lives(self.lives)
                .with_safe_clicks(self.safe_clicks),
            Err(err) => {
                log::warn!(
                    "{err} ({} mines on a {}x{} board), using classic rules",
                    self.mines,
                    self.size,
                    self.size
                );
                GameConfig::CLASSIC
            }
        }
    }
}

/// Helper function to use JavaScript's Math.random
fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let seed = args.seed.unwrap_or_else(js_random_seed);
    let config = args.game_config();
    log::debug!("seed: {seed}, config: {config:?}");

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, game::GameProps { config, seed })
        .render();
}
