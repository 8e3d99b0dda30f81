use dioxus::prelude::*;
use notion_blocks_config::Config;
use notion_blocks_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::{App, ViewerState};

fn exit_with_usage(config_path: &std::path::Path) -> ! {
    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "notion-blocks".to_string());
    eprintln!("Usage: {program_name} [block-map.json]");
    eprintln!(
        "Or set block_map_path in the config file at {}",
        config_path.display()
    );
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("notion-blocks starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!("No config file found, writing defaults");
            let config = Config::default();
            if let Err(e) = config.save() {
                log::warn!(
                    "Could not write default config to {}: {e}",
                    config_path.display()
                );
            }
            config
        }
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let args: Vec<String> = env::args().collect();
    let block_map_path = match args.as_slice() {
        [_, path] => {
            log::info!("Using block map from CLI argument: {path}");
            PathBuf::from(path)
        }
        [_] => match config.block_map_path.clone() {
            Some(path) => {
                log::info!("Using block map from config: {}", path.display());
                path
            }
            None => {
                eprintln!("Error: No block map provided and none configured");
                exit_with_usage(&config_path);
            }
        },
        _ => exit_with_usage(&config_path),
    };

    let block_map = match io::read_block_map(&block_map_path) {
        Ok(block_map) => block_map,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    log::info!(
        "Loaded {} blocks from {}",
        block_map.len(),
        block_map_path.display()
    );

    let state = ViewerState {
        source: block_map_path.display().to_string(),
        block_map,
        options: config.render_options(),
        log_unsupported_blocks: config.log_unsupported_blocks,
    };

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(state)
        .launch(app_root);
}

fn app_root() -> Element {
    rsx! {
        App {}
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("notion-blocks")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
