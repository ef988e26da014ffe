use std::error::Error;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use fastdown::{Config, Engine};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> Result<String, Box<dyn Error>> {
    match path {
        Some(p) => Ok(fastdown::io::read_source(p)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = fastdown::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Blocks { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let blocks = Engine::new(cfg).blocks(&input);
            println!("{:#?}", blocks);
            Ok(())
        }
        Commands::Convert {
            file,
            out_dir,
            name,
            dialect,
            unsafe_mode,
            no_breaks,
            escape_markup,
            no_autolinks,
        } => {
            let mut cfg = load_config(cli.config.as_deref(), &file)?;
            if let Some(dialect) = dialect {
                cfg.dialect = dialect.into();
            }
            if unsafe_mode {
                cfg.safe_mode = false;
            }
            if no_breaks {
                cfg.breaks_enabled = false;
            }
            if escape_markup {
                cfg.markup_escaped = true;
            }
            if no_autolinks {
                cfg.urls_linked = false;
            }

            let input = read_all(file.as_ref())?;
            let output = fastdown::parse(&input, Some(cfg));

            if let Some(dir) = &out_dir {
                let name = name.unwrap_or_else(|| {
                    file.as_ref()
                        .and_then(|p| p.file_stem())
                        .map(|stem| stem.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "index".to_string())
                });
                let path = fastdown::io::write_output(dir, &name, &output)?;
                println!("Wrote {}", path.display());
            } else {
                println!("{output}");
            }

            Ok(())
        }
    }
}
