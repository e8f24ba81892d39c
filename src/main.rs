use clap::{Parser, Subcommand};
use polysite::{config, output, pipeline, scan, translate};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "polysite")]
#[command(about = "Multilingual content pipeline for static sites")]
#[command(long_about = "\
Multilingual content pipeline for static sites

Your filesystem is the data source. Markdown files become pages, files
under posts/ become posts, and every item is expanded into one variant
per configured language with a localized URL.

Content structure:

  content/
  ├── config.toml                  # Site config (languages, pagination)
  ├── index.md                     # Listing page (pagination template)
  ├── about.md                     # Page, default language
  ├── about.fr.md                  # Page with embedded language suffix
  ├── guides/
  │   └── setup.md                 # Nested page
  ├── posts/
  │   ├── hello-world.md           # Post, expanded per language
  │   └── bonjour.fr.md            # Post with embedded language suffix
  └── i18n/
      ├── en.yml                   # Translation dictionaries
      ├── fr.yml
      └── fr/                      # Localized include files
          └── footer.html

Language resolution (first available wins):
  Item:     filename suffix (about.fr.md) → front matter → default language
  Default:  first entry of 'languages' in config.toml

The build emits manifest.json for a downstream renderer; no HTML is
written here.

Run 'polysite gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory for the localized manifest
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory and print the discovered inventory
    Scan,
    /// Run the full pipeline: scan → localize → manifest.json
    Build,
    /// Validate content, config, and translation dictionaries without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let site = scan::scan(&cli.source)?;
            output::print_scan_output(&site);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let mut site = scan::scan(&cli.source)?;
            output::print_scan_output(&site);

            println!("==> Stage 2: Localizing");
            let report = pipeline::run(&mut site);
            output::print_build_output(&site, &report);

            std::fs::create_dir_all(&cli.output)?;
            let manifest_path = cli.output.join("manifest.json");
            let json = serde_json::to_string_pretty(&site)?;
            std::fs::write(&manifest_path, json)?;
            println!("==> Manifest written: {}", manifest_path.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = scan::scan(&cli.source)?;
            output::print_scan_output(&site);
            output::print_warnings(&pipeline::preflight_warnings(&site));

            let translations_dir = cli.source.join(&site.config.translations_dir);
            if translations_dir.is_dir() {
                let mut store = translate::TranslationStore::new(
                    &translations_dir,
                    site.config.default_language(),
                );
                store.preload(&site.config.languages)?;
                println!("==> Translation dictionaries are valid");
            }
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
