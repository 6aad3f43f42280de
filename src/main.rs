use clap::{Parser, Subcommand, ValueEnum};
use fragmount::{config, fragments, identity, inject, output};
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
#[command(name = "fragmount")]
#[command(about = "Shared header/footer injection for hand-written static sites")]
#[command(long_about = "\
Shared header/footer injection for hand-written static sites

Pages opt into the shared fragments by carrying placeholder elements:

  <div id=\"header-placeholder\"></div>
  <div id=\"footer-placeholder\"></div>

Source structure:

  pages/
  ├── site.toml                # Site config (optional)
  ├── index.html               # Pages: placeholders replaced in dist/
  ├── about.html
  ├── events/
  │   └── info.html            # Identity is the file name (info.html)
  ├── style.css                # Anything else is copied through unchanged
  └── images/logo.png

Active-nav detection compares each page's file name against the nav hrefs,
so hrefs in site.toml must match the site's actual file names. A page
missing a placeholder simply doesn't receive that fragment.

Run 'fragmount gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory of hand-written pages
    #[arg(long, default_value = "pages", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Config file (defaults to <source>/site.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inject fragments into every page and copy assets through
    Inject {
        /// Write a JSON run report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Probe pages for mount points without writing anything
    Check,
    /// Print one composed fragment to stdout
    Render {
        #[arg(value_enum)]
        fragment: Fragment,

        /// Page identity used for active-nav detection
        #[arg(long, default_value = "index.html")]
        page: String,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum Fragment {
    Header,
    Footer,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Inject { report } => {
            let config = load_config(&cli)?;
            init_thread_pool(&config.processing);
            let year = inject::current_year();
            let summary = inject::inject_site(&cli.source, &cli.output, &config, year)?;
            output::print_inject_summary(&summary);
            if let Some(path) = report {
                let json = serde_json::to_string_pretty(&summary)?;
                std::fs::write(&path, json)?;
                println!("Report written to {}", path.display());
            }
        }
        Command::Check => {
            let probes = inject::check_site(&cli.source)?;
            output::print_check_output(&probes);
        }
        Command::Render { fragment, page } => {
            let config = load_config(&cli)?;
            let current = identity::PageIdentity::from_path(page);
            let markup = match fragment {
                Fragment::Header => fragments::header_fragment(&config, &current),
                Fragment::Footer => {
                    fragments::footer_fragment(&config, inject::current_year())
                }
            };
            println!("{}", markup.into_string());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<config::SiteConfig, config::ConfigError> {
    match &cli.config {
        Some(path) => config::load_config_file(path),
        None => config::load_config(&cli.source),
    }
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
