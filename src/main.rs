use assetool::generate::{self, GenerateEvent, GenerateOptions, SizeOverrides};
use assetool::imaging::RustBackend;
use assetool::{config, output, platform};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};

#[derive(Parser)]
#[command(name = "assetool")]
#[command(about = "Generate Xcode app icon sets and image sets from one source image")]
#[command(long_about = "\
Generate Xcode app icon sets and image sets from one source image

  assetool icon icon.png -p ios,mac -o Assets.xcassets
      → Assets.xcassets/AppIcon.appiconset/{Contents.json, AppIcon_20@2x.png, ...}

  assetool image photo.jpg --width 120 -o Assets.xcassets
      → Assets.xcassets/photo.imageset/{Contents.json, photo@1x.png, photo@2x.png, photo@3x.png}

Platforms: iphone, ipad, ios, watch, car, mac. Unknown names are ignored.
Without --width/--height the source image is taken as the @3x rendition.

Settings can also come from assetool.toml in the working directory.
Run 'assetool gen-config' to generate a documented one.")]
#[command(version)]
struct Cli {
    /// Config file (default: ./assetool.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate AppIcon.appiconset
    Icon {
        /// Source image (ideally square, 1024px or larger)
        input: PathBuf,
        /// Directory to create the icon set in
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
        /// Comma-separated platforms, e.g. "ios,watch,mac" (default: from config, else ios)
        #[arg(short, long)]
        platforms: Option<String>,
        /// Single 1024px universal icon where the platform accepts one
        #[arg(long)]
        universal: bool,
    },
    /// Generate <name>.imageset with @1x, @2x and @3x renditions
    Image {
        /// Source image
        input: PathBuf,
        /// Directory to create the image set in
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
        /// @1x width in points
        #[arg(long)]
        width: Option<f64>,
        /// @1x height in points
        #[arg(long)]
        height: Option<f64>,
    },
    /// Print a stock assetool.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Icon {
            input,
            output: output_dir,
            platforms,
            universal,
        } => {
            let tool_config = config::load_config(cli.config.as_deref(), &std::env::current_dir()?)?;
            init_thread_pool(&tool_config.processing);
            let platforms = match platforms {
                Some(list) => platform::parse_platform_list(&list),
                None => tool_config.icon.platforms(),
            };
            if platforms.is_empty() {
                eprintln!("warning: no known platforms requested, manifest will be empty");
            }
            let universal = universal || tool_config.icon.universal;

            let report = with_printer(|tx| {
                generate::generate_icon_set_with_backend(
                    &RustBackend::new(),
                    &input,
                    &output_dir,
                    &platforms,
                    universal,
                    &with_progress(tool_config.generate_options(), tx),
                )
            })??;
            output::print_report(&report);
        }
        Command::Image {
            input,
            output: output_dir,
            width,
            height,
        } => {
            let tool_config = config::load_config(cli.config.as_deref(), &std::env::current_dir()?)?;
            init_thread_pool(&tool_config.processing);

            let report = with_printer(|tx| {
                generate::generate_image_set_with_backend(
                    &RustBackend::new(),
                    &input,
                    &output_dir,
                    SizeOverrides { width, height },
                    &with_progress(tool_config.generate_options(), tx),
                )
            })??;
            output::print_report(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn with_progress(options: GenerateOptions, tx: Sender<GenerateEvent>) -> GenerateOptions {
    GenerateOptions {
        progress: Some(tx),
        ..options
    }
}

/// Run `job` while a printer thread drains its progress events.
///
/// The channel closes when `job` drops its sender, which ends the printer.
fn with_printer<T>(
    job: impl FnOnce(Sender<GenerateEvent>) -> T,
) -> Result<T, Box<dyn std::error::Error>> {
    let (tx, rx) = mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_event(&event);
        }
    });
    let result = job(tx);
    printer
        .join()
        .map_err(|_| "progress printer thread panicked")?;
    Ok(result)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
