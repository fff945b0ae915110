use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rename_media_core::{rename_with_date, MediaType, RenameResult};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "rename-media")]
#[command(about = "Renames media files to their embedded creation date")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rename image files by EXIF date
    Image(RenameArgs),
    /// Rename video files by container creation date
    Video(RenameArgs),
}

#[derive(Debug, Args)]
struct RenameArgs {
    /// Directory with media files to rename
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,
    /// Prefix for the new file name
    #[arg(short, long, default_value = "")]
    prefix: String,
    /// Suffix for the new file name
    #[arg(short, long, default_value = "")]
    suffix: String,
    /// Report format for the per-file results
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Lines,
    Json,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rename_media_core=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Image(args) => cmd_rename(MediaType::Image, args),
        Commands::Video(args) => cmd_rename(MediaType::Video, args),
    }
}

fn cmd_rename(media_type: MediaType, args: RenameArgs) -> Result<ExitCode> {
    let walk = rename_with_date(&args.directory, media_type, &args.prefix, &args.suffix)?;

    let mut errors = 0usize;
    match args.output {
        OutputFormat::Lines => {
            for result in walk {
                let result = result?;
                print_line(&result);
                if !result.success {
                    errors += 1;
                }
            }
        }
        OutputFormat::Json => {
            let results = walk.collect::<Result<Vec<RenameResult>, _>>()?;
            errors = results.iter().filter(|r| !r.success).count();
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    if errors > 0 {
        eprintln!("{errors} file(s) could not be renamed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_line(result: &RenameResult) {
    if result.success {
        println!(
            "✅ Renamed: \"{}\" to \"{}\"",
            result.old_name.display(),
            result.new_name.display()
        );
    } else {
        println!("❌ Error: \"{}\"", result.old_name.display());
    }
}
