//! vidgrab - pick a video format and save it
//!
//! Lists the downloadable formats of a video URL through yt-dlp and saves the
//! chosen one, either from the GUI or headlessly from the command line.

use anyhow::Result;
use clap::Parser;
use iced::Application;
use std::path::PathBuf;
use std::sync::Arc;
use vidgrab::extractor::YtDlpExtractor;
use vidgrab::service::Downloader;
use vidgrab::utils::AppSettings;
use vidgrab::{cli, gui};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the yt-dlp binary (skips discovery)
    #[arg(long, value_name = "PATH")]
    ytdlp_path: Option<PathBuf>,

    /// Directory where downloads are staged before saving
    #[arg(long, value_name = "DIR")]
    temp_dir: Option<PathBuf>,

    /// URL to pre-fill in the input field
    #[arg(long)]
    url: Option<String>,

    /// Print the available formats for URL and exit
    #[arg(long, value_name = "URL", conflicts_with = "download")]
    list_formats: Option<String>,

    /// Download URL without the GUI
    #[arg(long, value_name = "URL", requires = "format")]
    download: Option<String>,

    /// Format id to download (see --list-formats)
    #[arg(long, value_name = "ID", requires = "download")]
    format: Option<String>,

    /// Output file for --download
    #[arg(long, short, value_name = "PATH", requires = "download")]
    output: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> AppSettings {
        let defaults = AppSettings::default();
        AppSettings {
            ytdlp_path: self.ytdlp_path.clone(),
            temp_dir: self.temp_dir.clone().unwrap_or(defaults.temp_dir),
            initial_url: self.url.clone(),
            ..defaults
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = args.settings();

    if let Some(url) = args.list_formats.as_deref() {
        let extractor = YtDlpExtractor::new(settings.ytdlp_path.as_deref())?;
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(cli::print_formats(&extractor, url, &mut std::io::stdout().lock()))?;
        return Ok(());
    }

    if let (Some(url), Some(format_id)) = (args.download.as_deref(), args.format.as_deref()) {
        let extractor = Arc::new(YtDlpExtractor::new(settings.ytdlp_path.as_deref())?);
        let downloader = Downloader::new(extractor, settings.temp_dir.clone());
        let rt = tokio::runtime::Runtime::new()?;
        let served = rt.block_on(cli::download_to_file(
            &downloader,
            url,
            format_id,
            args.output.as_deref(),
            &settings.download_location,
        ))?;
        println!("Saved {} ({}, {} bytes)", served.file_name, served.mime, served.bytes);
        return Ok(());
    }

    let (width, height) = settings.window_size;
    gui::VidgrabApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(width, height),
            min_size: Some(iced::Size::new(600.0, 420.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..iced::Settings::with_flags(settings)
    })?;

    Ok(())
}
