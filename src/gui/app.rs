//! Main GUI application

use crate::extractor::{FormatDescriptor, MediaExtractor, YtDlpExtractor};
use crate::gui::clipboard;
use crate::gui::views::main_view;
use crate::service::{self, Downloader, ServedFile};
use crate::session::{FormatOption, Session};
use crate::utils::{sanitize_filename, AppError, AppSettings};
use iced::{Application, Command, Element, Theme};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main application state
pub struct VidgrabApp {
    extractor: Arc<dyn MediaExtractor>,
    downloader: Downloader,
    session: Session,

    // UI State
    url_input: String,

    // Flags
    is_fetching: bool,
    is_downloading: bool,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    PasteFromClipboard,
    ClearUrlInput,

    // Fetch events
    FetchPressed,
    FormatsFetched(String, Result<Vec<FormatDescriptor>, AppError>),

    // Selection and download events
    FormatSelected(FormatOption),
    DownloadPressed,
    DownloadFinished(Result<Option<ServedFile>, AppError>),
}

impl Application for VidgrabApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(settings: AppSettings) -> (Self, Command<Message>) {
        let extractor: Arc<dyn MediaExtractor> =
            Arc::new(YtDlpExtractor::discover(settings.ytdlp_path.as_deref()));
        let downloader = Downloader::new(Arc::clone(&extractor), settings.temp_dir.clone());

        let app = Self {
            extractor,
            downloader,
            session: Session::new(),
            url_input: settings.initial_url.unwrap_or_default(),
            is_fetching: false,
            is_downloading: false,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("vidgrab - Video Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Input events
            Message::UrlInputChanged(url) => {
                self.url_input = url;
                Command::none()
            }

            Message::PasteFromClipboard => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => self.url_input = content,
                    Err(e) => warn!("{}", e),
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.url_input.clear();
                Command::none()
            }

            // Fetch events
            Message::FetchPressed => {
                if self.is_fetching || self.is_downloading {
                    return Command::none();
                }
                let Ok(url) = self.session.begin_fetch(&self.url_input) else {
                    return Command::none();
                };

                self.is_fetching = true;
                let extractor = Arc::clone(&self.extractor);
                Command::perform(
                    async move {
                        let result = service::list_formats(extractor.as_ref(), &url).await;
                        (url, result)
                    },
                    |(url, result)| Message::FormatsFetched(url, result),
                )
            }

            Message::FormatsFetched(url, result) => {
                self.is_fetching = false;
                self.session.finish_fetch(url, result);
                Command::none()
            }

            // Selection and download events
            Message::FormatSelected(option) => {
                self.session.select(option);
                Command::none()
            }

            Message::DownloadPressed => {
                if self.is_downloading || self.is_fetching {
                    return Command::none();
                }
                let Some((url, format_id)) = self.session.begin_download() else {
                    debug!("Download pressed without a selected format");
                    return Command::none();
                };

                self.is_downloading = true;
                Command::perform(
                    download_and_save(self.downloader.clone(), url, format_id),
                    Message::DownloadFinished,
                )
            }

            Message::DownloadFinished(result) => {
                self.is_downloading = false;
                self.session.finish_download(result);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        main_view(
            &self.url_input,
            &self.session,
            self.is_fetching,
            self.is_downloading,
        )
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}

/// Download one format and hand it to the user through a save dialog.
///
/// The staged file is deleted before this returns on every path: after a
/// successful copy, when the dialog is dismissed, and on any error. A save
/// target left incomplete by a failed copy is removed as well.
async fn download_and_save(
    downloader: Downloader,
    url: String,
    format_id: String,
) -> Result<Option<ServedFile>, AppError> {
    let result = downloader.download(&url, &format_id).await?;

    let handle = rfd::AsyncFileDialog::new()
        .set_title("Save video")
        .set_file_name(sanitize_filename(&result.file_name()))
        .add_filter(result.mime(), &[result.ext()])
        .save_file()
        .await;

    let Some(handle) = handle else {
        info!("Save dialog dismissed, discarding '{}'", result.title());
        return Ok(None);
    };

    service::serve_to_file(result, handle.path()).await.map(Some)
}
