pub mod toast;

use iced::{
    widget::{button, column, container, pick_list, progress_bar, text, text_input, Space},
    Element, Length,
};

use crate::domain::Quality;

pub use toast::{ToastLevel, Toasts, TOAST_DURATION};

const DEMO_NOTICE: &str = "Note: This is a demo interface. To implement actual video downloading \
functionality, you'll need to connect this to a backend service that handles YouTube video \
processing while complying with YouTube's terms of service.";

/// Form state
#[derive(Debug, Default)]
pub struct DownloadView {
    pub youtube_url: String,
    pub quality: Quality,
    pub is_downloading: bool,
    /// Percent, 0 to 100
    pub download_progress: u8,
}

#[derive(Debug, Clone)]
pub enum DownloadMessage {
    UrlChanged(String),
    QualitySelected(Quality),
    DownloadPressed,
}

impl DownloadView {
    pub fn update(&mut self, message: DownloadMessage) {
        match message {
            DownloadMessage::UrlChanged(url) => {
                self.youtube_url = url;
            }
            DownloadMessage::QualitySelected(quality) => {
                self.quality = quality;
            }
            DownloadMessage::DownloadPressed => {
                // Will be handled by the app
            }
        }
    }

    /// Mirrors the enabled state of the submit button
    pub fn can_submit(&self) -> bool {
        !self.is_downloading && !self.youtube_url.is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_downloading {
            "Downloading..."
        } else {
            "Download Video"
        }
    }

    pub fn view(&self) -> Element<'_, DownloadMessage> {
        let mut form = column![
            text_input("Paste YouTube URL here...", &self.youtube_url)
                .on_input(DownloadMessage::UrlChanged)
                .on_submit(DownloadMessage::DownloadPressed)
                .padding(10),
            pick_list(
                Quality::ALL,
                Some(self.quality),
                DownloadMessage::QualitySelected
            )
            .width(Length::Fill)
            .padding(10),
            button(text(self.button_label()))
                .on_press_maybe(
                    self.can_submit()
                        .then_some(DownloadMessage::DownloadPressed)
                )
                .width(Length::Fill)
                .padding([10, 20]),
        ]
        .spacing(16);

        if self.is_downloading {
            form = form.push(
                column![
                    progress_bar(0.0..=100.0, f32::from(self.download_progress)),
                    text(format!("Downloading: {}%", self.download_progress)).size(14),
                ]
                .spacing(8),
            );
        }

        let content = column![
            container(text("YouTube Video Downloader").size(32)).center_x(Length::Fill),
            Space::new().height(Length::Fixed(20.0)),
            form,
            container(text(DEMO_NOTICE).size(14))
                .padding(15)
                .width(Length::Fill)
                .style(container::rounded_box),
        ]
        .spacing(24)
        .max_width(576.0);

        container(content).padding(24).center_x(Length::Fill).into()
    }
}
