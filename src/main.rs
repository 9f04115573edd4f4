mod app;
mod application;
mod domain;
mod ui;
mod utils;

use iced::{window, Size};

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(app::DownloadApp::default, app::update, app::view)
        .title("YouTube Video Downloader")
        .window(window::Settings {
            size: Size::new(680.0, 760.0),
            ..Default::default()
        })
        .run()
}
