use crate::application::{DownloadSimulator, SimulationEvent};
use crate::ui::{DownloadMessage, DownloadView, ToastLevel, Toasts, TOAST_DURATION};
use iced::widget::{column, container};
use iced::Task;

const DEMO_TOAST: &str = "This is a demo. Backend service needed for actual downloads.";
const COMPLETED_TOAST: &str = "Download completed!";

pub struct DownloadApp {
    view: DownloadView,
    simulator: DownloadSimulator,
    toasts: Toasts,
}

impl Default for DownloadApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadApp {
    pub fn new() -> Self {
        Self {
            view: DownloadView::default(),
            simulator: DownloadSimulator::new(Default::default()),
            toasts: Toasts::default(),
        }
    }

    /// Shows a toast and schedules its expiry
    fn notify(&mut self, level: ToastLevel, message: impl Into<String>) -> Task<Message> {
        let id = self.toasts.push(level, message);

        Task::perform(
            async { tokio::time::sleep(TOAST_DURATION).await },
            move |_| Message::ToastExpired(id),
        )
    }

    fn submit(&mut self) -> Task<Message> {
        // The button is disabled in this state; Enter in the URL field still lands here
        if !self.view.can_submit() {
            return Task::none();
        }

        if let Err(e) = self.simulator.validate(&self.view.youtube_url) {
            tracing::warn!(url = %self.view.youtube_url, "rejected submission: {}", e);
            return self.notify(ToastLevel::Error, e.to_string());
        }

        tracing::info!(
            url = %self.view.youtube_url,
            quality = %self.view.quality,
            "starting simulated download"
        );

        self.view.is_downloading = true;
        self.view.download_progress = 0;

        let run = Task::stream(self.simulator.progress_stream()).map(Message::Simulation);
        let notice = self.notify(ToastLevel::Info, DEMO_TOAST);

        Task::batch([run, notice])
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(DownloadMessage),
    Simulation(SimulationEvent),
    /// Toast id whose display time ran out
    ToastExpired(u64),
    DismissToast(u64),
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg.clone());

            if let DownloadMessage::DownloadPressed = ui_msg {
                return app.submit();
            }
        }
        Message::Simulation(SimulationEvent::Progress(progress)) => {
            app.view.download_progress = progress;
        }
        Message::Simulation(SimulationEvent::Completed) => {
            app.view.is_downloading = false;
            tracing::info!("simulated download finished");
            return app.notify(ToastLevel::Success, COMPLETED_TOAST);
        }
        Message::ToastExpired(id) | Message::DismissToast(id) => {
            app.toasts.dismiss(id);
        }
    }
    Task::none()
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    column![
        app.view.view().map(Message::UiMessage),
        container(app.toasts.view(Message::DismissToast))
            .padding([0, 24])
            .max_width(624.0),
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::download_simulator::Tick;
    use crate::domain::Quality;
    use crate::ui::toast::Toast;

    fn type_url(app: &mut DownloadApp, url: &str) {
        let _ = update(
            app,
            Message::UiMessage(DownloadMessage::UrlChanged(url.to_string())),
        );
    }

    fn press_download(app: &mut DownloadApp) {
        let _ = update(app, Message::UiMessage(DownloadMessage::DownloadPressed));
    }

    fn run_to_completion(app: &mut DownloadApp) -> Vec<u8> {
        let mut seen = Vec::new();
        let mut progress = app.view.download_progress;
        loop {
            match app.simulator.advance(progress) {
                Tick::Advanced(next) => {
                    let _ = update(app, Message::Simulation(SimulationEvent::Progress(next)));
                    seen.push(next);
                    progress = next;
                }
                Tick::Finished => {
                    let _ = update(app, Message::Simulation(SimulationEvent::Completed));
                    return seen;
                }
            }
        }
    }

    fn toasts_with(app: &DownloadApp, level: ToastLevel) -> Vec<&Toast> {
        app.toasts
            .items()
            .iter()
            .filter(|toast| toast.level == level)
            .collect()
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let mut app = DownloadApp::default();
        type_url(&mut app, "https://example.com/video");
        press_download(&mut app);

        assert!(!app.view.is_downloading);
        assert_eq!(app.view.button_label(), "Download Video");
        assert!(app.view.can_submit());

        let errors = toasts_with(&app, ToastLevel::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Please enter a valid YouTube URL");
        assert!(toasts_with(&app, ToastLevel::Info).is_empty());
    }

    #[test]
    fn test_empty_url_cannot_submit() {
        let mut app = DownloadApp::default();
        press_download(&mut app);

        assert!(!app.view.is_downloading);
        assert!(app.toasts.items().is_empty());
    }

    #[test]
    fn test_valid_url_starts_simulation() {
        let mut app = DownloadApp::default();
        type_url(&mut app, "https://youtu.be/abc123");
        press_download(&mut app);

        assert!(app.view.is_downloading);
        assert_eq!(app.view.download_progress, 0);
        assert_eq!(app.view.button_label(), "Downloading...");

        let infos = toasts_with(&app, ToastLevel::Info);
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].message, DEMO_TOAST);
        assert!(toasts_with(&app, ToastLevel::Error).is_empty());
    }

    #[test]
    fn test_run_to_completion() {
        let mut app = DownloadApp::default();
        type_url(&mut app, "https://www.youtube.com/watch?v=abc123");
        press_download(&mut app);

        let seen = run_to_completion(&mut app);
        assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(app.view.download_progress, 100);
        assert!(!app.view.is_downloading);

        let successes = toasts_with(&app, ToastLevel::Success);
        assert_eq!(successes.len(), 1);
        assert_eq!(successes[0].message, COMPLETED_TOAST);
    }

    #[test]
    fn test_submit_while_running_is_ignored() {
        let mut app = DownloadApp::default();
        type_url(&mut app, "https://youtu.be/abc123");
        press_download(&mut app);
        let _ = update(&mut app, Message::Simulation(SimulationEvent::Progress(30)));

        press_download(&mut app);

        assert_eq!(app.view.download_progress, 30);
        assert_eq!(toasts_with(&app, ToastLevel::Info).len(), 1);
    }

    #[test]
    fn test_quality_does_not_change_outcome() {
        let mut baseline = DownloadApp::default();
        type_url(&mut baseline, "https://youtu.be/abc123");
        press_download(&mut baseline);
        let expected_progress = run_to_completion(&mut baseline);

        for quality in Quality::ALL {
            let mut app = DownloadApp::default();
            let _ = update(
                &mut app,
                Message::UiMessage(DownloadMessage::QualitySelected(quality)),
            );
            type_url(&mut app, "https://youtu.be/abc123");
            press_download(&mut app);

            assert!(app.view.is_downloading);
            assert_eq!(run_to_completion(&mut app), expected_progress);
            assert!(!app.view.is_downloading);
            assert_eq!(app.toasts.items(), baseline.toasts.items());
        }
    }

    #[test]
    fn test_toast_expiry_and_dismiss() {
        let mut app = DownloadApp::default();
        type_url(&mut app, "nope");
        press_download(&mut app);
        press_download(&mut app);

        let ids: Vec<u64> = app.toasts.items().iter().map(|toast| toast.id).collect();
        assert_eq!(ids.len(), 2);

        let _ = update(&mut app, Message::ToastExpired(ids[0]));
        let _ = update(&mut app, Message::DismissToast(ids[1]));
        let _ = update(&mut app, Message::DismissToast(999));

        assert!(app.toasts.items().is_empty());
    }
}
