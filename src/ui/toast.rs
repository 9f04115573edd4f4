//! Transient notifications shown below the form

use std::time::Duration;

use iced::{
    widget::{button, container, row, text, Column, Space},
    Alignment, Element, Length,
};

/// How long a toast stays up unless dismissed
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Queues a toast and returns its id
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Returns false when no toast had this id
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn view<'a, M: Clone + 'a>(&'a self, on_dismiss: impl Fn(u64) -> M) -> Element<'a, M> {
        Column::with_children(self.items.iter().map(|toast| {
            let message = match toast.level {
                ToastLevel::Info => text(&toast.message).size(14).style(text::primary),
                ToastLevel::Success => text(&toast.message).size(14).style(text::success),
                ToastLevel::Error => text(&toast.message).size(14).style(text::danger),
            };

            container(
                row![
                    message,
                    Space::new().width(Length::Fill),
                    button(text("x").size(12))
                        .on_press(on_dismiss(toast.id))
                        .padding([2, 8]),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            )
            .padding(10)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into()
        }))
        .spacing(8)
        .into()
    }
}
