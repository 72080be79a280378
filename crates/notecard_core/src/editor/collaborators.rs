//! Navigation and notification seams used by the editor session.
//!
//! # Responsibility
//! - Define the side-effecting collaborators a session drives.
//! - Provide headless implementations that record what was requested.

use crate::model::note::NoteId;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Destination a session can redirect to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    /// Default landing view.
    Home,
    NoteDetail(NoteId),
    NoteEdit(NoteId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::NoteDetail(id) => format!("/notes/{id}"),
            Self::NoteEdit(id) => format!("/notes/{id}/edit"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Performs redirects requested by a session.
pub trait Navigator {
    fn go_to(&mut self, route: Route);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn go_to(&mut self, route: Route) {
        (**self).go_to(route);
    }
}

/// Presentation style of a user-visible notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// User-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}

/// Shows notices to the user.
pub trait Notifier {
    fn show(&mut self, notice: Notice);
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn show(&mut self, notice: Notice) {
        (**self).show(notice);
    }
}

/// Navigator that keeps the visited routes, most recent last.
#[derive(Debug, Clone, Default)]
pub struct HistoryNavigator {
    visited: Vec<Route>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[Route] {
        &self.visited
    }

    pub fn current(&self) -> Option<&Route> {
        self.visited.last()
    }
}

impl Navigator for HistoryNavigator {
    fn go_to(&mut self, route: Route) {
        self.visited.push(route);
    }
}

/// Notifier that collects notices in display order.
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Removes and returns everything collected so far.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for NoticeLog {
    fn show(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
