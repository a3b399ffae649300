use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Fire-and-forget notification queue, rendered by the shell.
///
/// Observational only: nothing in the app depends on a notice being seen or
/// dismissed.
#[derive(Clone, Copy)]
pub struct Notifications {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn notices(&self) -> RwSignal<Vec<Notice>> {
        self.notices
    }

    pub fn notify_success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        let text = text.into();
        log::error!("{}", text);
        self.push(NoticeKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|notices| {
            notices.retain(|n| n.id != id);
        });
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.notices.update(|notices| {
            notices.push(Notice { id, kind, text });
        });
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not provided in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_queue_and_dismiss() {
        let notifications = Notifications::new();
        notifications.notify_success("запись удалена");
        notifications.notify_error("не удалось загрузить список");

        let notices = notifications.notices().get_untracked();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[1].kind, NoticeKind::Error);

        notifications.dismiss(notices[0].id);
        let notices = notifications.notices().get_untracked();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
    }
}
