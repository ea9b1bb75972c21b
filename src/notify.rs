/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// 短暂提示（toast）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// 提交/拉取失败时统一展示的文案，具体原因只写日志
pub const GENERIC_FAILURE: &str = "Something went wrong";

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn generic_failure() -> Self {
        Self::error(GENERIC_FAILURE)
    }
}

/// 当前显示的提示
///
/// 每次 `show` 分配一个新序号，计时器到期时只清除序号仍然匹配的那一条，
/// 前一条提示的计时器不会提前关掉后来的提示。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<(u64, Notification)>,
    next_id: u64,
}

impl ToastSlot {
    /// 替换当前提示，返回它的序号
    pub fn show(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some((id, notification));
        id
    }

    /// 计时器到期
    pub fn expire(&mut self, id: u64) {
        if matches!(self.current, Some((current, _)) if current == id) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(_, n)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timer_keeps_newer_toast() {
        let mut slot = ToastSlot::default();
        let first = slot.show(Notification::success("Claim created"));
        let second = slot.show(Notification::generic_failure());

        slot.expire(first);
        assert_eq!(slot.current(), Some(&Notification::generic_failure()));

        slot.expire(second);
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn dismiss_then_late_timer() {
        let mut slot = ToastSlot::default();
        let id = slot.show(Notification::success("Logged in successfully"));
        slot.dismiss();
        assert_eq!(slot.current(), None);

        let next = slot.show(Notification::error("Invalid credentials"));
        assert_ne!(id, next);
        slot.expire(id);
        assert_eq!(slot.current().map(|n| n.level), Some(NotificationLevel::Error));
    }
}
