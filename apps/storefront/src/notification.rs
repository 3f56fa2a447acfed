//! # Notifications
//!
//! Short-lived toasts shown after storefront actions. Each toast carries the
//! moment it was shown and disappears once its duration has elapsed.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Shown after a product lands in the cart.
pub const ADDED_TO_CART: &str = "Товар добавлен в корзину!";

/// Shown when "add to cart" is pressed with a zero quantity input.
pub const CHOOSE_QUANTITY: &str = "Пожалуйста, выберите количество";

/// Shown after a successful checkout.
pub const ORDER_THANKS: &str =
    "Спасибо за заказ! Мы свяжемся с вами в ближайшее время для подтверждения заказа.";

/// Shown inside the cart modal when there is nothing in it.
pub const EMPTY_CART_TEXT: &str = "Ваша корзина пуста";

const MAX_TOAST_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Warning,
}

/// A single toast.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub shown_at: DateTime<Utc>,
    #[serde(skip)]
    pub duration: Duration,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.shown_at + self.duration
    }
}

/// Active toasts, oldest first.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    active: Vec<Notification>,
    duration: Duration,
}

impl NotificationCenter {
    pub fn new(duration: Duration) -> Self {
        NotificationCenter {
            active: Vec::new(),
            duration,
        }
    }

    /// Builds a center whose toasts live for `secs` seconds (capped at a day).
    pub fn with_secs(secs: u64) -> Self {
        Self::new(Duration::seconds(secs.min(MAX_TOAST_SECS) as i64))
    }

    pub fn success(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.push(message.into(), NotificationLevel::Success, now);
    }

    pub fn warning(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.push(message.into(), NotificationLevel::Warning, now);
    }

    fn push(&mut self, message: String, level: NotificationLevel, now: DateTime<Utc>) {
        tracing::debug!(?level, %message, "Notification shown");
        self.active.push(Notification {
            message,
            level,
            shown_at: now,
            duration: self.duration,
        });
    }

    /// Drops every toast whose time is up.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.active.retain(|n| !n.is_expired(now));
    }

    /// Removes and returns all toasts, for front-ends that print them once.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.active)
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.active.last()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::with_secs(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_duration() {
        let now = Utc::now();
        let mut center = NotificationCenter::with_secs(3);
        center.success(ADDED_TO_CART, now);

        center.prune(now + Duration::seconds(2));
        assert_eq!(center.active().len(), 1);

        center.prune(now + Duration::seconds(3));
        assert!(center.active().is_empty());
    }

    #[test]
    fn test_levels_and_latest() {
        let now = Utc::now();
        let mut center = NotificationCenter::default();
        center.success(ADDED_TO_CART, now);
        center.warning(CHOOSE_QUANTITY, now);

        let latest = center.latest().unwrap();
        assert_eq!(latest.level, NotificationLevel::Warning);
        assert_eq!(latest.message, CHOOSE_QUANTITY);
    }

    #[test]
    fn test_drain_empties() {
        let mut center = NotificationCenter::default();
        center.success(ORDER_THANKS, Utc::now());
        assert_eq!(center.drain().len(), 1);
        assert!(center.active().is_empty());
    }
}
