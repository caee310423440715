//! Channel-labelled notification services.
//!
//! Every channel formats the same `(recipient, message)` pair into a single line
//! and hands it to a [`NotificationSink`]. Sending never fails and nothing is retained
//! by the service itself.

mod sink;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

pub use sink::{InMemorySink, NotificationSink, StdoutSink};

pub trait NotificationService {
    fn channel(&self) -> NotificationChannel;

    fn send_notification(&self, recipient: &str, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
}

impl NotificationChannel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Email, Self::Sms, Self::Push]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Sms => "SMS",
            Self::Push => "Push Notification",
        }
    }

    /// Renders the console line for a single notification on this channel.
    pub fn render(self, recipient: &str, message: &str) -> String {
        match self {
            Self::Push => format!(
                "Sending {} to device {}: \"{}\"",
                self.label(),
                recipient,
                message
            ),
            Self::Email | Self::Sms => {
                format!("Sending {} to {}: \"{}\"", self.label(), recipient, message)
            }
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification channel '{0}' (expected email, sms or push)")]
pub struct UnknownChannel(pub String);

impl FromStr for NotificationChannel {
    type Err = UnknownChannel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "email" | "e-mail" => Ok(Self::Email),
            "sms" | "text" => Ok(Self::Sms),
            "push" => Ok(Self::Push),
            _ => Err(UnknownChannel(value.to_string())),
        }
    }
}

/// Notification service bound to one channel and one sink.
#[derive(Clone)]
pub struct ChannelNotificationService {
    channel: NotificationChannel,
    sink: Arc<dyn NotificationSink>,
}

impl ChannelNotificationService {
    pub fn new(channel: NotificationChannel, sink: Arc<dyn NotificationSink>) -> Self {
        Self { channel, sink }
    }

    pub fn email(sink: Arc<dyn NotificationSink>) -> Self {
        Self::new(NotificationChannel::Email, sink)
    }

    pub fn sms(sink: Arc<dyn NotificationSink>) -> Self {
        Self::new(NotificationChannel::Sms, sink)
    }

    pub fn push(sink: Arc<dyn NotificationSink>) -> Self {
        Self::new(NotificationChannel::Push, sink)
    }
}

impl fmt::Debug for ChannelNotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelNotificationService")
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

impl NotificationService for ChannelNotificationService {
    fn channel(&self) -> NotificationChannel {
        self.channel
    }

    fn send_notification(&self, recipient: &str, message: &str) {
        debug!(channel = %self.channel, recipient, "sending notification");
        self.sink.deliver(&self.channel.render(recipient, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(channel: NotificationChannel) -> (ChannelNotificationService, InMemorySink) {
        let sink = InMemorySink::default();
        let service = ChannelNotificationService::new(channel, Arc::new(sink.clone()));
        (service, sink)
    }

    #[test]
    fn email_line_matches_console_format() {
        let (email, sink) = service(NotificationChannel::Email);
        email.send_notification("example@email.com", "Your order has been shipped!");
        assert_eq!(
            sink.lines(),
            vec!["Sending Email to example@email.com: \"Your order has been shipped!\""]
        );
    }

    #[test]
    fn push_line_addresses_a_device() {
        let (push, sink) = service(NotificationChannel::Push);
        push.send_notification("DeviceToken-ABC-123", "You have a new message.");
        assert_eq!(
            sink.lines(),
            vec![
                "Sending Push Notification to device DeviceToken-ABC-123: \"You have a new message.\""
            ]
        );
    }

    #[test]
    fn every_channel_keeps_recipient_and_message_verbatim() {
        let recipient = "  +1 (234) 567-890 ";
        let message = "quotes \" and ünïcödé stay intact";
        for channel in NotificationChannel::ordered() {
            let (svc, sink) = service(channel);
            svc.send_notification(recipient, message);
            let lines = sink.lines();
            assert_eq!(lines.len(), 1);
            assert!(lines[0].contains(recipient));
            assert!(lines[0].contains(message));
            assert!(lines[0].starts_with(&format!("Sending {} ", channel.label())));
        }
    }

    #[test]
    fn channels_parse_case_insensitively() {
        assert_eq!("EMAIL".parse(), Ok(NotificationChannel::Email));
        assert_eq!(" sms ".parse(), Ok(NotificationChannel::Sms));
        assert_eq!("Push".parse(), Ok(NotificationChannel::Push));
        assert!("fax".parse::<NotificationChannel>().is_err());
    }
}
