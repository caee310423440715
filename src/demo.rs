//! Linear walkthrough of the three capability demos.

use std::io::{self, Write};
use std::sync::Arc;

use tracing::info;

use crate::auth::AuthenticationService;
use crate::notifications::{ChannelNotificationService, InMemorySink, NotificationService};
use crate::shapes::{Circle, Rectangle, Shape};

/// Recipients and messages sent during the notification walkthrough.
pub const SAMPLE_NOTIFICATIONS: [(&str, &str); 3] = [
    ("example@email.com", "Your order has been shipped!"),
    ("+1234567890", "Your package is out for delivery."),
    ("DeviceToken-ABC-123", "You have a new message."),
];

pub fn run<W: Write>(out: &mut W, auth: &dyn AuthenticationService) -> io::Result<()> {
    shapes_section(out)?;
    auth_section(out, auth)?;
    notifications_section(out)?;
    info!("demonstration complete");
    Ok(())
}

pub fn shapes_section<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "--- Question 1: Shape Demonstration ---")?;
    let shapes: [Box<dyn Shape>; 2] = [
        Box::new(Circle::new(10.0)),
        Box::new(Rectangle::new(5.0, 8.0)),
    ];
    for (idx, shape) in shapes.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", shape.shape_info())?;
    }
    writeln!(out, "---------------------------------------\n")
}

pub fn auth_section<W: Write>(out: &mut W, auth: &dyn AuthenticationService) -> io::Result<()> {
    writeln!(out, "--- Question 2: Authentication Service Demonstration ---")?;

    let authenticated = auth.authenticate_user("admin", "password123");
    writeln!(out, "Authentication successful: {authenticated}")?;

    let authorized = auth.authorize_user("admin", "Admin");
    writeln!(out, "Authorization successful: {authorized}")?;

    let authenticated = auth.authenticate_user("user", "wrongpassword");
    writeln!(out, "Authentication successful (with wrong credentials): {authenticated}")?;
    writeln!(out, "----------------------------------------------------\n")
}

pub fn notifications_section<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "--- Question 3: Notification Service Demonstration ---")?;

    let sink = InMemorySink::default();
    let shared: Arc<InMemorySink> = Arc::new(sink.clone());
    let services = [
        ChannelNotificationService::email(shared.clone()),
        ChannelNotificationService::sms(shared.clone()),
        ChannelNotificationService::push(shared),
    ];
    for (service, (recipient, message)) in services.iter().zip(SAMPLE_NOTIFICATIONS) {
        service.send_notification(recipient, message);
    }

    for line in sink.lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "------------------------------------------------------\n")
}
