use oop_showcase::demo;
use oop_showcase::{BasicAuthenticationService, Credentials};

fn render_demo(service: &BasicAuthenticationService) -> String {
    let mut buffer = Vec::new();
    demo::run(&mut buffer, service).expect("demo writes to memory");
    String::from_utf8(buffer).expect("utf8 output")
}

#[test]
fn full_demo_matches_console_layout() {
    let output = render_demo(&BasicAuthenticationService::default());

    let expected = "\
--- Question 1: Shape Demonstration ---
Circle Information:
  Radius: 10
  Area: 314.16

Rectangle Information:
  Width: 5
  Height: 8
  Area: 40.00
---------------------------------------

--- Question 2: Authentication Service Demonstration ---
Authentication successful: true
Authorization successful: true
Authentication successful (with wrong credentials): false
----------------------------------------------------

--- Question 3: Notification Service Demonstration ---
Sending Email to example@email.com: \"Your order has been shipped!\"
Sending SMS to +1234567890: \"Your package is out for delivery.\"
Sending Push Notification to device DeviceToken-ABC-123: \"You have a new message.\"
------------------------------------------------------

";
    assert_eq!(output, expected);
}

#[test]
fn demo_reflects_injected_credentials() {
    let service = BasicAuthenticationService::new(Credentials {
        username: "operator".to_string(),
        password: "s3cret".to_string(),
        role: "Auditor".to_string(),
    });
    let output = render_demo(&service);

    assert!(output.contains("Authentication successful: false\n"));
    assert!(output.contains("Authorization successful: false\n"));
    assert!(
        output.contains("Sending Email"),
        "other sections are unaffected by credentials"
    );
}
