use std::io::{self, Write};
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use oop_showcase::config::AppConfig;
use oop_showcase::notifications::{
    ChannelNotificationService, NotificationChannel, NotificationService, StdoutSink,
};
use oop_showcase::staff::{Employee, HireDate, SecurityPrivileges};
use oop_showcase::{demo, telemetry, AppError, AuthenticationService, BasicAuthenticationService};
use oop_showcase::{Shape, ShapeSpec};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "oop-showcase",
    about = "Demonstrate trait-based shapes, authentication and notification services",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full three-part demonstration (default command)
    Demo,
    /// Describe a single shape
    Shape {
        #[command(subcommand)]
        command: ShapeCommand,
    },
    /// Check credentials against the configured account
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
    /// Send one notification to standard output
    Notify(NotifyArgs),
    /// Print an employee record
    Employee(EmployeeArgs),
}

#[derive(Subcommand, Debug)]
enum ShapeCommand {
    /// A circle with the given radius
    Circle {
        #[arg(long)]
        radius: f64,
        /// Emit a JSON summary instead of the text block
        #[arg(long)]
        json: bool,
    },
    /// A rectangle with the given width and height
    Rectangle {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        /// Emit a JSON summary instead of the text block
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum AuthCommand {
    /// Verify a username and password
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Verify that a username holds a role
    Authorize {
        #[arg(long)]
        username: String,
        #[arg(long)]
        role: String,
    },
}

#[derive(Args, Debug)]
struct NotifyArgs {
    /// Delivery channel: email, sms or push
    #[arg(long)]
    channel: NotificationChannel,
    #[arg(long)]
    recipient: String,
    #[arg(long)]
    message: String,
}

#[derive(Args, Debug)]
struct EmployeeArgs {
    #[arg(long)]
    id: u32,
    #[arg(long)]
    name: String,
    /// Security level: guest, developer, secretary or dba
    #[arg(long, default_value = "guest")]
    level: SecurityPrivileges,
    #[arg(long, default_value_t = 0.0)]
    salary: f64,
    /// Gender letter, M or F
    #[arg(long)]
    gender: char,
    /// Hire date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    hired: NaiveDate,
    /// Emit the record as JSON
    #[arg(long)]
    json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let auth = BasicAuthenticationService::new(config.auth);
    let command = cli.command.unwrap_or(Command::Demo);

    match command {
        Command::Demo => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            demo::run(&mut out, &auth)?;
            out.flush()?;
        }
        Command::Shape { command } => run_shape(command)?,
        Command::Auth { command } => run_auth(command, &auth),
        Command::Notify(args) => {
            let service = ChannelNotificationService::new(args.channel, Arc::new(StdoutSink));
            service.send_notification(&args.recipient, &args.message);
        }
        Command::Employee(args) => run_employee(args)?,
    }

    Ok(())
}

fn run_shape(command: ShapeCommand) -> Result<(), AppError> {
    let (spec, json) = match command {
        ShapeCommand::Circle { radius, json } => (ShapeSpec::Circle { radius }, json),
        ShapeCommand::Rectangle {
            width,
            height,
            json,
        } => (ShapeSpec::Rectangle { width, height }, json),
    };

    let shape: Box<dyn Shape> = spec.build()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&shape.summary())?);
    } else {
        shape.display_shape_info();
    }
    Ok(())
}

fn run_auth(command: AuthCommand, auth: &dyn AuthenticationService) {
    match command {
        AuthCommand::Login { username, password } => {
            let authenticated = auth.authenticate_user(&username, &password);
            info!(%username, authenticated, "login checked");
            println!("Authentication successful: {authenticated}");
        }
        AuthCommand::Authorize { username, role } => {
            let authorized = auth.authorize_user(&username, &role);
            info!(%username, %role, authorized, "authorization checked");
            println!("Authorization successful: {authorized}");
        }
    }
}

fn run_employee(args: EmployeeArgs) -> Result<(), AppError> {
    let EmployeeArgs {
        id,
        name,
        level,
        salary,
        gender,
        hired,
        json,
    } = args;

    let employee = Employee::new(id, name, level, salary, HireDate::from(hired), gender)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&employee.view())?);
    } else {
        println!("{employee}");
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_demo_without_subcommand() {
        let cli = Cli::try_parse_from(["oop-showcase"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_notify_channel() {
        let cli = Cli::try_parse_from([
            "oop-showcase",
            "notify",
            "--channel",
            "SMS",
            "--recipient",
            "+1234567890",
            "--message",
            "hi",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Notify(args)) => assert_eq!(args.channel, NotificationChannel::Sms),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_channel_and_bad_dates() {
        assert!(Cli::try_parse_from([
            "oop-showcase",
            "notify",
            "--channel",
            "fax",
            "--recipient",
            "x",
            "--message",
            "y",
        ])
        .is_err());
        assert!(parse_date("2021-13-01").is_err());
        assert_eq!(
            parse_date(" 2021-09-03 ").expect("valid date"),
            NaiveDate::from_ymd_opt(2021, 9, 3).expect("valid")
        );
    }
}
