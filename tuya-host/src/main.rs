mod recorder;
mod trace;

use chrono::{Local, SecondsFormat};
use clap::{App, AppSettings, Arg};

use tuya_data::cluster_library::{
    thermostat, user_interface, AttributeIdentifier, ClusterIdentifier,
};
use tuya_data::DeviceProfile;
use tuya_service::{AttributeReports, ThermostatSession};

use recorder::RecordingTransport;
use trace::{Action, Config};

const ATTRIBUTES: [(ClusterIdentifier, AttributeIdentifier, &str); 7] = [
    (thermostat::CLUSTER, thermostat::ATTR_LOCAL_TEMPERATURE, "Local temperature"),
    (
        thermostat::CLUSTER,
        thermostat::ATTR_OCCUPIED_HEATING_SETPOINT,
        "Occupied heating setpoint",
    ),
    (thermostat::CLUSTER, thermostat::ATTR_SYSTEM_MODE, "System mode"),
    (thermostat::CLUSTER, thermostat::ATTR_RUNNING_MODE, "Running mode"),
    (thermostat::CLUSTER, thermostat::ATTR_RUNNING_STATE, "Running state"),
    (
        thermostat::CLUSTER,
        thermostat::ATTR_PROGRAMMING_OPERATION_MODE,
        "Programming operation mode",
    ),
    (user_interface::CLUSTER, user_interface::ATTR_KEYPAD_LOCKOUT, "Keypad lockout"),
];

fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn print_reports(reports: &AttributeReports) {
    for report in reports.iter() {
        println!(
            "{} Report {:04x}:{:04x} {}",
            timestamp(),
            report.cluster,
            report.attribute,
            report.value
        );
    }
}

type Session = ThermostatSession<'static, RecordingTransport>;

/// Bind the session, telling if this bind queried the device
fn bind(session: &mut Session) -> (AttributeReports, bool) {
    let queries = session.transport().queries;
    let reports = session.bind();
    (reports, session.transport().queries > queries)
}

fn fail(message: &str, error: trace::Error) -> ! {
    eprintln!("{}: {}", message, error);
    ::std::process::exit(1);
}

fn main() {
    env_logger::init();
    let matches = App::new("Tuya thermostat translation host")
        .about("Replay a datapoint trace through the thermostat translation")
        .setting(AppSettings::DisableVersion)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .help("Path to configuration file")
                .use_delimiter(false)
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("trace")
                .help("Path to trace file")
                .use_delimiter(false)
                .required(true),
        )
        .get_matches();

    let config = match matches.value_of("config") {
        Some(file_path) => match trace::read_config(file_path) {
            Ok(config) => config,
            Err(e) => fail(&format!("Failed to read \"{}\"", file_path), e),
        },
        None => Config::default(),
    };

    let profile = match DeviceProfile::lookup(&config.manufacturer, &config.model) {
        Some(profile) => profile,
        None => {
            eprintln!(
                "No profile for {} {}",
                config.manufacturer, config.model
            );
            ::std::process::exit(1);
        }
    };

    let datapoints = match config.datapoint_cache() {
        Ok(datapoints) => datapoints,
        Err(e) => fail("Invalid datapoints", e),
    };
    log::debug!("{} cached datapoints", datapoints.len());

    // clap enforces the argument
    let trace_path = matches.value_of("trace").unwrap_or_default();
    let actions = match trace::read_trace(trace_path).and_then(|t| t.actions()) {
        Ok(actions) => actions,
        Err(e) => fail(&format!("Failed to read \"{}\"", trace_path), e),
    };

    println!(
        "Replay {} steps for {} {}",
        actions.len(),
        profile.manufacturer,
        profile.model
    );

    let mut session =
        ThermostatSession::new(profile, RecordingTransport::new()).with_datapoints(datapoints);

    for action in actions {
        match action {
            Action::Bind => {
                println!("{} Bind", timestamp());
                let (reports, queried) = bind(&mut session);
                if queried {
                    println!("{} Datapoint query sent", timestamp());
                }
                print_reports(&reports);
            }
            Action::Report(identifier, value) => {
                println!("{} Datapoint {} = {}", timestamp(), identifier, value);
                let reports = session.datapoint_report(identifier, value);
                print_reports(&reports);
            }
            Action::Write(cluster, attribute, value) => {
                let status = session.write_attribute(cluster, attribute, value);
                println!(
                    "{} Write {:04x}:{:04x} {} {:?}",
                    timestamp(),
                    cluster,
                    attribute,
                    value,
                    status
                );
                for write in session.transport_mut().take_writes() {
                    println!(
                        "{} Datapoint write {} = {}",
                        timestamp(),
                        write.identifier,
                        write.value
                    );
                }
            }
        }
    }

    println!("State -------------------------------");
    for (cluster, attribute, name) in ATTRIBUTES.iter() {
        match session.read_attribute(*cluster, *attribute) {
            Ok(value) => println!("{}: {}", name, value),
            Err(status) => println!("{}: {:?}", name, status),
        }
    }
    for (identifier, value) in session.datapoints().iter() {
        println!("{} = {}", identifier, value);
    }
}
