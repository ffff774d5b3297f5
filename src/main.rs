/* 3rd party libraries */
use clap::{Arg, Command as Cli};
use crossbeam_channel as cbc;
use log::{error, info, warn};
use std::io::{self, BufRead};
use std::thread::Builder;

/* Custom libraries */
use elevator_sim::config::{self, Config};
use elevator_sim::{unwrap_or_exit, Command, ConfigError, ElevatorEvent, ElevatorSystem, Gateway};

/* Main */
fn main() {
    env_logger::init();

    let matches = Cli::new("elevator_sim")
        .about("Single elevator simulation driven by text commands on stdin")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print status reports and events as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log every elevator event"),
        )
        .get_matches();

    let json = matches.is_present("json");
    let config_path = matches.value_of("config").unwrap_or("config.toml");

    // Load the configuration
    let config = match config::load_config(config_path) {
        Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            warn!("No configuration at {}, using defaults", config_path);
            Config::default()
        }
        result => unwrap_or_exit!(result),
    };

    // Start the event logger
    let (events_tx, event_thread) = if matches.is_present("verbose") {
        let (events_tx, events_rx) = cbc::unbounded::<ElevatorEvent>();
        let event_thread = unwrap_or_exit!(Builder::new()
            .name("event_log".into())
            .spawn(move || log_events(events_rx, json)));
        (Some(events_tx), Some(event_thread))
    } else {
        (None, None)
    };

    // Start the elevator system
    let system = unwrap_or_exit!(ElevatorSystem::spawn(&config, events_tx));
    let gateway = system.gateway();

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "status" => print_status(&gateway, json),
            input => match Command::parse(input).and_then(|command| command.execute(&gateway)) {
                Ok(()) => println!("ok"),
                Err(e) => println!("error: {}", e),
            },
        }
    }

    info!("Shutting down");
    drop(gateway);
    unwrap_or_exit!(system.shutdown());
    if let Some(event_thread) = event_thread {
        let _ = event_thread.join();
    }
}

fn print_status(gateway: &Gateway, json: bool) {
    let report = match gateway.query_status() {
        Ok(report) => report,
        Err(e) => {
            println!("error: {}", e);
            return;
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => error!("Failed to serialize status: {}", e),
        }
    } else {
        print!("{}", report);
    }
}

fn log_events(events_rx: cbc::Receiver<ElevatorEvent>, json: bool) {
    for event in events_rx.iter() {
        if json {
            match serde_json::to_string(&event) {
                Ok(text) => info!("{}", text),
                Err(e) => error!("Failed to serialize event: {}", e),
            }
        } else {
            info!("{:?}", event);
        }
    }
}
