use std::io::Write;

use clap::Parser;
use env_logger::Builder;
use log::{error, info};

use dslab_power::config::PowerConfig;

/// Prints power consumption of configured hosts at different CPU utilization levels
#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    /// Path to YAML file with hosts configuration
    #[clap(long, default_value = "config.yaml")]
    config: String,

    /// Number of utilization steps between 0 and 1
    #[clap(long, default_value_t = 10)]
    steps: u32,
}

fn init_logger() {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn main() {
    init_logger();
    let args = Args::parse();

    let config = match PowerConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let mut hosts = match config.build_hosts() {
        Ok(hosts) => hosts,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!("loaded {} hosts from {}", hosts.len(), args.config);

    let steps = args.steps.max(1);
    print!("{:<16}", "utilization");
    for host in &hosts {
        print!("{:>12}", host.name());
    }
    println!();
    for step in 0..=steps {
        let utilization = step as f64 / steps as f64;
        print!("{:<16.2}", utilization);
        for host in hosts.iter_mut() {
            host.set_cpu_load(utilization);
            match host.get_power() {
                Ok(power) => print!("{:>12.2}", power),
                Err(e) => {
                    error!("host {}: {}", host.name(), e);
                    print!("{:>12}", "-");
                }
            }
        }
        println!();
    }
}
