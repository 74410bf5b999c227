use clap::{Arg, Command};
use lds006_driver::LdsDriver;

fn get_port_name() -> String {
    let matches = Command::new("LDS-006 scan reader.")
        .about("Reads scan data from an LDS-006 lidar.")
        .disable_version_flag(true)
        .arg(
            Arg::new("port")
                .help("The device path to a serial port")
                .use_value_delimiter(false)
                .required(true),
        )
        .get_matches();

    let port_name: &String = matches.get_one("port").unwrap();
    port_name.to_string()
}

fn main() {
    env_logger::init();
    let port_name = get_port_name();

    let mut driver = LdsDriver::open(&port_name).unwrap();
    driver.start().unwrap();

    loop {
        std::thread::sleep(std::time::Duration::from_millis(200));
        if driver.transport_fault() {
            eprintln!("Transport fault, stopping");
            break;
        }

        let scan = driver.snapshot();
        println!(
            "{} of 360 degrees with returns, rotation {:.2} rpm",
            scan.present_count(),
            driver.last_rpm().unwrap_or(0.)
        );
        let sample = scan.get(90);
        if let (Some(distance), Some(quality)) = (sample.distance, sample.quality) {
            println!("  at 90 degrees: {} mm (quality {})", distance, quality);
        }
    }

    driver.stop();
}
