use crate::constants::{BAUD_RATE, CMD_START, CMD_STOP};
use crate::error::LdsError;
use serialport::SerialPort;
use std::io::{Read, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// The serial port shared between the frame reader and command senders.
/// The mutex is held per read chunk or per command write, never longer.
pub(crate) type SharedPort = Arc<Mutex<Box<dyn SerialPort>>>;

pub(crate) fn open_port(port_name: &str) -> Result<SharedPort, LdsError> {
    let port = serialport::new(port_name, BAUD_RATE)
        .timeout(Duration::from_millis(10))
        .open()?;
    Ok(Arc::new(Mutex::new(port)))
}

/// Sends a textual control command, appending the line terminator when
/// absent. The device protocol is plain ASCII; anything else is refused.
pub(crate) fn write_command(port: &SharedPort, command: &str) -> Result<(), LdsError> {
    if !command.is_ascii() {
        return Err(LdsError::CommandFailed(command.to_string()));
    }
    let mut line = command.to_string();
    if !line.ends_with('\n') {
        line.push('\n');
    }
    let mut port = port.lock().unwrap();
    port.write_all(line.as_bytes())?;
    port.flush()?;
    Ok(())
}

pub(crate) fn send_command(port: &SharedPort, command: &str) -> bool {
    match write_command(port, command) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to send command {:?}: {}", command, e);
            false
        }
    }
}

pub(crate) fn start_lds(port: &SharedPort) -> Result<(), LdsError> {
    write_command(port, CMD_START)
}

pub(crate) fn stop_lds(port: &SharedPort) -> Result<(), LdsError> {
    write_command(port, CMD_STOP)
}

/// Drains whatever the device has buffered without blocking. An empty
/// result means no data was pending, not end of stream.
pub(crate) fn read_available(port: &SharedPort) -> Result<Vec<u8>, LdsError> {
    let mut port = port.lock().unwrap();
    let n_read: usize = port.bytes_to_read()?.try_into().unwrap_or(0);
    if n_read == 0 {
        return Ok(Vec::new());
    }
    let mut chunk: Vec<u8> = vec![0; n_read];
    port.read_exact(chunk.as_mut_slice())?;
    Ok(chunk)
}

/// Discards stale input, e.g. frames emitted before a restart.
pub(crate) fn flush_input(port: &SharedPort) -> Result<(), LdsError> {
    read_available(port)?;
    Ok(())
}
