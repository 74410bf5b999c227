use std::error::Error;
use std::fmt::{Debug, Display};
use std::{fmt, io};

#[derive(Debug)]
pub enum LdsError {
    /// The serial port refused a control command write.
    CommandFailed(String),
    SerialError(serialport::Error),
    IoError(io::Error),
}

impl fmt::Display for LdsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LdsError::CommandFailed(command) => {
                write!(f, "Failed to send command {:?} to the device.", command)
            }
            LdsError::IoError(err) => Display::fmt(&err, f),
            LdsError::SerialError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for LdsError {}

impl From<io::Error> for LdsError {
    fn from(err: io::Error) -> Self {
        LdsError::IoError(err)
    }
}

impl From<serialport::Error> for LdsError {
    fn from(err: serialport::Error) -> Self {
        LdsError::SerialError(err)
    }
}
