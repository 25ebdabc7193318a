use std::process::ExitCode;

/// How a documentor command finished. The discriminant is the process exit code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    /// Nothing was done, e.g. `init` found an existing config file.
    Failure = 1,
    /// Some input could not be read, or the config was invalid.
    Error = 2,
}

impl ExitStatus {
    /// Status after processing inputs, `read_errors` of which were unreadable.
    pub fn from_read_errors(read_errors: usize) -> Self {
        if read_errors == 0 {
            Self::Success
        } else {
            Self::Error
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
