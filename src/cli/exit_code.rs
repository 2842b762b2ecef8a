use super::commands::CommandResult;
use super::exit_status::ExitStatus;

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.fatal {
        ExitStatus::Error
    } else if result.exit_on_errors && result.error_count + result.warning_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
