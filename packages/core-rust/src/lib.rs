//! `svcgate` Core — service name qualification, encoded command codec, and result encoding.

pub mod command;
pub mod name;
pub mod result;

pub use command::{
    encode_command, CommandError, CommandReply, ParsedCommand, ReplyStatus, RequestType, NO_ARGS,
};
pub use name::{is_system_service, to_underscore, DefaultNamespace, SYSTEM_SERVICE_MARKER};
pub use result::{Scalar, ServiceResult, NULL_RESULT};

#[cfg(test)]
mod tests {
    #[test]
    fn crate_loads() {
        // Empty body: if this test runs, the crate compiles and loads.
    }
}
