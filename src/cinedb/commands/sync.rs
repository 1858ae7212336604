use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sync::{RemoteSync, TransferTool};

pub fn pull<T: TransferTool>(remote: &RemoteSync<T>) -> Result<CmdResult> {
    remote.pull()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Downloaded data from {}",
        remote.bucket()
    )));
    result.add_message(CmdMessage::info(format!(
        "Local copy at {} was replaced",
        remote.local_path().display()
    )));
    Ok(result)
}

pub fn push<T: TransferTool>(remote: &RemoteSync<T>) -> Result<CmdResult> {
    remote.push()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Uploaded data to {}",
        remote.bucket()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::CinedbError;
    use crate::sync::fake::RecordingTransfer;

    #[test]
    fn pull_reports_bucket() {
        let remote = RemoteSync::new("s3://cinema-web", "data.json", "data.json", RecordingTransfer::default());
        let result = pull(&remote).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Downloaded data from s3://cinema-web");
    }

    #[test]
    fn push_reports_bucket() {
        let remote = RemoteSync::new("s3://cinema-web", "data.json", "data.json", RecordingTransfer::default());
        let result = push(&remote).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Uploaded data to s3://cinema-web");
    }

    #[test]
    fn failed_push_propagates() {
        let remote = RemoteSync::new(
            "s3://cinema-web",
            "data.json",
            "data.json",
            RecordingTransfer::failing("exit status: 255", "Unable to locate credentials"),
        );
        assert!(matches!(push(&remote), Err(CinedbError::Transfer { .. })));
    }
}
