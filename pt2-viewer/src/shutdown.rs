use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender, bounded};
use log::info;

/// Tells the frame loop, that the user pressed Ctrl+C.
pub struct ShutdownRequest {
    receiver: Receiver<()>,
    requested: bool,
}

impl ShutdownRequest {
    fn channel() -> (Sender<()>, Self) {
        let (sender, receiver) = bounded(1);
        let request = ShutdownRequest {
            receiver,
            requested: false,
        };
        (sender, request)
    }

    /// Installs the signal handler.
    /// On Ctrl+C the ROS node is shut down as well, so `rosrust::is_ok()` turns false.
    pub fn install_ctrlc_handler() -> Result<Self> {
        let (sender, request) = Self::channel();
        ctrlc::set_handler(move || {
            rosrust::shutdown();
            sender.try_send(()).ok();
        })
        .context("Failed to install the Ctrl+C handler")?;
        Ok(request)
    }

    /// True, once Ctrl+C was pressed.
    pub fn is_requested(&mut self) -> bool {
        if !self.requested && self.receiver.try_recv().is_ok() {
            info!("Received Ctrl+C, shutting down.");
            self.requested = true;
        }
        self.requested
    }
}

#[cfg(test)]
mod test {
    use super::ShutdownRequest;

    #[test]
    fn test_request_is_sticky() {
        let (sender, mut request) = ShutdownRequest::channel();
        assert!(!request.is_requested());
        sender.try_send(()).unwrap();
        assert!(request.is_requested());
        assert!(request.is_requested());
    }

    #[test]
    fn test_repeated_signals_do_not_block() {
        let (sender, mut request) = ShutdownRequest::channel();
        sender.try_send(()).unwrap();
        assert!(sender.try_send(()).is_err());
        assert!(request.is_requested());
    }
}
