use crate::prelude::*;

/// Rust listening on the outcome of an operation carried out by the host.
/// When the host has finished the operation, either successfully or with
/// failure, it passes back the outcome by calling `notify_outcome`, which
/// forwards it to the dispatcher awaiting the other end of the channel.
pub(crate) struct OneshotOutcomeSender<R> {
    sender: Mutex<Option<Sender<R>>>,
}

impl<R> OneshotOutcomeSender<R> {
    pub(crate) fn new(sender: Sender<R>) -> Self {
        Self {
            sender: Mutex::new(Some(sender)),
        }
    }

    /// Forwards `outcome` to the awaiting dispatcher. The host must only call
    /// this once, later calls are dropped with a warning since a panic must
    /// not cross the FFI boundary.
    pub(crate) fn notify_outcome(&self, outcome: R) {
        let sender = match self.sender.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let Some(sender) = sender else {
            tracing::warn!("Host notified outcome more than once, ignoring");
            return;
        };
        if sender.send(outcome).is_err() {
            // The awaiting future was dropped, nobody is interested anymore.
            tracing::debug!("Outcome arrived after caller stopped waiting, ignoring");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_outcome_is_delivered() {
        let (sender, receiver) = channel::<u8>();
        let sut = OneshotOutcomeSender::new(sender);
        sut.notify_outcome(1);
        assert_eq!(receiver.await, Ok(1));
    }

    #[tokio::test]
    async fn second_outcome_is_ignored() {
        let (sender, receiver) = channel::<u8>();
        let sut = OneshotOutcomeSender::new(sender);
        sut.notify_outcome(1);
        sut.notify_outcome(2);
        assert_eq!(receiver.await, Ok(1));
    }

    #[test]
    fn outcome_after_receiver_dropped_does_not_panic() {
        let (sender, receiver) = channel::<u8>();
        drop(receiver);
        let sut = OneshotOutcomeSender::new(sender);
        sut.notify_outcome(1);
    }

    #[tokio::test]
    async fn dropping_without_notifying_closes_channel() {
        let (sender, receiver) = channel::<u8>();
        let sut = OneshotOutcomeSender::new(sender);
        drop(sut);
        assert!(receiver.await.is_err());
    }
}
