//! Single-flight assist dispatcher with supersession

use super::AssistBackend;
use crate::error::{AssistError, BackendError};
use crate::types::{
    AssistCommand, AssistCompletion, AssistOutput, AssistPhase, AssistRequest, AssistTarget,
    AssistTicket, Message,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub type CompletionSender = mpsc::UnboundedSender<AssistCompletion>;
pub type CompletionReceiver = mpsc::UnboundedReceiver<AssistCompletion>;

/// Channel on which engines post finished requests
pub fn completion_channel() -> (CompletionSender, CompletionReceiver) {
    mpsc::unbounded_channel()
}

struct InFlight {
    ticket: AssistTicket,
    command: AssistCommand,
    task: JoinHandle<()>,
}

/// Dispatches assist requests to a backend, at most one in flight per target.
///
/// Per target the state machine is `Idle -> Pending -> Idle`. Submitting while
/// pending supersedes the earlier request: its task is aborted and, should its
/// completion already be queued, `accept` rejects it as stale.
pub struct AssistEngine {
    label: &'static str,
    backend: Arc<dyn AssistBackend>,
    deadline: Duration,
    completion_tx: CompletionSender,
    next_ticket: u64,
    in_flight: HashMap<AssistTarget, InFlight>,
}

impl AssistEngine {
    pub fn new(
        label: &'static str,
        backend: Arc<dyn AssistBackend>,
        deadline: Duration,
        completion_tx: CompletionSender,
    ) -> Self {
        Self {
            label,
            backend,
            deadline,
            completion_tx,
            next_ticket: 0,
            in_flight: HashMap::new(),
        }
    }

    /// Submit a request for `target`, superseding any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(
        &mut self,
        target: AssistTarget,
        command: AssistCommand,
        context: Vec<Message>,
    ) -> AssistTicket {
        self.next_ticket += 1;
        let ticket = AssistTicket(self.next_ticket);

        if let Some(previous) = self.in_flight.remove(&target) {
            previous.task.abort();
            debug!(
                "[{}] {} supersedes {} on {}",
                self.label, ticket, previous.ticket, target
            );
        }

        let request = AssistRequest {
            ticket,
            target,
            command: command.clone(),
            context,
            submitted_at: chrono::Utc::now(),
        };
        let backend = Arc::clone(&self.backend);
        let completion_tx = self.completion_tx.clone();
        let deadline = self.deadline;
        let label = self.label;

        let task = tokio::spawn(async move {
            let outcome = match tokio::time::timeout(deadline, backend.run(request)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(BackendError::Timeout),
            };
            let completion = AssistCompletion {
                ticket,
                target,
                outcome,
            };
            if completion_tx.send(completion).is_err() {
                debug!("[{}] Completion {} dropped: receiver closed", label, ticket);
            }
        });

        debug!("[{}] Submitted {} {:?} on {}", self.label, ticket, command, target);
        self.in_flight.insert(
            target,
            InFlight {
                ticket,
                command,
                task,
            },
        );
        ticket
    }

    /// Resolve a completion. Only the current ticket for its target is accepted;
    /// the target then returns to idle.
    pub fn accept(&mut self, completion: AssistCompletion) -> Result<AssistOutput, AssistError> {
        let AssistCompletion {
            ticket,
            target,
            outcome,
        } = completion;

        let is_current = self
            .in_flight
            .get(&target)
            .is_some_and(|flight| flight.ticket == ticket);
        if !is_current {
            debug!("[{}] Discarding stale {} on {}", self.label, ticket, target);
            return Err(AssistError::Stale { target, ticket });
        }

        self.in_flight.remove(&target);
        outcome.map_err(|err| {
            warn!("[{}] {} on {} failed: {}", self.label, ticket, target, err);
            AssistError::Backend(err)
        })
    }

    /// Drop the pending request for `target`, if any
    pub fn cancel(&mut self, target: &AssistTarget) -> bool {
        match self.in_flight.remove(target) {
            Some(flight) => {
                flight.task.abort();
                debug!("[{}] Cancelled {} on {}", self.label, flight.ticket, target);
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, flight) in self.in_flight.drain() {
            flight.task.abort();
        }
    }

    pub fn phase(&self, target: &AssistTarget) -> AssistPhase {
        match self.in_flight.get(target) {
            Some(flight) => AssistPhase::Pending(flight.ticket),
            None => AssistPhase::Idle,
        }
    }

    pub fn is_pending(&self, target: &AssistTarget) -> bool {
        self.in_flight.contains_key(target)
    }

    pub fn pending_command(&self, target: &AssistTarget) -> Option<&AssistCommand> {
        self.in_flight.get(target).map(|flight| &flight.command)
    }
}

impl Drop for AssistEngine {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist::traits::MockAssistBackend;
    use crate::assist::{SimulatedBackend, SimulatedLatency, BASE_SUGGESTION};
    use crate::types::{ConversationId, NewMessage, Suggestion, SuggestionStyle};
    use crate::thread::MessageThread;
    use pretty_assertions::assert_eq;

    const DEADLINE: Duration = Duration::from_secs(10);

    fn thread_target(id: u64) -> AssistTarget {
        AssistTarget::Thread(ConversationId::new(id))
    }

    fn simulated_engine() -> (AssistEngine, CompletionReceiver) {
        let (tx, rx) = completion_channel();
        let engine = AssistEngine::new(
            "test",
            Arc::new(SimulatedBackend::default()),
            DEADLINE,
            tx,
        );
        (engine, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_then_deliver() {
        let (mut engine, mut rx) = simulated_engine();
        let target = thread_target(1);

        let ticket = engine.submit(target, AssistCommand::Suggest, Vec::new());
        assert_eq!(engine.phase(&target), AssistPhase::Pending(ticket));
        assert_eq!(engine.pending_command(&target), Some(&AssistCommand::Suggest));

        let completion = rx.recv().await.unwrap();
        assert_eq!(completion.ticket, ticket);

        let output = engine.accept(completion).unwrap();
        assert_eq!(
            output,
            AssistOutput::Suggestion(Suggestion {
                text: BASE_SUGGESTION.to_string(),
                applied_style: None,
            })
        );
        assert_eq!(engine.phase(&target), AssistPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_supersedes_first() {
        let (mut engine, mut rx) = simulated_engine();
        let target = thread_target(1);

        let first = engine.submit(target, AssistCommand::Suggest, Vec::new());
        let second = engine.submit(
            target,
            AssistCommand::suggest(Some(SuggestionStyle::Friendlier)),
            Vec::new(),
        );
        assert!(second > first);

        let completion = rx.recv().await.unwrap();
        assert_eq!(completion.ticket, second);
        match engine.accept(completion).unwrap() {
            AssistOutput::Suggestion(s) => {
                assert_eq!(s.applied_style, Some(SuggestionStyle::Friendlier))
            }
            other => panic!("expected suggestion, got {:?}", other),
        }

        // The first task was aborted and never reports.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_superseded_result_is_stale() {
        let (mut engine, _rx) = simulated_engine();
        let target = thread_target(1);

        let first = engine.submit(target, AssistCommand::Suggest, Vec::new());
        let second = engine.submit(target, AssistCommand::Suggest, Vec::new());

        let late = AssistCompletion {
            ticket: first,
            target,
            outcome: Ok(AssistOutput::Answer {
                text: "late".to_string(),
            }),
        };
        assert_eq!(
            engine.accept(late),
            Err(AssistError::Stale {
                target,
                ticket: first
            })
        );
        assert_eq!(engine.phase(&target), AssistPhase::Pending(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_targets_are_independent() {
        let (mut engine, mut rx) = simulated_engine();
        engine.submit(thread_target(1), AssistCommand::Suggest, Vec::new());
        engine.submit(AssistTarget::Copilot, AssistCommand::ask("hi"), Vec::new());

        let mut delivered = 0;
        for _ in 0..2 {
            let completion = rx.recv().await.unwrap();
            assert!(engine.accept(completion).is_ok());
            delivered += 1;
        }
        assert_eq!(delivered, 2);
        assert!(!engine.is_pending(&thread_target(1)));
        assert!(!engine.is_pending(&AssistTarget::Copilot));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_becomes_timeout() {
        let (tx, mut rx) = completion_channel();
        let slow = SimulatedBackend::new(SimulatedLatency {
            suggest: Duration::from_secs(30),
            summarize: Duration::from_secs(30),
            answer: Duration::from_secs(30),
        });
        let mut engine = AssistEngine::new("test", Arc::new(slow), Duration::from_secs(1), tx);
        let target = thread_target(2);

        engine.submit(target, AssistCommand::Suggest, Vec::new());
        let completion = rx.recv().await.unwrap();

        assert_eq!(
            engine.accept(completion),
            Err(AssistError::Backend(BackendError::Timeout))
        );
        assert_eq!(engine.phase(&target), AssistPhase::Idle);
    }

    #[tokio::test]
    async fn test_backend_failure_returns_to_idle() {
        let mut backend = MockAssistBackend::new();
        backend
            .expect_run()
            .times(1)
            .returning(|_| Err(BackendError::Network("offline".to_string())));

        let (tx, mut rx) = completion_channel();
        let mut engine = AssistEngine::new("test", Arc::new(backend), DEADLINE, tx);
        let target = thread_target(3);

        engine.submit(target, AssistCommand::Suggest, Vec::new());
        let completion = rx.recv().await.unwrap();

        assert_eq!(
            engine.accept(completion),
            Err(AssistError::Backend(BackendError::Network("offline".to_string())))
        );
        assert!(!engine.is_pending(&target));
    }

    #[tokio::test]
    async fn test_request_carries_thread_context() {
        let mut thread = MessageThread::new();
        thread.reset(
            ConversationId::new(1),
            vec![NewMessage::user("one"), NewMessage::agent("two")],
        );

        let mut backend = MockAssistBackend::new();
        backend
            .expect_run()
            .withf(|request| request.context.len() == 2 && request.context[1].body == "two")
            .times(1)
            .returning(|_| {
                Ok(AssistOutput::Answer {
                    text: "ok".to_string(),
                })
            });

        let (tx, mut rx) = completion_channel();
        let mut engine = AssistEngine::new("test", Arc::new(backend), DEADLINE, tx);
        engine.submit(
            thread_target(1),
            AssistCommand::Suggest,
            thread.snapshot().to_vec(),
        );

        let completion = rx.recv().await.unwrap();
        assert!(engine.accept(completion).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_makes_result_stale() {
        let (mut engine, _rx) = simulated_engine();
        let target = thread_target(4);

        let ticket = engine.submit(target, AssistCommand::Suggest, Vec::new());
        assert!(engine.cancel(&target));
        assert!(!engine.cancel(&target));

        let completion = AssistCompletion {
            ticket,
            target,
            outcome: Ok(AssistOutput::Answer {
                text: "too late".to_string(),
            }),
        };
        assert!(matches!(
            engine.accept(completion),
            Err(AssistError::Stale { .. })
        ));
    }
}
