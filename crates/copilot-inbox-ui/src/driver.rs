//! Headless event loop and line-oriented command front end

use crate::controller::{LayoutController, Panel, UiEvent};
use crate::views::ViewSnapshot;
use copilot_inbox_core::{
    CompletionReceiver, ConversationId, InboxFilter, MessageId, SuggestionStyle, SummaryScope,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCommand {
    Event(UiEvent),
    Show,
    Quit,
}

fn required<'a>(arg: &'a str, verb: &str) -> Result<&'a str, String> {
    if arg.is_empty() {
        Err(format!("usage: {} <argument>", verb))
    } else {
        Ok(arg)
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<DriverCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let event = match verb {
        "show" => return Ok(Some(DriverCommand::Show)),
        "quit" | "exit" => return Ok(Some(DriverCommand::Quit)),
        "select" => {
            let id = required(arg, verb)?
                .parse::<u64>()
                .map_err(|e| format!("invalid conversation id: {}", e))?;
            UiEvent::SelectConversation(ConversationId::new(id))
        }
        "resize" => {
            let width = required(arg, verb)?
                .parse::<u32>()
                .map_err(|e| format!("invalid width: {}", e))?;
            UiEvent::Resize(width)
        }
        "toggle" => match arg {
            "list" => UiEvent::ToggleConversationList,
            "copilot" => UiEvent::ToggleCopilotPanel,
            "dark" => UiEvent::ToggleDarkMode,
            other => return Err(format!("unknown panel: {}", other)),
        },
        "filter" => UiEvent::SetFilter(required(arg, verb)?.parse::<InboxFilter>()?),
        "search" => UiEvent::SetSearch(arg.to_string()),
        // Keep the raw text after the verb so trailing triggers survive.
        "type" => UiEvent::ComposerChanged(
            line.strip_prefix("type")
                .unwrap_or_default()
                .trim_start()
                .to_string(),
        ),
        "send" => UiEvent::SendMessage,
        "suggest" if arg.is_empty() => UiEvent::RequestSuggestion(None),
        "suggest" => UiEvent::RequestSuggestion(Some(arg.parse::<SuggestionStyle>()?)),
        "summarize" if arg.is_empty() => UiEvent::RequestSummary(SummaryScope::Global),
        "summarize" => {
            let id = arg
                .parse::<u64>()
                .map_err(|e| format!("invalid message id: {}", e))?;
            UiEvent::RequestSummary(SummaryScope::UpToMessage(MessageId::new(id)))
        }
        "ask" => UiEvent::CopilotSubmit(required(arg, verb)?.to_string()),
        "prompt" => {
            let n = required(arg, verb)?
                .parse::<usize>()
                .map_err(|e| format!("invalid prompt number: {}", e))?;
            if n == 0 {
                return Err("prompts are numbered from 1".to_string());
            }
            UiEvent::CopilotQuickPrompt(n - 1)
        }
        "add" => {
            let id = Uuid::parse_str(required(arg, verb)?)
                .map_err(|e| format!("invalid entry id: {}", e))?;
            UiEvent::AddToComposer(id)
        }
        "dismiss" => match arg {
            "chat" => UiEvent::DismissNotice(Panel::Chat),
            "copilot" => UiEvent::DismissNotice(Panel::Copilot),
            other => return Err(format!("unknown panel: {}", other)),
        },
        other => return Err(format!("unknown command: {}", other)),
    };
    Ok(Some(DriverCommand::Event(event)))
}

/// Read commands line by line until EOF or `quit`
pub async fn read_commands<R>(reader: R, tx: mpsc::Sender<DriverCommand>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match parse_command(&line) {
                Ok(Some(command)) => {
                    let quit = command == DriverCommand::Quit;
                    if tx.send(command).await.is_err() {
                        debug!("Command channel closed");
                        break;
                    }
                    if quit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => warn!("{}", e),
            },
            Ok(None) => {
                debug!("Input closed");
                break;
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }
}

/// Drive the controller until `Quit` or until the command channel closes.
///
/// Commands are always drained before completions, so a user event that is
/// already queued supersedes a result racing with it.
pub async fn run_event_loop(
    mut controller: LayoutController,
    mut commands: mpsc::Receiver<DriverCommand>,
    mut completions: CompletionReceiver,
    snapshots: mpsc::Sender<ViewSnapshot>,
) -> LayoutController {
    info!("Event loop started");
    loop {
        tokio::select! {
            biased;

            command = commands.recv() => match command {
                Some(DriverCommand::Event(event)) => controller.handle(event),
                Some(DriverCommand::Show) => {
                    if snapshots.send(controller.snapshot()).await.is_err() {
                        debug!("Snapshot receiver closed");
                    }
                }
                Some(DriverCommand::Quit) | None => break,
            },
            Some(completion) = completions.recv() => controller.apply_completion(completion),
        }
    }
    controller.shutdown();
    info!("Event loop stopped");
    controller
}
