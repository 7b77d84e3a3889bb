//! Implements InputPort. Inquire-based interactive chat loop.
//!
//! Renders the transcript incrementally and drives the session's modal
//! flows (crop form, image upload) with follow-up prompts.

use async_trait::async_trait;
use indicatif::ProgressBar;
use inquire::{InquireError, Select, Text};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::warn;

use super::render;
use crate::domain::{DomainError, Season};
use crate::ports::InputPort;
use crate::usecases::{ChatSession, Dispatch, QuickAction};

const MENU_ASK: &str = "Ask FarmWise";
const MENU_QUICK: &str = "Quick actions";
const MENU_SAVE: &str = "Save transcript (JSON)";
const MENU_EXIT: &str = "Exit";

const SOIL_TYPES: [&str; 4] = ["loamy", "clay", "sandy", "silt"];
const TRANSCRIPT_PATH: &str = "transcript.json";

/// REPL adapter. Owns the session for the lifetime of the chat loop.
pub struct ReplAdapter {
    session: Mutex<ChatSession>,
}

impl ReplAdapter {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

/// Spinner shown while the session awaits an advisory source.
fn thinking() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message("FarmWise is thinking...");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Print transcript entries appended since the last call.
fn show_new(session: &ChatSession, shown: &mut usize) {
    for msg in &session.messages()[*shown..] {
        println!("{}", render::render_message(msg));
    }
    *shown = session.messages().len();
}

/// Esc backs out of a prompt; Ctrl-C ends the program. Everything else
/// is a real terminal failure.
enum PromptOutcome<T> {
    Value(T),
    Back,
    Quit,
}

fn check<T>(result: Result<T, InquireError>) -> Result<PromptOutcome<T>, DomainError> {
    match result {
        Ok(v) => Ok(PromptOutcome::Value(v)),
        Err(InquireError::OperationCanceled) => Ok(PromptOutcome::Back),
        Err(InquireError::OperationInterrupted) => Ok(PromptOutcome::Quit),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

#[async_trait]
impl InputPort for ReplAdapter {
    async fn run(&self) -> Result<(), DomainError> {
        let mut session = self.session.lock().await;
        let mut shown = 0usize;
        show_new(&session, &mut shown);

        loop {
            let options = vec![MENU_ASK, MENU_QUICK, MENU_SAVE, MENU_EXIT];
            let choice = match check(Select::new("What would you like to do?", options).prompt())? {
                PromptOutcome::Value(v) => v,
                PromptOutcome::Back => continue,
                PromptOutcome::Quit => break,
            };

            let dispatch = match choice {
                MENU_ASK => {
                    let text =
                        match check(Text::new("You:").prompt())? {
                            PromptOutcome::Value(v) => v,
                            PromptOutcome::Back => continue,
                            PromptOutcome::Quit => break,
                        };
                    let pb = thinking();
                    let outcome = session.send_text(&text).await?;
                    pb.finish_and_clear();
                    outcome
                }
                MENU_QUICK => {
                    let labels: Vec<&str> =
                        QuickAction::ALL.iter().map(|a| a.label()).collect();
                    let picked = match check(Select::new("Quick actions:", labels).prompt())? {
                        PromptOutcome::Value(v) => v,
                        PromptOutcome::Back => continue,
                        PromptOutcome::Quit => break,
                    };
                    let action = QuickAction::ALL
                        .into_iter()
                        .find(|a| a.label() == picked)
                        .unwrap_or(QuickAction::FarmingTips);
                    let pb = thinking();
                    let outcome = session.invoke_quick_action(action).await?;
                    pb.finish_and_clear();
                    outcome
                }
                MENU_SAVE => {
                    save_transcript(&session)?;
                    println!("Transcript saved to {TRANSCRIPT_PATH}");
                    continue;
                }
                _ => break,
            };

            match dispatch {
                Dispatch::FormOpened => run_crop_form(&mut session).await?,
                Dispatch::UploadRequested => run_image_upload(&mut session).await?,
                Dispatch::Replied | Dispatch::Ignored => {}
            }
            show_new(&session, &mut shown);
        }

        println!("Goodbye! May your harvest be plentiful.");
        Ok(())
    }
}

/// Crop form follow-up. All three fields are required; Esc cancels the
/// form without submitting.
async fn run_crop_form(session: &mut ChatSession) -> Result<(), DomainError> {
    let soil = match check(Select::new("Soil type:", SOIL_TYPES.to_vec()).prompt())? {
        PromptOutcome::Value(v) => v,
        _ => {
            session.cancel_modal();
            return Ok(());
        }
    };

    let location = loop {
        match check(Text::new("Location (e.g. Punjab, Maharashtra):").prompt())? {
            PromptOutcome::Value(v) if !v.trim().is_empty() => break v.trim().to_string(),
            PromptOutcome::Value(_) => continue,
            _ => {
                session.cancel_modal();
                return Ok(());
            }
        }
    };

    let season = match check(Select::new("Current season:", Season::ALL.to_vec()).prompt())? {
        PromptOutcome::Value(v) => v,
        _ => {
            session.cancel_modal();
            return Ok(());
        }
    };

    let pb = thinking();
    session.submit_crop_form(soil, &location, season).await?;
    pb.finish_and_clear();
    Ok(())
}

/// Image upload follow-up. Reads the file and hands the bytes to the
/// session; an unreadable path cancels the flow instead of crashing it.
async fn run_image_upload(session: &mut ChatSession) -> Result<(), DomainError> {
    let path = match check(Text::new("Path to crop image:").prompt())? {
        PromptOutcome::Value(v) => v,
        _ => {
            session.cancel_modal();
            return Ok(());
        }
    };

    let image = match tokio::fs::read(path.trim()).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path, error = %e, "could not read image file");
            println!("Could not read that file, upload cancelled.");
            session.cancel_modal();
            return Ok(());
        }
    };

    let pb = thinking();
    session.upload_image(&image).await?;
    pb.finish_and_clear();
    Ok(())
}

fn save_transcript(session: &ChatSession) -> Result<(), DomainError> {
    let json = serde_json::to_string_pretty(session.messages())
        .map_err(|e| DomainError::Ui(e.to_string()))?;
    std::fs::write(TRANSCRIPT_PATH, json).map_err(|e| DomainError::Ui(e.to_string()))
}
