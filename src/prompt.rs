//! Confirmation before destroying an existing vendored copy.

use anyhow::Result;

/// How many times the wipe question is asked before giving up.
pub const WIPE_PROMPT_ATTEMPTS: usize = 4;

pub trait Prompter {
    /// Asks `question` and returns the raw answer.
    fn ask(&self, question: &str) -> Result<String>;
}

/// Interactive prompt on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&self, question: &str) -> Result<String> {
        Ok(inquire::Text::new(question).prompt()?)
    }
}

/// Prompter for unattended runs: always keeps what is on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclineAll;

impl Prompter for DeclineAll {
    fn ask(&self, _question: &str) -> Result<String> {
        Ok("n".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    Unrecognized,
}

fn classify(raw: &str) -> Answer {
    match raw.trim().to_lowercase().as_str() {
        "y" => Answer::Yes,
        "n" => Answer::No,
        _ => Answer::Unrecognized,
    }
}

/// Asks whether `path` may be wiped. Read failures and repeated
/// unrecognized answers keep the existing copy.
pub fn should_wipe_path(prompter: &dyn Prompter, path: &str) -> bool {
    let question = format!("Do you want to wipe {} [Y/n]", path);
    for _ in 0..WIPE_PROMPT_ATTEMPTS {
        let Ok(raw) = prompter.ask(&question) else {
            return false;
        };
        match classify(&raw) {
            Answer::Yes => return true,
            Answer::No => return false,
            Answer::Unrecognized => continue,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct Script {
        answers: Mutex<VecDeque<Option<&'static str>>>,
        asked: Mutex<usize>,
    }

    impl Script {
        fn new(answers: &[Option<&'static str>]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().copied().collect()),
                asked: Mutex::new(0),
            }
        }

        fn asked(&self) -> usize {
            *self.asked.lock().unwrap()
        }
    }

    impl Prompter for Script {
        fn ask(&self, _question: &str) -> Result<String> {
            *self.asked.lock().unwrap() += 1;
            match self.answers.lock().unwrap().pop_front().flatten() {
                Some(answer) => Ok(answer.to_string()),
                None => anyhow::bail!("stdin closed"),
            }
        }
    }

    #[test]
    fn test_yes_and_no_are_terminal() {
        let script = Script::new(&[Some("Y")]);
        assert!(should_wipe_path(&script, "vendor/x"));
        assert_eq!(script.asked(), 1);

        let script = Script::new(&[Some(" n ")]);
        assert!(!should_wipe_path(&script, "vendor/x"));
        assert_eq!(script.asked(), 1);
    }

    #[test]
    fn test_retries_until_recognized() {
        let script = Script::new(&[Some("maybe"), Some(""), Some("y")]);
        assert!(should_wipe_path(&script, "vendor/x"));
        assert_eq!(script.asked(), 3);
    }

    #[test]
    fn test_four_bad_answers_decline() {
        let script = Script::new(&[Some("yes"), Some("no"), Some("?"), Some("ok"), Some("y")]);
        assert!(!should_wipe_path(&script, "vendor/x"));
        assert_eq!(script.asked(), WIPE_PROMPT_ATTEMPTS);
    }

    #[test]
    fn test_read_failure_declines() {
        let script = Script::new(&[None]);
        assert!(!should_wipe_path(&script, "vendor/x"));
        assert_eq!(script.asked(), 1);
    }

    #[test]
    fn test_decline_all() {
        assert!(!should_wipe_path(&DeclineAll, "vendor/x"));
    }
}
