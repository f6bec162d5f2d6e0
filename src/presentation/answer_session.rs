use std::sync::Arc;

use tokio::io::AsyncBufReadExt;

use crate::core::interfaces::adapters::VisionAnalyzer;
use crate::global_constants::LOG_TAG_SESSION;

const REFINE_PROMPT_HINT: &str =
    "[INFO] Type a follow-up to refine the answer, or press Enter to dismiss.";

/// Terminal rendition of the answer surface: prints the model's answer,
/// optionally copies it to the clipboard, then accepts refinement prompts
/// until the user dismisses the session with an empty line.
pub struct AnswerSession {
    vision_analyzer: Arc<dyn VisionAnalyzer>,
    copy_answer_to_clipboard: bool,
}

impl AnswerSession {
    pub fn build(vision_analyzer: Arc<dyn VisionAnalyzer>, copy_answer_to_clipboard: bool) -> Self {
        Self {
            vision_analyzer,
            copy_answer_to_clipboard,
        }
    }

    pub async fn run(&self, initial_answer: String) {
        let mut current_answer = initial_answer;
        self.show_answer(&current_answer);

        let stdin_reader = tokio::io::BufReader::new(tokio::io::stdin());
        let mut input_lines = stdin_reader.lines();

        println!("{}", REFINE_PROMPT_HINT);

        loop {
            let line = match input_lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(error) => {
                    log::error!("{} failed to read input: {}", LOG_TAG_SESSION, error);
                    break;
                }
            };

            let refinement_prompt = line.trim();
            if refinement_prompt.is_empty() {
                break;
            }

            log::info!(
                "{} refinement requested: {}",
                LOG_TAG_SESSION,
                refinement_prompt
            );

            match self
                .vision_analyzer
                .refine_response(&current_answer, refinement_prompt)
                .await
            {
                Ok(refined_answer) => {
                    current_answer = refined_answer;
                    self.show_answer(&current_answer);
                    println!("{}", REFINE_PROMPT_HINT);
                }
                Err(error) => {
                    // The session survives a failed refinement; the previous
                    // answer stays current.
                    log::error!("{} refinement failed: {}", LOG_TAG_SESSION, error);
                    eprintln!("[ERROR] Refinement failed: {}", error);
                }
            }
        }

        log::info!("{} answer session closed", LOG_TAG_SESSION);
        println!("[INFO] Answer session closed. Ready for the next capture.");
    }

    fn show_answer(&self, answer: &str) {
        println!("{}", Self::format_answer_block(answer));

        if self.copy_answer_to_clipboard {
            self.copy_to_clipboard(answer);
        }
    }

    fn copy_to_clipboard(&self, answer: &str) {
        if let Err(e) =
            arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(answer))
        {
            log::error!("{} failed to copy to clipboard: {}", LOG_TAG_SESSION, e);
        } else {
            log::info!("{} answer copied to clipboard", LOG_TAG_SESSION);
        }
    }

    fn format_answer_block(answer: &str) -> String {
        let separator = "─".repeat(56);
        format!("\n{}\n{}\n{}", separator, answer.trim(), separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_answer_block_wraps_answer_in_separators() {
        let block = AnswerSession::format_answer_block("Answer: Option B");

        let lines: Vec<&str> = block.trim_start_matches('\n').lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Answer: Option B");
        assert_eq!(lines[0], lines[2]);
    }

    #[test]
    fn test_format_answer_block_trims_surrounding_whitespace() {
        let block = AnswerSession::format_answer_block("  padded  \n");

        assert!(block.contains("\npadded\n"));
    }
}
