//! Line-based quiz session
//!
//! Drives a [`QuizEngine`] from text commands and prints questions and
//! results the way the page shows them.

use std::io::{BufRead, Write};

use anyhow::Result;
use textwrap::{Options, fill};

use super::input::{self, ParseResult, QuizCommand};
use crate::learning::{LearningError, OptionFeedback, QuizEngine, QuizResult};

/// Run a quiz until the learner quits or input ends. Returns the last result, if submitted.
pub fn run<R: BufRead, W: Write>(
    engine: &mut QuizEngine,
    title: &str,
    wrap_width: usize,
    reader: R,
    out: &mut W,
) -> Result<Option<QuizResult>> {
    writeln!(out, "{} quiz ({} questions)", title, engine.len())?;
    writeln!(out)?;
    draw_questions(engine, wrap_width, out)?;
    write_prompt(engine, out)?;

    for line in reader.lines() {
        let line = line?;
        match input::parse_quiz_input(&line) {
            ParseResult::Ok(QuizCommand::Quit) => break,
            ParseResult::Ok(command) => handle(engine, command, wrap_width, out)?,
            ParseResult::UnknownCommand(cmd) => {
                writeln!(out, "Unknown command '{}'. Type `help` for commands.", cmd)?
            }
            ParseResult::MissingArgument(what) => writeln!(out, "Missing {}", what)?,
            ParseResult::InvalidArgument(why) => writeln!(out, "Invalid input: {}", why)?,
        }
        write_prompt(engine, out)?;
    }

    Ok(engine.result().cloned())
}

fn handle<W: Write>(
    engine: &mut QuizEngine,
    command: QuizCommand,
    wrap_width: usize,
    out: &mut W,
) -> Result<()> {
    match command {
        QuizCommand::Select { question, option } => {
            match engine.select_answer(question, option) {
                Ok(()) => writeln!(
                    out,
                    "Question {}: {}) {}",
                    question + 1,
                    input::option_letter(option),
                    engine.questions()[question].options()[option]
                )?,
                Err(LearningError::InvalidOptionSelection { .. }) if question >= engine.len() => {
                    writeln!(
                        out,
                        "There is no question {}. This quiz has {} questions.",
                        question + 1,
                        engine.len()
                    )?
                }
                Err(LearningError::InvalidOptionSelection { .. }) => writeln!(
                    out,
                    "Question {} has no option {}",
                    question + 1,
                    input::option_letter(option)
                )?,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        QuizCommand::Submit => match engine.submit().map(|_| ()) {
            Ok(()) => draw_results(engine, out)?,
            Err(e) => writeln!(out, "{}", e)?,
        },
        QuizCommand::Reset => {
            engine.reset();
            writeln!(out, "Answers cleared.")?;
            writeln!(out)?;
            draw_questions(engine, wrap_width, out)?;
        }
        QuizCommand::Show => {
            if engine.is_submitted() {
                draw_results(engine, out)?;
            } else {
                draw_questions(engine, wrap_width, out)?;
            }
        }
        QuizCommand::Help => writeln!(out, "{}", input::HELP)?,
        QuizCommand::Quit | QuizCommand::Nop => {}
    }
    Ok(())
}

/// Print every question with lettered options, marking the current selection
pub fn draw_questions<W: Write>(engine: &QuizEngine, wrap_width: usize, out: &mut W) -> Result<()> {
    let total = engine.len();

    for (i, question) in engine.questions().iter().enumerate() {
        writeln!(out, "Question {} of {}", i + 1, total)?;
        let options = Options::new(wrap_width.max(20)).initial_indent("  ").subsequent_indent("  ");
        writeln!(out, "{}", fill(question.prompt(), options))?;

        let selected = engine.answers().get(i);
        for (j, option) in question.options().iter().enumerate() {
            let marker = if selected == Some(j) { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○
            writeln!(out, "    {} {}) {}", marker, input::option_letter(j), option)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print per-question marks, corrections and the result message
pub fn draw_results<W: Write>(engine: &QuizEngine, out: &mut W) -> Result<()> {
    let Some(result) = engine.result() else {
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "{}", result.message())?;
    writeln!(out)?;

    for (i, question) in engine.questions().iter().enumerate() {
        let correct = result.per_question_correct.get(i).copied().unwrap_or(false);
        let marker = if correct { "\u{2713}" } else { "\u{2717}" }; // ✓ or ✗
        writeln!(out, "  Q{} {}", i + 1, marker)?;

        if !correct {
            for (j, label) in question.options().iter().enumerate() {
                match engine.option_feedback(i, j) {
                    Some(OptionFeedback::Incorrect) => writeln!(out, "      your answer: {}", label)?,
                    Some(OptionFeedback::Correct) => writeln!(out, "      correct answer: {}", label)?,
                    _ => {}
                }
            }
        }
    }

    writeln!(out)?;
    if result.is_perfect() {
        writeln!(out, "[quit] Back to pillars")?;
    } else {
        writeln!(out, "[reset] Retry    [quit] Back to pillars")?;
    }
    Ok(())
}

fn write_prompt<W: Write>(engine: &QuizEngine, out: &mut W) -> Result<()> {
    if engine.is_submitted() {
        write!(out, "> ")?;
    } else {
        write!(out, "[{}/{} answered] > ", engine.answered_count(), engine.len())?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::QuizQuestion;
    use std::io::Cursor;

    fn engine() -> QuizEngine {
        QuizEngine::new(vec![
            QuizQuestion::new("Q1", ["Savings", "FD", "RD", "Current"], "Savings").unwrap(),
            QuizQuestion::new("Q2", ["Savings", "FD", "Current", "RD"], "Current").unwrap(),
        ])
        .unwrap()
    }

    fn session(script: &str) -> (Option<QuizResult>, String) {
        let mut engine = engine();
        let mut out = Vec::new();
        let result = run(&mut engine, "Banking", 80, Cursor::new(script), &mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn perfect_run_prints_celebration() {
        let (result, output) = session("1 a\n2 c\nsubmit\nq\n");
        let result = result.unwrap();
        assert_eq!(result.correct_count, 2);
        assert!(output.contains("Perfect score! 2/2 correct"));
        assert!(output.contains("Q1 \u{2713}"));
    }

    #[test]
    fn wrong_answer_shows_correction() {
        let (result, output) = session("1 b\n2 c\ns\n");
        assert_eq!(result.unwrap().per_question_correct, vec![false, true]);
        assert!(output.contains("You scored 1/2"));
        assert!(output.contains("your answer: FD"));
        assert!(output.contains("correct answer: Savings"));
        assert!(output.contains("[reset] Retry"));
    }

    #[test]
    fn early_submit_is_refused() {
        let (result, output) = session("1 a\nsubmit\nquit\n");
        assert!(result.is_none());
        assert!(output.contains("Cannot submit: 1 of 2 questions answered"));
    }

    #[test]
    fn reset_discards_result() {
        let (result, output) = session("1 a\n2 a\nsubmit\nreset\n");
        assert!(result.is_none());
        assert!(output.contains("Answers cleared."));
    }

    #[test]
    fn bad_input_is_reported_and_ignored() {
        let (_, output) = session("9 a\n1\nfoo\n1 zz\n");
        assert!(output.contains("There is no question 9. This quiz has 2 questions."));
        assert!(output.contains("Missing option letter for question 1"));
        assert!(output.contains("Unknown command 'foo'"));
        assert!(output.contains("Invalid input"));
    }

    #[test]
    fn rejected_selection_uses_on_screen_numbering() {
        let (_, output) = session("3 a\n1 e\n");
        assert!(output.contains("There is no question 3. This quiz has 2 questions."));
        assert!(output.contains("Question 1 has no option E"));
        assert!(!output.contains("question 0"));
        assert!(!output.contains("option #"));
    }

    #[test]
    fn selection_after_submit_is_locked() {
        let (_, output) = session("1 a\n2 c\nsubmit\n1 b\n");
        assert!(output.contains("Quiz already submitted"));
    }
}
