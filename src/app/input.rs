//! Parsing of quiz input lines

/// A command typed during a quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    /// Choose an option: `2 b` selects option B for question 2
    Select { question: usize, option: usize },
    /// Score the quiz: `submit` or `s`
    Submit,
    /// Clear answers and start over: `reset`, `retry` or `r`
    Reset,
    /// Redraw the questions: `show` or `ls`
    Show,
    /// Show help: `help`, `h` or `?`
    Help,
    /// Leave the quiz: `quit` or `q`
    Quit,
    /// Empty line
    Nop,
}

/// Result of parsing a quiz input line
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(QuizCommand),
    /// Unknown command
    UnknownCommand(String),
    /// Selection is missing its option letter
    MissingArgument(String),
    /// Question number or option letter is malformed
    InvalidArgument(String),
}

/// Help text listing quiz commands
pub const HELP: &str = "\
  <n> <letter>   answer question n (e.g. `2 b`)
  submit, s      score your answers
  reset, r       clear answers and try again
  show, ls       show the questions
  quit, q        leave the quiz";

/// Parse one line of quiz input
pub fn parse_quiz_input(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(QuizCommand::Nop);
    }

    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("");
    let arg = parts.next();

    if let Ok(number) = cmd.parse::<usize>() {
        return parse_selection(number, arg);
    }

    match cmd.to_lowercase().as_str() {
        "submit" | "s" => ParseResult::Ok(QuizCommand::Submit),
        "reset" | "retry" | "r" => ParseResult::Ok(QuizCommand::Reset),
        "show" | "ls" => ParseResult::Ok(QuizCommand::Show),
        "help" | "h" | "?" => ParseResult::Ok(QuizCommand::Help),
        "quit" | "q" | "exit" => ParseResult::Ok(QuizCommand::Quit),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}

/// Question numbers are 1-based on screen, option letters start at A
fn parse_selection(number: usize, arg: Option<&str>) -> ParseResult {
    if number == 0 {
        return ParseResult::InvalidArgument("questions are numbered from 1".to_string());
    }

    let Some(arg) = arg else {
        return ParseResult::MissingArgument(format!("option letter for question {}", number));
    };

    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            let option = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            ParseResult::Ok(QuizCommand::Select { question: number - 1, option })
        }
        _ => ParseResult::InvalidArgument(format!("'{}' is not an option letter", arg)),
    }
}

/// Display letter for an option index (A, B, C...)
pub fn option_letter(index: usize) -> char {
    if index < 26 { (b'A' + index as u8) as char } else { '?' }
}
