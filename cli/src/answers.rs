//! Interactive interview: asks each question and reads one line per answer.

use std::io::{BufRead, Write};

use mapleleap::{InterviewAnswers, QUESTIONS};

/// Asks the interview questions on `out` and reads answers from `input`.
///
/// Answers are trimmed; end of input leaves the remaining answers empty, which
/// [`InterviewAnswers::validate`] later reports by question.
pub fn prompt_answers<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
) -> std::io::Result<InterviewAnswers> {
    let mut answers = InterviewAnswers::default();
    for (i, question) in QUESTIONS.iter().enumerate() {
        writeln!(out, "[{}/{}] {}", i + 1, QUESTIONS.len(), question)?;
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        answers.set_answer(i, line.trim());
    }
    Ok(answers)
}
