//! Console text formatting for quiz output
//!
//! Pure string builders; [`ConsolePresenter`](super::presenter::ConsolePresenter)
//! decides when to print them.

use colored::Colorize;
use warband_domain::{AcceptedAnswer, AlignmentReport, BAR_WIDTH, CategoryShare, Question};

/// Width the category label is padded to in the result table
const LABEL_WIDTH: usize = 15;

/// Formats quiz text for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Intro banner typed out before the first question
    pub fn intro(question_count: usize) -> String {
        format!(
            "\nThis is the Dawn of War\n\
             Your dog in this fight will be determined by your answers to the following {} questions\n\
             Choose wisely, for taking up arms with the wrong side may lead to a fate worse than death\n",
            question_count
        )
    }

    /// Question heading followed by options numbered from 1
    pub fn question(question: &Question) -> String {
        let mut output = format!(
            "\n{}\n",
            format!("Q{}: {}", question.id, question.text).yellow()
        );
        for (i, option) in question.options.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", (i + 1).to_string().cyan(), option.text));
        }
        output
    }

    pub fn answer_prompt(option_count: usize) -> String {
        format!("\n{}", format!("Your answer (1-{}): ", option_count).green())
    }

    pub fn accepted(answer: &AcceptedAnswer) -> String {
        format!("You selected: {}. {}", answer.choice, answer.option.text)
            .on_green()
            .black()
            .to_string()
    }

    pub fn invalid(option_count: usize) -> String {
        format!("Invalid choice. Please select 1-{}.", option_count)
            .red()
            .to_string()
    }

    /// `|` per 2% followed by `-` up to the full bar width
    pub fn bar(share: &CategoryShare) -> String {
        let filled = share.bar_filled();
        format!(
            "{}{}",
            "|".repeat(filled).magenta(),
            "-".repeat(BAR_WIDTH - filled)
        )
    }

    /// Full result block: per-category bars, dominant category and quote
    pub fn report(report: &AlignmentReport) -> String {
        let line = "=".repeat(30);
        let mut output = format!(
            "\n\n{}\n{}\n",
            line,
            "Your Warhammer 40K Alignment Results:".bold()
        );

        for share in &report.shares {
            output.push_str(&format!(
                "{}: {} {}%\n",
                format!("{:<width$}", share.category.as_str(), width = LABEL_WIDTH).bold(),
                Self::bar(share),
                share.percent
            ));
        }

        output.push_str(&format!(
            "\n{} {}!\n",
            "You align most with:".green().bold(),
            report.dominant.as_str().bold().underline()
        ));
        output.push_str(&format!("{}\n", format!("\"{}\"", report.quote()).red()));
        output.push_str(&format!("{}\n", line));
        output
    }

    pub fn restart_prompt() -> String {
        format!(
            "\n{}",
            "Would you like to retake the questionnaire? (y/n): ".blue()
        )
    }
}
