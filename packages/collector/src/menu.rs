//! Interactive report menu, thin surface over [`Reports`].

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::reports::{Reports, VacancySummary};

/// Main interactive loop: pick a report, render it, repeat until exit.
pub async fn run(reports: &Reports) -> Result<()> {
    let term = Term::stdout();

    loop {
        println!();
        let options = vec![
            "Companies and their vacancy counts",
            "All vacancies",
            "Average salary (lower bound)",
            "Vacancies above the average salary",
            "Search vacancies by keyword",
            "Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to see?")
            .items(&options)
            .default(0)
            .interact_on(&term)?;

        match selection {
            0 => show_company_counts(reports).await,
            1 => show_vacancies(&reports.all_vacancies().await),
            2 => show_average_salary(reports).await,
            3 => show_vacancies(&reports.vacancies_above_average_salary().await),
            4 => {
                let keyword: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Keyword")
                    .interact_text()?;
                show_vacancies(&reports.vacancies_matching_keyword(&keyword).await);
            }
            5 => {
                println!("{}", "Bye!".bright_blue());
                break;
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}

async fn show_company_counts(reports: &Reports) {
    let rows = reports.companies_with_vacancy_counts().await;
    if rows.is_empty() {
        println!("{}", "No data.".yellow());
        return;
    }
    for row in rows {
        println!(
            "  {:<40} {}",
            row.employer_name.bright_white(),
            row.vacancies_count
        );
    }
}

async fn show_average_salary(reports: &Reports) {
    match reports.average_salary_from().await {
        Some(avg) => println!("  Average salary (from): {}", format!("{avg:.0}").green()),
        None => println!("{}", "No vacancies state a salary.".yellow()),
    }
}

fn show_vacancies(rows: &[VacancySummary]) {
    if rows.is_empty() {
        println!("{}", "No data.".yellow());
        return;
    }
    for row in rows {
        println!(
            "  {} - {} [{}]{}",
            row.employer_name.bright_white(),
            row.vacancy_name,
            format_salary(row),
            row.vacancy_url
                .as_deref()
                .map(|u| format!(" {}", u.dimmed()))
                .unwrap_or_default()
        );
    }
}

fn format_salary(row: &VacancySummary) -> String {
    let currency = row.currency.as_deref().unwrap_or("");
    match (row.salary_from, row.salary_to) {
        (Some(from), Some(to)) => format!("{from}-{to} {currency}").trim_end().to_string(),
        (Some(from), None) => format!("from {from} {currency}").trim_end().to_string(),
        (None, Some(to)) => format!("up to {to} {currency}").trim_end().to_string(),
        (None, None) => "salary not stated".to_string(),
    }
}
