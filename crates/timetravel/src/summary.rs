//! Plain-text rendering of positions, options and the final report

use std::fmt::Write;

use timetravel_core::ImpactMode;
use timetravel_core::model::{Decision, FinancialPosition, Impact, Report};

/// Whole dollars with thousands separators, e.g. `-$12,345`
pub fn format_money(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}")
}

/// Signed percentage with one decimal, or `n/a` when undefined
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:+.1}%"),
        None => "n/a".to_string(),
    }
}

/// Short description of an impact, e.g. `investments +15%, savings -5%`
pub fn describe_impact(impact: &Impact, mode: ImpactMode) -> String {
    let amount = |v: f64| match mode {
        ImpactMode::Percentage => format!("{v:+}%"),
        ImpactMode::Absolute if v < 0.0 => format_money(v),
        ImpactMode::Absolute => format!("+{}", format_money(v)),
    };

    let parts: Vec<String> = [
        ("investments", impact.investments),
        ("savings", impact.savings),
        ("expenses", impact.expenses),
    ]
    .into_iter()
    .filter(|(_, v)| *v != 0.0)
    .map(|(name, v)| format!("{name} {}", amount(v)))
    .collect();

    if parts.is_empty() {
        "no change".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn position_line(position: &FinancialPosition) -> String {
    format!(
        "Net worth {} | Savings {} | Investments {} | Monthly expenses {}",
        format_money(position.net_worth),
        format_money(position.savings),
        format_money(position.investments),
        format_money(position.expenses),
    )
}

fn decision_line(decision: &Decision) -> String {
    let mut line = format!(
        "  {:<11} {}",
        decision.category.label(),
        decision.investment_choice
    );
    if let Some(housing) = decision.housing_choice {
        let _ = write!(line, " [{housing}]");
    }
    line
}

/// Render the final report: closing position, year-end trajectory with
/// year-over-year trends, and the decisions made each year.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    let last = report.final_position;

    let _ = writeln!(out, "Final Financial Position ({})", last.year);
    let _ = writeln!(out, "  Net worth:        {}", format_money(last.net_worth));
    let _ = writeln!(out, "  Savings:          {}", format_money(last.savings));
    let _ = writeln!(out, "  Investments:      {}", format_money(last.investments));
    let _ = writeln!(out, "  Monthly expenses: {}", format_money(last.expenses));
    let _ = writeln!(
        out,
        "  Change in net worth since {}: {}",
        report.initial_position.year,
        format_money(report.net_worth_change())
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Wealth Growth Over Time");
    let _ = writeln!(
        out,
        "  {:<6} {:>14} {:>8} {:>14} {:>14}",
        "Year", "Net worth", "Trend", "Savings", "Investments"
    );
    for (snap, trend) in report.trajectory.iter().zip(report.trends()) {
        let _ = writeln!(
            out,
            "  {:<6} {:>14} {:>8} {:>14} {:>14}",
            snap.year,
            format_money(snap.position.net_worth),
            format_percent(trend.net_worth),
            format_money(snap.position.savings),
            format_money(snap.position.investments),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Decisions");
    for snap in &report.trajectory {
        let _ = writeln!(out, "{}", snap.year);
        for decision in report.decisions_in(snap.year) {
            let _ = writeln!(out, "{}", decision_line(decision));
        }
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Warnings");
        for warning in &report.warnings {
            let _ = writeln!(out, "  {warning}");
        }
    }

    out
}
