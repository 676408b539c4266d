use std::path::Path;

use console::Style;
use sampling_prep::planning::{Plan, PlanError, PlanOutcome, Residency};

fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

fn format_outcome(outcome: &PlanOutcome) -> String {
    let style_label = Style::new().bold();
    let mut lines = vec![
        format!(
            "{} {}",
            style_label.apply_to("peak:"),
            format_bytes(outcome.budget.peak)
        ),
        format!(
            "{} {}",
            style_label.apply_to("minimum:"),
            format_bytes(outcome.budget.minimum)
        ),
        format!(
            "{} {}",
            style_label.apply_to("extra:"),
            format_bytes(outcome.budget.extra)
        ),
        format!(
            "{} {}",
            style_label.apply_to("models:"),
            outcome.models.join(", ")
        ),
        format!(
            "{} {}",
            style_label.apply_to("hooks registered:"),
            outcome.registered_hooks
        ),
    ];

    if let Some(report) = &outcome.residency {
        let residency = match report.residency {
            Residency::Full => Style::new().green().apply_to("full"),
            Residency::Degraded => Style::new().yellow().apply_to("degraded"),
        };
        lines.push(format!(
            "{} {} on {} ({} of weights)",
            style_label.apply_to("residency:"),
            residency,
            report.device,
            format_bytes(report.weights)
        ));
    }
    lines.join("\n")
}

pub fn handle_plan(plan_path: &Path) -> Result<(), PlanError> {
    let plan = Plan::from_path(plan_path)?;
    let outcome = plan.run()?;
    println!("{}", format_outcome(&outcome));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512.00 B");
        assert_eq!(format_bytes(2048), "2.00 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.00 GiB");
    }
}
