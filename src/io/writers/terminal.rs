use crate::core::{Member, MembershipSummary, SeriesEntry};
use crate::io::output::OutputWriter;
use crate::io::writers::markdown::detail_fields;
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

const BAR_WIDTH: usize = 24;

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_summary(&mut self, summary: &MembershipSummary) -> anyhow::Result<()> {
        print_banner();
        print_counts(summary);
        print_series("Gender Breakdown", &summary.gender_series);
        print_series("Occupation Distribution", &summary.occupation_series);
        Ok(())
    }

    fn write_members(&mut self, members: &[Member]) -> anyhow::Result<()> {
        if members.is_empty() {
            println!("No members found.");
            return Ok(());
        }

        println!("{}", member_table(members));
        println!("{} members", members.len());
        Ok(())
    }

    fn write_member(&mut self, member: &Member) -> anyhow::Result<()> {
        println!("{}", member.full_name().bold());
        println!("───────────────────────────────────────────");
        for (label, value) in detail_fields(member) {
            println!("  {:<26} {}", format!("{label}:"), value);
        }
        println!();
        Ok(())
    }
}

fn print_banner() {
    println!("{}", "═══════════════════════════════════════════".cyan());
    println!("{}", "          MEMBERSHIP DASHBOARD".bold().cyan());
    println!("{}", "═══════════════════════════════════════════".cyan());
    println!();
}

fn print_counts(summary: &MembershipSummary) {
    println!("As of: {}", summary.as_of.format("%Y-%m-%d %H:%M UTC"));
    println!();
    println!(
        "  Total members:  {}",
        summary.total_members.to_string().bold()
    );
    println!("  New this year:  {}", summary.new_this_year);
    println!("  New this month: {}", summary.new_this_month);
    println!();
}

fn print_series(title: &str, entries: &[SeriesEntry]) {
    println!("{}", title.bold());
    println!("───────────────────────────────────────────");

    if entries.is_empty() {
        println!("  (no data)");
        println!();
        return;
    }

    let label_width = entries.iter().map(|e| e.label.len()).max().unwrap_or(0);
    let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);

    for entry in entries {
        let bar = bar_for(entry.count, max_count);
        let bar = match hex_to_rgb(&entry.color) {
            Some((r, g, b)) => bar.truecolor(r, g, b).to_string(),
            None => bar,
        };
        println!(
            "  {:<width$}  {:>5}  {}",
            entry.label,
            entry.count,
            bar,
            width = label_width
        );
    }
    println!();
}

fn member_table(members: &[Member]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Membership ID",
            "First Name",
            "Last Name",
            "Phone",
            "Status",
            "Join Date",
        ]);

    for member in members {
        table.add_row(vec![
            cell(&member.membership_id),
            cell(&member.first_name),
            cell(&member.last_name),
            cell(&member.phone),
            cell(&member.status),
            cell(&member.join_date),
        ]);
    }
    table
}

fn cell(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

fn bar_for(count: usize, max_count: usize) -> String {
    if max_count == 0 {
        return String::new();
    }
    // Scale to the widest bucket; every bucket gets at least one block.
    let len = ((count * BAR_WIDTH) / max_count).max(1);
    "█".repeat(len)
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_parses_palette_entries() {
        assert_eq!(hex_to_rgb("#0F8BFD"), Some((15, 139, 253)));
        assert_eq!(hex_to_rgb("#0BD18A"), Some((11, 209, 138)));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed_input() {
        assert_eq!(hex_to_rgb("0F8BFD"), None);
        assert_eq!(hex_to_rgb("#0F8"), None);
        assert_eq!(hex_to_rgb("#GGGGGG"), None);
    }

    #[test]
    fn test_bar_scales_to_widest_bucket() {
        assert_eq!(bar_for(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(bar_for(5, 10).chars().count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_small_buckets_still_get_a_bar() {
        assert_eq!(bar_for(1, 1000).chars().count(), 1);
    }

    #[test]
    fn test_empty_series_has_no_bar() {
        assert_eq!(bar_for(0, 0), "");
    }
}
