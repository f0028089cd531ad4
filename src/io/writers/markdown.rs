use crate::core::{Member, MembershipSummary, SeriesEntry};
use crate::io::output::OutputWriter;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_summary(&mut self, summary: &MembershipSummary) -> anyhow::Result<()> {
        self.write_header(summary)?;
        self.write_counts(summary)?;
        self.write_series("Gender Breakdown", "Gender", &summary.gender_series)?;
        self.write_series(
            "Occupation Distribution",
            "Occupation",
            &summary.occupation_series,
        )?;
        Ok(())
    }

    fn write_members(&mut self, members: &[Member]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Members ({})", members.len())?;
        writeln!(self.writer)?;

        if members.is_empty() {
            writeln!(self.writer, "No members found.")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| Membership ID | First Name | Last Name | Phone | Status | Join Date |"
        )?;
        writeln!(
            self.writer,
            "|---------------|------------|-----------|-------|--------|-----------|"
        )?;
        for member in members {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                cell(&member.membership_id),
                cell(&member.first_name),
                cell(&member.last_name),
                cell(&member.phone),
                cell(&member.status),
                cell(&member.join_date),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_member(&mut self, member: &Member) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", member.full_name())?;
        writeln!(self.writer)?;

        for (label, value) in detail_fields(member) {
            writeln!(self.writer, "**{}:** {}", label, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, summary: &MembershipSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "# Membership Dashboard")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            summary.as_of.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_counts(&mut self, summary: &MembershipSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Total Members | {} |", summary.total_members)?;
        writeln!(self.writer, "| New This Year | {} |", summary.new_this_year)?;
        writeln!(
            self.writer,
            "| New This Month | {} |",
            summary.new_this_month
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_series(
        &mut self,
        title: &str,
        label_header: &str,
        entries: &[SeriesEntry],
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;

        if entries.is_empty() {
            writeln!(self.writer, "No data.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| {label_header} | Members | Color |")?;
        writeln!(self.writer, "|-------|---------|-------|")?;
        for entry in entries {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                entry.label, entry.count, entry.color
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn cell(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

/// Label and value pairs in the order the profile page presents them
pub(crate) fn detail_fields(member: &Member) -> Vec<(&'static str, &str)> {
    vec![
        ("Membership ID", cell(&member.membership_id)),
        ("First Name", cell(&member.first_name)),
        ("Last Name", cell(&member.last_name)),
        ("NIC", cell(&member.nic)),
        ("Phone", cell(&member.phone)),
        ("Email", cell(&member.email)),
        ("Status", cell(&member.status)),
        ("Join Date", cell(&member.join_date)),
        ("Gender", cell(&member.gender)),
        ("Date of Birth", cell(&member.dob)),
        ("Address", cell(&member.address)),
        ("Occupation", cell(&member.occupation)),
        ("Family Members", cell(&member.family_members)),
        ("Emergency Contact Name", cell(&member.emergency_name)),
        ("Emergency Contact Number", cell(&member.emergency_number)),
        ("Notes", cell(&member.notes)),
    ]
}
