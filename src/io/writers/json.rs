use crate::core::{Member, MembershipSummary};
use crate::io::output::OutputWriter;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_pretty<T: serde::Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_summary(&mut self, summary: &MembershipSummary) -> anyhow::Result<()> {
        self.write_pretty(summary)
    }

    fn write_members(&mut self, members: &[Member]) -> anyhow::Result<()> {
        self.write_pretty(&members)
    }

    fn write_member(&mut self, member: &Member) -> anyhow::Result<()> {
        self.write_pretty(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::aggregate;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_summary_serializes_with_trailing_newline() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let summary = aggregate(&[], now);

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_summary(&summary).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with('\n'));
        assert!(text.contains("\"total_members\": 0"));
        assert!(text.contains("\"gender_series\": []"));
    }

    #[test]
    fn test_member_list_serializes_as_array() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_members(&[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
