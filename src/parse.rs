use crate::model::LocationRecord;

/// Parse cscope line-oriented output into location records.
///
/// Each well-formed line carries four logical fields: file path, symbol
/// name, line number, and the rest of the source line (which may itself
/// contain spaces, or be absent entirely). Malformed lines are dropped
/// rather than failing the whole result; partial output is more useful
/// than none. Empty input is a legitimate "no matches" and yields an
/// empty vector.
pub fn parse_lines<'a, I>(lines: I) -> Vec<LocationRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    for line in lines {
        if let Some(record) = parse_line(line) {
            records.push(record);
        }
    }
    records
}

fn parse_line(line: &str) -> Option<LocationRecord> {
    let mut fields = line.split_whitespace();
    let file_path = fields.next()?;
    let symbol_name = fields.next()?;
    let line_number: u32 = fields.next()?.parse().ok()?;
    if line_number == 0 {
        return None;
    }
    let line_text = fields.collect::<Vec<_>>().join(" ");
    Some(LocationRecord {
        file_path: file_path.to_string(),
        symbol_name: symbol_name.to_string(),
        line_number,
        line_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_line_yields_one_record() {
        let records = parse_lines(["/src/hal.c hal_Open 42 void hal_Open(void) {"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file_path, "/src/hal.c");
        assert_eq!(records[0].symbol_name, "hal_Open");
        assert_eq!(records[0].line_number, 42);
        assert_eq!(records[0].line_text, "void hal_Open(void) {");
    }

    #[test]
    fn line_text_may_be_empty() {
        let records = parse_lines(["/src/hal.h hal_Open 12"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line_text, "");
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(parse_lines([]).is_empty());
    }

    #[test]
    fn malformed_lines_are_dropped_not_fatal() {
        let records = parse_lines([
            "",
            "only-one-field",
            "two fields",
            "/src/a.c sym not-a-number text",
            "/src/a.c sym 0 line number zero",
            "/src/b.c memd_FlashOpen 7 memd_FlashOpen();",
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file_path, "/src/b.c");
        assert_eq!(records[0].line_number, 7);
    }

    #[test]
    fn interior_whitespace_in_text_is_rejoined() {
        let records = parse_lines(["/src/a.c f 3 a   b\tc"]);
        assert_eq!(records[0].line_text, "a b c");
    }
}
