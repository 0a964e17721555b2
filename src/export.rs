use crate::models::{DisplayClick, Timezone};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const DEFAULT_HEADERS: [&str; 5] = ["link", "date", "time", "path", "city"];

/// Renders rows as UTF-8 CSV with a byte-order mark so spreadsheet tools
/// pick the right encoding. Columns follow `link, date, time, path, city`.
pub fn to_csv(rows: &[DisplayClick], headers: [&str; 5]) -> Vec<u8> {
    let mut out = String::new();
    push_record(&mut out, headers);
    for row in rows {
        push_record(&mut out, row.fields());
    }

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + out.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(out.as_bytes());
    bytes
}

pub fn csv_file_name(tz: Timezone) -> String {
    format!("shortio_clicks_{}.csv", tz.as_str().to_lowercase().replace('/', "_"))
}

fn push_record(out: &mut String, fields: [&str; 5]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(link: &str, city: &str) -> DisplayClick {
        DisplayClick {
            link: link.into(),
            date: "2020-05-21".into(),
            time: "12:30:10".into(),
            path: "/products".into(),
            city: city.into(),
        }
    }

    #[test]
    fn csv_starts_with_bom_and_header() {
        let bytes = to_csv(&[], DEFAULT_HEADERS);
        assert!(bytes.starts_with(UTF8_BOM));
        assert_eq!(&bytes[UTF8_BOM.len()..], b"link,date,time,path,city\n");
    }

    #[test]
    fn csv_writes_one_line_per_row_in_column_order() {
        let bytes = to_csv(&[row("https://app.short.cm/products", "")], DEFAULT_HEADERS);
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "https://app.short.cm/products,2020-05-21,12:30:10,/products,");
    }

    #[test]
    fn csv_quotes_fields_with_separators() {
        let bytes = to_csv(&[row("https://x.io/?a=1,b=\"2\"", "Seoul")], DEFAULT_HEADERS);
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"https://x.io/?a=1,b=\"\"2\"\"\",2020-05-21"));
    }

    #[test]
    fn custom_headers_keep_utf8() {
        let headers = ["링크", "날짜", "시간", "경로", "도시"];
        let text = String::from_utf8(to_csv(&[], headers)).unwrap();
        assert_eq!(text.trim_start_matches('\u{feff}'), "링크,날짜,시간,경로,도시\n");
    }

    #[test]
    fn file_name_follows_selector() {
        assert_eq!(csv_file_name(Timezone::Utc), "shortio_clicks_utc.csv");
        assert_eq!(csv_file_name(Timezone::AsiaSeoul), "shortio_clicks_asia_seoul.csv");
    }
}
