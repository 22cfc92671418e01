/// One hymn as returned by the search endpoints.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HymnSummary {
    pub id: i64,
    pub name_jp: String,
    pub name_kr: String,
    pub link: String,
    #[serde(default)]
    pub line_number: LineNumber,
}

/// Color-code category of a hymn record.
///
/// Only used for row highlighting in the console; unknown tags fall back to
/// [`LineNumber::Snowy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineNumber {
    Burgundy,
    Cadmium,
    Naples,
    #[default]
    #[serde(other)]
    Snowy,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_summary() {
        let hymn: HymnSummary = serde_json::from_str(
            r#"{"id":1,"nameJp":"A","nameKr":"B","link":"/x","lineNumber":"BURGUNDY"}"#,
        )
        .unwrap();

        assert_eq!(
            hymn,
            HymnSummary {
                id: 1,
                name_jp: "A".to_string(),
                name_kr: "B".to_string(),
                link: "/x".to_string(),
                line_number: LineNumber::Burgundy,
            }
        );
    }

    #[test]
    fn unknown_line_number() {
        let line: LineNumber = serde_json::from_str(r#""CHARTREUSE""#).unwrap();
        assert_eq!(line, LineNumber::Snowy);
    }

    #[test]
    fn missing_line_number() {
        let hymn: HymnSummary =
            serde_json::from_str(r#"{"id":2,"nameJp":"A","nameKr":"B","link":"/x"}"#).unwrap();
        assert_eq!(hymn.line_number, LineNumber::Snowy);
    }

    #[test]
    fn serialize_camel_case() {
        let hymn = HymnSummary {
            id: 3,
            name_jp: "主の祈り".to_string(),
            name_kr: "주기도문".to_string(),
            link: "https://example.com/v".to_string(),
            line_number: LineNumber::Naples,
        };

        let json = serde_json::to_value(&hymn).unwrap();
        assert_eq!(json["nameJp"], "主の祈り");
        assert_eq!(json["lineNumber"], "NAPLES");
    }
}
