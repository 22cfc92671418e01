use std::rc::Rc;

use gospel_model::prelude::*;
use patternfly_yew::prelude::*;
use yew::prelude::*;

/// Separator between the Japanese and the Korean title of a hymn.
pub const NAME_DELIMITER: &str = "／";

/// Treble clef glyph shown in the score cell.
const SCORE_GLYPH: &str = "\u{1D11E}";

/// Interaction targets of a single result row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// Open the hymn's video link.
    OpenLink(String),
    /// Fetch the score of the hymn with the given id.
    DownloadScore(i64),
}

/// Highlight class of a result row, a fixed lookup on the line number tag.
pub fn row_class(line_number: LineNumber) -> &'static str {
    match line_number {
        LineNumber::Burgundy => "table-danger",
        LineNumber::Naples => "table-warning",
        LineNumber::Cadmium => "table-success",
        LineNumber::Snowy => "table-light",
    }
}

/// Visible text of the name cell.
pub fn name_text(hymn: &HymnSummary) -> String {
    format!("{}{}{}", hymn.name_jp, NAME_DELIMITER, hymn.name_kr)
}

#[derive(PartialEq, Properties)]
pub struct HymnResultProperties {
    pub records: Rc<Vec<HymnSummary>>,

    /// Receives every row interaction.
    pub onaction: Callback<RowAction>,

    #[prop_or_default]
    pub table_ref: NodeRef,
}

/// The result table. Rows are rebuilt from scratch on every change of
/// `records`; nothing of a previous result set survives.
#[function_component(HymnResult)]
pub fn hymn_result(props: &HymnResultProperties) -> Html {
    let rows = props.records.iter().map(|hymn| {
        let onlink = {
            let onaction = props.onaction.clone();
            let link = hymn.link.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                onaction.emit(RowAction::OpenLink(link.clone()));
            })
        };

        let onscore = {
            let onaction = props.onaction.clone();
            let id = hymn.id;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                onaction.emit(RowAction::DownloadScore(id));
            })
        };

        html!(
            <tr class={row_class(hymn.line_number)}>
                <td class="text-left" style="width: 70%; vertical-align: middle;">
                    <a
                        href="#"
                        class="link-btn"
                        data-transfer-val={hymn.link.clone()}
                        onclick={onlink}
                    >
                        { name_text(hymn) }
                    </a>
                </td>
                <td class="text-center" style="width: 30%; vertical-align: middle;">
                    <a
                        href="#"
                        class="score-download-btn"
                        data-score-id={hymn.id.to_string()}
                        onclick={onscore}
                    >
                        { SCORE_GLYPH }
                    </a>
                </td>
            </tr>
        )
    });

    html!(
        <>
            <table id="indexTable" class="table" ref={props.table_ref.clone()}>
                <tbody id="tableBody">
                    { for rows }
                </tbody>
            </table>
            if props.records.is_empty() {
                <EmptyState
                    title="No results"
                    icon={Icon::Search}
                    size={Size::Small}
                >
                    { "Try a different keyword." }
                </EmptyState>
            }
        </>
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn highlighted_rows() {
        assert_eq!(row_class(LineNumber::Burgundy), "table-danger");
        assert_eq!(row_class(LineNumber::Naples), "table-warning");
        assert_eq!(row_class(LineNumber::Cadmium), "table-success");
    }

    #[test]
    fn default_row() {
        assert_eq!(row_class(LineNumber::Snowy), "table-light");

        // anything the service sends outside the fixed set lands on the default
        let unknown: LineNumber = serde_json::from_str(r#""VERMILION""#).unwrap();
        assert_eq!(row_class(unknown), "table-light");
    }

    #[test]
    fn name_cell_text() {
        let hymn = HymnSummary {
            id: 1,
            name_jp: "A".to_string(),
            name_kr: "B".to_string(),
            link: "/x".to_string(),
            line_number: LineNumber::Burgundy,
        };

        assert_eq!(name_text(&hymn), format!("A{NAME_DELIMITER}B"));
    }
}
