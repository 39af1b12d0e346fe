// ============================================================
// Layer 5 — Narrative Composer
// ============================================================
// Emits exactly four paragraphs in a fixed rhetorical shape:
//
//   1. Orientation — generic framing, independent of any term
//   2. Cast        — the first three terms as metaphorical roles
//   3. Process     — how the roles hand off to one another,
//                    with an optional 4th "integration" role
//   4. Snapshot    — the template's fixed opener, then one
//                    closing sentence reusing the first three
//
// Hard style rule: terms are woven into full sentences, never
// concatenated into a delimiter-separated list — the validator
// has a dedicated check for exactly that anti-pattern, so the
// composed text deliberately avoids `、` and `,` after colons.
//
// The output is ALWAYS four paragraphs. When fewer terms are
// available the missing roles fall back to generic labels, and
// terms beyond the fourth are simply dropped — never padded
// into extra paragraphs.
//
// Reference: Rust Book §8 (Strings)

use crate::domain::narrative::Narrative;

/// Role labels used when a slot has no extracted term to fill it.
const DEFAULT_LEAD: &str = "核心技術";
const DEFAULT_TOOLKIT: &str = "主要工具";
const DEFAULT_OUTCOME: &str = "產出方式";

/// Compose the four-paragraph narrative from the selected terms.
///
/// `selected` is the selector's output in rank order; only the
/// first four entries are ever used. `snapshot_starter` is the
/// template's literal opener for the final paragraph.
pub fn compose(selected: &[String], snapshot_starter: &str) -> Narrative {
    // Cast the first three terms as lead / toolkit / outcome,
    // falling back to generic role labels when absent.
    let lead = selected.first().map(String::as_str).unwrap_or(DEFAULT_LEAD);
    let toolkit = selected.get(1).map(String::as_str).unwrap_or(DEFAULT_TOOLKIT);
    let outcome = selected.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTCOME);
    let integration = selected.get(3).map(String::as_str);

    // Paragraph 1 — orientation. No terms on purpose: the reader
    // should understand what kind of story this is before any
    // technology is named.
    let p1 = "拿到一份又長又厚的內容時，先不用急著鑽進細節。\
              這個故事要做的，是把整份內容的核心主題翻成一眼就懂的白話，\
              讓你先弄清楚它想帶你把哪件事做成也做穩。"
        .to_string();

    // Paragraph 2 — cast. Each role gets its own full sentence.
    let p2 = format!(
        "你可以把 {lead} 想成整個故事的主角，它決定了主線要往哪裡走；\
         {toolkit} 則像主角隨身的工具箱，負責把抽象的想法變成可以動手的步驟；\
         而 {outcome} 是最後留在桌上的成果形狀，讓你看得見也檢查得了。"
    );

    // Paragraph 3 — process. The integration role only joins the
    // relay when a fourth term actually exists.
    let p3 = match integration {
        Some(glue) => format!(
            "接下來的流程像一場接力：先讓 {lead} 把方向釘住，\
             再用 {toolkit} 把事情拆成一步一步能完成的小任務；\
             中途由 {glue} 負責串接與整合的細節，\
             最後把成果落在 {outcome} 上，反覆驗證再慢慢調穩。"
        ),
        None => format!(
            "接下來的流程像一場接力：先把方向釘住，\
             再用 {toolkit} 把事情拆成一步一步能完成的小任務；\
             最後把成果落在 {outcome} 上，反覆驗證再慢慢調穩。"
        ),
    };

    // Paragraph 4 — snapshot. Must begin with the exact starter.
    let p4 = format!(
        "{snapshot_starter}：腦中留下這張快照就夠了——\
         這份內容用 {lead} 把主線定清楚，靠 {toolkit} 把路徑拆開，\
         最後讓成果落在 {outcome} 上，看得見也驗得到。"
    );

    Narrative::new(vec![p1, p2, p3, p4])
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_always_four_paragraphs() {
        for n in [0usize, 1, 3, 5] {
            let names: Vec<String> = (0..n).map(|i| format!("Term{i}")).collect();
            let story = compose(&names, "一句話收斂");
            assert_eq!(story.len(), 4, "failed for {n} terms");
        }
    }

    #[test]
    fn test_snapshot_paragraph_starts_with_marker() {
        let story = compose(&terms(&["Cursor", "GitHub", "Pages"]), "一句話收斂");
        assert!(story.paragraphs[3].starts_with("一句話收斂："));
    }

    #[test]
    fn test_cast_paragraph_embeds_terms_in_sentences() {
        let story = compose(&terms(&["Cursor", "GitHub", "Pages", "Action"]), "快照");
        let cast = &story.paragraphs[1];
        // At least two of the selected terms, in prose, not a list
        assert!(cast.contains("Cursor"));
        assert!(cast.contains("GitHub"));
        assert!(!cast.contains("Cursor、GitHub"));
        assert!(!cast.contains("Cursor, GitHub"));
    }

    #[test]
    fn test_fourth_term_joins_the_process() {
        let with = compose(&terms(&["A1x", "B2x", "C3x", "D4x"]), "快照");
        assert!(with.paragraphs[2].contains("D4x"));

        let without = compose(&terms(&["A1x", "B2x", "C3x"]), "快照");
        assert!(!without.paragraphs[2].contains("D4x"));
    }

    #[test]
    fn test_missing_roles_fall_back_to_labels() {
        let story = compose(&[], "快照");
        let joined = story.joined();
        assert!(joined.contains("核心技術"));
        assert!(joined.contains("主要工具"));
        assert!(joined.contains("產出方式"));
    }

    #[test]
    fn test_excess_terms_are_dropped_not_padded() {
        let many = terms(&["A1x", "B2x", "C3x", "D4x", "E5x", "F6x"]);
        let story = compose(&many, "快照");
        assert_eq!(story.len(), 4);
        assert!(!story.joined().contains("E5x"));
        assert!(!story.joined().contains("F6x"));
    }

    #[test]
    fn test_no_enumeration_after_colons() {
        // The composer must never produce `：a、b、c` shapes itself
        let story = compose(&terms(&["Cursor", "GitHub", "Pages", "Action"]), "一句話收斂");
        for para in &story.paragraphs {
            if let Some(pos) = para.find('：') {
                let tail: String = para[pos..].chars().take(51).collect();
                let seps = tail.chars().filter(|c| *c == '、' || *c == ',').count();
                assert!(seps < 2, "enumeration after colon in: {para}");
            }
        }
    }
}
