mod common;

use common::{close, Proportional};
use justified_text::layout::{break_lines, justify_line, layout_justified, natural_width};
use justified_text::{JustifyOptions, LastLinePolicy, Pt};
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = LastLinePolicy> {
    prop_oneof![
        Just(LastLinePolicy::NeverJustify),
        Just(LastLinePolicy::AlwaysJustify),
        Just(LastLinePolicy::JustifyIfWrapped),
    ]
}

fn options(max_gap: Option<f32>, last_line: LastLinePolicy) -> JustifyOptions {
    let mut options = JustifyOptions::default();
    options.last_line(last_line).non_breaking_spaces(false);
    if let Some(multiple) = max_gap {
        options.max_gap_multiple(multiple).expect("valid multiple");
    }
    options
}

proptest! {
    #[test]
    fn rows_with_several_words_fit_at_regular_spacing(
        label in "[a-z]{1,10}( {1,3}[a-z]{1,10}){0,40}",
        width in 0.0f32..120.0,
        space in 0.5f32..4.0,
    ) {
        let measurer = Proportional { space: Pt(space) };
        for group in break_lines(&label, &measurer, Pt(width)) {
            for line in &group.lines {
                if line.words.len() > 1 {
                    prop_assert!(natural_width(&line.words, Pt(space)) <= Pt(width));
                }
            }
        }
    }

    #[test]
    fn stretched_rows_end_on_the_right_edge(
        label in "[a-z]{1,10}( [a-z]{1,10}){0,40}",
        width in 10.0f32..200.0,
        last_line in policy(),
    ) {
        let measurer = Proportional { space: Pt(1.5) };
        let layout = layout_justified(&label, Pt(width), &measurer, &options(None, last_line))
            .expect("valid layout");
        for line in layout.lines.iter().filter(|l| l.justified) {
            let last = layout.line_words(line).last().expect("justified rows have words");
            prop_assert!(
                close(last.coords.0 + last.width, Pt(width), 1e-4),
                "row ends at {} instead of {}", last.coords.0 + last.width, width
            );
        }
    }

    #[test]
    fn gaps_never_exceed_the_cap(
        label in "[a-z]{1,10}( [a-z]{1,10}){0,40}",
        width in 10.0f32..200.0,
        multiple in 1.0f32..4.0,
        last_line in policy(),
    ) {
        let space = Pt(1.5);
        let measurer = Proportional { space };
        let options = options(Some(multiple), last_line);
        for group in break_lines(&label, &measurer, Pt(width)) {
            for line in group.lines {
                let words = line.words.len();
                let justified = justify_line(line, space, Pt(width), &options);
                if words > 1 {
                    prop_assert!(justified.gap.0 >= space.0 - 1e-4);
                }
                prop_assert!(justified.gap <= space * multiple);
            }
        }
    }

    #[test]
    fn breaking_is_deterministic(
        label in "[a-z]{1,10}( [a-z]{1,10}){0,40}(\n[a-z ]{0,30}){0,3}",
        width in -10.0f32..150.0,
    ) {
        let measurer = Proportional { space: Pt(2.0) };
        prop_assert_eq!(
            break_lines(&label, &measurer, Pt(width)),
            break_lines(&label, &measurer, Pt(width))
        );
    }

    #[test]
    fn words_come_out_in_label_order(
        label in "[a-z ]{0,40}(\n[a-z ]{0,40}){0,4}",
        width in -10.0f32..150.0,
        last_line in policy(),
    ) {
        let measurer = Proportional { space: Pt(2.0) };
        let layout = layout_justified(&label, Pt(width), &measurer, &options(None, last_line))
            .expect("valid layout");
        let placed: Vec<&str> = layout.words.iter().map(|w| w.text.as_str()).collect();
        let expected: Vec<&str> = label.split_whitespace().collect();
        prop_assert_eq!(placed, expected);
    }

    #[test]
    fn rows_stack_evenly(
        label in "[a-z]{1,10}( [a-z]{1,10}){0,40}(\n[a-z ]{0,30}){0,3}",
        width in 10.0f32..150.0,
        spacing in 0.5f32..3.0,
    ) {
        let measurer = Proportional { space: Pt(2.0) };
        let mut options = options(None, LastLinePolicy::JustifyIfWrapped);
        options.line_spacing(spacing).expect("valid spacing");
        let layout = layout_justified(&label, Pt(width), &measurer, &options)
            .expect("valid layout");
        let advance = Pt(11.5) * spacing;
        for (i, line) in layout.lines.iter().enumerate() {
            prop_assert!(close(line.y, advance * i as f32, 1e-4));
        }
        prop_assert!(close(layout.height, advance * layout.lines.len() as f32, 1e-4));
    }
}
